//! One section of a brief, read-only or editable.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::brief::{BriefField, BriefState};
use crate::util::brief_text::parse_next_steps;

/// Heading plus body for `field`. Renders a textarea while editing; the
/// next-steps section renders bullet lines as a checklist otherwise.
#[component]
pub fn BriefSection(field: BriefField, brief: RwSignal<BriefState>) -> impl IntoView {
    let marker = match field {
        BriefField::WhatHappened => "brief-section__marker brief-section__marker--blue",
        BriefField::WhyItMatters => "brief-section__marker brief-section__marker--amber",
        BriefField::NextSteps => "brief-section__marker brief-section__marker--green",
    };
    let mono = field == BriefField::NextSteps;
    let value = move || brief.with(|b| field.read(&b.content).to_owned());
    let editing = Memo::new(move |_| brief.with(|b| b.editing));

    // Only `editing` is tracked here so the textarea survives keystrokes.
    let body = move || {
        if editing.get() {
            view! {
                <textarea
                    class="brief-section__editor"
                    class:brief-section__editor--mono=mono
                    prop:value=value
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        brief.update(|b| {
                            b.set_field(field, text);
                        });
                    }
                ></textarea>
            }
            .into_any()
        } else if field == BriefField::NextSteps {
            view! {
                <div class="brief-section__steps">
                    {parse_next_steps(&value())
                        .into_iter()
                        .map(|step| {
                            view! {
                                <div class="brief-section__step">
                                    {step
                                        .checklist
                                        .then(|| view! { <span class="brief-section__check" aria-hidden="true">"✓"</span> })}
                                    <span>{step.text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        } else {
            view! { <p class="brief-section__text">{value()}</p> }.into_any()
        }
    };

    view! {
        <section class="brief-section">
            <h3 class="brief-section__heading">
                <span class=marker></span>
                {field.heading()}
            </h3>
            {body}
        </section>
    }
}
