//! Brief page: simulated generation followed by the editable brief.
//!
//! ARCHITECTURE
//! ============
//! Mounting the page starts generation: a `GENERATE_DELAY` deferral on the
//! page scope fills `BriefState` from the provider. Until then the page shows
//! a skeleton with the source metadata. Copy and export render the current
//! content (including edits) through `render_markdown`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Going back before generation finishes tears the page down and cancels the
//! deferral, so the late completion never writes to disposed signals.

#[cfg(test)]
#[path = "brief_test.rs"]
mod brief_test;

use leptos::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::brief_section::BriefSection;
use crate::components::service_badge::ServiceBadge;
use crate::net::provider::{BriefProvider, DataProvider};
use crate::net::types::{BriefMeta, GeneratedBrief};
use crate::state::brief::{BriefField, BriefState};
use crate::state::toast::{ToastState, messages};
use crate::util::brief_text::{export_filename, render_markdown};
use crate::util::browser;
use crate::util::deferral::{DeferralScope, GENERATE_DELAY};

/// Caption lines shown while the brief is generating.
pub(crate) fn generating_caption(meta: &BriefMeta) -> (String, String) {
    (
        format!("Analyzing {} conversation...", meta.channel),
        format!("{} messages • Processing insights", meta.messages),
    )
}

pub(crate) fn edit_button_label(editing: bool) -> &'static str {
    if editing { "Done Editing" } else { "Edit" }
}

/// Timer completion: reveal the generated brief and its sidebar details.
pub(crate) fn complete_generation(
    provider: &dyn BriefProvider,
    brief: RwSignal<BriefState>,
    generated: RwSignal<Option<GeneratedBrief>>,
) {
    let result = provider.generate_brief();
    brief.update(|b| {
        b.finish(result.content.clone());
    });
    generated.set(Some(result));
    log::info!("brief: generation complete");
}

/// Brief view.
#[component]
pub fn BriefPage(on_back: Callback<()>) -> impl IntoView {
    let provider = expect_context::<DataProvider>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let brief = RwSignal::new(BriefState::default());
    let generated = RwSignal::new(None::<GeneratedBrief>);
    let meta = StoredValue::new(provider.pending_brief());

    let scope = DeferralScope::bound_to_owner();
    scope.schedule(GENERATE_DELAY, move || complete_generation(&*provider, brief, generated));

    let is_generating = move || brief.with(BriefState::is_generating);
    let title = move || meta.with_value(|m| m.title.clone());
    let current_markdown = move || {
        let title = meta.with_value(|m| m.title.clone());
        brief.with_untracked(|b| render_markdown(&title, &b.content))
    };

    let on_copy = move |_| {
        let markdown = current_markdown();
        leptos::task::spawn_local(async move {
            if let Err(e) = browser::write_clipboard(&markdown).await {
                log::warn!("brief: copy failed: {e}");
            }
        });
        toasts.update(|t| {
            t.push(messages::COPIED.0, messages::COPIED.1);
        });
    };

    let on_share = move |_| {
        toasts.update(|t| {
            t.push(messages::SHARED.0, messages::SHARED.1);
        });
    };

    let on_export = move |_| {
        let filename = meta.with_value(|m| export_filename(&m.title));
        if let Err(e) = browser::save_text(&filename, "text/markdown", &current_markdown()) {
            log::warn!("brief: export failed: {e}");
        }
        toasts.update(|t| {
            t.push(messages::EXPORTED_TITLE, &messages::exported_description(&filename));
        });
    };

    let on_toggle_edit = move |_| {
        brief.update(|b| {
            b.toggle_editing();
        });
    };

    view! {
        <Show
            when=move || !is_generating()
            fallback=move || view! { <GeneratingView meta=meta.get_value() on_back=on_back/> }
        >
            <div class="page page--brief">
                <BrandHeader on_back=on_back title=Signal::derive(title)>
                    <button class="btn btn--outline btn--small" on:click=on_toggle_edit>
                        {move || edit_button_label(brief.with(|b| b.editing))}
                    </button>
                    <button class="btn btn--outline btn--small" on:click=on_copy>"Copy"</button>
                    <button class="btn btn--outline btn--small" on:click=on_share>"Share"</button>
                    <button class="btn btn--outline btn--small" on:click=on_export>"Export"</button>
                </BrandHeader>

                <div class="brief">
                    <article class="card brief__main">
                        <BriefHeading meta=meta.get_value()/>
                        {BriefField::ALL
                            .into_iter()
                            .map(|field| view! { <BriefSection field=field brief=brief/> })
                            .collect::<Vec<_>>()}
                    </article>

                    <aside class="brief__sidebar">
                        {move || generated.get().map(|g| view! { <BriefSidebar generated=g/> })}
                    </aside>
                </div>
            </div>
        </Show>
    }
}

/// Skeleton shown during generation.
#[component]
fn GeneratingView(meta: BriefMeta, on_back: Callback<()>) -> impl IntoView {
    let (headline, detail) = generating_caption(&meta);

    view! {
        <div class="page page--brief">
            <BrandHeader on_back=on_back title=Signal::derive(|| "Generating Brief...".to_owned())/>
            <div class="generating">
                <div class="card">
                    <h2 class="card__title">
                        <span class="spinner" aria-hidden="true"></span>
                        {headline}
                    </h2>
                    <p class="card__description">
                        <ServiceBadge service=meta.service/>
                        {detail}
                    </p>
                    <div class="skeleton">
                        <div class="skeleton__bar skeleton__bar--blue"></div>
                        <div class="skeleton__line"></div>
                        <div class="skeleton__line skeleton__line--short"></div>
                        <div class="skeleton__bar skeleton__bar--amber"></div>
                        <div class="skeleton__line"></div>
                        <div class="skeleton__bar skeleton__bar--green"></div>
                        <div class="skeleton__line skeleton__line--short"></div>
                        <div class="skeleton__line"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BriefHeading(meta: BriefMeta) -> impl IntoView {
    view! {
        <header class="card__header">
            <div>
                <h2 class="card__title card__title--large">{meta.title}</h2>
                <p class="card__description">
                    <ServiceBadge service=meta.service/>
                    <span>{meta.channel}</span>
                    <span>{format!("{} messages", meta.messages)}</span>
                    <span>{format!("{} participants", meta.participants)}</span>
                    <span>{meta.time_ago}</span>
                </p>
            </div>
            <span class="badge">{meta.read_time}</span>
        </header>
    }
}

/// Source details, key participants, and quick actions.
#[component]
fn BriefSidebar(generated: GeneratedBrief) -> impl IntoView {
    let meta = generated.meta;
    let details = [
        ("Platform", meta.service.display_name().to_owned()),
        ("Channel", meta.channel),
        ("Messages", meta.messages.to_string()),
        ("Participants", meta.participants.to_string()),
        ("Time Range", meta.time_range),
    ];

    view! {
        <div class="card">
            <h3 class="card__title">"Source Details"</h3>
            <dl class="stat-list">
                {details
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-list__row">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </div>
        <div class="card">
            <h3 class="card__title">"Key Participants"</h3>
            <ul class="participant-list">
                {generated
                    .participants
                    .into_iter()
                    .map(|p| {
                        let initials = p.initials();
                        let avatar = format!("avatar avatar--{}", p.accent);
                        view! {
                            <li class="participant-list__item">
                                <span class=avatar>{initials}</span>
                                <div>
                                    <div class="participant-list__name">{p.name}</div>
                                    <div class="card__muted">{p.role}</div>
                                </div>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
        <div class="card">
            <h3 class="card__title">"Quick Actions"</h3>
            <div class="stack">
                <button class="btn btn--outline btn--block">"Create Follow-up"</button>
                <button class="btn btn--outline btn--block">"Share with Team"</button>
                <button class="btn btn--outline btn--block">"Add to Project"</button>
            </div>
        </div>
    }
}
