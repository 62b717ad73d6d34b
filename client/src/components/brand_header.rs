//! Top bar shared by every view: brand mark, optional back button, actions.

use leptos::prelude::*;

/// Sticky header with the Briefly brand.
///
/// `title` replaces the brand name (used by the brief view); `children` are
/// rendered right-aligned as header actions.
#[component]
pub fn BrandHeader(
    #[prop(optional)] on_back: Option<Callback<()>>,
    #[prop(optional, into)] title: Option<Signal<String>>,
    #[prop(optional)] sticky: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let label = move || title.map_or_else(|| "Briefly".to_owned(), |t| t.get());

    view! {
        <header class="brand-header" class:brand-header--sticky=sticky>
            <div class="brand-header__inner">
                {on_back.map(|on_back| {
                    view! {
                        <button class="btn btn--ghost brand-header__back" on:click=move |_| on_back.run(())>
                            "← Back"
                        </button>
                    }
                })}
                <span class="brand-header__mark" aria-hidden="true">"B"</span>
                <span class="brand-header__name">{label}</span>
                <span class="brand-header__spacer"></span>
                <div class="brand-header__actions">{children.map(|c| c())}</div>
            </div>
        </header>
    }
}
