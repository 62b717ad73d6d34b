//! Toast notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. Each toast that appears in `ToastState` gets an
//! auto-dismiss timer from the host's deferral scope.

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION, ToastState};
use crate::util::deferral::DeferralScope;

/// Renders visible toasts and schedules their dismissal.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = DeferralScope::bound_to_owner();
    let scheduled = StoredValue::new(Vec::<String>::new());

    Effect::new(move || {
        let ids: Vec<String> = toasts.with(|t| t.items.iter().map(|toast| toast.id.clone()).collect());
        scheduled.update_value(|s| s.retain(|id| ids.contains(id)));
        for id in ids {
            if scheduled.with_value(|s| s.contains(&id)) {
                continue;
            }
            scheduled.update_value(|s| s.push(id.clone()));
            scope.schedule(TOAST_DURATION, move || toasts.update(|t| t.dismiss(&id)));
        }
    });

    view! {
        <ol class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        view! {
                            <li class="toast">
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(&id))
                                >
                                    "✕"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}
