//! Connect page: simulated connection to each integration.
//!
//! ARCHITECTURE
//! ============
//! Pending/connected flags live in a page-local `ConnectState`. Pressing
//! Connect marks the service pending and schedules completion after
//! `CONNECT_DELAY` on the page's deferral scope. Completion updates the local
//! state first and then reports to the root through `on_connect`, which may
//! navigate away and tear this page down.
//!
//! TRADE-OFFS
//! ==========
//! Leaving the page cancels every pending connection instead of letting it
//! finish in the background; the session only learns about connections the
//! user actually watched complete.

#[cfg(test)]
#[path = "connect_test.rs"]
mod connect_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::brand_header::BrandHeader;
use crate::components::service_badge::ServiceBadge;
use crate::net::provider::DataProvider;
use crate::net::types::{Integration, ServiceId};
use crate::state::connect::{ConnectState, ConnectStatus, connected_summary};
use crate::util::deferral::{CONNECT_DELAY, DeferralScope};

/// Label of the connect button, or `None` when the service is connected and
/// a confirmation replaces the button.
pub(crate) fn button_label(status: ConnectStatus) -> Option<&'static str> {
    match status {
        ConnectStatus::Idle => Some("Connect"),
        ConnectStatus::Connecting => Some("Connecting..."),
        ConnectStatus::Connected => None,
    }
}

/// Mark `service` pending. Returns `false` when it is already pending or
/// connected.
pub(crate) fn begin_connection(state: RwSignal<ConnectState>, service: ServiceId) -> bool {
    state.try_update(|s| s.begin(service)).unwrap_or(false)
}

/// Timer completion for `service`: mark it connected on this page, then
/// report it to the session. Reporting may navigate away and tear the page
/// down, so it runs last.
pub(crate) fn complete_connection(state: RwSignal<ConnectState>, on_connect: Callback<ServiceId>, service: ServiceId) {
    state.update(|s| s.complete(service));
    on_connect.run(service);
}

/// Connect view. `connected` seeds services the session already knows about.
#[component]
pub fn ConnectPage(
    connected: Vec<ServiceId>,
    on_connect: Callback<ServiceId>,
    on_back: Callback<()>,
    on_continue: Callback<()>,
) -> impl IntoView {
    let provider = expect_context::<DataProvider>();
    let state = RwSignal::new(ConnectState::seeded(&connected));
    let scope = DeferralScope::bound_to_owner();

    let start_connect = Callback::new(move |service: ServiceId| {
        if !begin_connection(state, service) {
            return;
        }
        log::debug!("connect: {service} pending");
        scope.schedule(CONNECT_DELAY, move || complete_connection(state, on_connect, service));
    });

    let connected_count = move || state.with(ConnectState::connected_count);

    view! {
        <div class="page page--connect">
            <BrandHeader on_back=on_back/>

            <div class="connect">
                <div class="connect__intro">
                    <h1 class="connect__title">"Connect Your Tools"</h1>
                    <p class="connect__lead">
                        "Choose where you'd like to start creating briefs. You can add more connections later."
                    </p>
                </div>

                <div class="connect__list">
                    {provider
                        .integrations()
                        .into_iter()
                        .map(|integration| view! { <IntegrationCard integration=integration state=state on_press=start_connect/> })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || { connected_count() > 0 }>
                    <div class="connect__done">
                        <p>{move || connected_summary(connected_count())}</p>
                        <button class="btn btn--primary btn--large" on:click=move |_| on_continue.run(())>
                            "Continue to Dashboard"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// One integration row with its connect button or connected confirmation.
#[component]
fn IntegrationCard(
    integration: Integration,
    state: RwSignal<ConnectState>,
    on_press: Callback<ServiceId>,
) -> impl IntoView {
    let service = integration.id;
    let status = Memo::new(move |_| state.with(|s| s.status(service)));
    let is_connected = move || status.get() == ConnectStatus::Connected;
    let popular = integration.popular;
    let outline = !popular;

    view! {
        <div class="card connect-card" class:connect-card--connected=is_connected>
            <div class="connect-card__info">
                <ServiceBadge service=service large=true/>
                <div>
                    <div class="connect-card__name">
                        <h3 class="card__title">{integration.name}</h3>
                        {popular.then(|| view! { <span class="badge">"Most Popular"</span> })}
                    </div>
                    <p class="card__description">{integration.description}</p>
                </div>
            </div>
            {move || match button_label(status.get()) {
                Some(label) => {
                    view! {
                        <button
                            class="btn"
                            class:btn--primary=popular
                            class:btn--outline=outline
                            disabled=move || status.get() == ConnectStatus::Connecting
                            on:click=move |_| on_press.run(service)
                        >
                            {label}
                        </button>
                    }
                    .into_any()
                }
                None => view! { <span class="connect-card__connected">"✓ Connected"</span> }.into_any(),
            }}
        </div>
    }
}
