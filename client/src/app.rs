//! Root application component: session ownership and view selection.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::net::provider::DataProvider;
use crate::net::types::ServiceId;
use crate::pages::{brief::BriefPage, connect::ConnectPage, dashboard::DashboardPage, landing::LandingPage};
use crate::state::session::{SessionState, View};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the data provider and toast contexts and mounts the single route
/// that hosts the view switcher.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(DataProvider::default());
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/briefly.css"/>
        <Title text="Briefly"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Briefly/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Callback that records a completed connection in the session, advancing
/// to the dashboard on the first one.
pub(crate) fn connection_recorder(session: RwSignal<SessionState>) -> Callback<ServiceId> {
    Callback::new(move |service: ServiceId| {
        session.update(|s| {
            s.record_connection(service);
        });
    })
}

/// Owns `SessionState` and renders exactly one page for the current view.
#[component]
fn Briefly() -> impl IntoView {
    let session = RwSignal::new(SessionState::default());
    // Pages remount only when the view tag changes, not on every session write.
    let current = Memo::new(move |_| session.with(|s| s.view));
    let connected = Signal::derive(move || session.with(|s| s.connected.clone()));

    let on_start = Callback::new(move |()| session.update(SessionState::start));
    let on_back = Callback::new(move |()| session.update(SessionState::back));
    let on_open_brief = Callback::new(move |()| session.update(SessionState::open_brief));
    let on_continue = Callback::new(move |()| session.update(SessionState::continue_to_dashboard));
    let on_connect = connection_recorder(session);

    move || match current.get() {
        View::Landing => view! { <LandingPage on_start=on_start/> }.into_any(),
        View::Auth => {
            let seeded = session.with_untracked(|s| s.connected.clone());
            view! {
                <ConnectPage
                    connected=seeded
                    on_connect=on_connect
                    on_back=on_back
                    on_continue=on_continue
                />
            }
            .into_any()
        }
        View::Dashboard => {
            view! { <DashboardPage connected=connected on_create_brief=on_open_brief/> }.into_any()
        }
        View::Summary => view! { <BriefPage on_back=on_back/> }.into_any(),
    }
}
