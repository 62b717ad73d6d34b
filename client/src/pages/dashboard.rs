//! Dashboard page: brief sources, recent briefs, and the session sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached after the first connection. Every "create" affordance calls
//! `on_create_brief`; the search box filters the recent-brief list locally.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::brand_header::BrandHeader;
use crate::components::service_badge::ServiceBadge;
use crate::net::provider::DataProvider;
use crate::net::types::{AvailableSource, RecentBrief, ServiceId, WeeklyStats};
use crate::util::brief_text::filter_recent;

/// Sidebar rows for the weekly stats card.
pub(crate) fn stat_rows(stats: &WeeklyStats) -> [(&'static str, String); 3] {
    [
        ("Briefs Created", stats.briefs_created.to_string()),
        ("Time Saved", stats.time_saved_label()),
        ("Briefs Shared", stats.briefs_shared.to_string()),
    ]
}

/// Dashboard view. `connected` is the session's connected-service list.
#[component]
pub fn DashboardPage(#[prop(into)] connected: Signal<Vec<ServiceId>>, on_create_brief: Callback<()>) -> impl IntoView {
    let provider = expect_context::<DataProvider>();
    let search = RwSignal::new(String::new());
    let recent = StoredValue::new(provider.recent_briefs());
    let visible = move || recent.with_value(|briefs| filter_recent(briefs, &search.get()));

    view! {
        <div class="page page--dashboard">
            <BrandHeader sticky=true>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search briefs..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| on_create_brief.run(())>
                    "+ New Brief"
                </button>
            </BrandHeader>

            <div class="dashboard">
                <main class="dashboard__main">
                    <section>
                        <h2 class="section__title">"Create New Brief"</h2>
                        <div class="card-grid card-grid--two">
                            {provider
                                .available_sources()
                                .into_iter()
                                .map(|source| view! { <SourceCard source=source on_select=on_create_brief/> })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>

                    <section>
                        <div class="section__bar">
                            <h2 class="section__title">"Recent Briefs"</h2>
                            <button class="btn btn--outline btn--small">"Filter"</button>
                        </div>
                        <div class="stack">
                            {move || {
                                let briefs = visible();
                                if briefs.is_empty() {
                                    return vec![view! { <p class="card__muted">"No briefs match your search."</p> }.into_any()];
                                }
                                briefs
                                    .into_iter()
                                    .map(|brief| view! { <RecentBriefCard brief=brief/> }.into_any())
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </section>
                </main>

                <aside class="dashboard__sidebar">
                    <div class="card">
                        <h3 class="card__title">"Connected Services"</h3>
                        <p class="card__description">"Manage your integrations"</p>
                        <ul class="service-list">
                            {move || {
                                connected
                                    .get()
                                    .into_iter()
                                    .map(|service| {
                                        view! {
                                            <li class="service-list__item">
                                                <ServiceBadge service=service/>
                                                <span class="service-list__name">{service.display_name()}</span>
                                                <span class="status-dot" aria-label="connected"></span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <button class="btn btn--outline btn--small btn--block">"+ Add Service"</button>
                    </div>

                    <div class="card">
                        <h3 class="card__title">"This Week"</h3>
                        <dl class="stat-list">
                            {stat_rows(&provider.weekly_stats())
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
                </aside>
            </div>
        </div>
    }
}

/// Clickable card offering a group of sources for a new brief.
#[component]
fn SourceCard(source: AvailableSource, on_select: Callback<()>) -> impl IntoView {
    view! {
        <div class="card card--hoverable" on:click=move |_| on_select.run(())>
            <header class="card__header">
                <ServiceBadge service=source.service/>
                <h3 class="card__title">{source.title}</h3>
                <span class="card__arrow" aria-hidden="true">"→"</span>
            </header>
            <ul class="source-list">
                {source
                    .items
                    .into_iter()
                    .map(|item| {
                        let count = item.count_label();
                        view! {
                            <li class="source-list__item">
                                <span>{item.name}</span>
                                <span class="card__muted">
                                    {count}
                                    {item.active.then(|| view! { <span class="status-dot" aria-label="active"></span> })}
                                </span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Summary row for a previously generated brief.
#[component]
fn RecentBriefCard(brief: RecentBrief) -> impl IntoView {
    let origin = brief.origin_label();

    view! {
        <div class="card card--hoverable recent-brief">
            <div class="recent-brief__body">
                <h3 class="card__title">{brief.title}</h3>
                <p class="card__description">
                    <ServiceBadge service=brief.source/>
                    <span>{origin}</span>
                    <span>{brief.time_ago}</span>
                </p>
            </div>
            <div class="recent-brief__actions">
                <span class="badge">{brief.read_time}</span>
                <button class="btn btn--ghost btn--small" aria-label="Share brief">"Share"</button>
            </div>
        </div>
    }
}
