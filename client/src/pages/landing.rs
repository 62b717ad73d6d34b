//! Landing page: marketing hero, integration preview, and a sample brief.

use leptos::prelude::*;

use crate::components::brand_header::BrandHeader;
use crate::components::service_badge::ServiceBadge;
use crate::net::provider::DataProvider;
use crate::net::types::ServiceId;

/// Integration preview cards: (service, title, blurb).
const PREVIEW_CARDS: [(ServiceId, &str, &str); 3] = [
    (ServiceId::Slack, "Slack Threads", "Turn lengthy discussions into structured summaries"),
    (ServiceId::Notion, "Notion Docs", "Extract key insights from project documentation"),
    (ServiceId::Github, "GitHub Activity", "Summarize commits, issues, and pull requests"),
];

/// Entry view. Every call to action invokes `on_start`.
#[component]
pub fn LandingPage(on_start: Callback<()>) -> impl IntoView {
    let provider = expect_context::<DataProvider>();
    let sample = provider.sample_brief();
    let meta_line = format!("{} • {} messages • {}", sample.meta.channel, sample.meta.messages, sample.meta.time_ago);

    view! {
        <div class="page page--landing">
            <BrandHeader sticky=true>
                <button class="btn btn--outline btn--small" on:click=move |_| on_start.run(())>
                    "Sign In"
                </button>
            </BrandHeader>

            <section class="hero">
                <span class="badge">"Beta • Perfect for Remote Teams"</span>
                <h1 class="hero__title">
                    "Turn team chaos into " <span class="hero__accent">"clear briefs"</span>
                </h1>
                <p class="hero__lead">
                    "Automatically summarize Slack threads, Notion docs, and GitHub activity into client-ready \
                     project briefs. What happened, why it matters, next steps."
                </p>
                <button class="btn btn--primary btn--large" on:click=move |_| on_start.run(())>
                    "Get Started - It's Free"
                </button>
            </section>

            <section class="section">
                <h2 class="section__title">"Connect Your Tools"</h2>
                <p class="section__lead">"Start with what you already use"</p>
                <div class="card-grid card-grid--three">
                    {PREVIEW_CARDS
                        .into_iter()
                        .map(|(service, title, blurb)| {
                            view! {
                                <div class="card card--hoverable card--centered">
                                    <ServiceBadge service=service large=true/>
                                    <h3 class="card__title">{title}</h3>
                                    <p class="card__description">{blurb}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="section section--tinted">
                <h2 class="section__title">"See It In Action"</h2>
                <p class="section__lead">"Sample brief generated from a Slack thread"</p>
                <article class="card card--wide">
                    <header class="card__header">
                        <div>
                            <h3 class="card__title">{sample.meta.title.clone()}</h3>
                            <p class="card__description">
                                <ServiceBadge service=sample.meta.service/>
                                {meta_line}
                            </p>
                        </div>
                        <span class="badge">{sample.meta.read_time.clone()}</span>
                    </header>
                    <div class="sample-brief">
                        <h4>"What Happened"</h4>
                        <p>{sample.what_happened}</p>
                        <h4>"Why It Matters"</h4>
                        <p>{sample.why_it_matters}</p>
                        <h4>"Next Steps"</h4>
                        <ul>
                            {sample
                                .next_steps
                                .into_iter()
                                .map(|step| view! { <li>"• " {step}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <footer class="card__footer">
                        <span class="card__muted">{sample.footer}</span>
                        <button class="btn btn--outline btn--small">"Share Brief"</button>
                    </footer>
                </article>
            </section>

            <section class="section section--cta">
                <h2 class="section__title">"Ready to turn your team discussions into action?"</h2>
                <p class="section__lead">"Get your first brief in under 2 minutes. No credit card required."</p>
                <button class="btn btn--primary btn--large" on:click=move |_| on_start.run(())>
                    "Start Creating Briefs"
                </button>
            </section>
        </div>
    }
}
