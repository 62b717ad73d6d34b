//! Data-provider capability backing every view.
//!
//! DESIGN
//! ======
//! Views never construct display data themselves. They read it through
//! `DataProvider`, which the root component places in context. The only
//! implementation today is `StaticProvider`, which returns the same fixed
//! records on every call; swapping in a real integration means implementing
//! `BriefProvider` and providing a different handle.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::sync::Arc;

use super::types::{
    AvailableSource, BriefContent, BriefMeta, BriefOrigin, GeneratedBrief, Integration, Participant, RecentBrief,
    SampleBrief, ServiceId, SourceCount, SourceItem, WeeklyStats,
};

/// Source of all display records.
pub trait BriefProvider: Send + Sync {
    /// Integrations offered on the connect screen, in display order.
    fn integrations(&self) -> Vec<Integration>;

    fn recent_briefs(&self) -> Vec<RecentBrief>;

    fn available_sources(&self) -> Vec<AvailableSource>;

    fn weekly_stats(&self) -> WeeklyStats;

    /// Preview brief rendered on the landing page.
    fn sample_brief(&self) -> SampleBrief;

    /// Metadata shown while a brief is being generated.
    fn pending_brief(&self) -> BriefMeta;

    /// Full brief revealed once generation completes.
    fn generate_brief(&self) -> GeneratedBrief;
}

/// Cloneable context handle wrapping the active provider.
#[derive(Clone)]
pub struct DataProvider(Arc<dyn BriefProvider>);

impl DataProvider {
    pub fn new(provider: impl BriefProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }
}

impl Default for DataProvider {
    fn default() -> Self {
        Self::new(StaticProvider)
    }
}

impl std::ops::Deref for DataProvider {
    type Target = dyn BriefProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Hardcoded provider used by the demo.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticProvider;

const BRIEF_TITLE: &str = "Mobile App Redesign Discussion";
const BRIEF_CHANNEL: &str = "#design-team";

fn design_team_meta(read_time: &str) -> BriefMeta {
    BriefMeta {
        title: BRIEF_TITLE.to_owned(),
        service: ServiceId::Slack,
        channel: BRIEF_CHANNEL.to_owned(),
        messages: 23,
        participants: 5,
        time_ago: "2 hours ago".to_owned(),
        read_time: read_time.to_owned(),
        time_range: "2h 15m".to_owned(),
    }
}

fn item(name: &str, count: SourceCount, active: bool) -> SourceItem {
    SourceItem { name: name.to_owned(), count, active }
}

fn participant(name: &str, role: &str, accent: &str) -> Participant {
    Participant { name: name.to_owned(), role: role.to_owned(), accent: accent.to_owned() }
}

impl BriefProvider for StaticProvider {
    fn integrations(&self) -> Vec<Integration> {
        vec![
            Integration {
                id: ServiceId::Slack,
                name: "Slack".to_owned(),
                description: "Connect your Slack workspace to summarize team discussions".to_owned(),
                popular: true,
            },
            Integration {
                id: ServiceId::Notion,
                name: "Notion".to_owned(),
                description: "Import and summarize your project documentation".to_owned(),
                popular: false,
            },
            Integration {
                id: ServiceId::Github,
                name: "GitHub".to_owned(),
                description: "Track development progress and technical discussions".to_owned(),
                popular: false,
            },
        ]
    }

    fn recent_briefs(&self) -> Vec<RecentBrief> {
        vec![
            RecentBrief {
                id: 1,
                title: BRIEF_TITLE.to_owned(),
                source: ServiceId::Slack,
                origin: BriefOrigin::Thread { channel: BRIEF_CHANNEL.to_owned(), messages: 23 },
                time_ago: "2 hours ago".to_owned(),
                read_time: "2 min".to_owned(),
            },
            RecentBrief {
                id: 2,
                title: "Q4 Marketing Strategy Document".to_owned(),
                source: ServiceId::Notion,
                origin: BriefOrigin::Document { workspace: "Marketing Team".to_owned(), pages: 8 },
                time_ago: "1 day ago".to_owned(),
                read_time: "4 min".to_owned(),
            },
            RecentBrief {
                id: 3,
                title: "Authentication System Updates".to_owned(),
                source: ServiceId::Github,
                origin: BriefOrigin::Activity { repo: "briefly-app".to_owned(), commits: 12 },
                time_ago: "3 days ago".to_owned(),
                read_time: "3 min".to_owned(),
            },
        ]
    }

    fn available_sources(&self) -> Vec<AvailableSource> {
        vec![
            AvailableSource {
                id: "slack-recent".to_owned(),
                service: ServiceId::Slack,
                title: "Recent Slack Discussions".to_owned(),
                items: vec![
                    item("#product-updates", SourceCount::Messages(45), true),
                    item("#engineering", SourceCount::Messages(23), true),
                    item("#design-team", SourceCount::Messages(18), false),
                ],
            },
            AvailableSource {
                id: "notion-recent".to_owned(),
                service: ServiceId::Notion,
                title: "Recent Notion Updates".to_owned(),
                items: vec![
                    item("Product Roadmap 2024", SourceCount::Pages(12), true),
                    item("User Research Findings", SourceCount::Pages(8), false),
                    item("Technical Architecture", SourceCount::Pages(15), true),
                ],
            },
        ]
    }

    fn weekly_stats(&self) -> WeeklyStats {
        WeeklyStats { briefs_created: 12, time_saved_hours: 3.2, briefs_shared: 8 }
    }

    fn sample_brief(&self) -> SampleBrief {
        SampleBrief {
            meta: design_team_meta("2 min read"),
            what_happened: "Design team reviewed user feedback on the current mobile app. Key issues: navigation \
                            confusion (mentioned by 67% of users), slow loading times on older devices, and \
                            accessibility concerns for the checkout flow."
                .to_owned(),
            why_it_matters: "Mobile conversion rate dropped 15% last quarter. Fixing these UX issues could recover \
                             lost revenue and improve user retention. The checkout accessibility issue may also \
                             have compliance implications."
                .to_owned(),
            next_steps: vec![
                "Sarah will create wireframes for simplified navigation (due Friday)".to_owned(),
                "Dev team to audit performance on Android 8+ devices".to_owned(),
                "Schedule accessibility review with external consultant".to_owned(),
                "Present findings to stakeholders next Tuesday".to_owned(),
            ],
            footer: "Generated from 23 messages • Saved to Marketing briefs".to_owned(),
        }
    }

    fn pending_brief(&self) -> BriefMeta {
        design_team_meta("3 min read")
    }

    fn generate_brief(&self) -> GeneratedBrief {
        GeneratedBrief {
            meta: design_team_meta("3 min read"),
            participants: vec![
                participant("Sarah Anderson", "Lead Designer", "blue"),
                participant("Mike Johnson", "Frontend Dev", "green"),
                participant("Alex Liu", "Product Manager", "purple"),
            ],
            content: BriefContent {
                what_happened: "Design team reviewed user feedback on the current mobile app. Key issues \
                                identified include navigation confusion (mentioned by 67% of users), slow loading \
                                times on older devices, and accessibility concerns for the checkout flow. The team \
                                discussed three potential solutions and reached consensus on a phased approach to \
                                address the most critical issues first."
                    .to_owned(),
                why_it_matters: "Mobile conversion rate dropped 15% last quarter, directly impacting revenue. Fixing \
                                 these UX issues could recover an estimated $50k in monthly lost revenue and improve \
                                 user retention by 25%. The checkout accessibility issue may also have compliance \
                                 implications under WCAG guidelines, creating potential legal risk."
                    .to_owned(),
                next_steps: "• Sarah will create wireframes for simplified navigation (due Friday)\n\
                             • Dev team to audit performance on Android 8+ devices\n\
                             • Schedule accessibility review with external consultant\n\
                             • Present findings to stakeholders next Tuesday\n\
                             • Begin Phase 1 implementation following stakeholder approval"
                    .to_owned(),
            },
        }
    }
}
