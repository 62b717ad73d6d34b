//! Display records shared between the data provider and the views.
//!
//! DESIGN
//! ======
//! Records are plain serde structs so a real integration can deliver the same
//! shapes over the wire later. Formatting helpers live next to the data they
//! format to keep page code free of string assembly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One of the three external platforms a user can connect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceId {
    Slack,
    Notion,
    Github,
}

impl ServiceId {
    pub const ALL: [ServiceId; 3] = [ServiceId::Slack, ServiceId::Notion, ServiceId::Github];

    /// Stable lowercase identifier (`"slack"`, `"notion"`, `"github"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slack => "slack",
            Self::Notion => "notion",
            Self::Github => "github",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Slack => "Slack",
            Self::Notion => "Notion",
            Self::Github => "GitHub",
        }
    }

    /// Accent used for icon badges.
    pub fn accent(self) -> &'static str {
        match self {
            Self::Slack => "purple",
            Self::Notion => "gray",
            Self::Github => "orange",
        }
    }

    /// Short glyph standing in for the platform logo.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Slack => "#",
            Self::Notion => "N",
            Self::Github => "⌥",
        }
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An integration offered on the connect screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    pub popular: bool,
}

/// Where a recent brief was generated from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BriefOrigin {
    Thread { channel: String, messages: u32 },
    Document { workspace: String, pages: u32 },
    Activity { repo: String, commits: u32 },
}

/// A previously generated brief listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentBrief {
    pub id: u32,
    pub title: String,
    pub source: ServiceId,
    pub origin: BriefOrigin,
    pub time_ago: String,
    pub read_time: String,
}

impl RecentBrief {
    /// Origin summary such as `"#design-team • 23 messages"`.
    pub fn origin_label(&self) -> String {
        match &self.origin {
            BriefOrigin::Thread { channel, messages } => format!("{channel} • {messages} messages"),
            BriefOrigin::Document { workspace, pages } => format!("{workspace} • {pages} pages"),
            BriefOrigin::Activity { repo, commits } => format!("{repo} • {commits} commits"),
        }
    }
}

/// Volume indicator for an available source item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceCount {
    Messages(u32),
    Pages(u32),
}

/// A channel or document that can be briefed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceItem {
    pub name: String,
    pub count: SourceCount,
    pub active: bool,
}

impl SourceItem {
    pub fn count_label(&self) -> String {
        match self.count {
            SourceCount::Messages(n) => format!("{n} messages"),
            SourceCount::Pages(n) => format!("{n} pages"),
        }
    }
}

/// A group of source items offered for brief creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailableSource {
    pub id: String,
    pub service: ServiceId,
    pub title: String,
    pub items: Vec<SourceItem>,
}

/// Sidebar usage numbers for the current week.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub briefs_created: u32,
    pub time_saved_hours: f32,
    pub briefs_shared: u32,
}

impl WeeklyStats {
    pub fn time_saved_label(&self) -> String {
        format!("{:.1} hours", self.time_saved_hours)
    }
}

/// The three editable sections of a brief.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefContent {
    pub what_happened: String,
    pub why_it_matters: String,
    pub next_steps: String,
}

/// Header and source details for a brief.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BriefMeta {
    pub title: String,
    pub service: ServiceId,
    pub channel: String,
    pub messages: u32,
    pub participants: u32,
    pub time_ago: String,
    pub read_time: String,
    pub time_range: String,
}

/// A participant highlighted in the brief sidebar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub role: String,
    pub accent: String,
}

impl Participant {
    /// Uppercase initials of the first two name parts (`"Sarah Anderson"` -> `"SA"`).
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Result of a (simulated) brief generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBrief {
    pub meta: BriefMeta,
    pub participants: Vec<Participant>,
    pub content: BriefContent,
}

/// Shortened brief shown on the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleBrief {
    pub meta: BriefMeta,
    pub what_happened: String,
    pub why_it_matters: String,
    pub next_steps: Vec<String>,
    pub footer: String,
}
