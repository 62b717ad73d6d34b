//! Text helpers for briefs: Markdown export, next-step parsing, search.

#[cfg(test)]
#[path = "brief_text_test.rs"]
mod brief_text_test;

use crate::net::types::{BriefContent, RecentBrief};

/// Marker that turns a next-steps line into a checklist item.
const BULLET: char = '•';

/// Markdown document written by the copy and export actions.
pub fn render_markdown(title: &str, content: &BriefContent) -> String {
    format!(
        "# {title}\n\n## What Happened\n{}\n\n## Why It Matters\n{}\n\n## Next Steps\n{}",
        content.what_happened, content.why_it_matters, content.next_steps
    )
}

/// One rendered line of the next-steps section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NextStep {
    pub text: String,
    pub checklist: bool,
}

/// Split next steps into lines; bullet lines lose their marker.
pub fn parse_next_steps(text: &str) -> Vec<NextStep> {
    text.split('\n')
        .map(|line| match line.strip_prefix(BULLET) {
            Some(rest) => NextStep { text: rest.trim().to_owned(), checklist: true },
            None => NextStep { text: line.to_owned(), checklist: false },
        })
        .collect()
}

/// File name for an exported brief (`"Q4 Plan!"` -> `"q4-plan.md"`).
pub fn export_filename(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "brief.md".to_owned()
    } else {
        format!("{slug}.md")
    }
}

/// Recent briefs whose title or origin contains `query`, ignoring case.
pub fn filter_recent(briefs: &[RecentBrief], query: &str) -> Vec<RecentBrief> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return briefs.to_vec();
    }
    briefs
        .iter()
        .filter(|b| b.title.to_lowercase().contains(&needle) || b.origin_label().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
