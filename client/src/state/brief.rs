//! Brief-screen state: generation phase, edit mode, and editable content.
//!
//! DESIGN
//! ======
//! Content is written once when generation completes and afterwards only
//! through `set_field` while editing is on. Toggling editing never touches
//! the content itself.

#[cfg(test)]
#[path = "brief_test.rs"]
mod brief_test;

use crate::net::types::BriefContent;

/// Whether the brief is still being generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BriefPhase {
    #[default]
    Generating,
    Ready,
}

/// One of the three editable sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BriefField {
    WhatHappened,
    WhyItMatters,
    NextSteps,
}

impl BriefField {
    pub const ALL: [BriefField; 3] = [BriefField::WhatHappened, BriefField::WhyItMatters, BriefField::NextSteps];

    pub fn heading(self) -> &'static str {
        match self {
            Self::WhatHappened => "What Happened",
            Self::WhyItMatters => "Why It Matters",
            Self::NextSteps => "Next Steps",
        }
    }

    pub fn read(self, content: &BriefContent) -> &str {
        match self {
            Self::WhatHappened => &content.what_happened,
            Self::WhyItMatters => &content.why_it_matters,
            Self::NextSteps => &content.next_steps,
        }
    }

    fn slot(self, content: &mut BriefContent) -> &mut String {
        match self {
            Self::WhatHappened => &mut content.what_happened,
            Self::WhyItMatters => &mut content.why_it_matters,
            Self::NextSteps => &mut content.next_steps,
        }
    }
}

/// Local state of the brief screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BriefState {
    pub phase: BriefPhase,
    pub editing: bool,
    pub content: BriefContent,
}

impl BriefState {
    pub fn is_generating(&self) -> bool {
        self.phase == BriefPhase::Generating
    }

    /// Reveal generated content. Ignored once the brief is ready.
    pub fn finish(&mut self, content: BriefContent) -> bool {
        if !self.is_generating() {
            return false;
        }
        self.content = content;
        self.phase = BriefPhase::Ready;
        true
    }

    /// Flip edit mode and return the new flag. Ignored while generating.
    pub fn toggle_editing(&mut self) -> bool {
        if !self.is_generating() {
            self.editing = !self.editing;
        }
        self.editing
    }

    /// Replace one section. Only allowed while editing.
    pub fn set_field(&mut self, field: BriefField, value: String) -> bool {
        if !self.editing {
            return false;
        }
        *field.slot(&mut self.content) = value;
        true
    }
}
