use super::*;

fn ready_with(content: BriefContent) -> BriefState {
    let mut state = BriefState::default();
    state.finish(content);
    state
}

fn sample() -> BriefContent {
    BriefContent {
        what_happened: "a".to_owned(),
        why_it_matters: "b".to_owned(),
        next_steps: "c".to_owned(),
    }
}

// =============================================================
// Phase
// =============================================================

#[test]
fn brief_starts_generating_with_empty_content() {
    let state = BriefState::default();
    assert!(state.is_generating());
    assert!(!state.editing);
    assert_eq!(state.content, BriefContent::default());
}

#[test]
fn finish_reveals_content_once() {
    let mut state = BriefState::default();
    assert!(state.finish(sample()));
    assert_eq!(state.phase, BriefPhase::Ready);

    assert!(!state.finish(BriefContent::default()));
    assert_eq!(state.content, sample());
}

// =============================================================
// Editing
// =============================================================

#[test]
fn toggle_editing_is_ignored_while_generating() {
    let mut state = BriefState::default();
    assert!(!state.toggle_editing());
    assert!(!state.editing);
}

#[test]
fn set_field_requires_edit_mode() {
    let mut state = ready_with(sample());
    assert!(!state.set_field(BriefField::WhatHappened, "x".to_owned()));
    assert_eq!(state.content.what_happened, "a");
}

#[test]
fn edits_apply_in_place_and_survive_toggle_off() {
    let mut state = ready_with(sample());
    assert!(state.toggle_editing());
    assert!(state.set_field(BriefField::WhyItMatters, "revenue".to_owned()));
    assert!(state.set_field(BriefField::NextSteps, "• ship".to_owned()));
    assert!(!state.toggle_editing());

    assert_eq!(state.content.what_happened, "a");
    assert_eq!(state.content.why_it_matters, "revenue");
    assert_eq!(state.content.next_steps, "• ship");
}

#[test]
fn toggling_without_edits_preserves_content() {
    let mut state = ready_with(sample());
    state.toggle_editing();
    state.toggle_editing();
    assert_eq!(state.content, sample());
}

#[test]
fn field_read_and_heading() {
    let content = sample();
    let read: Vec<&str> = BriefField::ALL.iter().map(|f| f.read(&content)).collect();
    assert_eq!(read, vec!["a", "b", "c"]);
    assert_eq!(BriefField::WhyItMatters.heading(), "Why It Matters");
}
