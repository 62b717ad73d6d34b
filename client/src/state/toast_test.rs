use super::*;

#[test]
fn push_returns_unique_ids_newest_first() {
    let mut state = ToastState::default();
    let first = state.push("one", "1");
    let second = state.push("two", "2");
    assert_ne!(first, second);
    assert_eq!(state.items[0].title, "two");
    assert_eq!(state.items[1].title, "one");
}

#[test]
fn push_caps_queue_at_limit() {
    let mut state = ToastState::default();
    let oldest = state.push("0", "");
    for i in 1..=TOAST_LIMIT {
        state.push(&i.to_string(), "");
    }
    assert_eq!(state.items.len(), TOAST_LIMIT);
    assert!(state.items.iter().all(|t| t.id != oldest));
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push("keep", "");
    let gone = state.push("gone", "");
    state.dismiss(&gone);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);

    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn fixed_messages() {
    assert_eq!(messages::COPIED.0, "Brief copied!");
    assert_eq!(messages::SHARED.1, "Anyone with the link can view this brief.");
    assert_eq!(messages::exported_description("a.md"), "Saved as a.md.");
}
