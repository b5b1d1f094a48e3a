use super::*;

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.current.is_none());
}

#[test]
fn show_sets_current_toast() {
    let mut state = ToastState::default();
    state.show(ToastKind::Success, "Incident updated successfully");
    let toast = state.current.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Incident updated successfully");
}

#[test]
fn clear_with_matching_seq_dismisses() {
    let mut state = ToastState::default();
    let seq = state.show(ToastKind::Error, "Failed to fetch incidents");
    assert!(state.clear_if(seq));
    assert!(state.current.is_none());
}

#[test]
fn stale_timer_does_not_clear_newer_toast() {
    let mut state = ToastState::default();
    let old_seq = state.show(ToastKind::Error, "first");
    let new_seq = state.show(ToastKind::Success, "second");

    assert!(!state.clear_if(old_seq));
    assert_eq!(state.current.as_ref().unwrap().message, "second");

    assert!(state.clear_if(new_seq));
    assert!(state.current.is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut state = ToastState::default();
    let seq = state.show(ToastKind::Success, "done");
    assert!(state.clear_if(seq));
    assert!(!state.clear_if(seq));
}
