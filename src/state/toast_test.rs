use super::*;

#[test]
fn push_error_appends_with_increasing_ids() {
    let mut state = ToastState::default();
    state.push_error("first");
    state.push_error("second");

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "first");
    assert_eq!(state.items[1].message, "second");
    assert!(state.items[0].id < state.items[1].id);
}

#[test]
fn pushed_toast_is_error_severity() {
    let mut state = ToastState::default();
    state.push_error("denied");
    assert_eq!(state.items[0].severity, Severity::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    state.push_error("keep");
    state.push_error("drop");
    let drop_id = state.items[1].id;

    state.dismiss(drop_id);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "keep");
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push_error("only");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_stay_unique_after_dismissal() {
    let mut state = ToastState::default();
    state.push_error("a");
    let first_id = state.items[0].id;
    state.dismiss(first_id);
    state.push_error("b");
    assert_ne!(state.items[0].id, first_id);
}
