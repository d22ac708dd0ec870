use super::*;

fn staff_user() -> User {
    User {
        id: "7".to_owned(),
        name: "lan".to_owned(),
        role: Role::Staff,
    }
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn default_session_is_logged_out() {
    let session = Session::default();
    assert!(!session.is_logged);
    assert!(session.user.is_none());
    assert!(session.is_logged_out());
}

#[test]
fn logged_out_matches_default() {
    assert_eq!(Session::logged_out(), Session::default());
}

#[test]
fn logged_in_sets_flag_and_user_together() {
    let session = Session::logged_in(staff_user());
    assert!(session.is_logged);
    assert_eq!(session.role(), Some(Role::Staff));
}

#[test]
fn role_is_none_without_user() {
    assert_eq!(Session::logged_out().role(), None);

    let malformed = Session {
        is_logged: true,
        user: None,
    };
    assert_eq!(malformed.role(), None);
}

#[test]
fn stale_user_on_not_logged_session_is_not_logged_out() {
    let stale = Session {
        is_logged: false,
        user: Some(staff_user()),
    };
    assert!(!stale.is_logged_out());
}

// =============================================================================
// AuthState
// =============================================================================

#[test]
fn auth_state_starts_loading_and_logged_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.session.is_logged_out());
}
