use super::*;
use crate::net::types::{Role, User};

fn auth_state(loading: bool, session: Session) -> AuthState {
    AuthState { session, loading }
}

fn admin_user() -> User {
    User {
        id: "1".to_owned(),
        name: "mai".to_owned(),
        role: Role::Admin,
    }
}

// =============================================================================
// allowed
// =============================================================================

#[test]
fn allowed_is_false_while_loading() {
    let state = auth_state(true, Session::logged_in(admin_user()));
    assert!(!allowed(&state, &RolePolicy::new(&[Role::Admin])));
}

#[test]
fn allowed_is_false_when_logged_out() {
    let state = auth_state(false, Session::logged_out());
    assert!(!allowed(&state, &RolePolicy::new(&[Role::Admin])));
}

#[test]
fn allowed_is_true_for_member_role() {
    let state = auth_state(false, Session::logged_in(admin_user()));
    assert!(allowed(&state, &RolePolicy::new(&[Role::Staff, Role::Admin])));
}

#[test]
fn allowed_is_false_for_non_member_role() {
    let state = auth_state(false, Session::logged_in(admin_user()));
    assert!(!allowed(&state, &RolePolicy::new(&[Role::User])));
}

#[test]
fn allowed_is_false_without_user_record() {
    let state = auth_state(
        false,
        Session {
            is_logged: true,
            user: None,
        },
    );
    assert!(!allowed(&state, &RolePolicy::new(&[Role::Admin])));
}

#[test]
fn allowed_is_false_for_empty_policy() {
    let state = auth_state(false, Session::logged_in(admin_user()));
    assert!(!allowed(&state, &RolePolicy::default()));
}
