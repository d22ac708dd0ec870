//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Login flag plus user record.
///
/// Invariant: `is_logged == false` implies `user == None`. The record is
/// replaced wholesale, never field-by-field; the route guard re-establishes
/// the invariant on every denial by writing [`Session::logged_out`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub is_logged: bool,
    pub user: Option<User>,
}

impl Session {
    /// The canonical logged-out record.
    #[must_use]
    pub fn logged_out() -> Self {
        Self {
            is_logged: false,
            user: None,
        }
    }

    /// A logged-in session for `user`.
    #[must_use]
    pub fn logged_in(user: User) -> Self {
        Self {
            is_logged: true,
            user: Some(user),
        }
    }

    /// True when this is exactly the logged-out record. A stale user on a
    /// not-logged session violates the invariant and does not count.
    #[must_use]
    pub fn is_logged_out(&self) -> bool {
        !self.is_logged && self.user.is_none()
    }

    /// Role of the current user, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Authentication state tracking the current session and loading status.
///
/// `loading` covers the bootstrap window before `/api/auth/me` resolves;
/// guarded pages hold off on redirects until it clears.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::logged_out(),
            loading: true,
        }
    }
}
