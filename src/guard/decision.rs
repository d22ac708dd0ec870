//! Access decision core for role-gated routes.
//!
//! DESIGN
//! ======
//! `evaluate` is a pure function from (request, session, credential
//! presence) to an [`Outcome`] describing effects as data. The `gate` module
//! applies those effects against signals, storage, and the router, keeping
//! this module testable without a browser.

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;

use super::policy::RolePolicy;
use crate::state::auth::Session;

/// Message shown when an authenticated user lacks a permitted role.
pub const INSUFFICIENT_PERMISSION: &str = "You do not have permission to access this page";

/// A single gate evaluation: where the user is going, who may go there,
/// and where to send them if they may not.
#[derive(Clone, Debug)]
pub struct AccessRequest {
    /// Path being navigated to.
    pub current_path: String,
    /// Roles permitted for this view. Empty means no role is sufficient.
    pub allowed_roles: RolePolicy,
    /// Where to send the user on denial.
    pub redirect_target: String,
}

/// Three-valued outcome of an access evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session is logged in and the user's role is permitted.
    Allow,
    /// No logged-in session; redirect without a notice.
    DenyUnauthenticated,
    /// Logged in but the role is not permitted; notify, then redirect.
    DenyForbidden,
}

/// Net effect on the persisted return-path hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HintAction {
    /// Persist the given path as the post-login destination.
    Remember(String),
    /// Remove any stored destination.
    Clear,
}

/// Decision plus the effects to apply, described as data.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub decision: Decision,
    /// What to do with the persisted return path.
    pub hint: HintAction,
    /// Replace the stored session with the logged-out record.
    pub reset_session: bool,
    /// Denial notice to surface, if any.
    pub notice: Option<&'static str>,
    /// Redirect target, applied with history replacement.
    pub redirect: Option<String>,
}

/// Decide whether a navigation may render its protected content.
///
/// Pure: reads its inputs and returns effects as data. The hint action is
/// chosen before the role check, so a logged-in-but-forbidden user still has
/// the hint cleared when a credential is present. Malformed sessions (logged
/// in with no user record) never panic; they fail the role check.
#[must_use]
pub fn evaluate(request: &AccessRequest, session: &Session, credential_present: bool) -> Outcome {
    // The hint tracks "last path visited while not yet authenticated"; it is
    // only dropped once a credential exists for a logged-in session.
    let hint = if credential_present && session.is_logged {
        HintAction::Clear
    } else {
        HintAction::Remember(request.current_path.clone())
    };

    if !session.is_logged {
        return Outcome {
            decision: Decision::DenyUnauthenticated,
            hint,
            reset_session: true,
            notice: None,
            redirect: Some(request.redirect_target.clone()),
        };
    }

    // Missing user on a logged-in session is malformed; membership is false.
    let permitted = session
        .user
        .as_ref()
        .is_some_and(|user| request.allowed_roles.allows(user.role));

    if permitted {
        Outcome {
            decision: Decision::Allow,
            hint,
            reset_session: false,
            notice: None,
            redirect: None,
        }
    } else {
        Outcome {
            decision: Decision::DenyForbidden,
            hint,
            reset_session: true,
            notice: Some(INSUFFICIENT_PERMISSION),
            redirect: Some(request.redirect_target.clone()),
        }
    }
}
