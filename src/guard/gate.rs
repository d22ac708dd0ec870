//! Route-guard adapter applying access decisions to the running app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components install this guard so every screen applies
//! identical deny/redirect behavior. The decision itself lives in
//! [`super::decision`]; this module only wires it to signals, storage, the
//! toast queue, and the router.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, Session};
use crate::state::toast::ToastState;

use super::credentials;
use super::decision::{self, AccessRequest, Outcome};
use super::hint;
use super::policy::RolePolicy;

/// Apply an evaluation's effects: hint persistence, whole-session reset,
/// denial notice, redirect with history replacement.
pub fn apply_outcome<F>(outcome: &Outcome, auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    hint::apply(&outcome.hint);

    if outcome.reset_session && !auth.get_untracked().session.is_logged_out() {
        // Whole-record replacement keeps the logged-out invariant intact.
        auth.update(|state| state.session = Session::logged_out());
    }

    if let Some(notice) = outcome.notice {
        toasts.update(|t| t.push_error(notice));
    }

    if let Some(target) = &outcome.redirect {
        let decision = outcome.decision;
        log::warn!("access denied ({decision:?}); redirecting to {target}");
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    }
}

/// Install a guard effect for a protected route.
///
/// Re-runs whenever auth state changes; does nothing while the session is
/// still loading so the bootstrap fetch can settle before any redirect.
pub fn install_route_guard<F>(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    request: AccessRequest,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let outcome = decision::evaluate(&request, &state.session, credentials::credential_present());
        apply_outcome(&outcome, auth, toasts, &navigate);
    });
}

/// Whether the current auth state permits rendering for `policy`.
/// Drives the `Show` wrappers on protected pages.
#[must_use]
pub fn allowed(state: &AuthState, policy: &RolePolicy) -> bool {
    !state.loading
        && state.session.is_logged
        && state
            .session
            .user
            .as_ref()
            .is_some_and(|user| policy.allows(user.role))
}
