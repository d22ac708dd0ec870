//! Persisted return-path hint: where the user was headed before login.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard writes or clears the hint on every evaluation; the login
//! flow consumes it with [`take`] to restore the original destination after
//! a successful sign-in. One fixed key, application-wide.

use super::decision::HintAction;

/// Fixed localStorage key for the return path.
pub const RETURN_PATH_KEY: &str = "milktea_return_path";

/// Persist `path` as the post-login destination.
pub fn remember(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(RETURN_PATH_KEY, path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Remove any stored destination. Safe to call when none is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(RETURN_PATH_KEY);
        }
    }
}

/// Read and remove the stored destination, if any.
#[must_use]
pub fn take() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let path = storage.get_item(RETURN_PATH_KEY).ok().flatten()?;
        let _ = storage.remove_item(RETURN_PATH_KEY);
        Some(path)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Apply a computed hint action.
pub fn apply(action: &HintAction) {
    match action {
        HintAction::Remember(path) => remember(path),
        HintAction::Clear => clear(),
    }
}
