//! Credential lookup feeding the hint-clearing rule.
//!
//! DESIGN
//! ======
//! "Cookie first, then localStorage" is expressed as an ordered list of
//! [`TokenSource`] strategies evaluated short-circuit, so the precedence
//! rule is testable in isolation. Presence of a token never grants access by
//! itself; the decision follows the session alone.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::util::cookie;

/// Cookie and storage key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// A single place an access token may be stored.
pub trait TokenSource {
    /// The token held by this source, if any.
    fn token(&self) -> Option<String>;
}

/// First token produced by `sources`, in order, short-circuiting.
#[must_use]
pub fn first_token(sources: &[&dyn TokenSource]) -> Option<String> {
    sources.iter().find_map(|source| source.token())
}

/// Cookie-backed token (`document.cookie`).
pub struct CookieToken;

impl TokenSource for CookieToken {
    fn token(&self) -> Option<String> {
        cookie::get(ACCESS_TOKEN_KEY)
    }
}

/// localStorage fallback token.
pub struct LocalToken;

impl TokenSource for LocalToken {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// The browser access token: cookie first, localStorage fallback.
#[must_use]
pub fn access_token() -> Option<String> {
    first_token(&[&CookieToken, &LocalToken])
}

/// Whether any credential source currently holds a token.
#[must_use]
pub fn credential_present() -> bool {
    access_token().is_some()
}
