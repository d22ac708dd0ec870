use super::*;
use std::cell::Cell;

struct Fixed(Option<&'static str>);

impl TokenSource for Fixed {
    fn token(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

struct Counting<'a> {
    calls: &'a Cell<u32>,
    token: Option<&'static str>,
}

impl TokenSource for Counting<'_> {
    fn token(&self) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        self.token.map(str::to_owned)
    }
}

// =============================================================================
// first_token
// =============================================================================

#[test]
fn first_token_prefers_earlier_source() {
    let cookie = Fixed(Some("from-cookie"));
    let local = Fixed(Some("from-local"));
    assert_eq!(first_token(&[&cookie, &local]).as_deref(), Some("from-cookie"));
}

#[test]
fn first_token_falls_back_when_first_absent() {
    let cookie = Fixed(None);
    let local = Fixed(Some("from-local"));
    assert_eq!(first_token(&[&cookie, &local]).as_deref(), Some("from-local"));
}

#[test]
fn first_token_none_when_all_absent() {
    let cookie = Fixed(None);
    let local = Fixed(None);
    assert_eq!(first_token(&[&cookie, &local]), None);
}

#[test]
fn first_token_none_for_empty_source_list() {
    assert_eq!(first_token(&[]), None);
}

#[test]
fn first_token_short_circuits_after_a_hit() {
    let calls = Cell::new(0);
    let first = Fixed(Some("hit"));
    let second = Counting {
        calls: &calls,
        token: Some("unreached"),
    };
    assert_eq!(first_token(&[&first, &second]).as_deref(), Some("hit"));
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Browser sources off-wasm
// =============================================================================

#[test]
fn browser_sources_are_absent_off_wasm() {
    assert_eq!(CookieToken.token(), None);
    assert_eq!(LocalToken.token(), None);
    assert_eq!(access_token(), None);
    assert!(!credential_present());
}

#[test]
fn access_token_key_is_stable() {
    assert_eq!(ACCESS_TOKEN_KEY, "access_token");
}
