//! Cookie-string parsing and browser cookie access.
//!
//! Parsing is a pure function over a `document.cookie`-style string so the
//! lookup rule is testable without a browser; [`get`] adds the hydrate-only
//! web-sys glue.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Extract the value of `name` from a `document.cookie`-style string.
///
/// Pairs are separated by `;`; whitespace around names and values is
/// ignored; the value is everything after the first `=` in a pair. Returns
/// the first match.
#[must_use]
pub fn parse(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() == name {
            Some(value.trim().to_owned())
        } else {
            None
        }
    })
}

/// Read a cookie by name from the browser. Returns `None` on the server.
#[must_use]
pub fn get(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = html_document.cookie().ok()?;
        parse(&cookies, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
