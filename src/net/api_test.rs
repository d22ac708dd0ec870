use super::*;

#[test]
fn login_failed_message_formats_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
    assert_eq!(login_failed_message(429), "login failed: 429");
}
