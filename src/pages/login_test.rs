use super::*;

#[test]
fn post_login_destination_uses_stored_path() {
    assert_eq!(post_login_destination(Some("/dashboard/admins".to_owned())), "/dashboard/admins");
}

#[test]
fn post_login_destination_falls_back_to_home() {
    assert_eq!(post_login_destination(None), "/");
}

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  lan@example.com  ", "secret"),
        Ok(("lan@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("lan@example.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
}
