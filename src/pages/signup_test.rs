use super::*;

#[test]
fn mismatched_passwords_are_rejected_first() {
    assert_eq!(
        validate_passwords("password123", "differentpassword"),
        Some("Passwords do not match")
    );
    // Mismatch wins even when both are also too short.
    assert_eq!(validate_passwords("abc", "xyz"), Some("Passwords do not match"));
}

#[test]
fn short_passwords_are_rejected() {
    assert_eq!(
        validate_passwords("short", "short"),
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn six_characters_is_enough() {
    assert_eq!(validate_passwords("secret", "secret"), None);
}

#[test]
fn matching_long_passwords_pass() {
    assert_eq!(validate_passwords("password123", "password123"), None);
}
