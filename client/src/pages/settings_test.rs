use super::*;

#[test]
fn password_change_requires_current_and_new() {
    assert_eq!(validate_password_change("", "n3w", "n3w"), Err("Enter your current password."));
    assert_eq!(validate_password_change("old", "  ", "  "), Err("Choose a new password."));
}

#[test]
fn password_change_requires_matching_confirmation() {
    assert_eq!(validate_password_change("old", "n3w", "n3W"), Err("New passwords do not match."));
    assert_eq!(validate_password_change("old", "n3w", "n3w"), Ok(()));
}
