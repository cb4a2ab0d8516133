use super::*;

// =============================================================
// Auth gate
// =============================================================

#[test]
fn starts_on_login() {
    assert_eq!(Shell::default(), Shell::Unauthenticated(AuthScreen::Login));
    assert!(!Shell::default().is_authenticated());
}

#[test]
fn login_and_register_toggle_while_signed_out() {
    let mut shell = Shell::default();
    shell.show_register();
    assert_eq!(shell, Shell::Unauthenticated(AuthScreen::Register));
    shell.show_login();
    assert_eq!(shell, Shell::Unauthenticated(AuthScreen::Login));
}

#[test]
fn sign_in_lands_on_dashboard() {
    let mut shell = Shell::Unauthenticated(AuthScreen::Register);
    shell.sign_in();
    assert_eq!(shell, Shell::Authenticated(AppScreen::Dashboard));
    assert_eq!(shell.screen(), Some(AppScreen::Dashboard));
}

#[test]
fn auth_screen_switch_is_ignored_once_signed_in() {
    let mut shell = Shell::Authenticated(AppScreen::Team);
    shell.show_register();
    assert_eq!(shell, Shell::Authenticated(AppScreen::Team));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn navigate_replaces_active_screen() {
    let mut shell = Shell::default();
    shell.sign_in();
    assert!(shell.navigate(AppScreen::Kanban));
    assert!(shell.navigate(AppScreen::Settings));
    assert_eq!(shell.screen(), Some(AppScreen::Settings));
}

#[test]
fn navigate_while_signed_out_is_ignored() {
    let mut shell = Shell::default();
    assert!(!shell.navigate(AppScreen::Equipment));
    assert_eq!(shell, Shell::Unauthenticated(AuthScreen::Login));
}

#[test]
fn logout_returns_to_login_from_any_screen() {
    for screen in AppScreen::ALL {
        let mut shell = Shell::Authenticated(screen);
        shell.logout();
        assert_eq!(shell, Shell::Unauthenticated(AuthScreen::Login));
    }
}

#[test]
fn sidebar_order_and_labels() {
    let labels: Vec<_> = AppScreen::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        vec!["Dashboard", "Equipment", "Maintenance", "Task Board", "Calendar", "Team", "Categories", "Analytics", "Settings"]
    );
}

// =============================================================
// Validators
// =============================================================

#[test]
fn login_requires_both_fields() {
    assert_eq!(validate_login(" a@b.com ", "pw"), Ok(("a@b.com".to_owned(), "pw".to_owned())));
    assert_eq!(validate_login("", "pw"), Err("Enter your email and password."));
    assert_eq!(validate_login("a@b.com", "   "), Err("Enter your email and password."));
}

#[test]
fn register_allows_blank_company() {
    let form = Registration {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        ..Registration::default()
    };
    assert_eq!(validate_register(&form), Ok(()));
}

#[test]
fn register_reports_first_problem() {
    let mut form = Registration::default();
    assert_eq!(validate_register(&form), Err("Enter your full name."));
    form.name = "Ana".to_owned();
    assert_eq!(validate_register(&form), Err("Enter your email."));
    form.email = "ana@example.com".to_owned();
    assert_eq!(validate_register(&form), Err("Choose a password."));
    form.password = "one".to_owned();
    assert_eq!(validate_register(&form), Err("Confirm your password."));
    form.confirm_password = "two".to_owned();
    assert_eq!(validate_register(&form), Ok(()));
}
