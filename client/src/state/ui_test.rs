use super::*;

#[test]
fn default_chrome_is_closed_and_light() {
    let ui = UiState::default();
    assert!(!ui.dark_mode);
    assert!(!ui.sidebar_collapsed);
    assert!(!ui.notifications_open);
    assert!(!ui.user_menu_open);
    assert!(ui.search_query.is_empty());
}

#[test]
fn panels_are_mutually_exclusive() {
    let mut ui = UiState::default();
    ui.toggle_user_menu();
    ui.toggle_notifications();
    assert!(ui.notifications_open);
    assert!(!ui.user_menu_open);
    ui.toggle_user_menu();
    assert!(ui.user_menu_open);
    assert!(!ui.notifications_open);
}

#[test]
fn navigating_closes_notifications() {
    let mut ui = UiState::default();
    ui.toggle_notifications();
    ui.on_navigate();
    assert!(!ui.notifications_open);
}

#[test]
fn sidebar_toggle_flips() {
    let mut ui = UiState::default();
    ui.toggle_sidebar();
    assert!(ui.sidebar_collapsed);
    ui.toggle_sidebar();
    assert!(!ui.sidebar_collapsed);
}

#[test]
fn logout_keeps_theme_only() {
    let mut ui = UiState { dark_mode: true, sidebar_collapsed: true, search_query: "pump".to_owned(), ..UiState::default() };
    ui.on_logout();
    assert_eq!(ui, UiState { dark_mode: true, ..UiState::default() });
}
