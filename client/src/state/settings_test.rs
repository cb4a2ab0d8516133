use super::*;

#[test]
fn defaults_open_profile_with_sample_user() {
    let state = SettingsState::default();
    assert_eq!(state.tab, SettingsTab::Profile);
    assert_eq!(state.profile.name, "John Doe");
    assert_eq!(state.profile.role, "Admin");
    assert_eq!(state.profile.initials(), "JD");
}

#[test]
fn weekly_report_starts_off() {
    let prefs = NotificationPrefs::default();
    let on: Vec<_> = NotificationPref::ALL.into_iter().filter(|p| prefs.get(*p)).collect();
    assert_eq!(on, vec![NotificationPref::Email, NotificationPref::MaintenanceReminders, NotificationPref::OverdueAlerts]);
}

#[test]
fn toggle_flips_one_pref() {
    let mut prefs = NotificationPrefs::default();
    prefs.toggle(NotificationPref::WeeklyReport);
    prefs.toggle(NotificationPref::Email);
    assert!(prefs.weekly_report);
    assert!(!prefs.email);
    assert!(prefs.overdue_alerts);
}
