//! Settings screen state: active tab, profile, and notification toggles.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Notifications,
    Security,
    Appearance,
}

impl SettingsTab {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Notifications, Self::Security, Self::Appearance];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::Security => "Security",
            Self::Appearance => "Appearance",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub company: String,
    /// Display only.
    pub role: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_owned(),
            email: "john.doe@example.com".to_owned(),
            company: "Acme Corporation".to_owned(),
            role: "Admin".to_owned(),
        }
    }
}

impl Profile {
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPref {
    Email,
    MaintenanceReminders,
    OverdueAlerts,
    WeeklyReport,
}

impl NotificationPref {
    pub const ALL: [Self; 4] = [Self::Email, Self::MaintenanceReminders, Self::OverdueAlerts, Self::WeeklyReport];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email Notifications",
            Self::MaintenanceReminders => "Maintenance Reminders",
            Self::OverdueAlerts => "Overdue Alerts",
            Self::WeeklyReport => "Weekly Reports",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Email => "Receive notifications via email",
            Self::MaintenanceReminders => "Get reminders for upcoming maintenance",
            Self::OverdueAlerts => "Alert when maintenance is overdue",
            Self::WeeklyReport => "Receive weekly summary reports",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email: bool,
    pub maintenance_reminders: bool,
    pub overdue_alerts: bool,
    pub weekly_report: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self { email: true, maintenance_reminders: true, overdue_alerts: true, weekly_report: false }
    }
}

impl NotificationPrefs {
    #[must_use]
    pub fn get(&self, pref: NotificationPref) -> bool {
        match pref {
            NotificationPref::Email => self.email,
            NotificationPref::MaintenanceReminders => self.maintenance_reminders,
            NotificationPref::OverdueAlerts => self.overdue_alerts,
            NotificationPref::WeeklyReport => self.weekly_report,
        }
    }

    pub fn toggle(&mut self, pref: NotificationPref) {
        let slot = match pref {
            NotificationPref::Email => &mut self.email,
            NotificationPref::MaintenanceReminders => &mut self.maintenance_reminders,
            NotificationPref::OverdueAlerts => &mut self.overdue_alerts,
            NotificationPref::WeeklyReport => &mut self.weekly_report,
        };
        *slot = !*slot;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub tab: SettingsTab,
    pub profile: Profile,
    pub prefs: NotificationPrefs,
}
