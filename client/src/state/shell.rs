//! Authentication gate and active-screen selector.
//!
//! DESIGN
//! ======
//! The shell is a single enum so "authenticated" and "which screen" cannot
//! disagree. Unauthenticated users can only move between login and register;
//! navigation requests while signed out are ignored. There is no history
//! stack: navigating replaces the active screen.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    Register,
}

/// Authenticated screens in sidebar order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AppScreen {
    #[default]
    Dashboard,
    Equipment,
    Maintenance,
    Kanban,
    Calendar,
    Team,
    Categories,
    Analytics,
    Settings,
}

impl AppScreen {
    pub const ALL: [Self; 9] = [
        Self::Dashboard,
        Self::Equipment,
        Self::Maintenance,
        Self::Kanban,
        Self::Calendar,
        Self::Team,
        Self::Categories,
        Self::Analytics,
        Self::Settings,
    ];

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Equipment => "Equipment",
            Self::Maintenance => "Maintenance",
            Self::Kanban => "Task Board",
            Self::Calendar => "Calendar",
            Self::Team => "Team",
            Self::Categories => "Categories",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    /// Short glyph shown when the sidebar is collapsed.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Equipment => "▣",
            Self::Maintenance => "⚒",
            Self::Kanban => "☰",
            Self::Calendar => "▤",
            Self::Team => "☺",
            Self::Categories => "◫",
            Self::Analytics => "↗",
            Self::Settings => "⚙",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Unauthenticated(AuthScreen),
    Authenticated(AppScreen),
}

impl Default for Shell {
    fn default() -> Self {
        Self::Unauthenticated(AuthScreen::Login)
    }
}

impl Shell {
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn screen(self) -> Option<AppScreen> {
        match self {
            Self::Authenticated(screen) => Some(screen),
            Self::Unauthenticated(_) => None,
        }
    }

    pub fn show_register(&mut self) {
        if let Self::Unauthenticated(_) = self {
            *self = Self::Unauthenticated(AuthScreen::Register);
        }
    }

    pub fn show_login(&mut self) {
        if let Self::Unauthenticated(_) = self {
            *self = Self::Unauthenticated(AuthScreen::Login);
        }
    }

    /// Enter the app at the dashboard. No credential check exists.
    pub fn sign_in(&mut self) {
        *self = Self::Authenticated(AppScreen::Dashboard);
    }

    /// Replace the active screen. Returns `false` (and does nothing) while
    /// signed out.
    pub fn navigate(&mut self, to: AppScreen) -> bool {
        match self {
            Self::Authenticated(current) => {
                *current = to;
                true
            }
            Self::Unauthenticated(_) => false,
        }
    }

    pub fn logout(&mut self) {
        *self = Self::Unauthenticated(AuthScreen::Login);
    }
}

/// Credentials accepted by the login form.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Registration form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub company: String,
    pub password: String,
    pub confirm_password: String,
}

/// Check that every required registration field is filled. Company is
/// optional.
///
/// # Errors
///
/// Returns a user-facing message naming the first blank field.
pub fn validate_register(form: &Registration) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err("Enter your full name.");
    }
    if form.email.trim().is_empty() {
        return Err("Enter your email.");
    }
    if form.password.trim().is_empty() {
        return Err("Choose a password.");
    }
    if form.confirm_password.trim().is_empty() {
        return Err("Confirm your password.");
    }
    Ok(())
}
