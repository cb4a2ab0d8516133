//! Local UI chrome state (sidebar, top-bar panels, theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the record stores so chrome
//! can change without touching domain data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    pub notifications_open: bool,
    pub user_menu_open: bool,
    pub search_query: String,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Opening notifications closes the user menu.
    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
        if self.notifications_open {
            self.user_menu_open = false;
        }
    }

    /// Opening the user menu closes notifications.
    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
        if self.user_menu_open {
            self.notifications_open = false;
        }
    }

    /// Called on every screen change.
    pub fn on_navigate(&mut self) {
        self.notifications_open = false;
        self.user_menu_open = false;
    }

    /// Chrome reset on logout. The theme survives.
    pub fn on_logout(&mut self) {
        *self = Self { dark_mode: self.dark_mode, ..Self::default() };
    }
}
