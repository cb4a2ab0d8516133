//! Page modules, one per screen.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen-scoped state (filter selection, entry form,
//! delete gate) as local signals and reads the shared stores from the
//! `Workspace` context. Rendering details live in `components`.

pub mod analytics;
pub mod calendar;
pub mod categories;
pub mod dashboard;
pub mod equipment;
pub mod kanban;
pub mod login;
pub mod maintenance;
pub(crate) mod outcome;
pub mod register;
pub mod settings;
pub mod team;

#[cfg(all(test, feature = "ssr"))]
pub(crate) mod test_helpers {
    use leptos::prelude::*;

    use crate::state::flash::FlashState;
    use crate::state::settings::SettingsState;
    use crate::state::workspace::Workspace;

    /// Server-render `view` under a fresh owner carrying the page contexts.
    /// `setup` runs first so a test can empty or reshape the stores.
    pub fn render<V: IntoView>(setup: impl FnOnce(Workspace), view: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let ws = Workspace::new();
            setup(ws);
            provide_context(ws);
            provide_context(RwSignal::new(FlashState::default()));
            provide_context(RwSignal::new(SettingsState::default()));
            view().to_html()
        })
    }

    /// Leave every store at its seed data.
    pub fn seeded(_: Workspace) {}
}
