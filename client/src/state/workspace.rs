//! Per-entity record stores shared by every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`Workspace`] and provides it as context. Each store is
//! its own signal so an edit on one screen only re-renders views of that
//! entity. Stores outlive screen changes and are reset to their seed data on
//! logout.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;
use records::category::{self, Category};
use records::equipment::{self, Equipment};
use records::maintenance::{self, MaintenanceRecord};
use records::task::{self, Task};
use records::team::{self, TeamMember};
use records::Store;

/// Plain snapshot of every store, seeded from sample data.
#[derive(Clone, Debug, PartialEq)]
pub struct Seeds {
    pub equipment: Store<Equipment>,
    pub categories: Store<Category>,
    pub tasks: Store<Task>,
    pub team: Store<TeamMember>,
    pub maintenance: Store<MaintenanceRecord>,
}

impl Default for Seeds {
    fn default() -> Self {
        Self {
            equipment: Store::seeded(equipment::seed()),
            categories: Store::seeded(category::seed()),
            tasks: Store::seeded(task::seed()),
            team: Store::seeded(team::seed()),
            maintenance: Store::seeded(maintenance::seed()),
        }
    }
}

/// Reactive handles to the stores.
#[derive(Clone, Copy)]
pub struct Workspace {
    pub equipment: RwSignal<Store<Equipment>>,
    pub categories: RwSignal<Store<Category>>,
    pub tasks: RwSignal<Store<Task>>,
    pub team: RwSignal<Store<TeamMember>>,
    pub maintenance: RwSignal<Store<MaintenanceRecord>>,
}

impl Workspace {
    #[must_use]
    pub fn new() -> Self {
        let seeds = Seeds::default();
        Self {
            equipment: RwSignal::new(seeds.equipment),
            categories: RwSignal::new(seeds.categories),
            tasks: RwSignal::new(seeds.tasks),
            team: RwSignal::new(seeds.team),
            maintenance: RwSignal::new(seeds.maintenance),
        }
    }

    /// Replace every store with fresh seed data.
    pub fn reset(&self) {
        let seeds = Seeds::default();
        self.equipment.set(seeds.equipment);
        self.categories.set(seeds.categories);
        self.tasks.set(seeds.tasks);
        self.team.set(seeds.team);
        self.maintenance.set(seeds.maintenance);
        log::debug!("workspace reset to seed data");
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
