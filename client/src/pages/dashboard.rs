//! Landing screen: headline figures, monthly activity, equipment needing
//! service, and shortcuts into the other screens.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use records::equipment::{Equipment, EquipmentStatus};
use records::maintenance::{MaintenanceRecord, MaintenanceStats, MaintenanceStatus};
use records::{Record, Store};

use crate::components::empty_state::EmptyState;
use crate::components::stat_card::StatCard;
use crate::state::shell::{AppScreen, Shell};
use crate::state::ui::UiState;
use crate::state::workspace::Workspace;
use crate::util::format;

/// How many assets the "needs attention" list shows.
const UPCOMING_LIMIT: usize = 5;

/// One month of the activity overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthActivity {
    pub month: &'static str,
    pub tasks: u64,
    pub cost: u64,
}

pub const MONTHLY_ACTIVITY: [MonthActivity; 12] = [
    MonthActivity { month: "Jan", tasks: 12, cost: 2400 },
    MonthActivity { month: "Feb", tasks: 15, cost: 2800 },
    MonthActivity { month: "Mar", tasks: 10, cost: 2200 },
    MonthActivity { month: "Apr", tasks: 18, cost: 3200 },
    MonthActivity { month: "May", tasks: 14, cost: 2600 },
    MonthActivity { month: "Jun", tasks: 16, cost: 3000 },
    MonthActivity { month: "Jul", tasks: 20, cost: 4200 },
    MonthActivity { month: "Aug", tasks: 17, cost: 3400 },
    MonthActivity { month: "Sep", tasks: 19, cost: 3800 },
    MonthActivity { month: "Oct", tasks: 22, cost: 4500 },
    MonthActivity { month: "Nov", tasks: 18, cost: 3600 },
    MonthActivity { month: "Dec", tasks: 21, cost: 4280 },
];

/// Which column of [`MONTHLY_ACTIVITY`] the overview plots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Series {
    #[default]
    Tasks,
    Cost,
}

impl Series {
    #[must_use]
    pub fn value(self, month: &MonthActivity) -> u64 {
        match self {
            Self::Tasks => month.tasks,
            Self::Cost => month.cost,
        }
    }

    #[must_use]
    pub fn display(self, value: u64) -> String {
        match self {
            Self::Tasks => value.to_string(),
            Self::Cost => format::currency(value),
        }
    }
}

/// Bar width for each month, as a percentage of the series maximum.
#[must_use]
pub fn bar_widths(series: Series) -> Vec<u64> {
    let max = MONTHLY_ACTIVITY.iter().map(|m| series.value(m)).max().unwrap_or(0);
    MONTHLY_ACTIVITY.iter().map(|m| format::percent(series.value(m), max)).collect()
}

/// Headline figures derived from the live stores.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub assets: usize,
    pub overdue: usize,
    pub due_soon: usize,
    /// Maintenance entries not yet completed.
    pub open_maintenance: usize,
    pub completed_cost: f64,
}

impl DashboardStats {
    #[must_use]
    pub fn of(equipment: &Store<Equipment>, maintenance: &Store<MaintenanceRecord>) -> Self {
        Self {
            assets: equipment.len(),
            overdue: equipment.count_matching(&EquipmentStatus::Overdue),
            due_soon: equipment.count_matching(&EquipmentStatus::Due),
            open_maintenance: maintenance.count_where(|m| m.status != MaintenanceStatus::Completed),
            completed_cost: MaintenanceStats::of(maintenance).total_completed_cost,
        }
    }
}

fn urgency(status: EquipmentStatus) -> u8 {
    match status {
        EquipmentStatus::Overdue => 0,
        EquipmentStatus::Due => 1,
        EquipmentStatus::Good => 2,
    }
}

/// Up to `limit` assets, overdue first, then due soon, then the rest. Store
/// order is kept within each status.
#[must_use]
pub fn upcoming(equipment: &Store<Equipment>, limit: usize) -> Vec<Record<Equipment>> {
    let mut list: Vec<_> = equipment.iter().cloned().collect();
    list.sort_by_key(|r| urgency(r.fields.status));
    list.truncate(limit);
    list
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ws = expect_context::<Workspace>();
    let shell = expect_context::<RwSignal<Shell>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let series = RwSignal::new(Series::default());

    let stats = Memo::new(move |_| ws.equipment.with(|e| ws.maintenance.with(|m| DashboardStats::of(e, m))));
    let attention = Memo::new(move |_| ws.equipment.with(|e| upcoming(e, UPCOMING_LIMIT)));

    let go = move |screen: AppScreen| {
        if shell.try_update(|s| s.navigate(screen)).unwrap_or(false) {
            ui.update(UiState::on_navigate);
        }
    };

    view! {
        <section class="page">
            <header class="page__header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page__subtitle">"Welcome back! Here's what's happening with your equipment."</p>
                </div>
                <div class="quick-actions">
                    <button class="btn btn--primary" on:click=move |_| go(AppScreen::Equipment)>
                        "+ Add Equipment"
                    </button>
                    <button class="btn" on:click=move |_| go(AppScreen::Maintenance)>
                        "Schedule"
                    </button>
                    <button class="btn" on:click=move |_| go(AppScreen::Kanban)>
                        "Task Board"
                    </button>
                </div>
            </header>

            <div class="stat-grid">
                <StatCard title="Total Assets" value=Signal::derive(move || stats.get().assets.to_string()) tone="info"/>
                <StatCard
                    title="Open Maintenance"
                    value=Signal::derive(move || stats.get().open_maintenance.to_string())
                    note="Scheduled or in progress"
                    tone="success"
                />
                <StatCard
                    title="Overdue"
                    value=Signal::derive(move || stats.get().overdue.to_string())
                    note="Needs attention"
                    tone="danger"
                />
                <StatCard
                    title="Maintenance Cost"
                    value=Signal::derive(move || format::money(stats.get().completed_cost))
                    note="Completed work"
                    tone="accent"
                />
            </div>

            <div class="dashboard__grid">
                <div class="panel">
                    <div class="panel__header">
                        <div>
                            <h2>"Maintenance Overview"</h2>
                            <p class="panel__subtitle">"Monthly maintenance frequency and costs"</p>
                        </div>
                        <div class="segmented">
                            <button
                                class="segmented__option"
                                class:segmented__option--active=move || series.get() == Series::Tasks
                                on:click=move |_| series.set(Series::Tasks)
                            >
                                "Tasks"
                            </button>
                            <button
                                class="segmented__option"
                                class:segmented__option--active=move || series.get() == Series::Cost
                                on:click=move |_| series.set(Series::Cost)
                            >
                                "Cost"
                            </button>
                        </div>
                    </div>
                    <table class="bar-table">
                        <tbody>
                            {move || {
                                let s = series.get();
                                MONTHLY_ACTIVITY
                                    .iter()
                                    .zip(bar_widths(s))
                                    .map(|(m, width)| {
                                        view! {
                                            <tr>
                                                <th>{m.month}</th>
                                                <td class="bar-table__bar">
                                                    <div class="bar" style=format!("width: {width}%")></div>
                                                </td>
                                                <td class="bar-table__value">{s.display(s.value(m))}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>

                <div class="panel">
                    <h2>"Upcoming Maintenance"</h2>
                    <Show
                        when=move || attention.with(|a| !a.is_empty())
                        fallback=|| view! { <EmptyState title="No equipment tracked"/> }
                    >
                        <ul class="panel__list">
                            {move || {
                                attention
                                    .get()
                                    .into_iter()
                                    .map(|r| {
                                        let status = r.fields.status;
                                        view! {
                                            <li class=format!("panel__item panel__item--{}", status.slug())>
                                                <div>
                                                    <div class="panel__primary">{r.fields.name}</div>
                                                    <div class="panel__meta">"Due " {r.fields.next_due}</div>
                                                </div>
                                                <span class=format!("badge badge--{}", status.slug())>{status.label()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>
            </div>
        </section>
    }
}
