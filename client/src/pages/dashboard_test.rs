use super::*;

fn seeded() -> (Store<Equipment>, Store<MaintenanceRecord>) {
    (Store::seeded(records::equipment::seed()), Store::seeded(records::maintenance::seed()))
}

// =============================================================
// DashboardStats
// =============================================================

#[test]
fn stats_from_seed_data() {
    let (equipment, maintenance) = seeded();
    let stats = DashboardStats::of(&equipment, &maintenance);
    assert_eq!(stats.assets, 6);
    assert_eq!(stats.overdue, 1);
    assert_eq!(stats.due_soon, 1);
    assert_eq!(stats.open_maintenance, 2);
    assert!((stats.completed_cost - 1735.0).abs() < f64::EPSILON);
}

#[test]
fn stats_follow_store_changes() {
    let (mut equipment, maintenance) = seeded();
    let id = equipment.records()[1].id.clone();
    equipment.modify(&id, |e| e.status = EquipmentStatus::Overdue).unwrap();
    assert_eq!(DashboardStats::of(&equipment, &maintenance).overdue, 2);
}

#[test]
fn stats_of_empty_stores_are_zero() {
    let stats = DashboardStats::of(&Store::new(), &Store::new());
    assert_eq!(stats, DashboardStats::default());
}

// =============================================================
// upcoming
// =============================================================

#[test]
fn upcoming_puts_overdue_then_due_first() {
    let (equipment, _) = seeded();
    let names: Vec<_> = upcoming(&equipment, 3).into_iter().map(|r| r.fields.name).collect();
    assert_eq!(names, vec!["Compressor C-19", "Forklift #A-203", "Generator B-45"]);
}

#[test]
fn upcoming_respects_limit() {
    let (equipment, _) = seeded();
    assert_eq!(upcoming(&equipment, 10).len(), 6);
    assert!(upcoming(&equipment, 0).is_empty());
}

// =============================================================
// monthly series
// =============================================================

#[test]
fn bars_scale_to_series_maximum() {
    let tasks = bar_widths(Series::Tasks);
    assert_eq!(tasks.len(), 12);
    assert_eq!(tasks[9], 100);
    assert_eq!(tasks[0], 55);

    let cost = bar_widths(Series::Cost);
    assert_eq!(cost[9], 100);
    assert_eq!(cost[2], 49);
}

#[test]
fn series_display_formats_cost_as_currency() {
    assert_eq!(Series::Cost.display(4280), "$4,280");
    assert_eq!(Series::Tasks.display(21), "21");
}
