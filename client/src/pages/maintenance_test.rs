use super::*;
use crate::pages::test_helpers::{render, seeded};
use records::Store;
use records::maintenance::MaintenanceStatus;

#[test]
fn empty_history_renders_empty_state_instead_of_timeline() {
    let html = render(|ws| ws.maintenance.set(Store::new()), || view! { <MaintenancePage/> });
    assert!(html.contains("No maintenance records"));
    assert!(!html.contains("class=\"timeline\""));
}

#[test]
fn seeded_history_renders_timeline() {
    let html = render(seeded, || view! { <MaintenancePage/> });
    assert!(html.contains("class=\"timeline\""));
    assert!(html.contains("$1,735"));
    assert!(!html.contains("No maintenance records"));
}

#[test]
fn decimal_cost_survives_to_the_timeline() {
    let html = render(
        |ws| {
            ws.maintenance.set(Store::seeded([MaintenanceRecord {
                equipment_name: "Pump-9".to_owned(),
                status: MaintenanceStatus::Completed,
                cost: 245.5,
                ..MaintenanceRecord::default()
            }]));
        },
        || view! { <MaintenancePage/> },
    );
    assert!(html.contains("$245.50"));
}
