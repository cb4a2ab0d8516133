use super::*;
use crate::pages::test_helpers::{render, seeded};
use records::Store;

fn only_good() -> Store<Equipment> {
    Store::seeded(records::equipment::seed().into_iter().filter(|e| e.status == EquipmentStatus::Good))
}

// =============================================================
// Empty state
// =============================================================

#[test]
fn empty_store_renders_empty_state_instead_of_table() {
    let html = render(|ws| ws.equipment.set(Store::new()), || view! { <EquipmentPage/> });
    assert!(html.contains("No equipment found"));
    assert!(!html.contains("data-table"));
}

#[test]
fn filter_matching_nothing_renders_empty_state() {
    let html = render(seeded, || {
        let store = only_good();
        let rows = Memo::new(move |_| {
            store.visible(&Filter::Only(EquipmentStatus::Overdue)).cloned().collect::<Vec<_>>()
        });
        let form = RwSignal::new(EntryForm::<Equipment>::new());
        let gate = RwSignal::new(DeleteGate::default());
        view! { <EquipmentTable rows=rows form=form gate=gate/> }
    });
    assert!(html.contains("No equipment found"));
    assert!(!html.contains("data-table"));
}

#[test]
fn seeded_store_renders_table_rows() {
    let html = render(seeded, || view! { <EquipmentPage/> });
    assert!(html.contains("data-table"));
    assert!(html.contains("Forklift #A-203"));
    assert!(!html.contains("No equipment found"));
}

// =============================================================
// Category select
// =============================================================

#[test]
fn blank_category_selects_placeholder_option() {
    let html = render(seeded, || {
        let form = RwSignal::new(EntryForm::<Equipment>::new());
        form.update(EntryForm::open_create);
        view! { <EquipmentModal form=form on_submit=Callback::new(|()| {})/> }
    });
    let options: Vec<&str> = html.split("<option").skip(1).collect();
    let placeholder = options.iter().find(|o| o.contains("Select category")).expect("placeholder option");
    assert!(placeholder.contains("value=\"\""));
    assert!(placeholder.contains("selected"));
    let first_real = options.iter().find(|o| o.contains("Material Handling")).expect("category option");
    assert!(!first_real.contains("selected"));
}
