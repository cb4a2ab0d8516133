use super::*;
use crate::pages::test_helpers::{render, seeded};
use records::Store;

fn lane_html(tasks: Vec<Record<Task>>) -> String {
    render(seeded, move || {
        let form = RwSignal::new(EntryForm::<Task>::new());
        let gate = RwSignal::new(DeleteGate::default());
        let on_move = Callback::new(|_: (RecordId, Column)| {});
        view! { <KanbanLane column=Column::Review tasks=tasks form=form gate=gate on_move=on_move/> }
    })
}

// =============================================================
// Empty lanes
// =============================================================

#[test]
fn empty_lane_shows_placeholder_and_no_cards() {
    let html = lane_html(Vec::new());
    assert!(html.contains("No tasks"));
    assert!(!html.contains("task-card"));
}

#[test]
fn lane_with_tasks_hides_placeholder() {
    let store = Store::seeded(records::task::seed());
    let tasks = store.records().iter().take(2).cloned().collect();
    let html = lane_html(tasks);
    assert!(html.contains("task-card"));
    assert!(!html.contains("No tasks"));
}

#[test]
fn filter_matching_nothing_leaves_every_lane_empty() {
    let store = Store::seeded(records::task::seed().into_iter().filter(|t| t.priority != Priority::Urgent));
    let lanes = board::partition(store.visible(&Filter::Only(Priority::Urgent)));
    assert_eq!(lanes.len(), Column::ALL.len());
    for lane in lanes {
        let html = lane_html(lane.tasks.into_iter().cloned().collect());
        assert!(html.contains("No tasks"));
    }
}

#[test]
fn empty_store_renders_five_empty_lanes() {
    let html = render(|ws| ws.tasks.set(Store::new()), || view! { <KanbanPage/> });
    assert_eq!(html.matches("No tasks").count(), Column::ALL.len());
    assert!(!html.contains("task-card"));
}
