use super::*;
use crate::pages::test_helpers::{render, seeded};
use records::Store;

#[test]
fn empty_roster_renders_empty_state_instead_of_grid() {
    let html = render(|ws| ws.team.set(Store::new()), || view! { <TeamPage/> });
    assert!(html.contains("No team members found"));
    assert!(!html.contains("class=\"card-grid\""));
}

#[test]
fn seeded_roster_renders_member_cards() {
    let html = render(seeded, || view! { <TeamPage/> });
    assert!(html.contains("class=\"card-grid\""));
    assert!(!html.contains("No team members found"));
}
