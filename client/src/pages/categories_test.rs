use super::*;
use crate::pages::test_helpers::{render, seeded};
use records::Store;

#[test]
fn no_categories_renders_empty_state_instead_of_grid() {
    let html = render(|ws| ws.categories.set(Store::new()), || view! { <CategoriesPage/> });
    assert!(html.contains("No categories yet"));
    assert!(!html.contains("class=\"card-grid\""));
    assert!(html.contains("$0K"));
}

#[test]
fn fractional_total_cost_is_shown_with_cents() {
    let html = render(
        |ws| {
            ws.categories.set(Store::seeded([Category {
                name: "Pumps".to_owned(),
                total_cost: 1250.75,
                ..Category::default()
            }]));
        },
        || view! { <CategoriesPage/> },
    );
    assert!(html.contains("$1,250.75"));
    assert!(html.contains("$1K"));
}

#[test]
fn seeded_categories_render_cards() {
    let html = render(seeded, || view! { <CategoriesPage/> });
    assert!(html.contains("class=\"card-grid\""));
    assert!(html.contains("$1954K"));
}
