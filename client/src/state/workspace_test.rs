use super::*;

#[test]
fn seeds_match_sample_sizes() {
    let seeds = Seeds::default();
    assert_eq!(seeds.equipment.len(), 6);
    assert_eq!(seeds.categories.len(), 8);
    assert_eq!(seeds.tasks.len(), 8);
    assert_eq!(seeds.team.len(), 6);
    assert_eq!(seeds.maintenance.len(), 6);
}

#[test]
fn fresh_seeds_are_equal() {
    assert_eq!(Seeds::default(), Seeds::default());
}
