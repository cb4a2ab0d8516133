use super::*;

// =============================================================
// window
// =============================================================

#[test]
fn window_takes_most_recent_months() {
    let months: Vec<_> = window(&COST_SERIES, TimeRange::ThreeMonths).iter().map(|p| p.month).collect();
    assert_eq!(months, vec!["Oct", "Nov", "Dec"]);
    assert_eq!(window(&COST_SERIES, TimeRange::OneMonth)[0].month, "Dec");
}

#[test]
fn window_longer_than_series_is_whole_series() {
    assert_eq!(window(&COST_SERIES, TimeRange::Year).len(), 6);
    assert_eq!(window(&COST_SERIES, TimeRange::SixMonths).len(), 6);
}

#[test]
fn time_range_slugs_round_trip() {
    for range in TimeRange::ALL {
        assert_eq!(TimeRange::from_slug(range.slug()), Some(range));
    }
    assert_eq!(TimeRange::from_slug("2weeks"), None);
}

// =============================================================
// totals
// =============================================================

#[test]
fn total_cost_sums_every_component() {
    assert_eq!(total_cost(TimeRange::OneMonth), 9780);
    assert_eq!(total_cost(TimeRange::ThreeMonths), 28_480);
}

#[test]
fn avg_completion_is_rounded_mean() {
    assert_eq!(avg_completion(TimeRange::OneMonth), 94);
    assert_eq!(avg_completion(TimeRange::ThreeMonths), 92);
    assert_eq!(avg_completion(TimeRange::SixMonths), 90);
}

// =============================================================
// distribution / ranking
// =============================================================

#[test]
fn distribution_percentages_are_rounded() {
    let pct: Vec<_> = distribution().into_iter().map(|(_, p)| p).collect();
    assert_eq!(pct, vec![38, 24, 12, 10, 8, 7]);
}

#[test]
fn top_equipment_is_ordered_by_cost() {
    let names: Vec<_> = top_equipment().into_iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec!["CNC Machine #5", "Compressor C-19", "HVAC Unit #12", "Forklift #A-203", "Generator B-45"]
    );
}
