use super::*;

// =============================================================
// parse_amount
// =============================================================

#[test]
fn amount_keeps_decimals() {
    assert!((parse_amount("245.50") - 245.5).abs() < f64::EPSILON);
    assert!((parse_amount(" 1200 ") - 1200.0).abs() < f64::EPSILON);
}

#[test]
fn amount_junk_and_non_finite_are_zero() {
    assert!(parse_amount("").abs() < f64::EPSILON);
    assert!(parse_amount("abc").abs() < f64::EPSILON);
    assert!(parse_amount("inf").abs() < f64::EPSILON);
    assert!(parse_amount("NaN").abs() < f64::EPSILON);
}

// =============================================================
// parse_score
// =============================================================

#[test]
fn score_above_range_clamps_to_hundred() {
    assert_eq!(parse_score("300"), 100);
    assert_eq!(parse_score("150"), 100);
    assert_eq!(parse_score("100"), 100);
}

#[test]
fn score_below_range_clamps_to_zero() {
    assert_eq!(parse_score("-5"), 0);
    assert_eq!(parse_score("junk"), 0);
}

#[test]
fn score_rounds_decimals() {
    assert_eq!(parse_score("85"), 85);
    assert_eq!(parse_score("84.6"), 85);
}

#[test]
fn whole_numbers_still_parse_for_counts() {
    assert_eq!(parse_number::<u32>("12"), 12);
    assert_eq!(parse_number::<u32>("x"), 0);
}
