use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// MonthCursor
// =============================================================

#[test]
fn default_cursor_is_reference_month() {
    let cursor = MonthCursor::default();
    assert_eq!(cursor.first(), ymd(2025, 12, 1));
    assert_eq!(cursor.title(), "December 2025");
}

#[test]
fn next_and_prev_cross_year_boundary() {
    let dec = MonthCursor::containing(ymd(2025, 12, 27));
    assert_eq!(dec.next().first(), ymd(2026, 1, 1));
    assert_eq!(dec.next().title(), "January 2026");
    assert_eq!(dec.next().prev(), dec);
    assert_eq!(MonthCursor::containing(ymd(2026, 1, 9)).prev().first(), ymd(2025, 12, 1));
}

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(MonthCursor::containing(ymd(2025, 12, 1)).days_in_month(), 31);
    assert_eq!(MonthCursor::containing(ymd(2024, 2, 1)).days_in_month(), 29);
    assert_eq!(MonthCursor::containing(ymd(2025, 2, 1)).days_in_month(), 28);
    assert_eq!(MonthCursor::containing(ymd(2025, 11, 1)).days_in_month(), 30);
}

#[test]
fn leading_blanks_follow_weekday_of_first() {
    // 2025-12-01 is a Monday, 2026-02-01 a Sunday.
    assert_eq!(MonthCursor::containing(ymd(2025, 12, 1)).leading_blanks(), 1);
    assert_eq!(MonthCursor::containing(ymd(2026, 2, 1)).leading_blanks(), 0);
}

#[test]
fn cells_are_blanks_then_days() {
    let cells = MonthCursor::containing(ymd(2025, 12, 1)).cells();
    assert_eq!(cells.len(), 1 + 31);
    assert_eq!(cells[0], None);
    assert_eq!(cells[1], Some(ymd(2025, 12, 1)));
    assert_eq!(cells.last().copied().flatten(), Some(ymd(2025, 12, 31)));
}

// =============================================================
// Events
// =============================================================

#[test]
fn events_match_by_full_date() {
    let all = events();
    assert_eq!(all.len(), 8);
    let on_28 = events_on(&all, ymd(2025, 12, 28));
    assert_eq!(on_28.len(), 1);
    assert_eq!(on_28[0].status, EventStatus::Urgent);
    // Same day number in another month does not match.
    assert!(events_on(&all, ymd(2026, 1, 28)).is_empty());
    assert_eq!(events_on(&all, ymd(2026, 1, 5)).len(), 1);
}

#[test]
fn today_is_reference_date() {
    assert_eq!(today(), ymd(2025, 12, 27));
}
