use super::*;

#[test]
fn thousands_k_rounds_half_up() {
    assert_eq!(thousands_k(145_000), "$145K");
    assert_eq!(thousands_k(89_499), "$89K");
    assert_eq!(thousands_k(89_500), "$90K");
    assert_eq!(thousands_k(0), "$0K");
}

#[test]
fn grouped_inserts_separators() {
    assert_eq!(grouped(0), "0");
    assert_eq!(grouped(999), "999");
    assert_eq!(grouped(1000), "1,000");
    assert_eq!(grouped(12_400), "12,400");
    assert_eq!(grouped(1_954_000), "1,954,000");
}

#[test]
fn currency_prefixes_dollar() {
    assert_eq!(currency(4280), "$4,280");
}

#[test]
fn percent_rounds_and_handles_zero_total() {
    assert_eq!(percent(1, 3), 33);
    assert_eq!(percent(2, 3), 67);
    assert_eq!(percent(1, 8), 13);
    assert_eq!(percent(5, 0), 0);
    assert_eq!(percent(680_000, 1_770_000), 38);
}

#[test]
fn money_shows_cents_only_when_present() {
    assert_eq!(money(1735.0), "$1,735");
    assert_eq!(money(245.5), "$245.50");
    assert_eq!(money(433.75), "$433.75");
    assert_eq!(money(0.0), "$0");
    assert_eq!(money(-12.5), "-$12.50");
    assert_eq!(money(f64::NAN), "$0");
}

#[test]
fn whole_dollars_rounds_and_clamps() {
    assert_eq!(whole_dollars(1_954_000.0), 1_954_000);
    assert_eq!(whole_dollars(89_499.6), 89_500);
    assert_eq!(whole_dollars(-4.0), 0);
    assert_eq!(whole_dollars(f64::INFINITY), 0);
}
