//! Number formatting for cards and tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Dollars in thousands, rounded half up: `145_000 -> "$145K"`.
#[must_use]
pub fn thousands_k(value: u64) -> String {
    format!("${}K", (value + 500) / 1000)
}

/// Decimal with comma thousands separators: `12400 -> "12,400"`.
#[must_use]
pub fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[must_use]
pub fn currency(value: u64) -> String {
    format!("${}", grouped(value))
}

/// Currency for user-entered amounts, showing cents only when present:
/// `1735.0 -> "$1,735"`, `245.5 -> "$245.50"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    if !cents.is_finite() {
        return currency(0);
    }
    let cents = cents as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match cents % 100 {
        0 => format!("{sign}{}", currency(cents / 100)),
        rem => format!("{sign}{}.{rem:02}", currency(cents / 100)),
    }
}

/// Nearest whole dollar; negative and non-finite amounts count as zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_dollars(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 { amount.round() as u64 } else { 0 }
}

/// `part / total` as a whole percentage, rounded half up. Zero when `total` is zero.
#[must_use]
pub fn percent(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (part * 200 + total) / (total * 2)
}
