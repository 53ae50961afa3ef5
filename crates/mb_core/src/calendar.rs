//! Calendar month sequence for a billing period.
//!
//! A period spans the first-of-month of its start date through the month that
//! *precedes* its end date's month, inclusive. The month count is clamped to
//! `1..=12` regardless of the literal date span; that clamp is billing policy,
//! not a guard against bad input.

use chrono::{Datelike, NaiveDate};

/// A period is never represented by more than twelve statements.
pub const MAX_PERIOD_MONTHS: i64 = 12;

/// Absolute month index (year × 12 + zero-based month); total ordering over month starts.
#[inline]
fn abs_month(d: NaiveDate) -> i64 {
    d.year() as i64 * 12 + d.month0() as i64
}

/// First day of the month holding the given absolute month index.
#[inline]
fn month_start(abs: i64) -> NaiveDate {
    let year = abs.div_euclid(12) as i32;
    let month = abs.rem_euclid(12) as u32 + 1;
    // Day 1 of any in-range (year, month) is representable.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

/// First day of the date's own month.
#[inline]
pub fn month_floor(d: NaiveDate) -> NaiveDate {
    month_start(abs_month(d))
}

/// Ordered month-start dates covered by the period, earliest first.
///
/// Runs from the start date's month to the month before the end date's month,
/// with the count clamped to `1..=MAX_PERIOD_MONTHS`.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let first = abs_month(start);
    let last_exclusive = abs_month(end); // end month itself is not billed
    let count = (last_exclusive - first).clamp(1, MAX_PERIOD_MONTHS);
    (0..count).map(|i| month_start(first + i)).collect()
}

/// Statement label for a month start: `MM/YYYY`.
pub fn month_label(d: NaiveDate) -> String {
    format!("{:02}/{}", d.month(), d.year())
}
