//! Remainder distributor: force the displayed values to sum exactly to the
//! period target.
//!
//! Adds the flat monthly fee to every reconciled value, then walks months in
//! reverse chronological order (wrapping), moving one milli-unit per step
//! until the signed difference to the target reaches zero. The correction
//! bias therefore lands on the most recent months first. The walk takes
//! exactly `|difference|` steps.

use mb_core::units::Millis;

use crate::MonthSlot;

/// Per-month display values including the monthly fee; Σ equals
/// `target_total` exactly for any non-empty period.
pub fn settle_with_fee(slots: &[MonthSlot], monthly_fee: Millis, target_total: Millis) -> Vec<Millis> {
    let m = slots.len();
    let mut display: Vec<i64> = slots.iter().map(|s| s.value.0 + monthly_fee.0).collect();
    if m == 0 {
        return Vec::new();
    }

    let mut diff = target_total.0 - display.iter().sum::<i64>();
    let mut i = m - 1;
    while diff != 0 {
        if diff > 0 {
            display[i] += 1;
            diff -= 1;
        } else {
            display[i] -= 1;
            diff += 1;
        }
        i = if i == 0 { m - 1 } else { i - 1 };
    }

    display.into_iter().map(Millis).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mb_core::units::Tenths;

    fn slot(index: usize, value: i64) -> MonthSlot {
        MonthSlot {
            index,
            starts_on: NaiveDate::from_ymd_opt(2024, 1 + index as u32, 1).unwrap(),
            min: Tenths::ZERO,
            max: Tenths(1000),
            fixed: false,
            units: Tenths(100),
            value: Millis(value),
        }
    }

    #[test]
    fn sums_exactly_to_the_target() {
        let slots = vec![slot(0, 10_000), slot(1, 10_000), slot(2, 10_000)];
        let fee = Millis(6_200);
        let target = Millis(48_607);
        let display = settle_with_fee(&slots, fee, target);
        assert_eq!(display.iter().map(|v| v.0).sum::<i64>(), target.0);
    }

    #[test]
    fn correction_lands_on_recent_months_first() {
        let slots = vec![slot(0, 10_000), slot(1, 10_000), slot(2, 10_000)];
        // Base display: 3 × 10_000, no fee. Target +2 milli-units.
        let display = settle_with_fee(&slots, Millis::ZERO, Millis(30_002));
        assert_eq!(display, vec![Millis(10_000), Millis(10_001), Millis(10_001)]);
    }

    #[test]
    fn negative_difference_walks_downward() {
        let slots = vec![slot(0, 10_000), slot(1, 10_000)];
        let display = settle_with_fee(&slots, Millis::ZERO, Millis(19_997));
        assert_eq!(display.iter().map(|v| v.0).sum::<i64>(), 19_997);
        // Three decrements: last, first, last again.
        assert_eq!(display, vec![Millis(9_999), Millis(9_998)]);
    }

    #[test]
    fn exact_base_needs_no_correction() {
        let slots = vec![slot(0, 5_000), slot(1, 7_000)];
        let display = settle_with_fee(&slots, Millis(1_000), Millis(14_000));
        assert_eq!(display, vec![Millis(6_000), Millis(8_000)]);
    }

    #[test]
    fn empty_period_yields_no_rows() {
        assert!(settle_with_fee(&[], Millis(6_200), Millis(100)).is_empty());
    }

    #[test]
    fn fee_is_added_to_every_month() {
        let slots = vec![slot(0, 1_000), slot(1, 2_000), slot(2, 3_000)];
        let fee = Millis(500);
        let base_sum = 1_000 + 2_000 + 3_000 + 3 * 500;
        let display = settle_with_fee(&slots, fee, Millis(base_sum));
        assert_eq!(display, vec![Millis(1_500), Millis(2_500), Millis(3_500)]);
    }
}
