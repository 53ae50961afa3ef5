//! Bounds engine: per-month plausibility ranges and pinned months.
//!
//! Rules, with `d2` = current-month consumption at period start and
//! `c3` = prior-month consumption at period end:
//! - first month:    min = max(d2, 0.5·c3), max = max(min, 1.7·c3)
//! - last month (when not also first): pinned at c3
//! - interior:       min = 0.5·c3,          max = max(min, 1.7·c3)
//! - bounds floored at zero, then quantized to sub-units
//! - zero-tail override: the `zero_tail` months before the final month are
//!   pinned at zero
//! - minimum-sum correction: when Σmin over all months exceeds the target,
//!   non-fixed minimums are scaled down by floor division (never above their
//!   own max) so a feasible allocation remains.
//!
//! Every slot leaves this stage sitting on its minimum.

use chrono::NaiveDate;

use mb_core::units::Tenths;

use crate::MonthSlot;

/// Lower plausibility factor on the prior-month consumption.
pub const BOUNDS_MIN_FACTOR: f64 = 0.5;
/// Upper plausibility factor on the prior-month consumption.
pub const BOUNDS_MAX_FACTOR: f64 = 1.7;

/// Build the working vector for the period: one slot per month, bounds
/// applied, zero-tail pinned, minimums corrected against `target`.
pub fn build_slots(
    months: &[NaiveDate],
    start_current_month: f64,
    end_prior_month: f64,
    zero_tail: u32,
    target: Tenths,
) -> Vec<MonthSlot> {
    let m = months.len();
    let d2 = start_current_month;
    let c3 = end_prior_month;

    let mut slots: Vec<MonthSlot> = months
        .iter()
        .enumerate()
        .map(|(index, &starts_on)| {
            let (lo, hi, fixed) = if index == 0 {
                // First-month rule wins for a single-month period: not pinned.
                let lo = d2.max(c3 * BOUNDS_MIN_FACTOR);
                (lo, lo.max(c3 * BOUNDS_MAX_FACTOR), false)
            } else if index == m - 1 {
                (c3, c3, true)
            } else {
                let lo = c3 * BOUNDS_MIN_FACTOR;
                (lo, lo.max(c3 * BOUNDS_MAX_FACTOR), false)
            };
            let lo = lo.max(0.0);
            let hi = hi.max(lo);
            MonthSlot {
                index,
                starts_on,
                min: Tenths::from_qty(lo),
                max: Tenths::from_qty(hi),
                fixed,
                units: Tenths::ZERO,
                value: Default::default(),
            }
        })
        .collect();

    // Zero-tail override: pin the tail months before the final month at zero.
    let zero_tail = (zero_tail as usize).min(m.saturating_sub(1));
    if zero_tail > 0 {
        for slot in &mut slots[m - zero_tail - 1..m - 1] {
            slot.min = Tenths::ZERO;
            slot.max = Tenths::ZERO;
            slot.fixed = true;
        }
    }

    // Minimum-sum correction: scale non-fixed minimums down so Σmin ≤ target
    // where possible. Fixed pins are untouched.
    let sum_min: i64 = slots.iter().map(|s| s.min.0).sum();
    if sum_min > target.0 && sum_min > 0 {
        for slot in slots.iter_mut().filter(|s| !s.fixed) {
            // Widen before multiplying: min × target can exceed i64 for large
            // coercible readings. The quotient is ≤ min, so it fits back.
            let scaled = (slot.min.0 as i128 * target.0.max(0) as i128 / sum_min as i128) as i64;
            slot.min = Tenths(scaled.min(slot.max.0));
        }
    }

    for slot in &mut slots {
        slot.units = slot.min;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(n: usize) -> Vec<NaiveDate> {
        (0..n)
            .map(|i| NaiveDate::from_ymd_opt(2024, 1 + i as u32, 1).unwrap())
            .collect()
    }

    #[test]
    fn single_month_uses_the_first_month_rule() {
        // d2=50, c3=60 → [max(50,30), max(min,102)] = [50, 102], not pinned.
        let slots = build_slots(&months(1), 50.0, 60.0, 0, Tenths(550));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].min, Tenths(500));
        assert_eq!(slots[0].max, Tenths(1020));
        assert!(!slots[0].fixed);
        assert_eq!(slots[0].units, Tenths(500));
    }

    #[test]
    fn last_month_is_pinned_at_prior_month_consumption() {
        let slots = build_slots(&months(3), 40.0, 60.0, 0, Tenths(2000));
        let last = &slots[2];
        assert!(last.fixed);
        assert_eq!(last.min, Tenths(600));
        assert_eq!(last.max, Tenths(600));
        assert_eq!(last.units, Tenths(600));
    }

    #[test]
    fn interior_months_get_the_factor_range() {
        let slots = build_slots(&months(4), 40.0, 60.0, 0, Tenths(3000));
        for slot in &slots[1..3] {
            assert_eq!(slot.min, Tenths(300)); // 0.5 × 60
            assert_eq!(slot.max, Tenths(1020)); // 1.7 × 60
            assert!(!slot.fixed);
        }
    }

    #[test]
    fn zero_tail_pins_months_before_the_final_one() {
        let slots = build_slots(&months(5), 40.0, 60.0, 2, Tenths(2000));
        // indices 2 and 3 pinned at zero; index 4 still pinned at c3.
        for slot in &slots[2..4] {
            assert!(slot.fixed);
            assert_eq!(slot.units, Tenths::ZERO);
            assert_eq!(slot.max, Tenths::ZERO);
        }
        assert_eq!(slots[4].units, Tenths(600));
        assert!(!slots[0].fixed);
        assert!(!slots[1].fixed);
    }

    #[test]
    fn zero_tail_is_clamped_to_the_period() {
        let slots = build_slots(&months(3), 40.0, 60.0, 99, Tenths(2000));
        // Clamp to m-1 = 2: both leading months pinned at zero, last at c3.
        assert!(slots[0].fixed && slots[0].units == Tenths::ZERO);
        assert!(slots[1].fixed && slots[1].units == Tenths::ZERO);
        assert_eq!(slots[2].units, Tenths(600));
    }

    #[test]
    fn minimums_scale_down_when_they_exceed_the_target() {
        // Three months, c3=60: mins are [30, 30, 60(fixed)] = 120 units;
        // target 80 units → non-fixed mins scale by 800/1200.
        let slots = build_slots(&months(3), 0.0, 60.0, 0, Tenths(800));
        assert_eq!(slots[0].min, Tenths(300 * 800 / 1200));
        assert_eq!(slots[1].min, Tenths(300 * 800 / 1200));
        assert_eq!(slots[2].min, Tenths(600)); // fixed pin untouched
        for slot in &slots {
            assert!(slot.in_bounds());
        }
    }

    #[test]
    fn min_sum_correction_survives_extreme_readings() {
        // Coerced free-text readings can be huge; the correction must scale
        // without overflowing the intermediate product.
        let slots = build_slots(&months(3), 0.0, 2.0e15, 0, Tenths::from_qty(1.0e15));
        let target = Tenths::from_qty(1.0e15);
        for slot in slots.iter().filter(|s| !s.fixed) {
            assert!(slot.min.0 >= 0);
            assert!(slot.min.0 <= target.0);
            assert!(slot.in_bounds());
        }
    }

    #[test]
    fn negative_bounds_floor_at_zero() {
        let slots = build_slots(&months(2), 0.0, 0.0, 0, Tenths(0));
        for slot in &slots {
            assert!(slot.min.0 >= 0);
            assert!(slot.max.0 >= slot.min.0);
        }
    }
}
