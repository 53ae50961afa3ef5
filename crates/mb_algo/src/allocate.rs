//! Quantity allocator: place the target total across months within bounds.
//!
//! Starting point is every month's corrected minimum. The remaining sub-units
//! are spread by capacity-proportional weights modulated by a smooth
//! oscillation (`1 + 0.12·cos(i·π/3)`), which breaks symmetry across
//! identical-capacity months while staying deterministic. Flooring leftovers
//! go round-robin over non-fixed, non-saturated months under an explicit step
//! bound.

use core::f64::consts::PI;

use mb_core::units::Tenths;

use crate::MonthSlot;

/// Weight oscillation amplitude.
const WEIGHT_SWING: f64 = 0.12;

/// Distribute `target` across the slots. Slots arrive sitting on their
/// minimums (bounds stage) and leave with `Σ units == target` whenever the
/// bounds admit it; an infeasible target leaves the nearest reachable sum.
pub fn fill_to_target(mut slots: Vec<MonthSlot>, target: Tenths, max_fill_steps: u32) -> Vec<MonthSlot> {
    let m = slots.len();
    if m == 0 {
        return slots;
    }

    let placed: i64 = slots.iter().map(|s| s.units.0).sum();
    let left = target.0 - placed;
    if left <= 0 {
        return slots;
    }

    // Capacity-proportional bulk pass (floored shares, capped at max).
    let weights: Vec<f64> = slots
        .iter()
        .map(|s| {
            let w = s.headroom() as f64 * (1.0 + WEIGHT_SWING * (s.index as f64 * PI / 3.0).cos());
            w.max(0.0)
        })
        .collect();
    let total_weight: f64 = weights.iter().sum();
    if total_weight > 0.0 {
        for (slot, w) in slots.iter_mut().zip(&weights) {
            let share = (left as f64 * (w / total_weight)).floor() as i64;
            slot.units = Tenths((slot.units.0 + share).min(slot.max.0));
        }
    }

    // Round-robin the flooring leftover one sub-unit at a time. The step
    // bound keeps the walk finite when no month can accept more.
    let mut remain = target.0 - slots.iter().map(|s| s.units.0).sum::<i64>();
    let mut step = 0u32;
    while remain > 0 && step < max_fill_steps {
        let slot = &mut slots[step as usize % m];
        if !slot.fixed && slot.units < slot.max {
            slot.units += Tenths(1);
            remain -= 1;
        }
        step += 1;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::build_slots;
    use chrono::NaiveDate;

    const FILL_STEPS: u32 = 100_000;

    fn months(n: usize) -> Vec<NaiveDate> {
        (0..n)
            .map(|i| NaiveDate::from_ymd_opt(2024, 1 + i as u32, 1).unwrap())
            .collect()
    }

    #[test]
    fn single_month_hits_the_target_exactly() {
        // Bounds [50, 102]; target 55 sits inside, so the slot lands on it.
        let slots = build_slots(&months(1), 50.0, 60.0, 0, Tenths(550));
        let slots = fill_to_target(slots, Tenths(550), FILL_STEPS);
        assert_eq!(slots[0].units, Tenths(550));
        assert!(slots[0].in_bounds());
    }

    #[test]
    fn multi_month_sum_matches_the_target() {
        let target = Tenths(1800);
        let slots = build_slots(&months(4), 45.0, 50.0, 0, target);
        let slots = fill_to_target(slots, target, FILL_STEPS);
        let sum: i64 = slots.iter().map(|s| s.units.0).sum();
        assert_eq!(sum, target.0);
        for slot in &slots {
            assert!(slot.in_bounds(), "slot {} out of bounds", slot.index);
        }
    }

    #[test]
    fn fixed_months_never_move() {
        let target = Tenths(1500);
        let slots = build_slots(&months(5), 40.0, 50.0, 2, target);
        let slots = fill_to_target(slots, target, FILL_STEPS);
        assert_eq!(slots[2].units, Tenths::ZERO);
        assert_eq!(slots[3].units, Tenths::ZERO);
        assert_eq!(slots[4].units, Tenths(500)); // pinned at c3
    }

    #[test]
    fn saturated_bounds_stop_at_capacity() {
        // Target far above Σmax: every non-fixed slot saturates, loop exits
        // on the step bound rather than spinning.
        let slots = build_slots(&months(3), 10.0, 10.0, 0, Tenths(100_000));
        let slots = fill_to_target(slots, Tenths(100_000), 1_000);
        for slot in &slots {
            assert_eq!(slot.units, slot.max);
        }
    }

    #[test]
    fn target_below_minimums_leaves_the_minimums() {
        let slots = build_slots(&months(2), 50.0, 60.0, 0, Tenths(0));
        let before: Vec<_> = slots.iter().map(|s| s.units).collect();
        let slots = fill_to_target(slots, Tenths(0), FILL_STEPS);
        let after: Vec<_> = slots.iter().map(|s| s.units).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_period_is_a_no_op() {
        let slots = fill_to_target(Vec::new(), Tenths(100), FILL_STEPS);
        assert!(slots.is_empty());
    }
}
