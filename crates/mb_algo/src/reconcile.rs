//! Value reconciler: move sub-units between months so the tiered values sum
//! toward the fee-free target, without changing the total quantity.
//!
//! A transfer moves one sub-unit from a donor (held above its minimum) to a
//! recipient (held below its maximum) and is accepted only when it strictly
//! shrinks the absolute gap to the target. Two phases:
//! - exploratory: seeded-random pair picks, bounded step count;
//! - refinement: deterministic exhaustive scan over ordered pairs, one
//!   improving transfer per round, bounded step count.
//!
//! Neither phase guarantees an exact match; the residual gap is settled by
//! the remainder distributor.

use mb_core::rng::SearchRng;
use mb_core::units::{Millis, Tenths};

use crate::tariff::TariffSchedule;
use crate::MonthSlot;

/// Reconcile slot values toward `target_no_fee`. Recomputes every slot's
/// tiered value first, so callers need not pre-price the allocation.
pub fn reconcile_values(
    mut slots: Vec<MonthSlot>,
    tariff: &TariffSchedule,
    target_no_fee: Millis,
    rng: &mut SearchRng,
    explore_steps: u32,
    refine_steps: u32,
) -> Vec<MonthSlot> {
    for slot in &mut slots {
        slot.value = tariff.value_of(slot.units);
    }
    let m = slots.len();
    if m < 2 {
        return slots;
    }

    // Exploratory phase: random recipient/donor picks, accept improving moves.
    for _ in 0..explore_steps {
        if gap(&slots, target_no_fee) == 0 {
            break;
        }
        // m ≥ 2 here, so the picks always exist.
        if let Some((i, j)) = rng.pick_pair(m) {
            try_transfer(&mut slots, tariff, target_no_fee, i, j);
        }
    }

    // Refinement phase: exhaustive ordered-pair scan, first improving
    // transfer per round, until no round improves or the bound is hit.
    let mut steps = 0u32;
    while steps < refine_steps {
        if gap(&slots, target_no_fee) == 0 {
            break;
        }
        let mut improved = false;
        'scan: for i in 0..m {
            for j in 0..m {
                if try_transfer(&mut slots, tariff, target_no_fee, i, j) {
                    improved = true;
                    break 'scan;
                }
            }
        }
        if !improved {
            break;
        }
        steps += 1;
    }

    slots
}

/// Signed distance from the current fee-free sum to the target.
#[inline]
fn gap(slots: &[MonthSlot], target_no_fee: Millis) -> i64 {
    target_no_fee.0 - slots.iter().map(|s| s.value.0).sum::<i64>()
}

/// Move one sub-unit from `j` to `i` iff bounds admit it and the absolute gap
/// strictly shrinks. Returns whether the transfer was applied.
fn try_transfer(
    slots: &mut [MonthSlot],
    tariff: &TariffSchedule,
    target_no_fee: Millis,
    i: usize,
    j: usize,
) -> bool {
    if i == j {
        return false;
    }
    if slots[i].units.0 + 1 > slots[i].max.0 {
        return false;
    }
    if slots[j].units.0 - 1 < slots[j].min.0 {
        return false;
    }

    let before = slots[i].value.0 + slots[j].value.0;
    let value_i = tariff.value_of(Tenths(slots[i].units.0 + 1));
    let value_j = tariff.value_of(Tenths(slots[j].units.0 - 1));
    let delta = (value_i.0 + value_j.0) - before;

    let need = gap(slots, target_no_fee);
    if (need - delta).abs() >= need.abs() {
        return false;
    }

    slots[i].units += Tenths(1);
    slots[j].units -= Tenths(1);
    slots[i].value = value_i;
    slots[j].value = value_j;
    true
}
