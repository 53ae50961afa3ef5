// crates/mb_algo/src/lib.rs
#![forbid(unsafe_code)]

//! mb_algo — the allocation/reconciliation algorithms, free of I/O.
//!
//! Stage order (each stage takes the working vector by ownership):
//! bounds → allocate → reconcile → remainder. Quantities are integer
//! sub-units (`Tenths`), money is integer milli-units (`Millis`); floats
//! appear only where the tariff schedule itself is fractional.

use chrono::NaiveDate;

use mb_core::units::{Millis, Tenths};

pub mod allocate;
pub mod bounds;
pub mod reconcile;
pub mod remainder;
pub mod tariff;

// Tight, explicit re-exports (avoid wildcard export drift).
pub use allocate::fill_to_target;
pub use bounds::build_slots;
pub use reconcile::reconcile_values;
pub use remainder::settle_with_fee;
pub use tariff::{tier_prices_from_first, TariffSchedule};

/// One calendar month of the period under distribution.
///
/// Created by the bounds engine, mutated by the allocator and reconciler,
/// read-only once the remainder distributor has produced display values.
/// Invariant: `min ≤ units ≤ max`; on a fixed month, `min == max == units`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthSlot {
    /// 0-based position in the period.
    pub index: usize,
    /// First day of the calendar month.
    pub starts_on: NaiveDate,
    /// Lower quantity bound (sub-units).
    pub min: Tenths,
    /// Upper quantity bound (sub-units).
    pub max: Tenths,
    /// Quantity is pinned: last-month rule or zero-tail override.
    pub fixed: bool,
    /// Current quantity (sub-units).
    pub units: Tenths,
    /// Current tiered value excluding the monthly fee (milli-units).
    pub value: Millis,
}

impl MonthSlot {
    /// Remaining capacity above the current quantity.
    #[inline]
    pub fn headroom(&self) -> i64 {
        (self.max.0 - self.units.0).max(0)
    }

    /// Bounds check; fixed months must sit exactly on their pin.
    #[inline]
    pub fn in_bounds(&self) -> bool {
        if self.fixed {
            self.min == self.units && self.max == self.units
        } else {
            self.min <= self.units && self.units <= self.max
        }
    }
}
