//! Tariff tier resolution and the tiered pricing function.
//!
//! Contract:
//! - Five known first-tier prices map to exact (second, third) pairs,
//!   compared at 2-decimal precision; any other price falls back to
//!   second = first + 0.75, third = second + 0.50. Infallible.
//! - Pricing is progressive over bands 0–30 / 30–60 / 60+ units at
//!   (tier rate + per-unit surcharge): continuous and monotone
//!   non-decreasing, with slope breaks at 30 and 60.

use mb_core::units::{Millis, Tenths};

/// Units priced at the first tier.
pub const TIER1_CAP: f64 = 30.0;
/// Units priced at the first two tiers combined.
pub const TIER2_CAP: f64 = 60.0;

/// Published (first-tier ¢, second-tier, third-tier) rows; keys in centi-units
/// so the 2-decimal comparison is exact.
const KNOWN_TIERS: [(i64, f64, f64); 5] = [
    (235, 3.10, 3.60),
    (250, 3.25, 3.75),
    (260, 3.35, 4.00),
    (300, 4.00, 5.00),
    (400, 5.00, 7.00),
];

/// Resolve (second-tier, third-tier) prices from the first-tier price.
pub fn tier_prices_from_first(tier1: f64) -> (f64, f64) {
    let cents = (tier1 * 100.0).round() as i64;
    for &(known, p2, p3) in KNOWN_TIERS.iter() {
        if cents == known {
            return (p2, p3);
        }
    }
    let p2 = tier1 + 0.75;
    (p2, p2 + 0.50)
}

/// Fully resolved three-tier schedule plus the per-unit surcharge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TariffSchedule {
    pub tier1: f64,
    pub tier2: f64,
    pub tier3: f64,
    pub surcharge: f64,
}

impl TariffSchedule {
    /// Resolve from the first-tier price; explicit overrides `> 0` win over
    /// the published table and the fallback formula.
    pub fn resolve(tier1: f64, tier2_override: f64, tier3_override: f64, surcharge: f64) -> Self {
        let (p2, p3) = tier_prices_from_first(tier1);
        Self {
            tier1,
            tier2: if tier2_override > 0.0 { tier2_override } else { p2 },
            tier3: if tier3_override > 0.0 { tier3_override } else { p3 },
            surcharge,
        }
    }

    /// Tiered value of a quantity, excluding the monthly fee.
    pub fn value_of_qty(&self, qty: f64) -> f64 {
        let r1 = self.tier1 + self.surcharge;
        let r2 = self.tier2 + self.surcharge;
        let r3 = self.tier3 + self.surcharge;
        if qty <= TIER1_CAP {
            qty * r1
        } else if qty <= TIER2_CAP {
            TIER1_CAP * r1 + (qty - TIER1_CAP) * r2
        } else {
            TIER1_CAP * r1 + (TIER2_CAP - TIER1_CAP) * r2 + (qty - TIER2_CAP) * r3
        }
    }

    /// Sub-unit entry point used by the allocation loops: quantize the tiered
    /// value to milli-units so per-month values sum exactly.
    #[inline]
    pub fn value_of(&self, units: Tenths) -> Millis {
        Millis::from_amount(self.value_of_qty(units.to_qty()))
    }
}
