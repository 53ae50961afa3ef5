//! Request-side entities shared across the engine.

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable billing-period request: boundary meter readings, balances,
/// top-ups, and tariff parameters.
///
/// All quantity/monetary fields are non-negative by the time this record is
/// built — the io layer coerces free text and floors negatives at zero.
/// Dates are calendar dates; month normalization happens in
/// [`crate::calendar`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeriodInputs {
    /// Date of the period-start meter reading.
    pub start_date: NaiveDate,
    /// Date of the period-end meter reading.
    pub end_date: NaiveDate,

    /// Cumulative consumption at period start.
    pub start_total: f64,
    /// Prior-month consumption shown at period start.
    pub start_prior_month: f64,
    /// Current-month consumption shown at period start (`d2`).
    pub start_current_month: f64,
    /// Credit balance at period start.
    pub start_balance: f64,

    /// Cumulative consumption at period end.
    pub end_total: f64,
    /// Prior-month consumption shown at period end (`c3`).
    pub end_prior_month: f64,
    /// Current-month consumption shown at period end (`d3`).
    pub end_current_month: f64,
    /// Credit balance at period end.
    pub end_balance: f64,

    /// Net value of the first top-up during the period.
    pub topup1_net: f64,
    /// Net value of the second top-up during the period.
    pub topup2_net: f64,

    /// First-tier unit price.
    pub tier1_price: f64,
    /// Explicit second-tier price; `> 0` overrides the resolved tier table.
    pub tier2_price_override: f64,
    /// Explicit third-tier price; `> 0` overrides the resolved tier table.
    pub tier3_price_override: f64,
    /// Fixed per-unit surcharge added to every tier rate.
    pub surcharge_per_unit: f64,
    /// Flat monthly fee added to each statement.
    pub monthly_fee: f64,

    /// Count of known zero-consumption months at the tail of the period
    /// (before the final month).
    pub zero_tail_months: u32,
}

impl PeriodInputs {
    /// A zeroed request anchored at the given dates; useful as a test base.
    pub fn empty(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            start_total: 0.0,
            start_prior_month: 0.0,
            start_current_month: 0.0,
            start_balance: 0.0,
            end_total: 0.0,
            end_prior_month: 0.0,
            end_current_month: 0.0,
            end_balance: 0.0,
            topup1_net: 0.0,
            topup2_net: 0.0,
            tier1_price: 0.0,
            tier2_price_override: 0.0,
            tier3_price_override: 0.0,
            surcharge_per_unit: 0.0,
            monthly_fee: 0.0,
            zero_tail_months: 0,
        }
    }
}
