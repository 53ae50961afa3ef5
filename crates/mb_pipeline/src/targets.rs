//! Headline period targets derived from the boundary readings.
//!
//! - opening credit = start balance + both net top-ups (3-decimal rounding)
//! - target quantity = end total − end current-month − start total
//!   + start current-month, rounded to 1 decimal, floored at zero
//! - target value = (opening credit + value of start current-month)
//!   − (end balance + value of end current-month), rounded to 3 decimals,
//!   floored at zero
//!
//! Boundary current-month consumptions are valued fee-free under the same
//! tariff schedule the per-month distribution uses.

use mb_core::units::{Millis, Tenths};
use mb_core::PeriodInputs;

use mb_algo::tariff::TariffSchedule;

#[inline]
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[inline]
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// (target quantity in sub-units, target value in milli-units), both ≥ 0.
pub fn period_targets(inputs: &PeriodInputs, tariff: &TariffSchedule) -> (Tenths, Millis) {
    let opening_credit = round3(inputs.start_balance + inputs.topup1_net + inputs.topup2_net);
    let start_month_value = tariff.value_of_qty(inputs.start_current_month);
    let end_month_value = tariff.value_of_qty(inputs.end_current_month);

    let raw_quantity = inputs.end_total - inputs.end_current_month - inputs.start_total
        + inputs.start_current_month;
    let quantity = round1(raw_quantity).max(0.0);

    let raw_value =
        (opening_credit + start_month_value) - (inputs.end_balance + end_month_value);
    let value = round3(raw_value).max(0.0);

    (Tenths::from_qty(quantity), Millis::from_amount(value))
}
