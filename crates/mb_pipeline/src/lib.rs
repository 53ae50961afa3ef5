//! mb_pipeline — deterministic pipeline surface
//! (targets → months → bounds → allocate → reconcile → settle → result).
//!
//! This crate stays I/O-free and delegates math to `mb_algo` and core types
//! to `mb_core`. One call, one owned working vector handed through the
//! stages; concurrent callers each bring their own inputs and options.
//!
//! The pipeline raises no errors on business data: coercion and clamping
//! happen upstream and inside the stages, and every input produces some
//! bounds-respecting result. Callers wanting validation compare the
//! diagnostic sums in [`DistributionResult::checks`] against the targets.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use chrono::NaiveDate;

use mb_core::calendar::{month_label, month_span};
use mb_core::rng::SearchRng;
use mb_core::units::{Millis, Tenths};
use mb_core::PeriodInputs;

use mb_algo::tariff::TariffSchedule;
use mb_algo::{build_slots, fill_to_target, reconcile_values, settle_with_fee};

pub mod targets;

/// Bounded-iteration and seeding knobs for one distribution run.
///
/// Every search loop in the pipeline is capped by one of these fields, so the
/// worst-case cost of a call is explicit. The seed drives the exploratory
/// reconciliation phase; identical seed and inputs give identical output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DistributeOptions {
    /// Seed for the reconciliation search RNG.
    pub seed: u64,
    /// Step cap for the randomized exploratory phase.
    pub explore_steps: u32,
    /// Round cap for the deterministic refinement phase.
    pub refine_steps: u32,
    /// Step cap for the allocator's round-robin leftover walk.
    pub fill_steps: u32,
}

impl Default for DistributeOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            explore_steps: 4_000,
            refine_steps: 5_000,
            fill_steps: 100_000,
        }
    }
}

/// One statement row of the breakdown. Amounts stay in integer sub-units /
/// milli-units; formatting to decimals is the presentation layer's job.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthRow {
    /// Statement label, `MM/YYYY`.
    pub label: String,
    /// First day of the month.
    pub starts_on: NaiveDate,
    /// Distributed quantity.
    pub quantity: Tenths,
    /// Tiered value excluding the monthly fee.
    pub value_no_fee: Millis,
    /// Flat monthly fee.
    pub monthly_fee: Millis,
    /// Displayed value including the fee, after settlement.
    pub value_with_fee: Millis,
}

/// Output of one distribution run. Owned by the caller; the pipeline retains
/// nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct DistributionResult {
    /// Ordered per-month breakdown, earliest first.
    pub rows: Vec<MonthRow>,
    /// Headline target quantity (≥ 0).
    pub target_quantity: Tenths,
    /// Headline target value (≥ 0).
    pub target_value: Millis,
    /// Recomputed sums for caller-side self-verification.
    pub checks: BTreeMap<String, f64>,
}

/// Run the full distribution pipeline for one billing period.
pub fn distribute(inputs: &PeriodInputs, opts: &DistributeOptions) -> DistributionResult {
    let tariff = TariffSchedule::resolve(
        inputs.tier1_price,
        inputs.tier2_price_override,
        inputs.tier3_price_override,
        inputs.surcharge_per_unit,
    );
    let (target_quantity, target_value) = targets::period_targets(inputs, &tariff);

    let months = month_span(inputs.start_date, inputs.end_date);
    if months.is_empty() {
        // Degenerate period: empty table, targets still reported.
        return DistributionResult {
            rows: Vec::new(),
            target_quantity,
            target_value,
            checks: BTreeMap::new(),
        };
    }
    let m = months.len();

    let slots = build_slots(
        &months,
        inputs.start_current_month,
        inputs.end_prior_month,
        inputs.zero_tail_months,
        target_quantity,
    );
    let slots = fill_to_target(slots, target_quantity, opts.fill_steps);

    let monthly_fee = Millis::from_amount(inputs.monthly_fee);
    let target_no_fee = Millis((target_value.0 - monthly_fee.0 * m as i64).max(0));

    let mut rng = SearchRng::from_seed_u64(opts.seed);
    let slots = reconcile_values(
        slots,
        &tariff,
        target_no_fee,
        &mut rng,
        opts.explore_steps,
        opts.refine_steps,
    );

    let display = settle_with_fee(&slots, monthly_fee, target_value);

    let rows: Vec<MonthRow> = slots
        .iter()
        .zip(display)
        .map(|(slot, value_with_fee)| MonthRow {
            label: month_label(slot.starts_on),
            starts_on: slot.starts_on,
            quantity: slot.units,
            value_no_fee: slot.value,
            monthly_fee,
            value_with_fee,
        })
        .collect();

    let checks = self_checks(&rows, target_quantity, target_value);

    DistributionResult {
        rows,
        target_quantity,
        target_value,
        checks,
    }
}

/// Recompute the column sums the caller will verify against the headline
/// targets. Keys are stable; values are fractional for display.
fn self_checks(rows: &[MonthRow], target_quantity: Tenths, target_value: Millis) -> BTreeMap<String, f64> {
    let q_sum: Tenths = rows.iter().map(|r| r.quantity).sum();
    let v_sum: Millis = rows.iter().map(|r| r.value_with_fee).sum();
    let mut checks = BTreeMap::new();
    checks.insert("q_target".to_string(), target_quantity.to_qty());
    checks.insert("q_sum".to_string(), q_sum.to_qty());
    checks.insert("v_target".to_string(), target_value.to_amount());
    checks.insert("v_sum".to_string(), v_sum.to_amount());
    checks
}

impl DistributionResult {
    /// Column-wise sums: (quantity, value-without-fee, fees, value-with-fee).
    pub fn totals(&self) -> (Tenths, Millis, Millis, Millis) {
        (
            self.rows.iter().map(|r| r.quantity).sum(),
            self.rows.iter().map(|r| r.value_no_fee).sum(),
            self.rows.iter().map(|r| r.monthly_fee).sum(),
            self.rows.iter().map(|r| r.value_with_fee).sum(),
        )
    }

    /// Whether the recomputed sums match the targets: values exact, quantity
    /// within the sub-unit quantization error.
    pub fn verifies(&self) -> bool {
        if self.rows.is_empty() {
            return true;
        }
        let (q_sum, _, _, v_sum) = self.totals();
        v_sum == self.target_value && (q_sum.0 - self.target_quantity.0).abs() <= self.rows.len() as i64
    }
}
