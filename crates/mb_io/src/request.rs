//! Request document: the wire shape of a billing-period calculation.
//!
//! Numeric fields come from a form layer as free text, so the wire format
//! accepts each one as a JSON string or number; empty, missing, or garbage
//! text coerces to zero and negatives floor at zero. Dates are strict
//! `YYYY-MM-DD` — a malformed date is a real error, not a coercible field.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use mb_core::coerce::{parse_count, parse_decimal};
use mb_core::PeriodInputs;

use crate::{IoError, IoResult};

/// A numeric field as it arrives on the wire: free text or a plain number.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Text(String),
    Number(f64),
}

impl Default for NumericField {
    fn default() -> Self {
        NumericField::Text(String::new())
    }
}

impl NumericField {
    /// Coerced decimal value, floored at zero.
    fn as_decimal(&self) -> f64 {
        let v = match self {
            NumericField::Text(s) => parse_decimal(s),
            NumericField::Number(n) => *n,
        };
        v.max(0.0)
    }

    /// Coerced small count.
    fn as_count(&self) -> u32 {
        match self {
            NumericField::Text(s) => parse_count(s),
            NumericField::Number(n) => n.max(0.0) as u32,
        }
    }
}

/// Wire shape of one request. Missing numeric fields default to empty text
/// and coerce to zero.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRequest {
    pub start_date: String,
    pub end_date: String,

    pub start_total: NumericField,
    pub start_prior_month: NumericField,
    pub start_current_month: NumericField,
    pub start_balance: NumericField,

    pub end_total: NumericField,
    pub end_prior_month: NumericField,
    pub end_current_month: NumericField,
    pub end_balance: NumericField,

    pub topup1_net: NumericField,
    pub topup2_net: NumericField,

    pub tier1_price: NumericField,
    pub tier2_price: NumericField,
    pub tier3_price: NumericField,
    pub surcharge_per_unit: NumericField,
    pub monthly_fee: NumericField,

    pub zero_tail_months: NumericField,
}

impl RawRequest {
    /// Coerce the wire fields into an engine request.
    pub fn into_inputs(self) -> IoResult<PeriodInputs> {
        Ok(PeriodInputs {
            start_date: parse_date("start_date", &self.start_date)?,
            end_date: parse_date("end_date", &self.end_date)?,
            start_total: self.start_total.as_decimal(),
            start_prior_month: self.start_prior_month.as_decimal(),
            start_current_month: self.start_current_month.as_decimal(),
            start_balance: self.start_balance.as_decimal(),
            end_total: self.end_total.as_decimal(),
            end_prior_month: self.end_prior_month.as_decimal(),
            end_current_month: self.end_current_month.as_decimal(),
            end_balance: self.end_balance.as_decimal(),
            topup1_net: self.topup1_net.as_decimal(),
            topup2_net: self.topup2_net.as_decimal(),
            tier1_price: self.tier1_price.as_decimal(),
            tier2_price_override: self.tier2_price.as_decimal(),
            tier3_price_override: self.tier3_price.as_decimal(),
            surcharge_per_unit: self.surcharge_per_unit.as_decimal(),
            monthly_fee: self.monthly_fee.as_decimal(),
            zero_tail_months: self.zero_tail_months.as_count(),
        })
    }
}

fn parse_date(field: &str, text: &str) -> IoResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| IoError::Request(format!("{field}: expected YYYY-MM-DD, got {text:?}")))
}

/// Read and coerce a request file.
pub fn load_request<P: AsRef<Path>>(path: P) -> IoResult<PeriodInputs> {
    let text = std::fs::read_to_string(path.as_ref())
        .map_err(|e| IoError::Read(format!("{}: {e}", path.as_ref().display())))?;
    let raw: RawRequest =
        serde_json::from_str(&text).map_err(|e| IoError::Request(e.to_string()))?;
    raw.into_inputs()
}
