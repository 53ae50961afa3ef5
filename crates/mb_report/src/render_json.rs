//! JSON renderer: headline targets, statement rows, derived total row, and
//! the diagnostic sums.

use serde_json::{json, Value};

use mb_pipeline::DistributionResult;

/// Build the JSON report document. Monetary/quantity fields are fixed-point
/// decimal strings; the diagnostic `checks` map stays numeric.
pub fn render_json(result: &DistributionResult) -> Value {
    let months: Vec<Value> = result
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            json!({
                "serial": i + 1,
                "month": row.label,
                "quantity": row.quantity.format(),
                "value_no_fee": row.value_no_fee.format(),
                "monthly_fee": row.monthly_fee.format(),
                "value_with_fee": row.value_with_fee.format(),
            })
        })
        .collect();

    let (quantity, value_no_fee, fees, value_with_fee) = result.totals();

    json!({
        "target_quantity": result.target_quantity.format(),
        "target_value": result.target_value.format(),
        "months": months,
        "total": {
            "quantity": quantity.format(),
            "value_no_fee": value_no_fee.format(),
            "monthly_fee": fees.format(),
            "value_with_fee": value_with_fee.format(),
        },
        "checks": result.checks,
    })
}

/// Serialize the report document with a trailing newline.
pub fn render_json_bytes(result: &DistributionResult) -> Vec<u8> {
    let mut bytes = serde_json::to_vec_pretty(&render_json(result)).unwrap_or_default();
    bytes.push(b'\n');
    bytes
}
