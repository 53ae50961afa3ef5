//! CSV renderer: header, one line per statement, and a derived total line.
//!
//! Values here contain no commas or quotes (fixed-point decimal strings and
//! `MM/YYYY` labels), so no field quoting is needed.

use std::fmt::Write as _;

use mb_pipeline::DistributionResult;

const HEADER: &str = "serial,month,quantity,value_no_fee,monthly_fee,value_with_fee";

/// Render the result table as CSV text.
pub fn render_csv(result: &DistributionResult) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for (i, row) in result.rows.iter().enumerate() {
        // `write!` into a String cannot fail.
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            i + 1,
            row.label,
            row.quantity.format(),
            row.value_no_fee.format(),
            row.monthly_fee.format(),
            row.value_with_fee.format(),
        );
    }

    let (quantity, value_no_fee, fees, value_with_fee) = result.totals();
    let _ = writeln!(
        out,
        "total,,{},{},{},{}",
        quantity.format(),
        value_no_fee.format(),
        fees.format(),
        value_with_fee.format(),
    );

    out
}
