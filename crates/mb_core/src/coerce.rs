//! Free-text numeric coercion.
//!
//! Numeric fields arrive as free text from the form layer and must never make
//! the engine fail: empty or unparsable input coerces to zero. A decimal comma
//! (either `,` or the Arabic comma `،`) is normalized to a point before
//! parsing.

/// Parse a decimal quantity/amount; empty or unparsable text coerces to `0.0`.
pub fn parse_decimal(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let normalized: String = trimmed
        .chars()
        .map(|c| match c {
            ',' | '\u{060C}' => '.',
            c => c,
        })
        .collect();
    normalized.parse::<f64>().unwrap_or(0.0)
}

/// Parse a small non-negative count (e.g., the zero-tail month count).
/// Fractional text truncates; empty, unparsable, or negative text coerces to `0`.
pub fn parse_count(text: &str) -> u32 {
    // `as` saturates: negatives and NaN land on 0.
    parse_decimal(text) as u32
}
