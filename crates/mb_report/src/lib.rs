//! mb_report — pure offline renderers for a `DistributionResult`.
//!
//! Determinism rules:
//! - No I/O here; callers supply the result in memory and write the bytes.
//! - Decimal strings come from the integer fixed-point formatters, never from
//!   float arithmetic.
//! - Stable field order and row order (earliest month first, total row last).
//!
//! The derived total row is presentation-only: the engine's table has no
//! total; renderers append the column-wise sums for display.

#![forbid(unsafe_code)]

pub mod render_csv;
pub mod render_json;

pub use render_csv::render_csv;
pub use render_json::{render_json, render_json_bytes};
