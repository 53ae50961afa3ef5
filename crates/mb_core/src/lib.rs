//! mb_core — Core types, fixed-point units, calendar helpers, and deterministic RNG.
//!
//! This crate is **I/O-free**. It defines stable types/APIs used across the
//! engine (`mb_io`, `mb_algo`, `mb_pipeline`, `mb_report`, `mb_cli`).
//!
//! - Fixed-point units: `Tenths` (quantity sub-units), `Millis` (milli-currency)
//! - Calendar month sequence for a billing period (clamped 1..=12)
//! - Free-text numeric coercion (never fails; empty/garbage → 0)
//! - Seedable RNG (ChaCha20) for the **reconciliation search only**
//! - `PeriodInputs`: the immutable request record
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod calendar;
pub mod coerce;
pub mod entities;
pub mod rng;
pub mod units;

pub use entities::PeriodInputs;
pub use units::{Millis, Tenths};
