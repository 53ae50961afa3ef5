//! Fixed-point quantity and money units.
//!
//! All allocation arithmetic runs on integers so per-month figures sum exactly:
//! quantities in tenths of a unit (`Tenths`), money in thousandths of the
//! currency unit (`Millis`). Conversion back to fractional display values
//! happens only at presentation time, and the decimal formatters below use
//! integer arithmetic only.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sub-units per physical quantity unit (0.1 steps).
pub const TENTHS_PER_UNIT: i64 = 10;

/// Milli-units per currency unit (0.001 steps).
pub const MILLIS_PER_UNIT: i64 = 1000;

macro_rules! fixed_point_ops {
    ($name:ident) => {
        impl Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name { $name(self.0 + rhs.0) }
        }
        impl Sub for $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: $name) -> $name { $name(self.0 - rhs.0) }
        }
        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) { self.0 += rhs.0; }
        }
        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $name) { self.0 -= rhs.0; }
        }
        impl Neg for $name {
            type Output = $name;
            #[inline]
            fn neg(self) -> $name { $name(-self.0) }
        }
        impl Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                $name(iter.map(|v| v.0).sum())
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.format())
            }
        }
    };
}

/// Quantity in integer tenths of a unit.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tenths(pub i64);

impl Tenths {
    pub const ZERO: Tenths = Tenths(0);

    /// Quantize a fractional quantity, rounding to the nearest tenth.
    #[inline]
    pub fn from_qty(q: f64) -> Self {
        Tenths((q * TENTHS_PER_UNIT as f64).round() as i64)
    }

    /// Fractional quantity (presentation only).
    #[inline]
    pub fn to_qty(self) -> f64 {
        self.0 as f64 / TENTHS_PER_UNIT as f64
    }

    /// One-decimal string, integer arithmetic only (e.g., `550` → `"55.0"`).
    pub fn format(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let a = self.0.unsigned_abs();
        format!("{sign}{}.{}", a / 10, a % 10)
    }
}

fixed_point_ops!(Tenths);

/// Money in integer milli-currency units.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Millis(pub i64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Quantize a fractional amount, rounding to the nearest milli-unit.
    #[inline]
    pub fn from_amount(v: f64) -> Self {
        Millis((v * MILLIS_PER_UNIT as f64).round() as i64)
    }

    /// Fractional amount (presentation only).
    #[inline]
    pub fn to_amount(self) -> f64 {
        self.0 as f64 / MILLIS_PER_UNIT as f64
    }

    /// Three-decimal string, integer arithmetic only (e.g., `12345` → `"12.345"`).
    pub fn format(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let a = self.0.unsigned_abs();
        format!("{sign}{}.{:03}", a / 1000, a % 1000)
    }
}

fixed_point_ops!(Millis);
