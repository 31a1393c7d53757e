//! Binary Fraction Display
//!
//! Converts decimals to the fractions printed on a tape measure: halves,
//! quarters, eighths, sixteenths and thirty-seconds. Arbitrary rationals
//! (thirds, fifths) are deliberately not produced.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Finest graduation used when rendering fractions (1/32")
pub const DEFAULT_FRACTION_BASE: u32 = 32;

/// A decimal rounded to the nearest `1/base` and reduced.
///
/// ## Example
///
/// ```rust
/// use stave_core::measurement::BinaryFraction;
///
/// let f = BinaryFraction::from_decimal(14.375, 32);
/// assert_eq!((f.whole, f.numerator, f.denominator), (14, 3, 8));
/// assert_eq!(f.to_string(), "14 3/8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryFraction {
    /// True when the original value was below zero (and did not round to 0)
    pub negative: bool,
    /// Integer part of the magnitude
    pub whole: u64,
    /// Reduced numerator (0 when the value is a whole number)
    pub numerator: u64,
    /// Reduced denominator
    pub denominator: u64,
}

impl BinaryFraction {
    /// Round `value` to the nearest `1/base` and reduce.
    ///
    /// The numerator/denominator are halved while both are even, so a base
    /// of 32 yields denominators of 2, 4, 8, 16 or 32. A fraction that rounds
    /// up to `base/base` carries into the whole part.
    pub fn from_decimal(value: f64, base: u32) -> Self {
        let base = u64::from(base.max(1));
        let magnitude = value.abs();

        let mut whole = magnitude.floor();
        let mut numerator = ((magnitude - whole) * base as f64).round() as u64;
        let mut denominator = base;

        if numerator >= denominator {
            whole += 1.0;
            numerator = 0;
        }

        while numerator > 0 && numerator % 2 == 0 && denominator % 2 == 0 {
            numerator /= 2;
            denominator /= 2;
        }

        let whole = whole as u64;
        BinaryFraction {
            negative: value < 0.0 && (whole > 0 || numerator > 0),
            whole,
            numerator,
            denominator,
        }
    }

    /// Decimal value represented by this fraction
    pub fn value(&self) -> f64 {
        let magnitude = self.whole as f64 + self.numerator as f64 / self.denominator as f64;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for BinaryFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match (self.whole, self.numerator) {
            (whole, 0) => write!(f, "{}", whole),
            (0, num) => write!(f, "{}/{}", num, self.denominator),
            (whole, num) => write!(f, "{} {}/{}", whole, num, self.denominator),
        }
    }
}

/// Render a decimal as a tape-measure fraction in 32nds.
///
/// # Example
///
/// ```rust
/// use stave_core::measurement::to_fraction;
///
/// assert_eq!(to_fraction(14.5), "14 1/2");
/// assert_eq!(to_fraction(0.75), "3/4");
/// assert_eq!(to_fraction(6.0), "6");
/// ```
pub fn to_fraction(value: f64) -> String {
    to_fraction_with_base(value, DEFAULT_FRACTION_BASE)
}

/// Render a decimal as a fraction with the given finest graduation.
///
/// Non-finite values are rendered as-is.
pub fn to_fraction_with_base(value: f64, base: u32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    BinaryFraction::from_decimal(value, base).to_string()
}
