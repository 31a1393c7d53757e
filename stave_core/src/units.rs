//! # Unit Types
//!
//! Length units and the lumber volume unit a stave shell needs.
//!
//! ## Canonical Units
//!
//! All internal math runs in inches and degrees. Centimeters only exist at
//! the input/output boundary, converted with the exact factor 2.54.
//!
//! - Length: inches (in), centimeters (cm)
//! - Lumber: board feet (144 in² of face at nominal 1" thickness)
//!
//! ## Example
//!
//! ```rust
//! use stave_core::units::{BoardFeet, LengthUnit};
//!
//! let diameter = LengthUnit::Centimeters.in_unit(14.0);
//! assert!((diameter - 35.56).abs() < 1e-9);
//!
//! let blank = BoardFeet::from_face(3.0, 48.0);
//! assert_eq!(blank.value(), 1.0);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Centimeters per inch (exact by definition)
pub const CM_PER_INCH: f64 = 2.54;

/// Square inches of face in one board foot (12" x 12" at nominal 1")
pub const SQUARE_INCHES_PER_BOARD_FOOT: f64 = 144.0;

/// Convert inches to centimeters.
pub fn to_centimeters(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Convert centimeters to inches.
pub fn to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

// ============================================================================
// Length Units
// ============================================================================

/// Unit a length was entered or should be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Inches (canonical)
    #[default]
    #[serde(rename = "in")]
    Inches,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeters,
}

impl LengthUnit {
    /// Short suffix used in form data ("in" / "cm")
    pub fn suffix(self) -> &'static str {
        match self {
            LengthUnit::Inches => "in",
            LengthUnit::Centimeters => "cm",
        }
    }

    /// Convert a value expressed in this unit to inches
    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            LengthUnit::Inches => value,
            LengthUnit::Centimeters => to_inches(value),
        }
    }

    /// Express a value in inches in this unit
    pub fn in_unit(self, inches: f64) -> f64 {
        match self {
            LengthUnit::Inches => inches,
            LengthUnit::Centimeters => to_centimeters(inches),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" | "\"" | "''" => Ok(LengthUnit::Inches),
            "cm" | "centimeter" | "centimeters" => Ok(LengthUnit::Centimeters),
            _ => Err(CalcError::invalid_input(
                "unit",
                s,
                "Unit must be 'in' or 'cm'",
            )),
        }
    }
}

// ============================================================================
// Lumber Units
// ============================================================================

/// Lumber measure in board feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardFeet(pub f64);

impl BoardFeet {
    /// Board feet in a blank's face, width and length in inches.
    ///
    /// Stock under 1" thick is billed as nominal 1", so thickness does not
    /// enter the measure.
    pub fn from_face(width_in: f64, length_in: f64) -> Self {
        BoardFeet(width_in * length_in / SQUARE_INCHES_PER_BOARD_FOOT)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(BoardFeet);
