//! # Display Formatting
//!
//! Calculators return exact `f64` values. Everything here is presentation:
//! rounding to a fixed number of places with an explicit rounding mode and
//! attaching unit marks.
//!
//! ## Example
//!
//! ```rust
//! use stave_core::format::{format_fixed, format_degrees, RoundingMode};
//!
//! assert_eq!(format_fixed(0.12345, 3, RoundingMode::HalfAwayFromZero), "0.123");
//! assert_eq!(format_fixed(0.1239, 3, RoundingMode::TowardZero), "0.123");
//! assert_eq!(format_degrees(22.5, 2), "22.50°");
//! ```

use serde::{Deserialize, Serialize};

use crate::units::LengthUnit;

/// How a value is brought to a fixed number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Nearest, ties away from zero (what a calculator display does)
    #[default]
    HalfAwayFromZero,
    /// Toward negative infinity
    Down,
    /// Toward positive infinity
    Up,
    /// Drop the extra digits
    TowardZero,
}

/// Round `value` to `places` decimal places.
///
/// Negative zero is normalized to zero so it never prints as `-0.00`.
pub fn round_to(value: f64, places: u32, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    let rounded = match mode {
        RoundingMode::HalfAwayFromZero => scaled.round(),
        RoundingMode::Down => scaled.floor(),
        RoundingMode::Up => scaled.ceil(),
        RoundingMode::TowardZero => scaled.trunc(),
    } / scale;

    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format with exactly `places` decimal places.
pub fn format_fixed(value: f64, places: u32, mode: RoundingMode) -> String {
    let rounded = round_to(value, places, mode);
    format!("{:.*}", places as usize, rounded)
}

/// Format a difference with an explicit sign (`+1.25`, `-0.50`, `0`).
///
/// Only an exact zero is rendered as a bare `0`. A nonzero difference keeps
/// its sign even when it rounds away (`+0.00`).
pub fn format_signed(value: f64, places: u32) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value > 0.0 { '+' } else { '-' };
    let magnitude = format_fixed(value.abs(), places, RoundingMode::HalfAwayFromZero);
    format!("{}{}", sign, magnitude)
}

/// Format an angle in degrees: `22.50°`
pub fn format_degrees(value: f64, places: u32) -> String {
    format!("{}°", format_fixed(value, places, RoundingMode::HalfAwayFromZero))
}

/// Format a length in inches: `0.750"`
pub fn format_inches(value: f64, places: u32) -> String {
    format!("{}\"", format_fixed(value, places, RoundingMode::HalfAwayFromZero))
}

/// Format a length given in inches in the requested display unit.
pub fn format_length(inches: f64, unit: LengthUnit, places: u32) -> String {
    let shown = format_fixed(unit.in_unit(inches), places, RoundingMode::HalfAwayFromZero);
    match unit {
        LengthUnit::Inches => format!("{}\"", shown),
        LengthUnit::Centimeters => format!("{} cm", shown),
    }
}

/// Format a currency amount: `$42.10`
pub fn format_currency(value: f64) -> String {
    format!("${}", format_fixed(value, 2, RoundingMode::HalfAwayFromZero))
}
