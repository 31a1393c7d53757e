//! # Measurement Parsing
//!
//! Converts between the text a woodworker types and the decimal inches the
//! calculators work in.
//!
//! - [`parse`] - free-form dimensional text (decimals, fractions, mixed
//!   numbers, unit suffixes) to a decimal
//! - [`fraction`] - decimal back to a tape-measure fraction
//!
//! Inch/centimeter conversion lives in [`crate::units`] and is re-exported
//! here for convenience.
//!
//! ## Example
//!
//! ```rust
//! use stave_core::measurement::{parse_length, to_fraction};
//!
//! let depth = parse_length("6 1/2\"").unwrap();
//! assert_eq!(depth, 6.5);
//! assert_eq!(to_fraction(depth), "6 1/2");
//! ```

pub mod fraction;
pub mod parse;

pub use fraction::{to_fraction, to_fraction_with_base, BinaryFraction, DEFAULT_FRACTION_BASE};
pub use parse::{parse_inches, parse_length, parse_measurement, Measurement};
pub use crate::units::{to_centimeters, to_inches};
