//! # stave_core - Stave Drum Shell Calculation Engine
//!
//! `stave_core` computes what a woodworker needs to build a segmented drum
//! shell from flat staves: joint and bevel angles, stave widths, lumber and
//! cost, plus bearing edge and lug drilling layouts. It also reads the
//! measurements people actually type ("14 1/2", "3/4\"", "35.5cm").
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Inches inside**: Centimeters are converted at the boundary
//! - **JSON-First**: Inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use stave_core::calculations::shell::compute_shell;
//! use stave_core::measurement::{parse_length, to_fraction};
//!
//! let depth = parse_length("6 1/2").unwrap();
//! let thickness = parse_length("3/4\"").unwrap();
//!
//! let shell = compute_shell(12, 14.0, depth, thickness, 0.15, 8.0).unwrap();
//! assert_eq!(shell.joint_angle_deg, 15.0);
//! assert_eq!(to_fraction(shell.outer_dimension_in), "3 5/8");
//! ```
//!
//! ## Modules
//!
//! - [`measurement`] - Text to decimal parsing and fraction display
//! - [`calculations`] - Shell, bearing edge and lug spacing calculators
//! - [`comparison`] - Side-by-side diff of two shells
//! - [`edge_profiles`] - Bearing edge profile catalog
//! - [`presets`] - Standard drum sizes
//! - [`form`] - Raw form strings to calculator inputs
//! - [`format`] - Display rounding and unit marks
//! - [`settings`] - Defaults and display preferences
//! - [`units`] - Length units and board feet
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod comparison;
pub mod edge_profiles;
pub mod errors;
pub mod form;
pub mod format;
pub mod measurement;
pub mod presets;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate_bearing_edge, calculate_lug_spacing, compute_shell, BearingEdgeResult, LugLayout,
    ShellGeometry,
};
pub use comparison::{diff, Comparison, ComparisonRow};
pub use errors::{CalcError, CalcResult};
pub use measurement::{parse_length, to_centimeters, to_fraction, to_inches};
pub use settings::CalculatorSettings;
