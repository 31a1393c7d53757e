//! # Shell Calculations
//!
//! Each calculation follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - result type - Calculation results (JSON-serializable)
//! - `calculate(input) -> CalcResult<...>` - Pure calculation function
//!
//! The bearing edge and lug spacing modules additionally expose
//! `Option`-returning functions for callers that treat an unknown profile or
//! an unsupported lug count as "nothing to show" rather than an error.
//!
//! ## Available Calculations
//!
//! - [`shell`] - Stave angles, widths and material takeoff
//! - [`bearing_edge`] - Bearing edge cut dimensions and router bit
//! - [`lug_spacing`] - Lug drilling template

pub mod bearing_edge;
pub mod lug_spacing;
pub mod shell;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use bearing_edge::{calculate_bearing_edge, BearingEdgeInput, BearingEdgeResult, RouterBit};
pub use lug_spacing::{calculate_lug_spacing, LugLayout, LugSpacingInput};
pub use shell::{compute_shell, CutList, ShellGeometry, ShellInput};

/// Enum wrapper for all calculation types.
///
/// Lets heterogeneous calculations travel as JSON and be evaluated through
/// one entry point.
///
/// ```json
/// {
///   "type": "LugSpacing",
///   "label": "Snare",
///   "diameter_in": 14.0,
///   "lug_count": 10,
///   "offset_from_edge_in": 1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Stave shell geometry
    Shell(ShellInput),
    /// Bearing edge profile
    BearingEdge(BearingEdgeInput),
    /// Lug drilling template
    LugSpacing(LugSpacingInput),
}

/// Result of evaluating a [`CalculationItem`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Shell(ShellGeometry),
    BearingEdge(BearingEdgeResult),
    LugSpacing(LugLayout),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Shell(s) => &s.label,
            CalculationItem::BearingEdge(b) => &b.label,
            CalculationItem::LugSpacing(l) => &l.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Shell(_) => "Shell",
            CalculationItem::BearingEdge(_) => "BearingEdge",
            CalculationItem::LugSpacing(_) => "LugSpacing",
        }
    }

    /// Validate and run the calculation.
    ///
    /// Unknown profiles and unsupported lug counts are reported as errors
    /// here, since the caller explicitly asked for a result.
    pub fn evaluate(&self) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Shell(input) => shell::calculate(input).map(CalculationOutput::Shell),
            CalculationItem::BearingEdge(input) => {
                bearing_edge::calculate(input).map(CalculationOutput::BearingEdge)
            }
            CalculationItem::LugSpacing(input) => {
                lug_spacing::calculate(input).map(CalculationOutput::LugSpacing)
            }
        }
    }
}
