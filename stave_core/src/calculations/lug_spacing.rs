//! # Lug Spacing Calculation
//!
//! Evenly spaced hardware positions around a shell, as a drilling template.
//!
//! ## Assumptions
//!
//! - Lugs sit on the shell's outer edge, so the drill circle diameter equals
//!   the shell diameter. This is a modeling simplification; real lug
//!   casings stand slightly proud of the shell.
//! - Lug counts outside 4..=20 are rejected: hardware is not made for
//!   layouts outside that range.
//!
//! ## Example
//!
//! ```rust
//! use stave_core::calculations::lug_spacing::calculate_lug_spacing;
//!
//! let layout = calculate_lug_spacing(14.0, 8, 1.0).unwrap();
//! assert_eq!(layout.angle_between_lugs_deg, 45.0);
//! assert_eq!(layout.lug_positions_deg.len(), 8);
//! assert!(calculate_lug_spacing(14.0, 3, 1.0).is_none());
//! ```

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::format::format_degrees;

/// Smallest supported lug count
pub const MIN_LUGS: u32 = 4;

/// Largest supported lug count
pub const MAX_LUGS: u32 = 20;

/// Supported lug counts
pub const LUG_COUNT_RANGE: RangeInclusive<u32> = MIN_LUGS..=MAX_LUGS;

/// Input parameters for a lug layout.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "14 in snare",
///   "diameter_in": 14.0,
///   "lug_count": 10,
///   "offset_from_edge_in": 1.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LugSpacingInput {
    /// User label for this calculation
    pub label: String,

    /// Shell diameter in inches
    pub diameter_in: f64,

    /// Number of lugs
    pub lug_count: u32,

    /// Distance from the bearing edge to the lug hole (in)
    pub offset_from_edge_in: f64,
}

impl LugSpacingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.diameter_in.is_finite() || self.diameter_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "diameter_in",
                self.diameter_in.to_string(),
                "Diameter must be positive",
            ));
        }
        if !LUG_COUNT_RANGE.contains(&self.lug_count) {
            return Err(CalcError::invalid_input(
                "lug_count",
                self.lug_count.to_string(),
                format!("Lug count must be between {} and {}", MIN_LUGS, MAX_LUGS),
            ));
        }
        if !self.offset_from_edge_in.is_finite() || self.offset_from_edge_in < 0.0 {
            return Err(CalcError::invalid_input(
                "offset_from_edge_in",
                self.offset_from_edge_in.to_string(),
                "Offset cannot be negative",
            ));
        }
        Ok(())
    }
}

/// Lug drilling template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LugLayout {
    /// Number of lugs
    pub lug_count: u32,
    /// Distance from the bearing edge to the lug hole (in)
    pub offset_from_edge_in: f64,
    /// Angle between neighboring lugs (degrees)
    pub angle_between_lugs_deg: f64,
    /// Distance between neighboring lugs along the shell surface (in)
    pub arc_length_in: f64,
    /// Shell circumference (in)
    pub circumference_in: f64,
    /// Diameter of the circle the lug holes sit on (in)
    pub drill_circle_diameter_in: f64,
    /// Circumference of the drill circle (in)
    pub drill_circle_circumference_in: f64,
    /// Angular position of each lug, starting at 0° (degrees)
    pub lug_positions_deg: Vec<f64>,
}

impl LugLayout {
    /// Lug positions formatted to one decimal place ("45.0°")
    pub fn formatted_positions(&self) -> Vec<String> {
        self.lug_positions_deg
            .iter()
            .map(|deg| format_degrees(*deg, 1))
            .collect()
    }

    /// Arc distance from the first lug to lug `index` along the drill circle
    pub fn arc_position_in(&self, index: usize) -> Option<f64> {
        self.lug_positions_deg
            .get(index)
            .map(|deg| self.drill_circle_circumference_in * deg / 360.0)
    }
}

/// Evenly spaced angles for `count` lugs, starting at 0°.
pub fn lug_positions(count: u32) -> Vec<f64> {
    let step = 360.0 / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}

/// Calculate a lug layout.
///
/// Returns `None` when `lug_count` is outside 4..=20.
pub fn calculate_lug_spacing(
    diameter_in: f64,
    lug_count: u32,
    offset_from_edge_in: f64,
) -> Option<LugLayout> {
    if !LUG_COUNT_RANGE.contains(&lug_count) {
        debug!(lug_count, "lug count outside supported range");
        return None;
    }
    debug!(diameter_in, lug_count, "calculating lug spacing");

    let count = lug_count as f64;
    let circumference_in = PI * diameter_in;
    let drill_circle_diameter_in = diameter_in;

    Some(LugLayout {
        lug_count,
        offset_from_edge_in,
        angle_between_lugs_deg: 360.0 / count,
        arc_length_in: circumference_in / count,
        circumference_in,
        drill_circle_diameter_in,
        drill_circle_circumference_in: PI * drill_circle_diameter_in,
        lug_positions_deg: lug_positions(lug_count),
    })
}

/// Validate a [`LugSpacingInput`] and calculate its layout.
pub fn calculate(input: &LugSpacingInput) -> CalcResult<LugLayout> {
    input.validate()?;
    calculate_lug_spacing(
        input.diameter_in,
        input.lug_count,
        input.offset_from_edge_in,
    )
    .ok_or_else(|| {
        CalcError::invalid_input(
            "lug_count",
            input.lug_count.to_string(),
            "Unsupported lug count",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fourteen_inch_eight_lugs() {
        let layout = calculate_lug_spacing(14.0, 8, 1.0).unwrap();
        assert_relative_eq!(layout.circumference_in, 43.982297, epsilon = 1e-6);
        assert_eq!(layout.angle_between_lugs_deg, 45.0);
        assert_relative_eq!(layout.arc_length_in, 5.497787, epsilon = 1e-6);
        assert_eq!(layout.drill_circle_diameter_in, 14.0);
        assert_relative_eq!(layout.drill_circle_circumference_in, layout.circumference_in);
        assert_eq!(
            layout.lug_positions_deg,
            vec![0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]
        );
        assert_eq!(layout.formatted_positions()[3], "135.0°");
    }

    #[test]
    fn test_lug_count_bounds() {
        assert!(calculate_lug_spacing(14.0, 3, 1.0).is_none());
        assert!(calculate_lug_spacing(14.0, 21, 1.0).is_none());
        assert!(calculate_lug_spacing(22.0, 0, 0.5).is_none());
        assert!(calculate_lug_spacing(14.0, 4, 1.0).is_some());
        assert!(calculate_lug_spacing(14.0, 20, 1.0).is_some());
    }

    #[test]
    fn test_uneven_angle() {
        let layout = calculate_lug_spacing(13.0, 7, 1.0).unwrap();
        assert_relative_eq!(layout.angle_between_lugs_deg, 51.428571, epsilon = 1e-6);
        assert_eq!(layout.formatted_positions()[1], "51.4°");
        assert_eq!(layout.lug_positions_deg[0], 0.0);
        assert!(layout.lug_positions_deg.iter().all(|deg| *deg < 360.0));
    }

    #[test]
    fn test_arc_position() {
        let layout = calculate_lug_spacing(14.0, 4, 1.0).unwrap();
        assert_relative_eq!(layout.arc_position_in(2).unwrap(), layout.circumference_in / 2.0);
        assert!(layout.arc_position_in(4).is_none());
    }

    #[test]
    fn test_validated_input() {
        let input = LugSpacingInput {
            label: "Bass".to_string(),
            diameter_in: 22.0,
            lug_count: 21,
            offset_from_edge_in: 1.0,
        };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let input = LugSpacingInput { lug_count: 10, ..input };
        assert_eq!(calculate(&input).unwrap().lug_count, 10);
    }
}
