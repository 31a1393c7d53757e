//! # Bearing Edge Calculation
//!
//! Cut dimensions for shaping the rim of a stave shell to one of the
//! catalog edge profiles, plus the router bit to cut it with.
//!
//! ## Method
//!
//! For shell (board) thickness `t` and profile angles:
//!
//! - Outer cut width = t × tan(outer angle), 0 when there is no outer cut
//! - Inner cut width = t × tan(inner angle), 0 when there is no inner cut
//! - Roundover profiles: contact width = t × f × 0.5, radius = t × f × 0.25
//! - Sharp profiles: contact width = 0.030" (typical sharp-edge contact)
//!
//! ## Example
//!
//! ```rust
//! use stave_core::calculations::bearing_edge::{calculate_bearing_edge, RouterBit};
//!
//! let edge = calculate_bearing_edge(0.75, "45-single").unwrap();
//! assert!((edge.outer_cut_width_in - 0.75).abs() < 1e-9);
//! assert_eq!(edge.router_bit, RouterBit::Chamfer45);
//! assert!(calculate_bearing_edge(0.75, "unknown").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::edge_profiles::{self, EdgeProfile, EdgeProfileId};
use crate::errors::{CalcError, CalcResult};
use crate::format::{format_fixed, RoundingMode};

/// Contact width of a sharp (non-rounded) edge in inches
pub const SHARP_EDGE_CONTACT_IN: f64 = 0.030;

/// Router bit recommended for a profile.
///
/// The chamfer sizes correspond to bits sold commercially; the roundover
/// diameter is twice the computed roundover radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RouterBit {
    /// 45° chamfer bit
    Chamfer45,
    /// 30° chamfer bit or a custom jig
    Chamfer30,
    /// Roundover bit of the given diameter
    Roundover {
        /// Bit diameter in inches (2 × roundover radius)
        diameter_in: f64,
    },
    /// No standard bit applies
    NotApplicable,
}

impl RouterBit {
    /// Select a bit from the outer cut angle and roundover radius.
    ///
    /// Chamfer angles take precedence over any roundover.
    pub fn recommend(outer_angle_deg: f64, roundover_radius_in: f64) -> Self {
        match outer_angle_deg {
            a if a == 45.0 => RouterBit::Chamfer45,
            a if a == 30.0 => RouterBit::Chamfer30,
            _ if roundover_radius_in > 0.0 => RouterBit::Roundover {
                diameter_in: 2.0 * roundover_radius_in,
            },
            _ => RouterBit::NotApplicable,
        }
    }
}

impl fmt::Display for RouterBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterBit::Chamfer45 => f.write_str("45° Chamfer bit"),
            RouterBit::Chamfer30 => f.write_str("30° Chamfer bit or custom jig"),
            RouterBit::Roundover { diameter_in } => write!(
                f,
                "{}\" Roundover bit",
                format_fixed(*diameter_in, 2, RoundingMode::HalfAwayFromZero)
            ),
            RouterBit::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Input parameters for a bearing edge calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Snare top edge",
///   "shell_thickness_in": 0.75,
///   "edge_type": "45-single"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BearingEdgeInput {
    /// User label for this calculation
    pub label: String,

    /// Shell (board) thickness in inches
    pub shell_thickness_in: f64,

    /// Edge profile catalog key
    pub edge_type: String,
}

impl BearingEdgeInput {
    /// Validate input parameters and resolve the profile.
    pub fn validate(&self) -> CalcResult<&'static EdgeProfile> {
        if !self.shell_thickness_in.is_finite() || self.shell_thickness_in <= 0.0 {
            return Err(CalcError::invalid_input(
                "shell_thickness_in",
                self.shell_thickness_in.to_string(),
                "Shell thickness must be positive",
            ));
        }
        edge_profiles::require(&self.edge_type)
    }
}

/// Results from a bearing edge calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "profile": "45-single",
///   "display_name": "45° Single Cut",
///   "description": "Standard modern edge, bright attack",
///   "outer_angle_deg": 45.0,
///   "inner_angle_deg": 0.0,
///   "outer_cut_width_in": 0.75,
///   "inner_cut_width_in": 0.0,
///   "contact_width_in": 0.03,
///   "roundover_radius_in": 0.0,
///   "router_bit": { "type": "Chamfer45" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingEdgeResult {
    /// Profile that was applied
    pub profile: EdgeProfileId,
    /// Profile display name
    pub display_name: String,
    /// Profile description
    pub description: String,
    /// Outer chamfer angle (degrees)
    pub outer_angle_deg: f64,
    /// Inner chamfer angle (degrees)
    pub inner_angle_deg: f64,
    /// Width of the outer chamfer across the shell (in)
    pub outer_cut_width_in: f64,
    /// Width of the inner chamfer across the shell (in)
    pub inner_cut_width_in: f64,
    /// Width of the edge the head actually touches (in)
    pub contact_width_in: f64,
    /// Roundover radius (in), 0 for sharp edges
    pub roundover_radius_in: f64,
    /// Recommended router bit
    pub router_bit: RouterBit,
}

impl BearingEdgeResult {
    /// True when the profile has an inner cut worth showing
    pub fn has_inner_cut(&self) -> bool {
        self.inner_cut_width_in > 0.0
    }

    /// True when the profile has a roundover worth showing
    pub fn has_roundover(&self) -> bool {
        self.roundover_radius_in > 0.0
    }
}

/// Width of a chamfer cut at `angle_deg` through `thickness_in`
fn cut_width(thickness_in: f64, angle_deg: f64) -> f64 {
    if angle_deg > 0.0 {
        thickness_in * angle_deg.to_radians().tan()
    } else {
        0.0
    }
}

/// Apply a catalog profile to a shell thickness.
pub fn apply_profile(shell_thickness_in: f64, profile: &EdgeProfile) -> BearingEdgeResult {
    let outer_cut_width_in = cut_width(shell_thickness_in, profile.outer_angle_deg);
    let inner_cut_width_in = cut_width(shell_thickness_in, profile.inner_angle_deg);

    let (contact_width_in, roundover_radius_in) = if profile.roundover_factor > 0.0 {
        (
            shell_thickness_in * profile.roundover_factor * 0.5,
            shell_thickness_in * profile.roundover_factor * 0.25,
        )
    } else {
        (SHARP_EDGE_CONTACT_IN, 0.0)
    };

    BearingEdgeResult {
        profile: profile.id,
        display_name: profile.display_name.to_string(),
        description: profile.description.to_string(),
        outer_angle_deg: profile.outer_angle_deg,
        inner_angle_deg: profile.inner_angle_deg,
        outer_cut_width_in,
        inner_cut_width_in,
        contact_width_in,
        roundover_radius_in,
        router_bit: RouterBit::recommend(profile.outer_angle_deg, roundover_radius_in),
    }
}

/// Calculate bearing edge dimensions for a profile key.
///
/// Returns `None` when `edge_type` is not a catalog key; an unknown profile
/// is a caller-input issue, not a computation failure.
pub fn calculate_bearing_edge(
    shell_thickness_in: f64,
    edge_type: &str,
) -> Option<BearingEdgeResult> {
    let Some(profile) = edge_profiles::lookup(edge_type) else {
        debug!(edge_type, "unknown bearing edge profile");
        return None;
    };
    debug!(shell_thickness_in, edge_type, "calculating bearing edge");
    Some(apply_profile(shell_thickness_in, profile))
}

/// Validate a [`BearingEdgeInput`] and calculate its edge.
///
/// # Returns
///
/// * `Ok(BearingEdgeResult)` - Calculation results
/// * `Err(CalcError)` - Non-positive thickness or unknown profile
pub fn calculate(input: &BearingEdgeInput) -> CalcResult<BearingEdgeResult> {
    let profile = input.validate()?;
    Ok(apply_profile(input.shell_thickness_in, profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_45() {
        let edge = calculate_bearing_edge(0.75, "45-single").unwrap();
        assert_relative_eq!(edge.outer_cut_width_in, 0.75, epsilon = 1e-12);
        assert_eq!(edge.inner_cut_width_in, 0.0);
        assert_eq!(edge.contact_width_in, 0.030);
        assert_eq!(edge.roundover_radius_in, 0.0);
        assert_eq!(edge.router_bit.to_string(), "45° Chamfer bit");
        assert_eq!(
            format_fixed(edge.outer_cut_width_in, 3, RoundingMode::HalfAwayFromZero),
            "0.750"
        );
        assert!(!edge.has_inner_cut());
    }

    #[test]
    fn test_double_45() {
        let edge = calculate_bearing_edge(0.5, "45-double").unwrap();
        assert_relative_eq!(edge.outer_cut_width_in, 0.5, epsilon = 1e-12);
        assert_relative_eq!(edge.inner_cut_width_in, 0.5, epsilon = 1e-12);
        assert!(edge.has_inner_cut());
        assert_eq!(edge.router_bit, RouterBit::Chamfer45);
    }

    #[test]
    fn test_full_roundover() {
        let edge = calculate_bearing_edge(0.75, "roundover").unwrap();
        assert_eq!(edge.outer_cut_width_in, 0.0);
        assert_relative_eq!(edge.contact_width_in, 0.375);
        assert_relative_eq!(edge.roundover_radius_in, 0.1875);
        assert_eq!(edge.router_bit, RouterBit::Roundover { diameter_in: 0.375 });
        assert_eq!(edge.router_bit.to_string(), "0.38\" Roundover bit");
        assert!(edge.has_roundover());
    }

    #[test]
    fn test_vintage_prefers_chamfer_bit() {
        let edge = calculate_bearing_edge(0.75, "vintage").unwrap();
        // 0.75 * tan(30°) = 0.4330
        assert_relative_eq!(edge.outer_cut_width_in, 0.4330127, epsilon = 1e-6);
        assert_relative_eq!(edge.roundover_radius_in, 0.09375);
        assert_eq!(edge.router_bit.to_string(), "30° Chamfer bit or custom jig");
    }

    #[test]
    fn test_unknown_profile_is_none() {
        assert!(calculate_bearing_edge(0.75, "bogus").is_none());
        assert!(calculate_bearing_edge(0.75, "").is_none());
    }

    #[test]
    fn test_router_bit_policy() {
        assert_eq!(RouterBit::recommend(45.0, 0.2), RouterBit::Chamfer45);
        assert_eq!(RouterBit::recommend(30.0, 0.0), RouterBit::Chamfer30);
        assert_eq!(RouterBit::recommend(0.0, 0.0), RouterBit::NotApplicable);
        assert_eq!(RouterBit::NotApplicable.to_string(), "N/A");
        assert_eq!(
            RouterBit::recommend(60.0, 0.25),
            RouterBit::Roundover { diameter_in: 0.5 }
        );
    }

    #[test]
    fn test_validated_input() {
        let input = BearingEdgeInput {
            label: "Top".to_string(),
            shell_thickness_in: 0.75,
            edge_type: "45-double".to_string(),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.profile, EdgeProfileId::Double45);

        let bad = BearingEdgeInput {
            edge_type: "bogus".to_string(),
            ..input.clone()
        };
        assert_eq!(calculate(&bad).unwrap_err().error_code(), "UNKNOWN_PROFILE");

        let thin = BearingEdgeInput {
            shell_thickness_in: 0.0,
            ..input
        };
        assert_eq!(calculate(&thin).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_result_serialization() {
        let edge = calculate_bearing_edge(0.75, "roundover").unwrap();
        let json = serde_json::to_string(&edge).unwrap();
        assert!(json.contains("\"profile\":\"roundover\""));
        let roundtrip: BearingEdgeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.profile, edge.profile);
        assert_eq!(roundtrip.router_bit, edge.router_bit);
        assert_eq!(roundtrip.display_name, "Full Roundover");
    }
}
