//! # Stave Shell Geometry
//!
//! Cut angles, stave widths and material takeoff for a segmented (stave)
//! drum shell: `n` flat boards with beveled long edges glued into a ring
//! and then turned round.
//!
//! ## Method
//!
//! For `n` staves around an outer radius `R`, with board thickness `t`:
//!
//! - Joint angle = 180° / n (edge angle so n staves close a full circle)
//! - Bevel angle = 90° - joint angle (table saw blade tilt)
//! - Outer stave width = 2R × sin(π/n)
//! - Inner stave width = 2(R - t) × sin(π/n)
//! - Board feet = (cut width × cut length × n) / 144 × (1 + waste)
//!
//! Board footage is face area over 144 in²: stave stock is bought as
//! nominal 1" lumber, so thinner boards are still billed a full inch.
//!
//! ## Allowances
//!
//! - `extra_in` oversizes the diameter to leave stock for truing the shell
//! - `rip_kerf_in` / `crosscut_kerf_in` add blade kerf to each stave blank
//!   before board footage is computed
//!
//! All allowances default to zero, in which case the cut blank equals the
//! outer stave width by the shell depth.
//!
//! ## Example
//!
//! ```rust
//! use stave_core::calculations::shell::compute_shell;
//!
//! let shell = compute_shell(12, 14.0, 6.5, 0.75, 0.15, 8.0).unwrap();
//! assert_eq!(shell.joint_angle_deg, 15.0);
//! assert_eq!(shell.bevel_angle_deg, 75.0);
//! assert!((shell.outer_dimension_in - 3.6235).abs() < 1e-4);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::measurement::to_fraction;
use crate::units::BoardFeet;

/// Fewest staves that can close a ring
pub const MIN_STAVES: u32 = 3;

/// Input parameters for a stave shell.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "14x6.5 snare",
///   "stave_count": 12,
///   "shell_diameter_in": 14.0,
///   "shell_depth_in": 6.5,
///   "board_thickness_in": 0.75,
///   "waste_factor": 0.15,
///   "board_cost_per_board_foot": 8.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellInput {
    /// User label for this shell (e.g., "14x6.5 snare")
    #[serde(default)]
    pub label: String,

    /// Number of staves in the ring
    pub stave_count: u32,

    /// Finished outer shell diameter (in)
    pub shell_diameter_in: f64,

    /// Shell depth, which is also the stave length (in)
    pub shell_depth_in: f64,

    /// Board thickness (in)
    pub board_thickness_in: f64,

    /// Waste allowance as a fraction (0.15 = 15%)
    #[serde(default)]
    pub waste_factor: f64,

    /// Lumber cost per board foot
    #[serde(default)]
    pub board_cost_per_board_foot: f64,

    /// Oversize allowance added to the diameter for truing (in)
    #[serde(default)]
    pub extra_in: f64,

    /// Rip blade kerf added to each stave's width (in)
    #[serde(default)]
    pub rip_kerf_in: f64,

    /// Crosscut blade kerf added to each stave's length (in)
    #[serde(default)]
    pub crosscut_kerf_in: f64,

    /// Width of the boards the staves are ripped from (in), if known
    #[serde(default)]
    pub board_width_in: Option<f64>,
}

impl ShellInput {
    /// Create an input with no waste, cost or allowances.
    pub fn new(
        stave_count: u32,
        shell_diameter_in: f64,
        shell_depth_in: f64,
        board_thickness_in: f64,
    ) -> Self {
        ShellInput {
            label: String::new(),
            stave_count,
            shell_diameter_in,
            shell_depth_in,
            board_thickness_in,
            waste_factor: 0.0,
            board_cost_per_board_foot: 0.0,
            extra_in: 0.0,
            rip_kerf_in: 0.0,
            crosscut_kerf_in: 0.0,
            board_width_in: None,
        }
    }

    /// Set the user label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the waste allowance (fraction)
    pub fn with_waste_factor(mut self, waste_factor: f64) -> Self {
        self.waste_factor = waste_factor;
        self
    }

    /// Set the lumber cost per board foot
    pub fn with_board_cost(mut self, cost_per_board_foot: f64) -> Self {
        self.board_cost_per_board_foot = cost_per_board_foot;
        self
    }

    /// Set the diameter oversize allowance
    pub fn with_extra(mut self, extra_in: f64) -> Self {
        self.extra_in = extra_in;
        self
    }

    /// Set rip and crosscut kerfs
    pub fn with_kerfs(mut self, rip_kerf_in: f64, crosscut_kerf_in: f64) -> Self {
        self.rip_kerf_in = rip_kerf_in;
        self.crosscut_kerf_in = crosscut_kerf_in;
        self
    }

    /// Set the stock board width for the cut list
    pub fn with_board_width(mut self, board_width_in: f64) -> Self {
        self.board_width_in = Some(board_width_in);
        self
    }

    /// Outer radius of the glued ring before truing
    pub fn outer_radius_in(&self) -> f64 {
        (self.shell_diameter_in + self.extra_in) / 2.0
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.stave_count < MIN_STAVES {
            return Err(CalcError::invalid_input(
                "stave_count",
                self.stave_count.to_string(),
                format!("At least {} staves are required", MIN_STAVES),
            ));
        }
        require_positive("shell_diameter_in", self.shell_diameter_in)?;
        require_positive("shell_depth_in", self.shell_depth_in)?;
        require_positive("board_thickness_in", self.board_thickness_in)?;
        require_non_negative("waste_factor", self.waste_factor)?;
        require_non_negative("board_cost_per_board_foot", self.board_cost_per_board_foot)?;
        require_non_negative("extra_in", self.extra_in)?;
        require_non_negative("rip_kerf_in", self.rip_kerf_in)?;
        require_non_negative("crosscut_kerf_in", self.crosscut_kerf_in)?;
        if let Some(width) = self.board_width_in {
            require_positive("board_width_in", width)?;
        }
        if self.board_thickness_in >= self.outer_radius_in() {
            return Err(CalcError::invalid_input(
                "board_thickness_in",
                self.board_thickness_in.to_string(),
                "Board thickness must be less than the shell radius",
            ));
        }
        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive number",
        ));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Cannot be negative",
        ));
    }
    Ok(())
}

/// How the stave blanks come out of stock boards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutList {
    /// Stock board width (in)
    pub board_width_in: f64,
    /// Stave blanks that fit side by side across one board
    pub staves_per_board: u32,
    /// Board lengths (each one stave blank long) needed for the shell
    pub boards_required: u32,
}

/// Results from a shell geometry calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "stave_count": 12,
///   "joint_angle_deg": 15.0,
///   "bevel_angle_deg": 75.0,
///   "outer_dimension_in": 3.623,
///   "inner_dimension_in": 3.235,
///   "board_feet_required": 2.26,
///   "shell_cost": 18.06
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellGeometry {
    /// Number of staves
    pub stave_count: u32,

    /// Edge angle of each stave (degrees)
    pub joint_angle_deg: f64,

    /// Table saw blade tilt (degrees), 90 - joint angle
    pub bevel_angle_deg: f64,

    /// Outer radius of the ring, including the extra allowance (in)
    pub outer_radius_in: f64,

    /// Inner radius of the ring (in)
    pub inner_radius_in: f64,

    /// Stave width at the outer face (in)
    pub outer_dimension_in: f64,

    /// Stave width at the inner face (in)
    pub inner_dimension_in: f64,

    /// Finished stave length, equal to the shell depth (in)
    pub stave_length_in: f64,

    /// Stave blank width including rip kerf (in)
    pub cut_width_in: f64,

    /// Stave blank length including crosscut kerf (in)
    pub cut_length_in: f64,

    /// Lumber in one stave blank (board feet)
    pub board_feet_per_stave: f64,

    /// Total lumber including waste (board feet)
    pub board_feet_required: f64,

    /// Lumber cost for the shell
    pub shell_cost: f64,

    /// Cut list, when a stock board width was given
    pub cut_list: Option<CutList>,
}

impl ShellGeometry {
    /// Outer stave width as a tape-measure fraction
    pub fn outer_dimension_fraction(&self) -> String {
        to_fraction(self.outer_dimension_in)
    }

    /// Inner stave width as a tape-measure fraction
    pub fn inner_dimension_fraction(&self) -> String {
        to_fraction(self.inner_dimension_in)
    }
}

/// Calculate shell geometry from a validated input.
///
/// # Returns
///
/// * `Ok(ShellGeometry)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - Out-of-range parameters
/// * `Err(CalcError::CalculationFailed)` - Board narrower than one stave blank
pub fn calculate(input: &ShellInput) -> CalcResult<ShellGeometry> {
    input.validate()?;
    debug!(
        stave_count = input.stave_count,
        diameter_in = input.shell_diameter_in,
        depth_in = input.shell_depth_in,
        thickness_in = input.board_thickness_in,
        "calculating shell geometry"
    );

    let n = input.stave_count as f64;
    let joint_angle_deg = 180.0 / n;
    let bevel_angle_deg = 90.0 - joint_angle_deg;

    let chord = (PI / n).sin() * 2.0;
    let outer_radius_in = input.outer_radius_in();
    let inner_radius_in = outer_radius_in - input.board_thickness_in;
    let outer_dimension_in = chord * outer_radius_in;
    let inner_dimension_in = chord * inner_radius_in;

    let cut_width_in = outer_dimension_in + input.rip_kerf_in;
    let cut_length_in = input.shell_depth_in + input.crosscut_kerf_in;
    let per_stave = BoardFeet::from_face(cut_width_in, cut_length_in);
    let required = per_stave * n * (1.0 + input.waste_factor);

    let cut_list = match input.board_width_in {
        Some(board_width_in) => {
            Some(plan_cuts(board_width_in, cut_width_in, input.stave_count)?)
        }
        None => None,
    };

    Ok(ShellGeometry {
        stave_count: input.stave_count,
        joint_angle_deg,
        bevel_angle_deg,
        outer_radius_in,
        inner_radius_in,
        outer_dimension_in,
        inner_dimension_in,
        stave_length_in: input.shell_depth_in,
        cut_width_in,
        cut_length_in,
        board_feet_per_stave: per_stave.value(),
        board_feet_required: required.value(),
        shell_cost: required.value() * input.board_cost_per_board_foot,
        cut_list,
    })
}

fn plan_cuts(board_width_in: f64, cut_width_in: f64, stave_count: u32) -> CalcResult<CutList> {
    let staves_per_board = (board_width_in / cut_width_in).floor() as u32;
    if staves_per_board == 0 {
        return Err(CalcError::calculation_failed(
            "Shell",
            format!(
                "Board width {:.3}\" is narrower than one stave blank ({:.3}\")",
                board_width_in, cut_width_in
            ),
        ));
    }
    Ok(CutList {
        board_width_in,
        staves_per_board,
        boards_required: stave_count.div_ceil(staves_per_board),
    })
}

/// Compute shell geometry from bare parameters.
///
/// `waste_factor` is a fraction (0.15 = 15%); `board_cost` is per board foot.
pub fn compute_shell(
    stave_count: u32,
    shell_diameter_in: f64,
    shell_depth_in: f64,
    board_thickness_in: f64,
    waste_factor: f64,
    board_cost: f64,
) -> CalcResult<ShellGeometry> {
    let input = ShellInput::new(
        stave_count,
        shell_diameter_in,
        shell_depth_in,
        board_thickness_in,
    )
    .with_waste_factor(waste_factor)
    .with_board_cost(board_cost);
    calculate(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn snare() -> ShellInput {
        ShellInput::new(12, 14.0, 6.5, 0.75)
            .with_label("14x6.5 snare")
            .with_waste_factor(0.15)
            .with_board_cost(8.0)
    }

    #[test]
    fn test_snare_angles() {
        let shell = calculate(&snare()).unwrap();
        assert_eq!(shell.joint_angle_deg, 15.0);
        assert_eq!(shell.bevel_angle_deg, 75.0);
    }

    #[test]
    fn test_snare_dimensions() {
        let shell = calculate(&snare()).unwrap();
        assert_relative_eq!(shell.outer_dimension_in, 3.6234666, epsilon = 1e-6);
        assert_relative_eq!(shell.inner_dimension_in, 3.2352381, epsilon = 1e-6);
        assert_eq!(shell.outer_radius_in, 7.0);
        assert_eq!(shell.inner_radius_in, 6.25);
        assert_eq!(shell.outer_dimension_fraction(), "3 5/8");
    }

    #[test]
    fn test_snare_material() {
        let shell = calculate(&snare()).unwrap();
        assert_relative_eq!(shell.board_feet_required, 2.2571178, epsilon = 1e-6);
        assert_relative_eq!(shell.shell_cost, 18.0569420, epsilon = 1e-6);
        assert!(shell.cut_list.is_none());
    }

    #[test]
    fn test_no_waste_board_feet() {
        let shell = compute_shell(12, 14.0, 6.5, 0.75, 0.0, 0.0).unwrap();
        assert_relative_eq!(shell.board_feet_required, 1.9627111, epsilon = 1e-6);
        assert_eq!(shell.shell_cost, 0.0);
    }

    #[test]
    fn test_board_feet_ignore_thickness() {
        // 1/2" and 3/4" stock of the same face area cost the same lumber
        let thin = compute_shell(12, 14.0, 6.5, 0.5, 0.0, 1.0).unwrap();
        let thick = compute_shell(12, 14.0, 6.5, 0.75, 0.0, 1.0).unwrap();
        assert_relative_eq!(thin.board_feet_required, thick.board_feet_required);

        let face = thick.outer_dimension_in * 6.5 * 12.0 / 144.0;
        assert_relative_eq!(thick.board_feet_required, face, epsilon = 1e-12);
        assert_relative_eq!(thick.board_feet_per_stave * 12.0, face, epsilon = 1e-12);
    }

    #[test]
    fn test_complementary_angles() {
        for n in MIN_STAVES..=96 {
            let shell = compute_shell(n, 14.0, 6.5, 0.75, 0.0, 0.0).unwrap();
            assert_relative_eq!(shell.joint_angle_deg + shell.bevel_angle_deg, 90.0);
        }
    }

    #[test]
    fn test_staves_close_the_ring() {
        // n chords at the outer radius subtend the full circle
        let shell = compute_shell(8, 22.0, 18.0, 1.0, 0.0, 0.0).unwrap();
        let half_angle = (shell.outer_dimension_in / 2.0 / shell.outer_radius_in).asin();
        assert_relative_eq!(half_angle * 2.0 * 8.0, 2.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn test_allowances() {
        let input = snare()
            .with_waste_factor(0.10)
            .with_extra(0.25)
            .with_kerfs(0.125, 0.125);
        let shell = calculate(&input).unwrap();
        assert_eq!(shell.outer_radius_in, 7.125);
        assert_relative_eq!(shell.outer_dimension_in, 3.6881714, epsilon = 1e-6);
        assert_relative_eq!(shell.cut_width_in, 3.8131714, epsilon = 1e-6);
        assert_eq!(shell.cut_length_in, 6.625);
        assert_eq!(shell.stave_length_in, 6.5);
        assert_relative_eq!(shell.board_feet_per_stave, 0.1754324, epsilon = 1e-6);
        assert_relative_eq!(shell.board_feet_required, 2.3157072, epsilon = 1e-6);
    }

    #[test]
    fn test_cut_list() {
        let input = snare()
            .with_kerfs(0.125, 0.125)
            .with_extra(0.25)
            .with_board_width(8.0);
        let cut_list = calculate(&input).unwrap().cut_list.unwrap();
        assert_eq!(cut_list.staves_per_board, 2);
        assert_eq!(cut_list.boards_required, 6);

        let input = snare().with_board_width(5.5);
        let cut_list = calculate(&input).unwrap().cut_list.unwrap();
        assert_eq!(cut_list.staves_per_board, 1);
        assert_eq!(cut_list.boards_required, 12);
    }

    #[test]
    fn test_board_too_narrow() {
        let input = snare().with_board_width(2.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_invalid_stave_count() {
        let err = compute_shell(2, 14.0, 6.5, 0.75, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "stave_count"));
        assert!(compute_shell(3, 14.0, 6.5, 0.75, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_lengths() {
        assert!(compute_shell(12, 0.0, 6.5, 0.75, 0.0, 0.0).is_err());
        assert!(compute_shell(12, 14.0, -1.0, 0.75, 0.0, 0.0).is_err());
        assert!(compute_shell(12, 14.0, 6.5, 0.0, 0.0, 0.0).is_err());
        assert!(compute_shell(12, f64::NAN, 6.5, 0.75, 0.0, 0.0).is_err());
        assert!(compute_shell(12, 14.0, 6.5, 0.75, -0.1, 0.0).is_err());
        assert!(compute_shell(12, 14.0, 6.5, 0.75, 0.0, -5.0).is_err());
    }

    #[test]
    fn test_thickness_exceeds_radius() {
        let err = compute_shell(12, 4.0, 6.5, 2.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidInput { ref field, .. } if field == "board_thickness_in"
        ));
    }

    #[test]
    fn test_input_serialization_defaults() {
        let json = r#"{
            "stave_count": 10,
            "shell_diameter_in": 22.0,
            "shell_depth_in": 18.0,
            "board_thickness_in": 0.5
        }"#;
        let input: ShellInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.waste_factor, 0.0);
        assert_eq!(input.board_width_in, None);

        let shell = calculate(&input).unwrap();
        assert_relative_eq!(shell.outer_dimension_in, 6.7983739, epsilon = 1e-6);
        assert_relative_eq!(shell.inner_dimension_in, 6.4893569, epsilon = 1e-6);
    }
}
