//! # Form Input
//!
//! Turns the raw strings an input form collects into validated calculator
//! inputs. Field names match the form's field names (`stave_count`,
//! `shell_diameter`, `board_thickness`, ...). Lengths accept everything
//! [`parse_length`](crate::measurement::parse_length) accepts and are read
//! in the form's unit unless they carry their own suffix.
//!
//! ## Example
//!
//! ```rust
//! use stave_core::form::ShellForm;
//! use stave_core::settings::CalculatorSettings;
//!
//! let form = ShellForm {
//!     stave_count: "12".into(),
//!     shell_diameter: "14".into(),
//!     shell_depth: "6 1/2".into(),
//!     board_thickness: "3/4".into(),
//!     ..ShellForm::default()
//! };
//! let shell = form.calculate(&CalculatorSettings::default()).unwrap();
//! assert_eq!(shell.joint_angle_deg, 15.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::bearing_edge::{self, BearingEdgeInput, BearingEdgeResult};
use crate::calculations::lug_spacing::{self, LugLayout, LugSpacingInput, LUG_COUNT_RANGE};
use crate::calculations::shell::{self, ShellGeometry, ShellInput};
use crate::errors::{CalcError, CalcResult};
use crate::measurement::{parse_inches, parse_length};
use crate::settings::CalculatorSettings;
use crate::units::LengthUnit;

/// Raw shell form values, exactly as typed.
///
/// Blank optional fields fall back to [`CalculatorSettings`]. `waste_factor`
/// is a percentage (`15` = 15%).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellForm {
    /// "in" or "cm"; blank uses the settings unit
    pub unit: String,
    /// Number of staves (whole number)
    pub stave_count: String,
    /// Finished outer diameter
    pub shell_diameter: String,
    /// Diameter oversize allowance for truing
    pub extra: String,
    /// Shell depth
    pub shell_depth: String,
    /// Board thickness
    pub board_thickness: String,
    /// Stock board width for the cut list
    pub board_width: String,
    /// Cost per board foot
    pub board_cost: String,
    /// Crosscut blade kerf
    pub crosscut_kerf: String,
    /// Rip blade kerf
    pub rip_kerf: String,
    /// Waste allowance, percent
    pub waste_factor: String,
}

impl ShellForm {
    /// Resolve the form's length unit
    pub fn unit(&self, settings: &CalculatorSettings) -> CalcResult<LengthUnit> {
        resolve_unit(&self.unit, settings)
    }

    /// Parse and validate the form into a [`ShellInput`].
    pub fn to_input(&self, settings: &CalculatorSettings) -> CalcResult<ShellInput> {
        let unit = self.unit(settings)?;

        let stave_count = parse_count("stave_count", &self.stave_count)?;
        let diameter = required_length("shell_diameter", &self.shell_diameter, unit)?;
        let depth = required_length("shell_depth", &self.shell_depth, unit)?;
        let thickness = required_length("board_thickness", &self.board_thickness, unit)?;

        let extra = optional_length(&self.extra, unit)?.unwrap_or(0.0);
        let rip_kerf = optional_length(&self.rip_kerf, unit)?.unwrap_or(settings.rip_kerf_in);
        let crosscut_kerf =
            optional_length(&self.crosscut_kerf, unit)?.unwrap_or(settings.crosscut_kerf_in);
        let waste_factor = match optional_number(&self.waste_factor)? {
            Some(percent) => percent / 100.0,
            None => settings.waste_factor(),
        };
        let board_cost =
            optional_number(&self.board_cost)?.unwrap_or(settings.board_cost_per_board_foot);

        let mut input = ShellInput::new(stave_count, diameter, depth, thickness)
            .with_waste_factor(waste_factor)
            .with_board_cost(board_cost)
            .with_extra(extra)
            .with_kerfs(rip_kerf, crosscut_kerf);
        if let Some(width) = optional_length(&self.board_width, unit)? {
            input = input.with_board_width(width);
        }

        input.validate()?;
        Ok(input)
    }

    /// Parse the form and compute the shell.
    pub fn calculate(&self, settings: &CalculatorSettings) -> CalcResult<ShellGeometry> {
        shell::calculate(&self.to_input(settings)?)
    }
}

/// Bearing edge from a thickness field and an edge profile key.
///
/// `Ok(None)` for an unknown profile key; `Err` when the thickness does not
/// parse or is not positive.
pub fn bearing_edge_from_form(
    board_thickness: &str,
    unit: LengthUnit,
    edge_type: &str,
) -> CalcResult<Option<BearingEdgeResult>> {
    let input = BearingEdgeInput {
        label: String::new(),
        shell_thickness_in: required_length("board_thickness", board_thickness, unit)?,
        edge_type: edge_type.to_string(),
    };
    match bearing_edge::calculate(&input) {
        Err(CalcError::UnknownProfile { key }) => {
            debug!(key = key.as_str(), "unknown bearing edge profile");
            Ok(None)
        }
        result => result.map(Some),
    }
}

/// Lug layout from diameter, lug count and offset fields.
///
/// A blank lug count uses the settings default. A blank, unreadable or zero
/// offset falls back to the settings default; a negative one is an error.
/// `Ok(None)` when the lug count is outside the supported range.
pub fn lug_spacing_from_form(
    shell_diameter: &str,
    unit: LengthUnit,
    lug_count: &str,
    offset: &str,
    settings: &CalculatorSettings,
) -> CalcResult<Option<LugLayout>> {
    let diameter_in = required_length("shell_diameter", shell_diameter, unit)?;
    let lug_count = if lug_count.trim().is_empty() {
        settings.lug_count
    } else {
        parse_count("lug_count", lug_count)?
    };

    let offset_from_edge_in = match parse_inches(offset, unit) {
        Ok(value) if value != 0.0 => value,
        _ => {
            debug!(offset, fallback_in = settings.lug_offset_in, "using default lug offset");
            settings.lug_offset_in
        }
    };

    if !LUG_COUNT_RANGE.contains(&lug_count) {
        debug!(lug_count, "lug count outside supported range");
        return Ok(None);
    }

    let input = LugSpacingInput {
        label: String::new(),
        diameter_in,
        lug_count,
        offset_from_edge_in,
    };
    lug_spacing::calculate(&input).map(Some)
}

fn resolve_unit(text: &str, settings: &CalculatorSettings) -> CalcResult<LengthUnit> {
    if text.trim().is_empty() {
        Ok(settings.unit)
    } else {
        text.parse()
    }
}

fn required_length(field: &str, text: &str, unit: LengthUnit) -> CalcResult<f64> {
    if text.trim().is_empty() {
        return Err(CalcError::missing_field(field));
    }
    parse_inches(text, unit)
}

fn optional_length(text: &str, unit: LengthUnit) -> CalcResult<Option<f64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_inches(text, unit).map(Some)
}

fn optional_number(text: &str) -> CalcResult<Option<f64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_length(text).map(Some)
}

fn parse_count(field: &str, text: &str) -> CalcResult<u32> {
    if text.trim().is_empty() {
        return Err(CalcError::missing_field(field));
    }
    let value = parse_length(text)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(CalcError::invalid_input(
            field,
            text,
            "Must be a whole number",
        ));
    }
    Ok(value as u32)
}
