//! # Calculator Settings
//!
//! Defaults applied when form fields are left blank, plus display
//! preferences. Settings are plain JSON so the embedding application can
//! keep them wherever it likes.
//!
//! ## Example
//!
//! ```rust
//! use stave_core::settings::CalculatorSettings;
//! use stave_core::units::LengthUnit;
//!
//! let settings = CalculatorSettings::from_json(r#"{ "unit": "cm" }"#).unwrap();
//! assert_eq!(settings.unit, LengthUnit::Centimeters);
//! assert_eq!(settings.fraction_base, 32);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::lug_spacing::{LUG_COUNT_RANGE, MAX_LUGS, MIN_LUGS};
use crate::errors::{CalcError, CalcResult};
use crate::format::format_length;
use crate::measurement::{to_fraction_with_base, DEFAULT_FRACTION_BASE};
use crate::units::LengthUnit;

/// Defaults and display preferences for the calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Unit lengths are entered and displayed in
    pub unit: LengthUnit,

    /// Finest fraction graduation for display (32 = 1/32")
    pub fraction_base: u32,

    /// Default waste allowance, percent
    pub waste_percent: f64,

    /// Default lumber cost per board foot
    pub board_cost_per_board_foot: f64,

    /// Default rip kerf (in)
    pub rip_kerf_in: f64,

    /// Default crosscut kerf (in)
    pub crosscut_kerf_in: f64,

    /// Default lug hole offset from the bearing edge (in)
    pub lug_offset_in: f64,

    /// Default lug count, used when the lug count field is blank
    pub lug_count: u32,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            unit: LengthUnit::Inches,
            fraction_base: DEFAULT_FRACTION_BASE,
            waste_percent: 15.0,
            board_cost_per_board_foot: 0.0,
            rip_kerf_in: 0.0,
            crosscut_kerf_in: 0.0,
            lug_offset_in: 1.0,
            lug_count: 8,
        }
    }
}

impl CalculatorSettings {
    /// Parse settings from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: CalculatorSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Default waste as a fraction (15% -> 0.15)
    pub fn waste_factor(&self) -> f64 {
        self.waste_percent / 100.0
    }

    /// A length in inches as the user reads it: a tape-measure fraction at
    /// `fraction_base` when working in inches, one decimal place in cm.
    pub fn display_length(&self, inches: f64) -> String {
        match self.unit {
            LengthUnit::Inches => {
                format!("{}\"", to_fraction_with_base(inches, self.fraction_base))
            }
            LengthUnit::Centimeters => format_length(inches, LengthUnit::Centimeters, 1),
        }
    }

    /// Validate settings values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.fraction_base == 0 || !self.fraction_base.is_power_of_two() {
            return Err(CalcError::invalid_input(
                "fraction_base",
                self.fraction_base.to_string(),
                "Fraction base must be a power of two",
            ));
        }
        if !LUG_COUNT_RANGE.contains(&self.lug_count) {
            return Err(CalcError::invalid_input(
                "lug_count",
                self.lug_count.to_string(),
                format!("Lug count must be between {} and {}", MIN_LUGS, MAX_LUGS),
            ));
        }
        let non_negative = [
            ("waste_percent", self.waste_percent),
            ("board_cost_per_board_foot", self.board_cost_per_board_foot),
            ("rip_kerf_in", self.rip_kerf_in),
            ("crosscut_kerf_in", self.crosscut_kerf_in),
            ("lug_offset_in", self.lug_offset_in),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Cannot be negative",
                ));
            }
        }
        Ok(())
    }
}
