//! Standard Drum Sizes
//!
//! Common shell sizes (diameter x depth, inches) used to prefill a shell
//! calculation.

use serde::Serialize;

use crate::units::LengthUnit;

/// A standard drum size
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrumPreset {
    /// Display name (e.g., "14x6.5 Snare")
    pub name: &'static str,
    /// Shell diameter (in)
    pub diameter_in: f64,
    /// Shell depth (in)
    pub depth_in: f64,
}

impl DrumPreset {
    /// (diameter, depth) expressed in `unit`
    pub fn dimensions(&self, unit: LengthUnit) -> (f64, f64) {
        (unit.in_unit(self.diameter_in), unit.in_unit(self.depth_in))
    }
}

const fn preset(name: &'static str, diameter_in: f64, depth_in: f64) -> DrumPreset {
    DrumPreset {
        name,
        diameter_in,
        depth_in,
    }
}

/// All presets, snares first, then toms, floor toms and bass drums
pub static PRESETS: [DrumPreset; 16] = [
    preset("13x3.5 Piccolo Snare", 13.0, 3.5),
    preset("14x5 Snare", 14.0, 5.0),
    preset("14x5.5 Snare", 14.0, 5.5),
    preset("14x6.5 Snare", 14.0, 6.5),
    preset("14x8 Snare", 14.0, 8.0),
    preset("8x7 Tom", 8.0, 7.0),
    preset("10x8 Tom", 10.0, 8.0),
    preset("12x8 Tom", 12.0, 8.0),
    preset("12x9 Tom", 12.0, 9.0),
    preset("13x10 Tom", 13.0, 10.0),
    preset("14x14 Floor Tom", 14.0, 14.0),
    preset("16x16 Floor Tom", 16.0, 16.0),
    preset("18x16 Floor Tom", 18.0, 16.0),
    preset("20x16 Bass Drum", 20.0, 16.0),
    preset("22x18 Bass Drum", 22.0, 18.0),
    preset("24x14 Bass Drum", 24.0, 14.0),
];

/// Find a preset by name, ignoring ASCII case
pub fn find(name: &str) -> Option<&'static DrumPreset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}
