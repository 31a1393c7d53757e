//! Bearing Edge Profiles
//!
//! The fixed catalog of bearing edge shapes the bearing edge calculator
//! understands. Profiles are keyed by a short id (`45-single`, `45-double`,
//! `roundover`, `vintage`) and never change at runtime.
//!
//! | Key         | Outer | Inner | Roundover |
//! |-------------|-------|-------|-----------|
//! | `45-single` | 45°   | -     | -         |
//! | `45-double` | 45°   | 45°   | -         |
//! | `roundover` | -     | -     | full      |
//! | `vintage`   | 30°   | -     | half      |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Identifier of a catalog edge profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EdgeProfileId {
    /// 45° outer cut only
    #[default]
    #[serde(rename = "45-single")]
    Single45,
    /// 45° outer and inner cuts
    #[serde(rename = "45-double")]
    Double45,
    /// Full roundover, no chamfer
    #[serde(rename = "roundover")]
    Roundover,
    /// 30° outer cut with a partial roundover
    #[serde(rename = "vintage")]
    Vintage,
}

impl EdgeProfileId {
    /// All profiles in catalog order
    pub const ALL: [EdgeProfileId; 4] = [
        EdgeProfileId::Single45,
        EdgeProfileId::Double45,
        EdgeProfileId::Roundover,
        EdgeProfileId::Vintage,
    ];

    /// Catalog key (e.g., "45-single")
    pub fn key(&self) -> &'static str {
        match self {
            EdgeProfileId::Single45 => "45-single",
            EdgeProfileId::Double45 => "45-double",
            EdgeProfileId::Roundover => "roundover",
            EdgeProfileId::Vintage => "vintage",
        }
    }

    /// Catalog entry for this id
    pub fn profile(&self) -> &'static EdgeProfile {
        match self {
            EdgeProfileId::Single45 => &SINGLE_45,
            EdgeProfileId::Double45 => &DOUBLE_45,
            EdgeProfileId::Roundover => &FULL_ROUNDOVER,
            EdgeProfileId::Vintage => &VINTAGE_ROUND,
        }
    }
}

impl fmt::Display for EdgeProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EdgeProfileId {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeProfileId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| CalcError::unknown_profile(s))
    }
}

/// Shape of one bearing edge profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeProfile {
    /// Catalog id
    pub id: EdgeProfileId,
    /// Name shown to the user (e.g., "45° Single Cut")
    pub display_name: &'static str,
    /// Short tonal description
    pub description: &'static str,
    /// Outer chamfer angle in degrees (0 = no outer cut)
    pub outer_angle_deg: f64,
    /// Inner chamfer angle in degrees (0 = no inner cut)
    pub inner_angle_deg: f64,
    /// Fraction of the shell thickness that is rounded over, 0..=1
    pub roundover_factor: f64,
}

static SINGLE_45: EdgeProfile = EdgeProfile {
    id: EdgeProfileId::Single45,
    display_name: "45° Single Cut",
    description: "Standard modern edge, bright attack",
    outer_angle_deg: 45.0,
    inner_angle_deg: 0.0,
    roundover_factor: 0.0,
};

static DOUBLE_45: EdgeProfile = EdgeProfile {
    id: EdgeProfileId::Double45,
    display_name: "45° Double Cut",
    description: "Balanced tone, versatile",
    outer_angle_deg: 45.0,
    inner_angle_deg: 45.0,
    roundover_factor: 0.0,
};

static FULL_ROUNDOVER: EdgeProfile = EdgeProfile {
    id: EdgeProfileId::Roundover,
    display_name: "Full Roundover",
    description: "Warm, vintage tone",
    outer_angle_deg: 0.0,
    inner_angle_deg: 0.0,
    roundover_factor: 1.0,
};

static VINTAGE_ROUND: EdgeProfile = EdgeProfile {
    id: EdgeProfileId::Vintage,
    display_name: "Vintage Round",
    description: "30° with roundover, warm sustain",
    outer_angle_deg: 30.0,
    inner_angle_deg: 0.0,
    roundover_factor: 0.5,
};

/// Catalog keyed by profile key
static EDGE_PROFILES: Lazy<HashMap<&'static str, &'static EdgeProfile>> = Lazy::new(|| {
    EdgeProfileId::ALL
        .into_iter()
        .map(|id| (id.key(), id.profile()))
        .collect()
});

/// Look up a profile by key. Returns `None` for unknown keys.
pub fn lookup(key: &str) -> Option<&'static EdgeProfile> {
    EDGE_PROFILES.get(key).copied()
}

/// Look up a profile by key, reporting unknown keys as `UnknownProfile`.
pub fn require(key: &str) -> CalcResult<&'static EdgeProfile> {
    lookup(key).ok_or_else(|| CalcError::unknown_profile(key))
}

/// All profiles in catalog order (for selection lists)
pub fn all() -> impl Iterator<Item = &'static EdgeProfile> {
    EdgeProfileId::ALL.into_iter().map(|id| id.profile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys() {
        for id in EdgeProfileId::ALL {
            let profile = lookup(id.key()).unwrap();
            assert_eq!(profile.id, id);
        }
        assert_eq!(all().count(), 4);
    }

    #[test]
    fn test_unknown_key() {
        assert!(lookup("bogus").is_none());
        assert_eq!(require("bogus").unwrap_err(), CalcError::unknown_profile("bogus"));
        assert!("45-SINGLE".parse::<EdgeProfileId>().is_err());
    }

    #[test]
    fn test_roundover_factors_in_range() {
        for profile in all() {
            assert!((0.0..=1.0).contains(&profile.roundover_factor));
        }
    }

    #[test]
    fn test_vintage_profile() {
        let vintage = require("vintage").unwrap();
        assert_eq!(vintage.display_name, "Vintage Round");
        assert_eq!(vintage.outer_angle_deg, 30.0);
        assert_eq!(vintage.roundover_factor, 0.5);
    }

    #[test]
    fn test_id_serialization() {
        let json = serde_json::to_string(&EdgeProfileId::Double45).unwrap();
        assert_eq!(json, "\"45-double\"");
        let id: EdgeProfileId = serde_json::from_str("\"roundover\"").unwrap();
        assert_eq!(id, EdgeProfileId::Roundover);
        assert_eq!("vintage".parse::<EdgeProfileId>().unwrap(), EdgeProfileId::Vintage);
    }
}
