//! # Shell Comparison
//!
//! Side-by-side diff of two shell configurations ("A" and "B"). The diff is
//! a pure function of its two inputs; [`Comparison`] is a plain two-slot
//! value the caller owns and passes around.
//!
//! Values are compared at their display precision, so two shells that show
//! the same joint angle to two places report a difference of `0`. Any other
//! difference keeps its sign, even one too small for two places (`+0.00`).
//!
//! ## Example
//!
//! ```rust
//! use stave_core::calculations::shell::compute_shell;
//! use stave_core::comparison::{Comparison, Slot};
//!
//! let a = compute_shell(12, 14.0, 6.5, 0.75, 0.15, 8.0).unwrap();
//! let b = compute_shell(16, 14.0, 6.5, 0.75, 0.15, 8.0).unwrap();
//!
//! let comparison = Comparison::default().with(Slot::A, a).with(Slot::B, b);
//! let rows = comparison.rows();
//! assert_eq!(rows[0].label, "Stave Count");
//! assert_eq!(rows[0].display_difference(), "+4.00");
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::shell::ShellGeometry;
use crate::format::{format_fixed, format_signed, round_to, RoundingMode};

/// Placeholder shown for a missing value
pub const ABSENT: &str = "-";

/// The fields compared between two shells, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonField {
    StaveCount,
    JointAngle,
    BevelAngle,
    OuterDimension,
    InnerDimension,
    BoardFeet,
    Cost,
}

impl ComparisonField {
    /// All fields in display order
    pub const ALL: [ComparisonField; 7] = [
        ComparisonField::StaveCount,
        ComparisonField::JointAngle,
        ComparisonField::BevelAngle,
        ComparisonField::OuterDimension,
        ComparisonField::InnerDimension,
        ComparisonField::BoardFeet,
        ComparisonField::Cost,
    ];

    /// Row label
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonField::StaveCount => "Stave Count",
            ComparisonField::JointAngle => "Joint Angle",
            ComparisonField::BevelAngle => "Bevel Angle",
            ComparisonField::OuterDimension => "Outer Width",
            ComparisonField::InnerDimension => "Inner Width",
            ComparisonField::BoardFeet => "Board Feet",
            ComparisonField::Cost => "Cost",
        }
    }

    /// Decimal places the field is shown (and compared) at
    pub fn precision(&self) -> u32 {
        match self {
            ComparisonField::StaveCount => 0,
            ComparisonField::JointAngle | ComparisonField::BevelAngle => 2,
            ComparisonField::OuterDimension | ComparisonField::InnerDimension => 3,
            ComparisonField::BoardFeet | ComparisonField::Cost => 2,
        }
    }

    /// (prefix, suffix) marks around a displayed value
    pub fn marks(&self) -> (&'static str, &'static str) {
        match self {
            ComparisonField::StaveCount => ("", ""),
            ComparisonField::JointAngle | ComparisonField::BevelAngle => ("", "°"),
            ComparisonField::OuterDimension | ComparisonField::InnerDimension => ("", "\""),
            ComparisonField::BoardFeet => ("", "'"),
            ComparisonField::Cost => ("$", ""),
        }
    }

    /// Pull this field out of a shell result
    pub fn extract(&self, shell: &ShellGeometry) -> f64 {
        match self {
            ComparisonField::StaveCount => shell.stave_count as f64,
            ComparisonField::JointAngle => shell.joint_angle_deg,
            ComparisonField::BevelAngle => shell.bevel_angle_deg,
            ComparisonField::OuterDimension => shell.outer_dimension_in,
            ComparisonField::InnerDimension => shell.inner_dimension_in,
            ComparisonField::BoardFeet => shell.board_feet_required,
            ComparisonField::Cost => shell.shell_cost,
        }
    }

    /// Field value rounded to display precision
    fn displayed(&self, shell: &ShellGeometry) -> f64 {
        let mode = RoundingMode::HalfAwayFromZero;
        round_to(self.extract(shell), self.precision(), mode)
    }
}

/// One row of a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Which field this row compares
    pub field: ComparisonField,
    /// Row label
    pub label: String,
    /// Value from configuration A, at display precision
    pub value_a: Option<f64>,
    /// Value from configuration B, at display precision
    pub value_b: Option<f64>,
    /// B - A, present only when both sides are
    pub difference: Option<f64>,
}

impl ComparisonRow {
    fn display_value(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => {
                let (prefix, suffix) = self.field.marks();
                let shown = format_fixed(v, self.field.precision(), RoundingMode::HalfAwayFromZero);
                format!("{}{}{}", prefix, shown, suffix)
            }
            None => ABSENT.to_string(),
        }
    }

    /// Configuration A value with unit marks, or `-`
    pub fn display_a(&self) -> String {
        self.display_value(self.value_a)
    }

    /// Configuration B value with unit marks, or `-`
    pub fn display_b(&self) -> String {
        self.display_value(self.value_b)
    }

    /// Signed difference (`+0.25`, `+0.00`), `0` only when equal, `-` when a
    /// side is missing
    pub fn display_difference(&self) -> String {
        match self.difference {
            Some(d) => format_signed(d, 2),
            None => ABSENT.to_string(),
        }
    }
}

/// Diff two shell results field by field.
///
/// Either side may be absent (nothing computed yet).
pub fn diff(a: Option<&ShellGeometry>, b: Option<&ShellGeometry>) -> Vec<ComparisonRow> {
    ComparisonField::ALL
        .into_iter()
        .map(|field| {
            let value_a = a.map(|shell| field.displayed(shell));
            let value_b = b.map(|shell| field.displayed(shell));
            let difference = match (value_a, value_b) {
                (Some(va), Some(vb)) if va == vb => Some(0.0),
                (Some(va), Some(vb)) => Some(vb - va),
                _ => None,
            };
            ComparisonRow {
                field,
                label: field.label().to_string(),
                value_a,
                value_b,
                difference,
            }
        })
        .collect()
}

/// Which comparison slot a result is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
}

/// Two-slot comparison state, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Configuration A
    pub config_a: Option<ShellGeometry>,
    /// Configuration B
    pub config_b: Option<ShellGeometry>,
}

impl Comparison {
    /// Store a result in a slot, replacing what was there
    pub fn store(&mut self, slot: Slot, shell: ShellGeometry) {
        match slot {
            Slot::A => self.config_a = Some(shell),
            Slot::B => self.config_b = Some(shell),
        }
    }

    /// Builder form of [`Comparison::store`]
    pub fn with(mut self, slot: Slot, shell: ShellGeometry) -> Self {
        self.store(slot, shell);
        self
    }

    /// Result stored in a slot
    pub fn get(&self, slot: Slot) -> Option<&ShellGeometry> {
        match slot {
            Slot::A => self.config_a.as_ref(),
            Slot::B => self.config_b.as_ref(),
        }
    }

    /// Empty both slots
    pub fn clear(&mut self) {
        self.config_a = None;
        self.config_b = None;
    }

    /// True when neither slot holds a result
    pub fn is_empty(&self) -> bool {
        self.config_a.is_none() && self.config_b.is_none()
    }

    /// Comparison rows for the current slots
    pub fn rows(&self) -> Vec<ComparisonRow> {
        diff(self.config_a.as_ref(), self.config_b.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::shell::compute_shell;
    use approx::assert_relative_eq;

    fn twelve() -> ShellGeometry {
        compute_shell(12, 14.0, 6.5, 0.75, 0.15, 8.0).unwrap()
    }

    fn sixteen() -> ShellGeometry {
        compute_shell(16, 14.0, 6.5, 0.75, 0.15, 8.0).unwrap()
    }

    #[test]
    fn test_field_order() {
        let rows = diff(None, None);
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Stave Count",
                "Joint Angle",
                "Bevel Angle",
                "Outer Width",
                "Inner Width",
                "Board Feet",
                "Cost"
            ]
        );
    }

    #[test]
    fn test_missing_b() {
        let a = twelve();
        for row in diff(Some(&a), None) {
            assert_eq!(row.display_b(), "-");
            assert_eq!(row.display_difference(), "-");
            assert_ne!(row.display_a(), "-");
        }
    }

    #[test]
    fn test_missing_both() {
        for row in diff(None, None) {
            assert_eq!(row.display_a(), "-");
            assert_eq!(row.display_b(), "-");
            assert_eq!(row.display_difference(), "-");
        }
    }

    #[test]
    fn test_identical_configs_show_zero() {
        let a = twelve();
        for row in diff(Some(&a), Some(&a)) {
            assert_eq!(row.difference, Some(0.0));
            assert_eq!(row.display_difference(), "0");
        }
    }

    #[test]
    fn test_differences() {
        let a = twelve();
        let b = sixteen();
        let rows = diff(Some(&a), Some(&b));

        assert_eq!(rows[0].difference, Some(4.0));
        // 11.25 - 15.00
        assert_relative_eq!(rows[1].difference.unwrap(), -3.75);
        assert_eq!(rows[1].display_difference(), "-3.75");
        assert_eq!(rows[2].display_difference(), "+3.75");
        assert_eq!(rows[1].display_a(), "15.00°");
        assert_eq!(rows[3].display_a(), "3.623\"");
        assert!(rows[6].display_a().starts_with('$'));
    }

    #[test]
    fn test_small_difference_is_not_zero() {
        // 3.623" vs 3.624": different at display precision, under 0.01
        let a = compute_shell(12, 14.0, 6.5, 0.75, 0.15, 8.0).unwrap();
        let b = compute_shell(12, 14.002, 6.5, 0.75, 0.15, 8.0).unwrap();
        let rows = diff(Some(&a), Some(&b));

        let outer = &rows[3];
        assert_eq!(outer.display_a(), "3.623\"");
        assert_eq!(outer.display_b(), "3.624\"");
        assert_ne!(outer.difference, Some(0.0));
        assert_eq!(outer.display_difference(), "+0.00");

        let reversed = diff(Some(&b), Some(&a));
        assert_eq!(reversed[3].display_difference(), "-0.00");

        // the stave count really is equal
        assert_eq!(rows[0].display_difference(), "0");
    }

    #[test]
    fn test_comparison_slots() {
        let mut comparison = Comparison::default();
        assert!(comparison.is_empty());

        comparison.store(Slot::B, sixteen());
        assert!(comparison.get(Slot::A).is_none());
        assert_eq!(comparison.get(Slot::B).unwrap().stave_count, 16);

        let rows = comparison.rows();
        assert_eq!(rows[0].display_a(), "-");
        assert_eq!(rows[0].display_b(), "16");

        comparison.store(Slot::A, twelve());
        assert_eq!(comparison.rows()[0].display_difference(), "+4.00");

        comparison.clear();
        assert!(comparison.is_empty());
    }
}
