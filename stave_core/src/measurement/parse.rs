//! Measurement Text Parsing
//!
//! Reads the dimensional strings a woodworker types into a form:
//!
//! | Input      | Value |
//! |------------|-------|
//! | `14`       | 14.0  |
//! | `14.5in`   | 14.5  |
//! | `14 1/2`   | 14.5  |
//! | `14-1/2"`  | 14.5  |
//! | `1/2`      | 0.5   |
//! | `-1 3/4`   | -1.75 |
//! | `35.5 cm`  | 35.5 (unit reported as cm) |
//!
//! The grammar is tried in order: plain decimal, mixed number, bare
//! fraction, then the leading numeric run of whatever is left
//! (`14abc` reads as 14). Text with no numeric content is an error, never
//! a silent zero.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::LengthUnit;

static UNIT_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\s*(in|cm|"|'')\s*$"#).expect("unit suffix pattern")
});

static PLAIN_DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+\.?\d*$").expect("decimal pattern")
});

static MIXED_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+)[\s-]+(\d+)/(\d+)$").expect("mixed number pattern")
});

static BARE_FRACTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+)/(\d+)$").expect("fraction pattern")
});

/// Longest numeric prefix: sign, digits, fraction digits, exponent
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("leading number pattern")
});

/// A parsed measurement: the number as written plus the unit token, if any.
///
/// The value is NOT converted; `35.5cm` parses to `35.5` with
/// `unit: Some(Centimeters)`. Use [`Measurement::to_inches`] or
/// [`parse_inches`] for the canonical inch value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Numeric value as written
    pub value: f64,
    /// Unit suffix that was stripped from the text
    pub unit: Option<LengthUnit>,
}

impl Measurement {
    /// Value in inches, treating a missing suffix as `default_unit`
    pub fn to_inches(self, default_unit: LengthUnit) -> f64 {
        self.unit.unwrap_or(default_unit).to_inches(self.value)
    }
}

/// Parse a dimensional string into its numeric value.
///
/// Unit suffixes are stripped but not applied.
///
/// # Errors
///
/// * `InvalidFormat` - no numeric content
/// * `DivisionByZero` - a fraction with a zero denominator
///
/// # Example
///
/// ```rust
/// use stave_core::measurement::parse_length;
///
/// assert_eq!(parse_length("14 1/2").unwrap(), 14.5);
/// assert_eq!(parse_length("1/2").unwrap(), 0.5);
/// assert_eq!(parse_length("14.5in").unwrap(), 14.5);
/// assert!(parse_length("abc").is_err());
/// ```
pub fn parse_length(input: &str) -> CalcResult<f64> {
    parse_measurement(input).map(|m| m.value)
}

/// Parse a dimensional string and convert it to inches.
///
/// An explicit `cm` suffix always wins; otherwise the value is read in
/// `default_unit`.
pub fn parse_inches(input: &str, default_unit: LengthUnit) -> CalcResult<f64> {
    parse_measurement(input).map(|m| m.to_inches(default_unit))
}

/// Parse a dimensional string, reporting which unit suffix it carried.
pub fn parse_measurement(input: &str) -> CalcResult<Measurement> {
    let (body, unit) = strip_unit(input);
    let body = body.trim();

    if body.is_empty() {
        return Err(CalcError::invalid_format(input));
    }

    let value = if PLAIN_DECIMAL.is_match(body) {
        number(body.trim_end_matches('.'), input)?
    } else if let Some(caps) = MIXED_NUMBER.captures(body) {
        let whole = number(&caps[1], input)?;
        let fraction = fraction(&caps, 2, input)?;
        let sign = if whole < 0.0 { -1.0 } else { 1.0 };
        whole + sign * fraction
    } else if let Some(caps) = BARE_FRACTION.captures(body) {
        fraction(&caps, 1, input)?
    } else {
        let run = LEADING_NUMBER
            .find(body)
            .ok_or_else(|| CalcError::invalid_format(input))?;
        number(run.as_str(), input)?
    };

    if !value.is_finite() {
        return Err(CalcError::invalid_format(input));
    }

    Ok(Measurement { value, unit })
}

/// Remove one trailing unit token (`in`, `cm`, `"`, `''`), case-insensitive.
fn strip_unit(input: &str) -> (&str, Option<LengthUnit>) {
    let Some(caps) = UNIT_SUFFIX.captures(input) else {
        return (input, None);
    };
    let (Some(token), Some(whole)) = (caps.get(1), caps.get(0)) else {
        return (input, None);
    };
    let unit = if token.as_str().eq_ignore_ascii_case("cm") {
        LengthUnit::Centimeters
    } else {
        LengthUnit::Inches
    };
    (&input[..whole.start()], Some(unit))
}

fn number(digits: &str, input: &str) -> CalcResult<f64> {
    digits
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_format(input))
}

/// `num/den` from two adjacent capture groups starting at `first`
fn fraction(caps: &Captures<'_>, first: usize, input: &str) -> CalcResult<f64> {
    let numerator = number(&caps[first], input)?;
    let denominator = number(&caps[first + 1], input)?;
    divide(numerator, denominator, input)
}

fn divide(numerator: f64, denominator: f64, input: &str) -> CalcResult<f64> {
    if denominator == 0.0 {
        return Err(CalcError::division_by_zero(input));
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plain_decimals() {
        assert_eq!(parse_length("14").unwrap(), 14.0);
        assert_eq!(parse_length("14.5").unwrap(), 14.5);
        assert_eq!(parse_length("-3.25").unwrap(), -3.25);
        assert_eq!(parse_length("  6.5  ").unwrap(), 6.5);
        assert_eq!(parse_length("14.").unwrap(), 14.0);
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(parse_length("14.5in").unwrap(), 14.5);
        assert_eq!(parse_length("14.5 IN").unwrap(), 14.5);
        assert_eq!(parse_length("5.5\"").unwrap(), 5.5);
        assert_eq!(parse_length("5.5''").unwrap(), 5.5);
        assert_eq!(parse_length("35.56 cm").unwrap(), 35.56);
    }

    #[test]
    fn test_unit_suffix_spacing() {
        assert_eq!(parse_length("35.5 cm  ").unwrap(), 35.5);
        assert_eq!(parse_length("14 1/2 in").unwrap(), 14.5);
        assert_eq!(parse_measurement("3/4 \"").unwrap().unit, Some(LengthUnit::Inches));
        // only a trailing token counts as a unit
        assert_eq!(parse_measurement("14in5").unwrap().unit, None);
    }

    #[test]
    fn test_mixed_numbers() {
        assert_eq!(parse_length("14 1/2").unwrap(), 14.5);
        assert_eq!(parse_length("14-1/2").unwrap(), 14.5);
        assert_eq!(parse_length("14 - 1/2").unwrap(), 14.5);
        assert_eq!(parse_length("6 3/4\"").unwrap(), 6.75);
        assert_eq!(parse_length("-1 1/2").unwrap(), -1.5);
    }

    #[test]
    fn test_bare_fractions() {
        assert_eq!(parse_length("1/2").unwrap(), 0.5);
        assert_eq!(parse_length("3/4in").unwrap(), 0.75);
        assert_eq!(parse_length("-1/4").unwrap(), -0.25);
        assert_eq!(parse_length("5/4").unwrap(), 1.25);
    }

    #[test]
    fn test_division_by_zero() {
        let err = parse_length("1/0").unwrap_err();
        assert_eq!(err, CalcError::division_by_zero("1/0"));
        assert_eq!(parse_length("14 1/0").unwrap_err().error_code(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_length("abc").unwrap_err(), CalcError::invalid_format("abc"));
        assert!(matches!(parse_length(""), Err(CalcError::InvalidFormat { .. })));
        assert!(matches!(parse_length("   "), Err(CalcError::InvalidFormat { .. })));
        assert!(matches!(parse_length("in"), Err(CalcError::InvalidFormat { .. })));
        assert!(matches!(parse_length("."), Err(CalcError::InvalidFormat { .. })));
    }

    #[test]
    fn test_leading_number_fallback() {
        assert_eq!(parse_length("14abc").unwrap(), 14.0);
        assert_eq!(parse_length(".5").unwrap(), 0.5);
        assert_eq!(parse_length("1/2/3").unwrap(), 1.0);
        assert_eq!(parse_length("2.5e1 mm").unwrap(), 25.0);
        assert_eq!(parse_length("+7").unwrap(), 7.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(parse_length("1e400").is_err());
    }

    #[test]
    fn test_measurement_reports_unit() {
        let m = parse_measurement("35.56cm").unwrap();
        assert_eq!(m.unit, Some(LengthUnit::Centimeters));
        assert_relative_eq!(m.to_inches(LengthUnit::Inches), 14.0, epsilon = 1e-12);

        let m = parse_measurement("14").unwrap();
        assert_eq!(m.unit, None);
    }

    #[test]
    fn test_parse_inches_default_unit() {
        assert_relative_eq!(parse_inches("2.54", LengthUnit::Centimeters).unwrap(), 1.0);
        assert_relative_eq!(parse_inches("2.54", LengthUnit::Inches).unwrap(), 2.54);
        // explicit suffix overrides the default
        assert_relative_eq!(parse_inches("1in", LengthUnit::Centimeters).unwrap(), 1.0);
    }
}
