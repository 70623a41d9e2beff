// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions between decimal values and sexagesimal (degrees/hours,
//! minutes, seconds) components.
//!
//! The sign of a sexagesimal triple belongs to the whole triple. Negative
//! values with a zero major component (e.g. -0°03'56") are written with a
//! negative zero (`-0.0`) or with negative minor components.

use log::warn;
use thiserror::Error;

use crate::constants::DEGREES_PER_HOUR;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SexagesimalError {
    #[error("expected 3 sexagesimal components in '{input}', found {found}")]
    WrongNumberOfComponents { input: String, found: usize },

    #[error("sign in '{0}' must only prefix the whole value")]
    MisplacedSign(String),

    #[error("'{0}' has a component that is not a finite number")]
    NonFinite(String),

    #[error("minutes in '{input}' must be in [0, 60), got {minutes}")]
    MinutesOutOfRange { input: String, minutes: f64 },

    #[error("seconds in '{input}' must be in [0, 60), got {seconds}")]
    SecondsOutOfRange { input: String, seconds: f64 },

    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),
}

/// A decimal value decomposed into sexagesimal components. `whole` and
/// `minutes` are integral; all components are non-negative and the sign is
/// carried by `negative`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sexagesimal {
    pub negative: bool,
    pub whole: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Sexagesimal {
    /// Decompose a decimal value (degrees or hours).
    pub fn from_decimal(value: f64) -> Sexagesimal {
        let abs = value.abs();
        let whole = abs.trunc();
        let rem = (abs - whole) * 60.0;
        let minutes = rem.trunc();
        let seconds = (rem - minutes) * 60.0;
        Sexagesimal {
            negative: value < 0.0,
            whole,
            minutes,
            seconds,
        }
    }

    /// Recombine the components into a decimal value.
    pub fn to_decimal(self) -> f64 {
        let magnitude = self.whole + self.minutes / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// The components with the sign applied to the major one. A negative
    /// value under one unit gets a major component of `-0.0`, so the triple
    /// can be fed straight back into [`sexagesimal_to_decimal`].
    pub fn signed_components(self) -> (f64, f64, f64) {
        let whole = if self.negative { -self.whole } else { self.whole };
        (whole, self.minutes, self.seconds)
    }
}

/// Combine a sexagesimal triple into a decimal value.
///
/// The sign is taken from the most significant component that is non-zero or
/// a negative zero, and is applied to the sum of the magnitudes. Minutes and
/// seconds outside [0, 60) are accepted as given.
pub fn sexagesimal_to_decimal(major: f64, minutes: f64, seconds: f64) -> f64 {
    let components = [major, minutes, seconds];
    let leading = components
        .iter()
        .position(|c| *c != 0.0 || c.is_sign_negative());
    let negative = leading.map_or(false, |i| components[i].is_sign_negative());

    if minutes.abs() >= 60.0 || seconds.abs() >= 60.0 {
        warn!("Sexagesimal components out of range: ({major}, {minutes}, {seconds})");
    }
    if let Some(i) = leading {
        if components[i + 1..].iter().any(|c| *c < 0.0) && !negative {
            warn!(
                "Negative minor sexagesimal component after a positive major one: ({major}, {minutes}, {seconds}); treating as positive"
            );
        }
    }

    let magnitude = major.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0;
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Format a value as `<sign><whole><a><mm><b><ss.ssss><c>`, carrying rounded
/// seconds into minutes and the major component.
fn format_sexagesimal(value: f64, suffixes: [char; 3]) -> String {
    const PRECISION: usize = 4;
    let scale = 10_f64.powi(PRECISION as i32);
    let total = (value.abs() * 3600.0 * scale).round();
    let per_minute = 60.0 * scale;
    let per_whole = 3600.0 * scale;

    let whole = (total / per_whole).floor();
    let rem = total - whole * per_whole;
    let minutes = (rem / per_minute).floor();
    let seconds = (rem - minutes * per_minute) / scale;

    let sign = if value < 0.0 && total > 0.0 { "-" } else { "" };
    let [a, b, c] = suffixes;
    format!(
        "{sign}{whole}{a}{minutes:02}{b}{seconds:0width$.PRECISION$}{c}",
        width = PRECISION + 3
    )
}

/// Format a value in degrees as a degrees/arcminutes/arcseconds string, e.g.
/// `-6d43m11.6100s`.
pub fn degrees_to_sexagesimal_dms(degrees: f64) -> String {
    format_sexagesimal(degrees, ['d', 'm', 's'])
}

/// Format a value in degrees as an hours/minutes/seconds string, e.g.
/// `23h09m16.6410s`.
pub fn degrees_to_sexagesimal_hms(degrees: f64) -> String {
    format_sexagesimal(degrees / DEGREES_PER_HOUR, ['h', 'm', 's'])
}

fn parse_sexagesimal(input: &str, separators: &[char]) -> Result<f64, SexagesimalError> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let parts: Vec<&str> = body
        .split(|c: char| c == ':' || c.is_whitespace() || separators.contains(&c))
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 {
        return Err(SexagesimalError::WrongNumberOfComponents {
            input: input.to_string(),
            found: parts.len(),
        });
    }
    if parts.iter().any(|p| p.starts_with(['-', '+'])) {
        return Err(SexagesimalError::MisplacedSign(input.to_string()));
    }

    let major: f64 = parts[0].parse()?;
    let minutes: f64 = parts[1].parse()?;
    let seconds: f64 = parts[2].parse()?;
    if !major.is_finite() {
        return Err(SexagesimalError::NonFinite(input.to_string()));
    }
    if !(0.0..60.0).contains(&minutes) {
        return Err(SexagesimalError::MinutesOutOfRange {
            input: input.to_string(),
            minutes,
        });
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(SexagesimalError::SecondsOutOfRange {
            input: input.to_string(),
            seconds,
        });
    }

    let magnitude = major + minutes / 60.0 + seconds / 3600.0;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Parse a degrees/arcminutes/arcseconds string into degrees. Components
/// may be separated by colons, whitespace or `d`/`m`/`s` (also `°`, `'`,
/// `"`), e.g. `-06:43:11.61` or `-6d43m11.61s`.
pub fn sexagesimal_dms_str_to_degrees(s: &str) -> Result<f64, SexagesimalError> {
    parse_sexagesimal(s, &['d', 'm', 's', '°', '\'', '"'])
}

/// Parse an hours/minutes/seconds string into hours, e.g. `23:09:16.641` or
/// `23h09m16.641s`.
pub fn sexagesimal_hms_str_to_hours(s: &str) -> Result<f64, SexagesimalError> {
    parse_sexagesimal(s, &['h', 'm', 's'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sign_applies_to_whole_triple() {
        let expected = -(3.0 / 60.0 + 56.0 / 3600.0);
        assert_abs_diff_eq!(sexagesimal_to_decimal(-0.0, 3.0, 56.0), expected);
        assert_abs_diff_eq!(sexagesimal_to_decimal(0.0, -3.0, -56.0), expected);
        assert_abs_diff_eq!(sexagesimal_to_decimal(0.0, -3.0, 56.0), expected);
        assert_abs_diff_eq!(sexagesimal_to_decimal(0.0, 0.0, -56.0), -56.0 / 3600.0);

        let washington = sexagesimal_to_decimal(-77.0, 3.0, 56.0);
        assert_abs_diff_eq!(washington, -77.06555555555556, epsilon = 1e-12);
        // Negative minor components don't flip the sign twice.
        assert_abs_diff_eq!(sexagesimal_to_decimal(-77.0, -3.0, -56.0), washington);
    }

    #[test]
    fn test_zero_is_positive() {
        let zero = sexagesimal_to_decimal(0.0, 0.0, 0.0);
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn test_out_of_range_minor_components_are_tolerated() {
        assert_abs_diff_eq!(sexagesimal_to_decimal(1.0, 90.0, 0.0), 2.5);
        assert_abs_diff_eq!(sexagesimal_to_decimal(0.0, 0.0, 3600.0), 1.0);
    }

    #[test]
    fn test_decomposition_round_trip() {
        for value in [
            0.0,
            -0.06555555555555556,
            38.92138888888889,
            -6.719891666666667,
            -77.06555555555556,
            -179.99999,
            359.9999999,
            -1.0,
            1.0 / 3600.0,
        ] {
            let s = Sexagesimal::from_decimal(value);
            assert!(s.minutes < 60.0 && s.seconds < 60.0, "{s:?}");
            assert_abs_diff_eq!(s.to_decimal(), value, epsilon = 1e-12);

            let (d, m, sec) = s.signed_components();
            assert_abs_diff_eq!(sexagesimal_to_decimal(d, m, sec), value, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_negative_under_one_unit() {
        let s = Sexagesimal::from_decimal(-0.06555555555555556);
        assert!(s.negative);
        assert_eq!(s.whole, 0.0);
        assert_eq!(s.minutes, 3.0);
        assert_abs_diff_eq!(s.seconds, 56.0, epsilon = 1e-9);
        let (d, _, _) = s.signed_components();
        assert!(d.is_sign_negative());
    }

    #[test]
    fn test_format() {
        assert_eq!(degrees_to_sexagesimal_dms(-27.0), "-27d00m00.0000s");
        assert_eq!(
            degrees_to_sexagesimal_dms(sexagesimal_to_decimal(-6.0, 43.0, 11.61)),
            "-6d43m11.6100s"
        );
        assert_eq!(
            degrees_to_sexagesimal_hms(15.0 * sexagesimal_to_decimal(23.0, 9.0, 16.641)),
            "23h09m16.6410s"
        );
        assert_eq!(
            degrees_to_sexagesimal_dms(sexagesimal_to_decimal(-0.0, 3.0, 56.0)),
            "-0d03m56.0000s"
        );
    }

    #[test]
    fn test_format_carries_rounded_seconds() {
        // 59.99999 seconds rounds up to the next minute, and then the next
        // degree.
        let value = 10.0 + 59.0 / 60.0 + 59.99999 / 3600.0;
        assert_eq!(degrees_to_sexagesimal_dms(value), "11d00m00.0000s");
        // A tiny negative number rounds to an unsigned zero.
        assert_eq!(degrees_to_sexagesimal_dms(-1e-12), "0d00m00.0000s");
    }

    #[test]
    fn test_parse() {
        let result = sexagesimal_dms_str_to_degrees("-06:43:11.61");
        assert!(result.is_ok(), "{:?}", result.err());
        assert_abs_diff_eq!(result.unwrap(), -6.719891666666667, epsilon = 1e-12);

        let result = sexagesimal_dms_str_to_degrees("-6d43m11.61s");
        assert_abs_diff_eq!(result.unwrap(), -6.719891666666667, epsilon = 1e-12);

        let result = sexagesimal_dms_str_to_degrees("38° 55' 17\"");
        assert_abs_diff_eq!(result.unwrap(), 38.92138888888889, epsilon = 1e-12);

        let result = sexagesimal_dms_str_to_degrees("-00:03:56");
        assert_abs_diff_eq!(result.unwrap(), -0.06555555555555556, epsilon = 1e-12);

        let result = sexagesimal_hms_str_to_hours("23h09m16.641s");
        assert_abs_diff_eq!(result.unwrap(), 23.154622500000002, epsilon = 1e-12);

        let result = sexagesimal_hms_str_to_hours("+23 09 16.641");
        assert_abs_diff_eq!(result.unwrap(), 23.154622500000002, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            sexagesimal_dms_str_to_degrees("12:34"),
            Err(SexagesimalError::WrongNumberOfComponents { found: 2, .. })
        ));
        assert!(matches!(
            sexagesimal_dms_str_to_degrees("12:60:00"),
            Err(SexagesimalError::MinutesOutOfRange { .. })
        ));
        assert!(matches!(
            sexagesimal_hms_str_to_hours("12:00:61"),
            Err(SexagesimalError::SecondsOutOfRange { .. })
        ));
        assert!(matches!(
            sexagesimal_dms_str_to_degrees("12:-3:00"),
            Err(SexagesimalError::MisplacedSign(_))
        ));
        assert!(matches!(
            sexagesimal_hms_str_to_hours("1x:00:00"),
            Err(SexagesimalError::ParseFloat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            sexagesimal_dms_str_to_degrees("nan:00:00"),
            Err(SexagesimalError::NonFinite(_))
        ));
        assert!(matches!(
            sexagesimal_dms_str_to_degrees("inf 30 00"),
            Err(SexagesimalError::NonFinite(_))
        ));
        assert!(matches!(
            sexagesimal_hms_str_to_hours("-inf:00:00"),
            Err(SexagesimalError::NonFinite(_))
        ));
        // Non-finite minor components fall outside [0, 60).
        assert!(matches!(
            sexagesimal_hms_str_to_hours("1:nan:00"),
            Err(SexagesimalError::MinutesOutOfRange { .. })
        ));
    }
}
