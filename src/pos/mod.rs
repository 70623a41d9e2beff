// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Super module for all positional code.
//!
//! Conventions used throughout:
//! - longitude is positive east of Greenwich;
//! - azimuth is measured from North through East (N = 0°, E = 90°);
//! - hour angle is positive west of the meridian, in [-12h, 12h).

pub mod azel;
pub mod earth;
pub mod hadec;
pub mod radec;
pub mod transform;

use thiserror::Error;

use crate::units::Angle;

/// A direction within this many radians of a pole of its frame (the zenith,
/// the nadir or a celestial pole) has no defined azimuth or hour angle.
pub(crate) const DEGENERATE_TOLERANCE: f64 = 1e-14;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PosError {
    #[error("latitude {0}° is outside [-90°, 90°]")]
    LatitudeOutOfRange(f64),

    #[error("declination {0}° is outside [-90°, 90°]")]
    DeclinationOutOfRange(f64),

    #[error("altitude {0}° is outside [-90°, 90°]")]
    AltitudeOutOfRange(f64),

    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
}

/// Check that an angle is finite, returning it in degrees.
pub(crate) fn finite_degrees(angle: Angle, name: &'static str) -> Result<Angle, PosError> {
    let angle = angle.to_degrees();
    if angle.value().is_finite() {
        Ok(angle)
    } else {
        Err(PosError::NonFinite(name))
    }
}

/// Check that a latitude-like angle is finite and within [-90°, 90°],
/// returning it in degrees. Values a rounding error past the poles are
/// clamped onto them.
pub(crate) fn polar_degrees(
    angle: Angle,
    name: &'static str,
    out_of_range: fn(f64) -> PosError,
) -> Result<Angle, PosError> {
    let degrees = finite_degrees(angle, name)?.value();
    if degrees.abs() > 90.0 + 1e-9 {
        return Err(out_of_range(degrees));
    }
    Ok(clamp_polar(Angle::from_degrees(degrees)))
}

/// Clamp a latitude-like angle onto [-90°, 90°], in degrees.
pub(crate) fn clamp_polar(angle: Angle) -> Angle {
    Angle::from_degrees(angle.degrees().clamp(-90.0, 90.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_degrees() {
        let result = polar_degrees(Angle::from_hours(1.0), "dec", PosError::DeclinationOutOfRange);
        assert_eq!(result, Ok(Angle::from_degrees(15.0)));

        // A rounding error past the pole is fine.
        let result = polar_degrees(
            Angle::from_radians(std::f64::consts::FRAC_PI_2 + 1e-15),
            "lat",
            PosError::LatitudeOutOfRange,
        );
        assert_eq!(result, Ok(Angle::from_degrees(90.0)));

        let result = polar_degrees(Angle::from_degrees(-90.5), "lat", PosError::LatitudeOutOfRange);
        assert_eq!(result, Err(PosError::LatitudeOutOfRange(-90.5)));

        let result = polar_degrees(Angle::from_degrees(f64::NAN), "lat", PosError::LatitudeOutOfRange);
        assert_eq!(result, Err(PosError::NonFinite("lat")));
    }
}
