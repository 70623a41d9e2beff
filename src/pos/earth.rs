// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handling of Earth coordinates (longitude/latitude) of an observer.

use std::fmt::Display;

use super::{finite_degrees, polar_degrees, PosError};
use crate::{time::local_sidereal_time, Angle, JulianDate};

/// An observer's position on Earth. Both angles are kept in degrees.
///
/// Longitude is positive east of Greenwich (so Washington is at about
/// -77°) and is normalised to [-180°, 180°). Latitude is in [-90°, 90°].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLocation"))]
pub struct Location {
    longitude: Angle,
    latitude: Angle,
}

/// The unvalidated form of a [`Location`], as it comes out of a deserialiser.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocation {
    longitude: Angle,
    latitude: Angle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocation> for Location {
    type Error = PosError;

    fn try_from(raw: RawLocation) -> Result<Location, PosError> {
        Location::new(raw.longitude, raw.latitude)
    }
}

impl Location {
    /// Make a new [`Location`]. Fails if either angle isn't finite or if the
    /// latitude is outside [-90°, 90°].
    pub fn new(longitude: Angle, latitude: Angle) -> Result<Location, PosError> {
        let longitude = finite_degrees(longitude, "longitude")?.wrapped_signed();
        let latitude = polar_degrees(latitude, "latitude", PosError::LatitudeOutOfRange)?;
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Make a new [`Location`] from values in degrees.
    pub fn from_degrees(longitude: f64, latitude: f64) -> Result<Location, PosError> {
        Self::new(Angle::from_degrees(longitude), Angle::from_degrees(latitude))
    }

    /// Longitude \[degrees, east positive\]
    pub fn longitude(self) -> Angle {
        self.longitude
    }

    /// Latitude \[degrees\]
    pub fn latitude(self) -> Angle {
        self.latitude
    }

    /// Get the local mean sidereal time at this location, in hours.
    pub fn local_sidereal_time(self, jd: JulianDate) -> Angle {
        local_sidereal_time(jd, self.longitude)
    }
}

/// Make a [`Location`] from a longitude (east positive) and a latitude.
pub fn geographical(longitude: Angle, latitude: Angle) -> Result<Location, PosError> {
    Location::new(longitude, latitude)
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ longitude: {:.4}°, latitude: {:.4}° }}",
            self.longitude.value(),
            self.latitude.value(),
        )
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for Location {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    /// `epsilon` is in degrees.
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(
            &(self.longitude - other.longitude).wrapped_signed().value(),
            &0.0,
            epsilon,
        ) && f64::abs_diff_eq(&self.latitude.value(), &other.latitude.value(), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_geographical() {
        let geo = geographical(
            Angle::make_degrees(-77.0, 3.0, 56.0),
            Angle::make_degrees(38.0, 55.0, 17.0),
        )
        .unwrap();
        assert_abs_diff_eq!(geo.longitude().value(), -77.06555555555556, epsilon = 1e-12);
        assert_abs_diff_eq!(geo.latitude().value(), 38.92138888888889, epsilon = 1e-12);
    }

    #[test]
    fn test_longitude_is_normalised() {
        let a = Location::from_degrees(283.0, 10.0).unwrap();
        assert_abs_diff_eq!(a.longitude().value(), -77.0, epsilon = 1e-12);

        // Hours and radians are accepted too, but stored as degrees.
        let b = Location::new(Angle::from_hours(-1.0), Angle::from_radians(0.0)).unwrap();
        assert_eq!(b.longitude(), Angle::from_degrees(-15.0));
        assert_abs_diff_eq!(a, Location::from_degrees(-77.0, 10.0).unwrap(), epsilon = 1e-12);
    }

    #[test]
    fn test_latitude_range() {
        assert!(Location::from_degrees(0.0, 90.0).is_ok());
        assert!(Location::from_degrees(0.0, -90.0).is_ok());
        assert!(matches!(
            Location::from_degrees(0.0, 90.1),
            Err(PosError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Location::from_degrees(f64::INFINITY, 0.0),
            Err(PosError::NonFinite("longitude"))
        ));
    }

    #[test]
    fn test_local_sidereal_time() {
        let jd = JulianDate::from_calendar_hms(1987, 4, 10, 19, 21, 0.0).unwrap();
        let geo = Location::from_degrees(-77.06555555555556, 38.92138888888889).unwrap();
        let lst = geo.local_sidereal_time(jd);
        assert_abs_diff_eq!(lst.value(), 3.444821179251773, epsilon = 1e-9);
    }

    #[test]
    fn test_display_location() {
        let location = Location::from_degrees(0.0, 0.0).unwrap();
        let result = format!("{}", location);
        assert!(!result.is_empty());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        let location = Location::from_degrees(116.67, -26.7).unwrap();
        let json = serde_json::to_string(&location).unwrap();
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_abs_diff_eq!(back, location, epsilon = 1e-12);

        let location: Location = serde_json::from_str(
            r#"{"longitude":{"value":283.0,"unit":"Degrees"},"latitude":{"value":10.0,"unit":"Degrees"}}"#,
        )
        .unwrap();
        assert_abs_diff_eq!(location.longitude().value(), -77.0, epsilon = 1e-12);

        let result = serde_json::from_str::<Location>(
            r#"{"longitude":{"value":0.0,"unit":"Degrees"},"latitude":{"value":100.0,"unit":"Degrees"}}"#,
        );
        assert!(result.is_err());
    }
}
