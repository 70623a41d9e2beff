// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handle (hour angle, declination) coordinates.

use std::f64::consts::FRAC_PI_2;

use erfa::aliases::{eraHd2ae, eraHd2pa};
use log::debug;

use super::{
    azel::AzEl, clamp_polar, finite_degrees, polar_degrees, radec::RADec, PosError,
    DEGENERATE_TOLERANCE,
};
use crate::Angle;

/// A struct containing an Hour Angle and Declination.
///
/// The hour angle is kept in hours, in [-12h, 12h), and is positive west of
/// the meridian. Declination is kept in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawHADec"))]
#[allow(clippy::upper_case_acronyms)]
pub struct HADec {
    ha: Angle,
    dec: Angle,
}

/// The unvalidated form of a [`HADec`], as it comes out of a deserialiser.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawHADec {
    ha: Angle,
    dec: Angle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawHADec> for HADec {
    type Error = PosError;

    fn try_from(raw: RawHADec) -> Result<HADec, PosError> {
        HADec::new(raw.ha, raw.dec)
    }
}

impl HADec {
    /// Make a new [`HADec`]. The angles may be in any unit.
    pub fn new(ha: Angle, dec: Angle) -> Result<HADec, PosError> {
        let ha = finite_degrees(ha, "hour angle")?;
        let dec = polar_degrees(dec, "declination", PosError::DeclinationOutOfRange)?;
        Ok(Self::new_unchecked(ha, dec))
    }

    /// Make a new [`HADec`] from values in degrees.
    pub fn from_degrees(ha: f64, dec: f64) -> Result<HADec, PosError> {
        Self::new(Angle::from_degrees(ha), Angle::from_degrees(dec))
    }

    /// Make a new [`HADec`] from values in radians.
    pub fn from_radians(ha: f64, dec: f64) -> Result<HADec, PosError> {
        Self::new(Angle::from_radians(ha), Angle::from_radians(dec))
    }

    pub(crate) fn new_unchecked(ha: Angle, dec: Angle) -> HADec {
        Self {
            ha: ha.to_hours().wrapped_signed(),
            dec: clamp_polar(dec),
        }
    }

    /// Hour angle \[hours\]
    pub fn hour_angle(self) -> Angle {
        self.ha
    }

    /// Declination \[degrees\]
    pub fn declination(self) -> Angle {
        self.dec
    }

    /// Given a local sidereal time, make a new [`RADec`] struct from a [`HADec`].
    pub fn to_radec(self, lst: Angle) -> RADec {
        RADec::from_hadec(self, lst)
    }

    /// Given a local sidereal time, make a new [`HADec`] struct from a [`RADec`].
    pub fn from_radec(radec: RADec, lst: Angle) -> HADec {
        radec.to_hadec(lst)
    }

    /// Convert the equatorial coordinates to horizon coordinates (azimuth and
    /// altitude), given the local latitude on Earth.
    ///
    /// At the celestial poles seen from a pole (or any other spot where the
    /// direction is straight up or down) the azimuth is undefined and 0 is
    /// returned.
    ///
    /// Uses ERFA.
    pub fn to_azel(self, latitude: Angle) -> AzEl {
        let (mut az, el) = eraHd2ae(self.ha.radians(), self.dec.radians(), latitude.radians());
        if FRAC_PI_2 - el.abs() < DEGENERATE_TOLERANCE {
            debug!("Azimuth is undefined for {self} at latitude {latitude}; using 0");
            az = 0.0;
        }
        AzEl::new_unchecked(Angle::from_radians(az), Angle::from_radians(el))
    }

    /// Get the [parallactic
    /// angle](https://en.wikipedia.org/wiki/Parallactic_angle) at a latitude.
    /// The result is in radians, and is 0 where it's undefined (at the zenith).
    ///
    /// Uses ERFA.
    pub fn parallactic_angle(self, latitude: Angle) -> Angle {
        Angle::from_radians(eraHd2pa(
            self.ha.radians(),
            self.dec.radians(),
            latitude.radians(),
        ))
    }
}

impl std::fmt::Display for HADec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}h, {}°)", self.ha.value(), self.dec.value())
    }
}

// `epsilon` is in radians.
#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for HADec {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let d_ha = (self.ha - other.ha).wrapped_signed().radians();
        f64::abs_diff_eq(&d_ha, &0.0, epsilon)
            && f64::abs_diff_eq(&self.dec.radians(), &other.dec.radians(), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const MWA_LAT_RAD: f64 = -0.4660608448386394;

    #[test]
    fn test_hadec_is_normalised() {
        let hadec = HADec::from_degrees(195.0, 0.0).unwrap();
        assert_abs_diff_eq!(hadec.hour_angle().value(), -11.0, epsilon = 1e-12);
        let hadec = HADec::new(Angle::from_hours(12.0), Angle::from_degrees(0.0)).unwrap();
        assert_abs_diff_eq!(hadec.hour_angle().value(), -12.0, epsilon = 1e-12);
        assert!(matches!(
            HADec::from_degrees(0.0, -95.0),
            Err(PosError::DeclinationOutOfRange(_))
        ));
    }

    #[test]
    fn test_to_azel() {
        let hd = HADec::from_degrees(1.0, -35.0).unwrap();
        let result = hd.to_azel(Angle::from_radians(MWA_LAT_RAD));
        assert_abs_diff_eq!(result.azimuth().radians(), 3.240305654530152, epsilon = 1e-10);
        assert_abs_diff_eq!(result.altitude().radians(), 1.425221581624331, epsilon = 1e-10);

        let hd = HADec::from_degrees(23.0, -35.0).unwrap();
        let result = hd.to_azel(Angle::from_radians(MWA_LAT_RAD));
        assert_abs_diff_eq!(result.azimuth().radians(), 4.215504972991079, epsilon = 1e-10);
        assert_abs_diff_eq!(result.altitude().radians(), 1.1981324538790032, epsilon = 1e-10);
    }

    #[test]
    fn test_to_azel_agrees_with_erfa() {
        let lat = Angle::from_degrees(38.92138888888889);
        for ha in [-170.0, -90.0, -30.0, 0.0, 10.0, 64.35] {
            for dec in [-80.0, -35.0, -6.7, 20.0, 61.0] {
                let hd = HADec::from_degrees(ha, dec).unwrap();
                let result = hd.to_azel(lat);
                let (az, el) = eraHd2ae(hd.ha.radians(), hd.dec.radians(), lat.radians());
                let expected = AzEl::from_radians(az, el).unwrap();
                assert_abs_diff_eq!(result, expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_to_azel_degenerate() {
        // Just off the zenith the azimuth is still meaningful.
        let hd = HADec::from_degrees(1e-6, 30.0).unwrap();
        let result = hd.to_azel(Angle::from_degrees(30.0));
        assert_abs_diff_eq!(result.azimuth().value(), 270.0, epsilon = 1e-3);

        // The celestial pole seen from the geographic pole.
        let hd = HADec::from_degrees(37.0, 90.0).unwrap();
        let result = hd.to_azel(Angle::from_degrees(90.0));
        assert_eq!(result.azimuth().value(), 0.0);
        assert_abs_diff_eq!(result.altitude().radians(), FRAC_PI_2, epsilon = 1e-12);

        // The nadir.
        let hd = HADec::from_degrees(180.0, 30.0).unwrap();
        let result = hd.to_azel(Angle::from_degrees(-30.0));
        assert_eq!(result.azimuth().value(), 0.0);
        assert_abs_diff_eq!(result.altitude().radians(), -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_get_parallactic_angle() {
        let hd = HADec::from_degrees(1.0, -35.0).unwrap();
        let result = hd.parallactic_angle(Angle::from_radians(MWA_LAT_RAD));
        assert_abs_diff_eq!(result.value(), 0.10768702632379173, epsilon = 1e-10);

        // On the meridian, south of the zenith, it's 0.
        let hd = HADec::from_degrees(0.0, 0.0).unwrap();
        let result = hd.parallactic_angle(Angle::from_degrees(30.0));
        assert_abs_diff_eq!(result.value(), 0.0, epsilon = 1e-12);

        // Undefined at the zenith.
        let hd = HADec::from_degrees(0.0, 30.0).unwrap();
        assert_eq!(hd.parallactic_angle(Angle::from_degrees(30.0)).value(), 0.0);
    }

    #[test]
    fn test_display_hadec() {
        let hd = HADec::from_degrees(15.0, -35.0).unwrap();
        let result = format!("{hd}");
        assert!(!result.is_empty());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        let hd = HADec::from_degrees(-45.0, 20.0).unwrap();
        let json = serde_json::to_string(&hd).unwrap();
        let back: HADec = serde_json::from_str(&json).unwrap();
        assert_abs_diff_eq!(back, hd, epsilon = 1e-12);

        let hd: HADec = serde_json::from_str(
            r#"{"ha":{"value":270.0,"unit":"Degrees"},"dec":{"value":0.0,"unit":"Degrees"}}"#,
        )
        .unwrap();
        assert_abs_diff_eq!(hd.hour_angle().value(), -6.0, epsilon = 1e-12);

        let result = serde_json::from_str::<HADec>(
            r#"{"ha":{"value":1.0,"unit":"Hours"},"dec":{"value":-95.0,"unit":"Degrees"}}"#,
        );
        assert!(result.is_err());
    }
}
