// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handle (azimuth, altitude) coordinates (also known as horizontal
//! coordinates).

use std::f64::consts::FRAC_PI_2;

use erfa::aliases::eraAe2hd;
use log::debug;

use super::{
    clamp_polar, finite_degrees, hadec::HADec, polar_degrees, PosError, DEGENERATE_TOLERANCE,
};
use crate::Angle;

/// A struct containing an Azimuth and Altitude (elevation), both kept in
/// degrees.
///
/// Azimuth is measured from North through East and is normalised to
/// [0°, 360°).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAzEl"))]
pub struct AzEl {
    az: Angle,
    el: Angle,
}

/// The unvalidated form of a [`AzEl`], as it comes out of a deserialiser.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAzEl {
    az: Angle,
    el: Angle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAzEl> for AzEl {
    type Error = PosError;

    fn try_from(raw: RawAzEl) -> Result<AzEl, PosError> {
        AzEl::new(raw.az, raw.el)
    }
}

impl AzEl {
    /// Make a new [`AzEl`]. The angles may be in any unit. Fails if the
    /// altitude is outside [-90°, 90°].
    pub fn new(az: Angle, el: Angle) -> Result<AzEl, PosError> {
        let az = finite_degrees(az, "azimuth")?;
        let el = polar_degrees(el, "altitude", PosError::AltitudeOutOfRange)?;
        Ok(Self::new_unchecked(az, el))
    }

    /// Make a new [`AzEl`] from values in degrees.
    pub fn from_degrees(az: f64, el: f64) -> Result<AzEl, PosError> {
        Self::new(Angle::from_degrees(az), Angle::from_degrees(el))
    }

    /// Make a new [`AzEl`] from values in radians.
    pub fn from_radians(az: f64, el: f64) -> Result<AzEl, PosError> {
        Self::new(Angle::from_radians(az), Angle::from_radians(el))
    }

    pub(crate) fn new_unchecked(az: Angle, el: Angle) -> AzEl {
        Self {
            az: az.to_degrees().wrapped(),
            el: clamp_polar(el),
        }
    }

    /// Azimuth \[degrees\]
    pub fn azimuth(self) -> Angle {
        self.az
    }

    /// Altitude \[degrees\]
    pub fn altitude(self) -> Angle {
        self.el
    }

    /// Get the zenith angle in degrees.
    pub fn za(self) -> Angle {
        Angle::from_degrees(90.0) - self.el
    }

    /// Convert the horizon coordinates to equatorial coordinates (Hour Angle
    /// and Declination), given the local latitude on Earth.
    ///
    /// Where the hour angle is undefined (looking at a celestial pole), 0 is
    /// returned for it.
    ///
    /// Uses ERFA.
    pub fn to_hadec(self, latitude: Angle) -> HADec {
        let (mut ha, dec) = eraAe2hd(self.az.radians(), self.el.radians(), latitude.radians());
        if FRAC_PI_2 - dec.abs() < DEGENERATE_TOLERANCE {
            debug!("Hour angle is undefined for {self} at latitude {latitude}; using 0");
            ha = 0.0;
        }
        HADec::new_unchecked(Angle::from_radians(ha), Angle::from_radians(dec))
    }
}

/// Make an [`AzEl`] from an azimuth (from North through East) and an
/// altitude.
pub fn horizontal(az: Angle, alt: Angle) -> Result<AzEl, PosError> {
    AzEl::new(az, alt)
}

impl std::fmt::Display for AzEl {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.4}°, {:.4}°)", self.az.value(), self.el.value())
    }
}

// `epsilon` is in radians.
#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for AzEl {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let d_az = (self.az - other.az).wrapped_signed().radians();
        f64::abs_diff_eq(&d_az, &0.0, epsilon)
            && f64::abs_diff_eq(&self.el.radians(), &other.el.radians(), epsilon)
    }
}
