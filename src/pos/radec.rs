// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handle (right ascension, declination) coordinates.

use erfa::aliases::eraSeps;

use super::{clamp_polar, finite_degrees, hadec::HADec, polar_degrees, PosError};
use crate::{
    sexagesimal::{degrees_to_sexagesimal_dms, degrees_to_sexagesimal_hms},
    Angle,
};

/// A struct containing a Right Ascension and Declination.
///
/// Right ascension is kept in hours, normalised to [0h, 24h). Declination is
/// kept in degrees, in [-90°, 90°].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRADec"))]
#[allow(clippy::upper_case_acronyms)]
pub struct RADec {
    ra: Angle,
    dec: Angle,
}

/// The unvalidated form of a [`RADec`], as it comes out of a deserialiser.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRADec {
    ra: Angle,
    dec: Angle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRADec> for RADec {
    type Error = PosError;

    fn try_from(raw: RawRADec) -> Result<RADec, PosError> {
        RADec::new(raw.ra, raw.dec)
    }
}

impl RADec {
    /// Make a new [`RADec`]. The angles may be in any unit. Fails if either
    /// isn't finite or the declination is outside [-90°, 90°].
    pub fn new(ra: Angle, dec: Angle) -> Result<RADec, PosError> {
        let ra = finite_degrees(ra, "right ascension")?.to_hours().wrapped();
        let dec = polar_degrees(dec, "declination", PosError::DeclinationOutOfRange)?;
        Ok(Self { ra, dec })
    }

    /// Make a new [`RADec`] from values in degrees.
    pub fn from_degrees(ra: f64, dec: f64) -> Result<RADec, PosError> {
        Self::new(Angle::from_degrees(ra), Angle::from_degrees(dec))
    }

    /// Make a new [`RADec`] from values in radians.
    pub fn from_radians(ra: f64, dec: f64) -> Result<RADec, PosError> {
        Self::new(Angle::from_radians(ra), Angle::from_radians(dec))
    }

    /// For angles produced by our own transforms; only normalises.
    pub(crate) fn new_unchecked(ra: Angle, dec: Angle) -> RADec {
        Self {
            ra: ra.to_hours().wrapped(),
            dec: clamp_polar(dec),
        }
    }

    /// Right ascension \[hours\]
    pub fn right_ascension(self) -> Angle {
        self.ra
    }

    /// Declination \[degrees\]
    pub fn declination(self) -> Angle {
        self.dec
    }

    /// Given a local sidereal time, make a new [`HADec`] struct from a [`RADec`].
    pub fn to_hadec(self, lst: Angle) -> HADec {
        HADec::new_unchecked(lst - self.ra, self.dec)
    }

    /// Given a local sidereal time, make a new [`RADec`] struct from a [`HADec`].
    pub fn from_hadec(hadec: HADec, lst: Angle) -> RADec {
        Self::new_unchecked(lst - hadec.hour_angle(), hadec.declination())
    }

    /// Calculate the angular distance between two sets of coordinates. The
    /// result is in radians.
    ///
    /// Uses ERFA.
    pub fn separation(self, b: Self) -> Angle {
        Angle::from_radians(eraSeps(
            self.ra.radians(),
            self.dec.radians(),
            b.ra.radians(),
            b.dec.radians(),
        ))
    }
}

/// Make a [`RADec`] from a right ascension and a declination.
pub fn equatorial(ra: Angle, dec: Angle) -> Result<RADec, PosError> {
    RADec::new(ra, dec)
}

impl std::fmt::Display for RADec {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {})",
            degrees_to_sexagesimal_hms(self.ra.degrees()),
            degrees_to_sexagesimal_dms(self.dec.value())
        )
    }
}

// `epsilon` is in radians. Right ascensions either side of 0h are compared
// across the branch cut.
#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for RADec {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let d_ra = (self.ra - other.ra).wrapped_signed().radians();
        f64::abs_diff_eq(&d_ra, &0.0, epsilon)
            && f64::abs_diff_eq(&self.dec.radians(), &other.dec.radians(), epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::RelativeEq for RADec {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        let d_ra = (self.ra - other.ra).wrapped_signed().radians();
        f64::relative_eq(&d_ra, &0.0, epsilon, max_relative)
            && f64::relative_eq(
                &self.dec.radians(),
                &other.dec.radians(),
                epsilon,
                max_relative,
            )
    }
}
