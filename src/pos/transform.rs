// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions between equatorial and horizontal coordinates for an observer
//! at a [`Location`] and a [`JulianDate`].

use super::{azel::AzEl, earth::Location, radec::RADec};
use crate::{Angle, JulianDate};

/// Get the local hour angle of `eq` in hours, in [-12h, 12h). Positive values
/// are west of the meridian.
pub fn hour_angle(eq: RADec, loc: Location, jd: JulianDate) -> Angle {
    eq.to_hadec(loc.local_sidereal_time(jd)).hour_angle()
}

/// Convert equatorial coordinates to horizontal coordinates as seen from
/// `loc` at `jd`.
pub fn to_horizontal(eq: RADec, loc: Location, jd: JulianDate) -> AzEl {
    let lst = loc.local_sidereal_time(jd);
    eq.to_hadec(lst).to_azel(loc.latitude())
}

/// Convert horizontal coordinates as seen from `loc` at `jd` to equatorial
/// coordinates.
pub fn to_equatorial(hz: AzEl, loc: Location, jd: JulianDate) -> RADec {
    let lst = loc.local_sidereal_time(jd);
    hz.to_hadec(loc.latitude()).to_radec(lst)
}
