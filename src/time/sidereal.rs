// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mean sidereal time.
//!
//! Greenwich Mean Sidereal Time uses the IAU 1982 polynomial in the form
//! given by Meeus, "Astronomical Algorithms" (2nd ed.), eq. 12.4. Nutation
//! is not applied, so this is mean (not apparent) sidereal time.

use hifitime::{Duration, Epoch};

use super::JulianDate;
use crate::constants::{
    GMST_J2000_DEG, GMST_RATE_DEG_PER_DAY, GMST_T2_DEG, GMST_T3_DIVISOR, J2000_JD,
};
use crate::units::Angle;

/// Get the Greenwich Mean Sidereal Time for a Julian Date (taken to be
/// UT1). The result is in hours, in [0h, 24h).
pub fn sidereal_time(jd: JulianDate) -> Angle {
    let d = jd.days() - J2000_JD;
    let t = jd.centuries_since_j2000();
    let theta = GMST_J2000_DEG + GMST_RATE_DEG_PER_DAY * d + GMST_T2_DEG * t * t
        - t * t * t / GMST_T3_DIVISOR;
    Angle::from_degrees(theta).to_hours().wrapped()
}

/// Get the local mean sidereal time at a longitude (east positive). The
/// result is in hours, in [0h, 24h).
pub fn local_sidereal_time(jd: JulianDate, longitude: Angle) -> Angle {
    (sidereal_time(jd) + longitude).wrapped()
}

/// Get the local mean sidereal time from a [`hifitime::Epoch`]. `time` should
/// be in the UTC frame, and `dut1` (i.e. UT1 - UTC) provides a better
/// estimate of the LMST. If DUT1 isn't known, then a [`Duration`] of 0 seconds
/// can be used; the results are wrong by up to 0.9 seconds.
pub fn local_sidereal_time_from_epoch(longitude: Angle, time: Epoch, dut1: Duration) -> Angle {
    local_sidereal_time(JulianDate::from_epoch(time + dut1), longitude)
}
