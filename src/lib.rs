// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julian dates, mean sidereal time and conversions between equatorial and
//! horizontal coordinates.
//!
//! ```
//! use vela::{equatorial, geographical, to_horizontal, Angle, JulianDate};
//!
//! let venus = equatorial(
//!     Angle::make_hours(23.0, 9.0, 16.641),
//!     Angle::make_degrees(-6.0, 43.0, 11.61),
//! )
//! .unwrap();
//! let washington = geographical(
//!     Angle::make_degrees(-77.0, 3.0, 56.0),
//!     Angle::make_degrees(38.0, 55.0, 17.0),
//! )
//! .unwrap();
//! let jd = JulianDate::from_calendar_hms(1987, 4, 10, 19, 21, 0.0).unwrap();
//! let hz = to_horizontal(venus, washington, jd);
//! assert!((hz.altitude().value() - 15.1243).abs() < 1e-3);
//! ```

pub mod constants;
pub mod pos;
pub mod sexagesimal;
pub mod time;
pub mod units;

// Re-exports.
pub use pos::{
    azel::{horizontal, AzEl},
    earth::{geographical, Location},
    hadec::HADec,
    radec::{equatorial, RADec},
    transform::{hour_angle, to_equatorial, to_horizontal},
    PosError,
};
pub use sexagesimal::{Sexagesimal, SexagesimalError};
pub use time::{
    local_sidereal_time, local_sidereal_time_from_epoch, now_jd, sidereal_time, CalendarDate,
    JulianDate, TimeError,
};
pub use units::{Angle, AngleLiterals, AngleUnit};

pub use hifitime;

#[cfg(test)]
#[test]
fn hifitime_works_as_expected() {
    use hifitime::Epoch;

    let jd_utc = 2446896.30625;
    let epoch = Epoch::from_jde_utc(jd_utc);
    approx::assert_abs_diff_eq!(epoch.to_jde_utc_days(), jd_utc, epsilon = 1e-9);

    let epoch = Epoch::from_gregorian_utc_hms(1987, 4, 10, 19, 21, 0);
    approx::assert_abs_diff_eq!(epoch.to_jde_utc_days(), jd_utc, epsilon = 1e-9);
}
