// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.

/// Seconds per day (86400)
pub const DAYSEC: f64 = erfa::constants::ERFA_DAYSEC;
/// Julian Date of the Modified Julian Date zero point (2400000.5).
pub const DJM0: f64 = erfa::constants::ERFA_DJM0;
/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00).
pub const J2000_JD: f64 = 2451545.0;
/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Degrees per hour of angle. Exact by definition.
pub const DEGREES_PER_HOUR: f64 = 15.0;
/// Ratio of a solar day to a sidereal day (1.00273790935).
pub const SOLAR2SIDEREAL: f64 = 1.002_737_909_35;
/// Length of a mean sidereal day \[solar days\].
pub const SIDEREAL_DAY: f64 = 1.0 / SOLAR2SIDEREAL;

// GMST polynomial coefficients (IAU 1982, as given by Meeus eq. 12.4), in
// degrees.
/// GMST at J2000.0 \[degrees\]
pub const GMST_J2000_DEG: f64 = 280.46061837;
/// GMST rate \[degrees per day\]
pub const GMST_RATE_DEG_PER_DAY: f64 = 360.98564736629;
/// GMST quadratic term \[degrees per century squared\]
pub const GMST_T2_DEG: f64 = 0.000387933;
/// Divisor of the GMST cubic term \[degrees per century cubed\]
pub const GMST_T3_DIVISOR: f64 = 38710000.0;

/// The earliest year the integer Julian Day Number algorithm supports.
pub const MIN_CALENDAR_YEAR: i32 = -4799;
