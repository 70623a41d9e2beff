// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julian Dates.
//!
//! Calendar dates are always interpreted in the proleptic Gregorian calendar,
//! including dates before the 1582 reform. Invalid calendar input is rejected,
//! never clamped.

use hifitime::{Duration, Epoch};

use super::TimeError;
use crate::constants::{DAYSEC, DAYS_PER_JULIAN_CENTURY, DJM0, J2000_JD, MIN_CALENDAR_YEAR};

/// Limits of the calendar conversion (as in ERFA's `jd2cal`).
const JD_MIN: f64 = -68569.5;
const JD_MAX: f64 = 1e9;

/// A Julian Date: days (and fractions of a day) since noon on 1 January 4713
/// BC in the Julian calendar. The time scale is whatever the caller supplies;
/// the sidereal time functions treat it as UT1.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate(f64);

/// A proleptic Gregorian calendar date with the time of day in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Seconds since midnight, in [0, 86400).
    pub seconds: f64,
}

pub fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// The number of days in a month, or [`None`] if `month` isn't 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// Validate a proleptic Gregorian date and get its Modified Julian Day
/// number, using the integer algorithm of ERFA's `cal2jd`.
fn modified_day_number(year: i32, month: u32, day: u32) -> Result<f64, TimeError> {
    if year < MIN_CALENDAR_YEAR {
        return Err(TimeError::YearOutOfRange(year));
    }
    let month_len = days_in_month(year, month).ok_or(TimeError::MonthOutOfRange(month))?;
    if day == 0 || day > month_len {
        return Err(TimeError::DayOutOfRange { year, month, day });
    }

    let year = i64::from(year);
    let month = i64::from(month);
    let my = (month - 14) / 12;
    let iypmy = year + my;
    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + i64::from(day)
        - 2432076;
    Ok(mjd as f64)
}

impl JulianDate {
    /// Wrap a raw day count.
    pub fn from_days(days: f64) -> JulianDate {
        Self(days)
    }

    /// 2000-01-01 12:00:00.
    pub fn j2000() -> JulianDate {
        Self(J2000_JD)
    }

    /// Convert a proleptic Gregorian calendar date and the number of seconds
    /// since midnight into a Julian Date.
    ///
    /// This uses the integer Julian Day Number algorithm of ERFA's `cal2jd`.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        seconds: f64,
    ) -> Result<JulianDate, TimeError> {
        let mjd = modified_day_number(year, month, day)?;
        if !(0.0..DAYSEC).contains(&seconds) {
            return Err(TimeError::SecondsOfDayOutOfRange(seconds));
        }
        Ok(Self(DJM0 + mjd + seconds / DAYSEC))
    }

    /// Like [`JulianDate::from_calendar`], with the time of day given as
    /// hours, minutes and seconds.
    pub fn from_calendar_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<JulianDate, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::SecondOutOfRange(second));
        }
        let mjd = modified_day_number(year, month, day)?;
        // The components are valid on their own; their sum may still round
        // up to a whole day.
        let seconds = f64::from(hour * 3600 + minute * 60) + second;
        Ok(Self(DJM0 + mjd + seconds / DAYSEC))
    }

    /// Get the Julian Date of the current instant (UTC) from the system clock.
    pub fn now() -> Result<JulianDate, TimeError> {
        let epoch = Epoch::now().map_err(TimeError::Clock)?;
        Ok(Self::from_epoch(epoch))
    }

    /// Convert a [`hifitime::Epoch`] into a Julian Date in the UTC scale.
    pub fn from_epoch(epoch: Epoch) -> JulianDate {
        Self(epoch.to_jde_utc_days())
    }

    /// Convert into a [`hifitime::Epoch`], interpreting this date as UTC.
    pub fn to_epoch(self) -> Epoch {
        Epoch::from_jde_utc(self.0)
    }

    /// Convert back into a proleptic Gregorian calendar date (Fliegel & Van
    /// Flandern, as in ERFA's `jd2cal`).
    pub fn to_calendar(self) -> Result<CalendarDate, TimeError> {
        if !(JD_MIN..=JD_MAX).contains(&self.0) {
            return Err(TimeError::JulianDateOutOfRange(self.0));
        }

        let shifted = self.0 + 0.5;
        let jdn = shifted.floor();
        let fraction = shifted - jdn;

        let mut l = jdn as i64 + 68569;
        let n = (4 * l) / 146097;
        l -= (146097 * n + 3) / 4;
        let i = (4000 * (l + 1)) / 1461001;
        l -= (1461 * i) / 4 - 31;
        let k = (80 * l) / 2447;
        let day = l - (2447 * k) / 80;
        l = k / 11;
        let month = k + 2 - 12 * l;
        let year = 100 * (n - 49) + i + l;

        Ok(CalendarDate {
            year: year as i32,
            month: month as u32,
            day: day as u32,
            seconds: fraction * DAYSEC,
        })
    }

    /// The raw day count.
    pub fn days(self) -> f64 {
        self.0
    }

    /// The Modified Julian Date (JD - 2400000.5).
    pub fn mjd(self) -> f64 {
        self.0 - DJM0
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.0 - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }

    pub fn add_days(self, days: f64) -> JulianDate {
        Self(self.0 + days)
    }

    pub fn add_duration(self, duration: Duration) -> JulianDate {
        self.add_days(duration.to_seconds() / DAYSEC)
    }
}

/// Get the Julian Date of the current instant. Not deterministic; every call
/// reads the system clock.
pub fn now_jd() -> Result<JulianDate, TimeError> {
    JulianDate::now()
}

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "JD {:.9}", self.0)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for JulianDate {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.0, &other.0, epsilon)
    }
}
