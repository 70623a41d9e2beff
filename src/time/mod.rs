// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Super module for all time-keeping code: Julian Dates and sidereal time.

pub mod julian;
pub mod sidereal;

use thiserror::Error;

pub use julian::{now_jd, CalendarDate, JulianDate};
pub use sidereal::{local_sidereal_time, local_sidereal_time_from_epoch, sidereal_time};

#[derive(Error, Debug)]
pub enum TimeError {
    /// The integer Julian Day Number algorithm is only valid from 4800 BC.
    #[error("year {0} is before the earliest supported year (-4799)")]
    YearOutOfRange(i32),

    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    #[error("day {day} is not valid for {year}-{month:02}")]
    DayOutOfRange { year: i32, month: u32, day: u32 },

    #[error("hour {0} is outside 0..=23")]
    HourOutOfRange(u32),

    #[error("minute {0} is outside 0..=59")]
    MinuteOutOfRange(u32),

    #[error("second {0} is outside [0, 60)")]
    SecondOutOfRange(f64),

    #[error("seconds of day {0} is outside [0, 86400)")]
    SecondsOfDayOutOfRange(f64),

    /// ERFA's `jd2cal` limit; earlier dates don't map to the calendar.
    #[error("Julian Date {0} is outside the convertible range")]
    JulianDateOutOfRange(f64),

    #[error("could not read the system clock: {0}")]
    Clock(hifitime::Errors),
}
