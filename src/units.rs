// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Unit-tagged angles.
//!
//! An [`Angle`] keeps its magnitude in the unit it was made with (degrees,
//! hours or radians). Nothing is converted until a conversion is asked for,
//! and conversions between degrees and hours are exact multiplications by 15.

use std::f64::consts::TAU;
use std::ops::{Add, Neg, Sub};

use erfa::aliases::eraAnp;

use crate::constants::DEGREES_PER_HOUR;
use crate::sexagesimal::{
    degrees_to_sexagesimal_dms, degrees_to_sexagesimal_hms, sexagesimal_dms_str_to_degrees,
    sexagesimal_hms_str_to_hours, sexagesimal_to_decimal, Sexagesimal, SexagesimalError,
};

/// The unit an [`Angle`]'s magnitude is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleUnit {
    Degrees,
    /// Hours of angle (1h = 15°).
    Hours,
    Radians,
}

impl AngleUnit {
    /// The size of one full turn in this unit.
    pub fn full_turn(self) -> f64 {
        match self {
            AngleUnit::Degrees => 360.0,
            AngleUnit::Hours => 24.0,
            AngleUnit::Radians => TAU,
        }
    }
}

/// An angle (or time-like angle) tagged with its unit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    value: f64,
    unit: AngleUnit,
}

/// Wrap `value` into [0, period). Never returns `period` itself, even when
/// `rem_euclid` rounds a tiny negative value up to it.
pub(crate) fn wrap(value: f64, period: f64) -> f64 {
    let w = value.rem_euclid(period);
    if w >= period {
        0.0
    } else {
        w
    }
}

/// Wrap `value` into [-period/2, period/2).
pub(crate) fn wrap_signed(value: f64, period: f64) -> f64 {
    let half = period / 2.0;
    wrap(value + half, period) - half
}

impl Angle {
    pub fn new(value: f64, unit: AngleUnit) -> Angle {
        Self { value, unit }
    }

    pub fn from_degrees(degrees: f64) -> Angle {
        Self::new(degrees, AngleUnit::Degrees)
    }

    pub fn from_hours(hours: f64) -> Angle {
        Self::new(hours, AngleUnit::Hours)
    }

    pub fn from_radians(radians: f64) -> Angle {
        Self::new(radians, AngleUnit::Radians)
    }

    /// Make an angle in degrees from degrees, arcminutes and arcseconds. The
    /// sign applies to the whole triple; see
    /// [`sexagesimal_to_decimal`](crate::sexagesimal::sexagesimal_to_decimal).
    pub fn make_degrees(degrees: f64, minutes: f64, seconds: f64) -> Angle {
        Self::from_degrees(sexagesimal_to_decimal(degrees, minutes, seconds))
    }

    /// Make an angle in hours from hours, minutes and seconds. The sign
    /// applies to the whole triple.
    pub fn make_hours(hours: f64, minutes: f64, seconds: f64) -> Angle {
        Self::from_hours(sexagesimal_to_decimal(hours, minutes, seconds))
    }

    /// Parse a string like `-06:43:11.61` or `-6d43m11.61s` into an angle in
    /// degrees.
    pub fn parse_dms(s: &str) -> Result<Angle, SexagesimalError> {
        sexagesimal_dms_str_to_degrees(s).map(Self::from_degrees)
    }

    /// Parse a string like `23:09:16.641` or `23h09m16.641s` into an angle in
    /// hours.
    pub fn parse_hms(s: &str) -> Result<Angle, SexagesimalError> {
        sexagesimal_hms_str_to_hours(s).map(Self::from_hours)
    }

    /// The raw magnitude, in this angle's own unit.
    pub fn value(self) -> f64 {
        self.value
    }

    pub fn unit(self) -> AngleUnit {
        self.unit
    }

    /// The magnitude in degrees.
    pub fn degrees(self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Hours => self.value * DEGREES_PER_HOUR,
            AngleUnit::Radians => self.value.to_degrees(),
        }
    }

    /// The magnitude in hours.
    pub fn hours(self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value / DEGREES_PER_HOUR,
            AngleUnit::Hours => self.value,
            AngleUnit::Radians => self.value.to_degrees() / DEGREES_PER_HOUR,
        }
    }

    /// The magnitude in radians.
    pub fn radians(self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value.to_radians(),
            AngleUnit::Hours => (self.value * DEGREES_PER_HOUR).to_radians(),
            AngleUnit::Radians => self.value,
        }
    }

    /// The same angle expressed in another unit.
    pub fn to_unit(self, unit: AngleUnit) -> Angle {
        let value = match unit {
            AngleUnit::Degrees => self.degrees(),
            AngleUnit::Hours => self.hours(),
            AngleUnit::Radians => self.radians(),
        };
        Self::new(value, unit)
    }

    pub fn to_degrees(self) -> Angle {
        self.to_unit(AngleUnit::Degrees)
    }

    pub fn to_hours(self) -> Angle {
        self.to_unit(AngleUnit::Hours)
    }

    pub fn to_radians(self) -> Angle {
        self.to_unit(AngleUnit::Radians)
    }

    /// Simultaneously compute the sine and cosine of the angle.
    pub fn sin_cos(self) -> (f64, f64) {
        self.radians().sin_cos()
    }

    /// Normalise into [0, one full turn) of this angle's unit.
    pub fn wrapped(self) -> Angle {
        let value = match self.unit {
            AngleUnit::Radians => {
                let w = eraAnp(self.value);
                if w >= TAU {
                    0.0
                } else {
                    w
                }
            }
            unit => wrap(self.value, unit.full_turn()),
        };
        Self::new(value, self.unit)
    }

    /// Normalise into [-half a turn, half a turn) of this angle's unit.
    pub fn wrapped_signed(self) -> Angle {
        Self::new(wrap_signed(self.value, self.unit.full_turn()), self.unit)
    }

    /// Decompose into degrees, arcminutes and arcseconds.
    pub fn to_dms(self) -> Sexagesimal {
        Sexagesimal::from_decimal(self.degrees())
    }

    /// Decompose into hours, minutes and seconds.
    pub fn to_hms(self) -> Sexagesimal {
        Sexagesimal::from_decimal(self.hours())
    }
}

impl Add for Angle {
    type Output = Angle;

    /// The result is in the left-hand side's unit.
    fn add(self, rhs: Angle) -> Angle {
        Self::new(self.value + rhs.to_unit(self.unit).value, self.unit)
    }
}

impl Sub for Angle {
    type Output = Angle;

    /// The result is in the left-hand side's unit.
    fn sub(self, rhs: Angle) -> Angle {
        Self::new(self.value - rhs.to_unit(self.unit).value, self.unit)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Self::new(-self.value, self.unit)
    }
}

impl std::fmt::Display for Angle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.unit {
            AngleUnit::Degrees => write!(
                f,
                "{}° ({})",
                self.value,
                degrees_to_sexagesimal_dms(self.value)
            ),
            AngleUnit::Hours => write!(
                f,
                "{}h ({})",
                self.value,
                degrees_to_sexagesimal_hms(self.degrees())
            ),
            AngleUnit::Radians => write!(f, "{} rad", self.value),
        }
    }
}

/// Literal-style construction, e.g. `38.5_f64.deg()` or `23_i32.hrs()`.
pub trait AngleLiterals {
    fn deg(self) -> Angle;
    fn hrs(self) -> Angle;
    fn rad(self) -> Angle;
}

impl AngleLiterals for f64 {
    fn deg(self) -> Angle {
        Angle::from_degrees(self)
    }

    fn hrs(self) -> Angle {
        Angle::from_hours(self)
    }

    fn rad(self) -> Angle {
        Angle::from_radians(self)
    }
}

impl AngleLiterals for i32 {
    fn deg(self) -> Angle {
        f64::from(self).deg()
    }

    fn hrs(self) -> Angle {
        f64::from(self).hrs()
    }

    fn rad(self) -> Angle {
        f64::from(self).rad()
    }
}

// Comparisons happen in the left-hand side's unit, so `epsilon` is in that
// unit too.
#[cfg(any(test, feature = "approx"))]
impl approx::AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.value, &other.to_unit(self.unit).value, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl approx::RelativeEq for Angle {
    #[inline]
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(
            &self.value,
            &other.to_unit(self.unit).value,
            epsilon,
            max_relative,
        )
    }
}
