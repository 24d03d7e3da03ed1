//! # Day number and day fraction
//!
//! A [`Split`] is a day count taken apart into the integral **day number** and the **day
//! fraction** in `[0, 1)`, so that `day_number + fraction` is the continuous count.
//!
//! - [`floor_split`] builds one from a continuous count, flooring toward negative
//!   infinity: `-2.25` becomes `(-3, 0.75)`, never `(-2, -0.25)`.
//! - [`validate`] checks a day number and fraction supplied from outside, as arguments or
//!   as a deserialized [`Split`], before any arithmetic touches them. Splits built by
//!   [`floor_split`] are correct by construction and never go through it.
//!
//! With an exact number type the split is exact. With `f64` the fraction carries the
//! rounding of the subtraction, which grows with the magnitude of the count.
use std::fmt;

use tracing::trace;

use crate::julian_errors::JulianError;
use crate::numeric::DayCount;

/// A day count as `(day_number, fraction)`.
///
/// # Fields
///
/// * `day_number` - integral day number
/// * `fraction` - time of day since the flavour's day boundary, in `[0, 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "SplitParts<T>",
        bound(deserialize = "T: DayCount + serde::Deserialize<'de>")
    )
)]
pub struct Split<T> {
    day_number: T,
    fraction: T,
}

/// Unchecked wire form of a [`Split`]; deserialization goes through [`Split::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SplitParts<T> {
    day_number: T,
    fraction: T,
}

#[cfg(feature = "serde")]
impl<T: DayCount> TryFrom<SplitParts<T>> for Split<T> {
    type Error = JulianError;

    fn try_from(parts: SplitParts<T>) -> Result<Self, Self::Error> {
        Split::new(parts.day_number, parts.fraction)
    }
}

impl<T: DayCount> Split<T> {
    /// Build a split from caller-supplied parts.
    ///
    /// Arguments
    /// ---------
    /// * `day_number`: must be integral
    /// * `fraction`: must lie in `[0, 1)`
    ///
    /// Return
    /// ------
    /// * the split, or the [`validate`] error
    pub fn new(day_number: T, fraction: T) -> Result<Self, JulianError> {
        validate(&day_number, &fraction)?;
        Ok(Split {
            day_number,
            fraction,
        })
    }

    pub fn day_number(&self) -> &T {
        &self.day_number
    }

    pub fn fraction(&self) -> &T {
        &self.fraction
    }

    pub fn into_day_number(self) -> T {
        self.day_number
    }

    /// `day_number + fraction`
    pub fn join(self) -> T {
        self.day_number + self.fraction
    }
}

impl<T> From<Split<T>> for (T, T) {
    fn from(split: Split<T>) -> Self {
        (split.day_number, split.fraction)
    }
}

impl<T: fmt::Display> fmt::Display for Split<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.day_number, self.fraction)
    }
}

/// Split a continuous count into day number and fraction.
///
/// Arguments
/// ---------
/// * `value`: a finite day count
///
/// Return
/// ------
/// * `(floor(value), value - floor(value))`
///
/// For `f64`, a value just below a whole number can round its fraction up to exactly 1;
/// the result is then carried to the next day with a zero fraction so that the fraction
/// stays in `[0, 1)`.
pub fn floor_split<T: DayCount>(value: T) -> Split<T> {
    let day_number = value.floor();
    let fraction = value - day_number.clone();
    if fraction < T::one() {
        Split {
            day_number,
            fraction,
        }
    } else {
        Split {
            day_number: day_number + T::one(),
            fraction: T::zero(),
        }
    }
}

/// Check a caller-supplied day number and fraction.
///
/// Arguments
/// ---------
/// * `day_number`: must be integral
/// * `fraction`: must lie in `[0, 1)`; NaN is rejected
///
/// Return
/// ------
/// * `Ok(())`, [`JulianError::NonIntegerDayNumber`] or [`JulianError::FractionOutOfRange`]
pub fn validate<T: DayCount>(day_number: &T, fraction: &T) -> Result<(), JulianError> {
    if !day_number.is_integer() {
        trace!(%day_number, "rejected non-integral day number");
        return Err(JulianError::NonIntegerDayNumber(day_number.to_string()));
    }
    let in_range = *fraction >= T::zero() && *fraction < T::one();
    if !in_range {
        trace!(%fraction, "rejected day fraction");
        return Err(JulianError::FractionOutOfRange(fraction.to_string()));
    }
    Ok(())
}
