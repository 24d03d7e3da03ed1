//! # Numeric contract for day counts
//!
//! The conversion engine never looks at a concrete number type. Every value it touches goes
//! through [`DayCount`], which asks for the handful of operations a linear day count needs:
//!
//! - addition and subtraction (via [`num_traits::Zero`] / [`num_traits::One`] and `std::ops`),
//! - ordering and equality,
//! - an integrality test,
//! - a floor returning the same type,
//! - an exact constructor for the small ratios used by the flavour table and zone helpers.
//!
//! ## Backends
//!
//! | Type | Exact | Notes |
//! |------|-------|-------|
//! | `f64` | no | fast; rounding grows with the magnitude of the count |
//! | [`num_rational::Ratio<I>`] | yes | `Rational64`, `Ratio<i128>`, `BigRational` (feature `rational`) |
//!
//! Choosing a backend is a compile-time decision: every conversion function is generic over
//! `T: DayCount` and returns the same `T` it was given.
use std::fmt::{Debug, Display};
use std::ops::Sub;

use num_traits::{One, Zero};

/// A number type that can carry a Julian day count.
pub trait DayCount:
    Clone + PartialOrd + Debug + Display + Zero + One + Sub<Output = Self>
{
    /// Build `numer / denom` in this type.
    ///
    /// Arguments
    /// ---------
    /// * `numer`: numerator
    /// * `denom`: denominator, never zero
    ///
    /// Return
    /// ------
    /// * the ratio, exact for exact types and correctly rounded for floating point
    fn from_ratio(numer: i64, denom: i64) -> Self;

    /// `true` when the value is a whole number.
    fn is_integer(&self) -> bool;

    /// Largest whole number not greater than the value.
    fn floor(&self) -> Self;
}

impl DayCount for f64 {
    fn from_ratio(numer: i64, denom: i64) -> Self {
        numer as f64 / denom as f64
    }

    /// NaN and infinities are not integers.
    fn is_integer(&self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }

    fn floor(&self) -> Self {
        f64::floor(*self)
    }
}

#[cfg(feature = "rational")]
mod rational {
    use std::fmt::{Debug, Display};

    use num_integer::Integer;
    use num_rational::Ratio;

    use super::DayCount;

    impl<I> DayCount for Ratio<I>
    where
        I: Clone + Integer + From<i64> + Debug + Display,
    {
        fn from_ratio(numer: i64, denom: i64) -> Self {
            Ratio::new(I::from(numer), I::from(denom))
        }

        fn is_integer(&self) -> bool {
            Ratio::is_integer(self)
        }

        fn floor(&self) -> Self {
            Ratio::floor(self)
        }
    }
}
