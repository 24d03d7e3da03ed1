//! # Runtime conversion between flavours
//!
//! [`Conversion`] binds a resolved [`Pair`] to the caller's zone offset and exposes the four
//! conversion shapes:
//!
//! | Input | Output | Method |
//! |-------|--------|--------|
//! | value | value | [`Conversion::value`] |
//! | value | day number / split | [`Conversion::day_number`] / [`Conversion::split`] |
//! | split | value | [`Conversion::from_split`] |
//! | split | day number / split | [`Conversion::split_to_day_number`] / [`Conversion::split_to_split`] |
//! | day number | day number | [`Conversion::day_to_day`] |
//!
//! Each shape is one addition of the pair's net offset, preceded by validation for split
//! inputs and followed by [`floor_split`] for split outputs. The day-number-only results
//! are taken from the same split as the paired ones, so the two can never disagree.
//!
//! This is the entry point when the flavours are only known at runtime (parsed from a
//! string, for instance). When they are known statically, the functions of
//! [`crate::functions`] encode the zone argument in their signature instead.
//!
//! ```rust
//! use julian_dates::{conversion::Conversion, flavour::Flavour};
//!
//! let jd_to_cjd = Conversion::new(Flavour::Jd, Flavour::Cjd, Some(0.0625)).unwrap();
//! assert_eq!(jd_to_cjd.value(2_453_883.125), 2_453_883.6875);
//!
//! let split = jd_to_cjd.split(2_453_883.125);
//! assert_eq!(split.into_day_number(), 2_453_883.0);
//! ```
use tracing::debug;

use crate::flavour::Flavour;
use crate::julian_errors::JulianError;
use crate::numeric::DayCount;
use crate::pair::Pair;
use crate::split::{floor_split, validate, Split};

/// A flavour pair bound to its net offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<T> {
    pair: Pair,
    offset: T,
}

impl<T: DayCount> Conversion<T> {
    /// Build the conversion from `src` to `dst`.
    ///
    /// Arguments
    /// ---------
    /// * `src`: source flavour
    /// * `dst`: destination flavour
    /// * `zone`: zone offset in fractional days ahead of UT; required when exactly one of the
    ///   two flavours is zone relative, ignored otherwise
    ///
    /// Return
    /// ------
    /// * the conversion, or [`JulianError::MissingZoneOffset`]
    pub fn new(src: Flavour, dst: Flavour, zone: Option<T>) -> Result<Self, JulianError> {
        Self::from_pair(Pair::lookup(src, dst), zone)
    }

    /// Same as [`Conversion::new`] for an already resolved pair.
    pub fn from_pair(pair: Pair, zone: Option<T>) -> Result<Self, JulianError> {
        if pair.requires_zone() && zone.is_none() {
            return Err(JulianError::MissingZoneOffset {
                src: pair.src(),
                dst: pair.dst(),
            });
        }
        let conversion = Self::resolved(pair, zone);
        debug!(
            src = %pair.src(),
            dst = %pair.dst(),
            offset = %conversion.offset,
            "conversion resolved"
        );
        Ok(conversion)
    }

    /// Build without checking the zone arity; the caller's signature guarantees it.
    pub(crate) fn resolved(pair: Pair, zone: Option<T>) -> Self {
        Conversion {
            pair,
            offset: pair.offset(zone),
        }
    }

    pub fn pair(&self) -> Pair {
        self.pair
    }

    /// Net amount added to every source count.
    pub fn offset(&self) -> &T {
        &self.offset
    }

    /// Continuous source count to continuous destination count.
    pub fn value(&self, value: T) -> T {
        value + self.offset.clone()
    }

    /// Continuous source count to destination day number and fraction.
    pub fn split(&self, value: T) -> Split<T> {
        floor_split(self.value(value))
    }

    /// Continuous source count to destination day number.
    pub fn day_number(&self, value: T) -> T {
        self.split(value).into_day_number()
    }

    /// Source day number and fraction to continuous destination count.
    ///
    /// Return
    /// ------
    /// * the destination count, or the validation error for the supplied parts
    pub fn from_split(&self, day_number: T, fraction: T) -> Result<T, JulianError> {
        validate(&day_number, &fraction)?;
        Ok(day_number + fraction + self.offset.clone())
    }

    /// Source day number and fraction to destination day number and fraction.
    pub fn split_to_split(&self, day_number: T, fraction: T) -> Result<Split<T>, JulianError> {
        self.from_split(day_number, fraction).map(floor_split)
    }

    /// Source day number and fraction to destination day number.
    pub fn split_to_day_number(&self, day_number: T, fraction: T) -> Result<T, JulianError> {
        self.split_to_split(day_number, fraction)
            .map(Split::into_day_number)
    }

    /// Source day number to destination day number, the fraction taken as zero.
    ///
    /// Only pairs whose days start at the same clock instant allow this
    /// (see [`Pair::fraction_optional`]); others fail with [`JulianError::FractionRequired`].
    pub fn day_to_day(&self, day_number: T) -> Result<T, JulianError> {
        if !self.pair.fraction_optional() {
            return Err(JulianError::FractionRequired {
                src: self.pair.src(),
                dst: self.pair.dst(),
            });
        }
        self.split_to_day_number(day_number, T::zero())
    }
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn parts(split: Split<f64>) -> (f64, f64) {
        split.into()
    }

    #[test]
    fn test_missing_zone_offset() {
        let err = Conversion::<f64>::new(Flavour::Mjd, Flavour::Ld, None).unwrap_err();
        assert_eq!(
            err,
            JulianError::MissingZoneOffset {
                src: Flavour::Mjd,
                dst: Flavour::Ld
            }
        );
        assert_eq!(
            err.to_string(),
            "A zone offset is required to convert from MJD to LD"
        );
    }

    #[test]
    fn test_zone_ignored_without_crossing() {
        let with_zone = Conversion::new(Flavour::Jd, Flavour::Mjd, Some(0.25)).unwrap();
        let without = Conversion::new(Flavour::Jd, Flavour::Mjd, None).unwrap();
        assert_eq!(with_zone, without);
    }

    #[test]
    fn test_value_shapes() {
        let jd_to_mjd = Conversion::new(Flavour::Jd, Flavour::Mjd, None).unwrap();
        assert_eq!(jd_to_mjd.value(2_453_883.125), 53_882.625);
        assert_eq!(parts(jd_to_mjd.split(2_453_883.125)), (53_882.0, 0.625));
        assert_eq!(jd_to_mjd.day_number(2_453_883.125), 53_882.0);
    }

    #[test]
    fn test_split_shapes() {
        let mjd_to_jd = Conversion::new(Flavour::Mjd, Flavour::Jd, None).unwrap();
        assert_eq!(mjd_to_jd.from_split(53_882.0, 0.625), Ok(2_453_883.125));
        assert_eq!(
            mjd_to_jd.split_to_split(53_882.0, 0.625).map(parts),
            Ok((2_453_883.0, 0.125))
        );
        assert_eq!(mjd_to_jd.split_to_day_number(53_882.0, 0.25), Ok(2_453_882.0));
        assert_eq!(
            mjd_to_jd.from_split(53_882.5, 0.0),
            Err(JulianError::NonIntegerDayNumber("53882.5".to_string()))
        );
    }

    #[test]
    fn test_day_to_day() {
        let cjd_to_rd = Conversion::<f64>::new(Flavour::Cjd, Flavour::Rd, None).unwrap();
        assert_eq!(cjd_to_rd.day_to_day(2_453_883.0), Ok(732_458.0));

        let mjd_to_jd = Conversion::<f64>::new(Flavour::Mjd, Flavour::Jd, None).unwrap();
        assert_eq!(
            mjd_to_jd.day_to_day(53_882.0),
            Err(JulianError::FractionRequired {
                src: Flavour::Mjd,
                dst: Flavour::Jd
            })
        );

        let rd_to_jd = Conversion::new(Flavour::Rd, Flavour::Jd, Some(0.0)).unwrap();
        assert!(rd_to_jd.day_to_day(732_458.0).is_err());
    }

    #[test]
    fn test_negative_zone() {
        // 6 hours behind UT
        let tjd_to_ld = Conversion::new(Flavour::Tjd, Flavour::Ld, Some(-0.25)).unwrap();
        let ld = tjd_to_ld.value(13_882.625);
        assert_abs_diff_eq!(ld, 13_882.625 + 2_440_000.5 - 2_299_159.5 - 0.25, epsilon = 1e-9);
        assert_eq!(parts(tjd_to_ld.split(13_882.625)), (154_723.0, 0.375));
    }
}
