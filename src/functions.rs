//! # Named conversion functions
//!
//! One function per ordered flavour pair and conversion shape, generated at compile time from
//! the flavour table. Names use the lower-case flavour abbreviations with two suffixes:
//! `n` for a day number and `nf` for a day number with its fraction.
//!
//! | Shape | Name | Result |
//! |-------|------|--------|
//! | value → value | `jd_to_mjd` | `T` |
//! | value → day number | `jd_to_mjdn` | `T` |
//! | value → day number and fraction | `jd_to_mjdnf` | [`Split<T>`] |
//! | day number and fraction → value | `jdnf_to_mjd` | `Result<T, JulianError>` |
//! | day number and fraction → day number | `jdnf_to_mjdn` | `Result<T, JulianError>` |
//! | day number and fraction → day number and fraction | `jdnf_to_mjdnf` | `Result<Split<T>, JulianError>` |
//! | day number → day number | `mjdn_to_tjdn` | `Result<T, JulianError>` |
//!
//! Functions for a pair whose zone relativity differs take a trailing `zone` argument, the
//! local clock's offset ahead of UT in fractional days; no other function has one.
//!
//! The day-number-only form `<src>n_to_<dst>n` exists only for pairs whose days start at the
//! same clock instant and share zone relativity, where the fraction defaults to zero:
//!
//! - JD, RJD and DJD (days starting at noon UT)
//! - MJD and TJD (days starting at midnight UT)
//! - CJD, RD and LD (days starting at local midnight)
//!
//! ```rust
//! use julian_dates::functions::{cjdn_to_rdn, jd_to_cjd, jd_to_mjd, mjd_to_jdnf};
//!
//! assert_eq!(jd_to_mjd(2_453_883.125), 53_882.625);
//! assert_eq!(jd_to_cjd(2_453_883.125, 0.0625), 2_453_883.6875);
//! assert_eq!(mjd_to_jdnf(53_882.625).into_day_number(), 2_453_883.0);
//! assert_eq!(cjdn_to_rdn(2_453_883.0), Ok(732_458.0));
//! ```
use paste::paste;

use crate::conversion::Conversion;
use crate::flavour::Flavour;
use crate::julian_errors::JulianError;
use crate::numeric::DayCount;
use crate::pair::Pair;
use crate::split::Split;

macro_rules! zone_arg {
    () => {
        None
    };
    ($zone:ident) => {
        Some($zone)
    };
}

/// The six shapes of one ordered pair.
macro_rules! pair_functions {
    ($src:ident => $dst:ident ($($zone:ident)?)) => {
        paste! {
            const [<$src:upper _TO_ $dst:upper>]: Pair =
                Pair::resolve(Flavour::[<$src:camel>], Flavour::[<$dst:camel>]);

            #[doc = "Continuous `" $src "` count to continuous `" $dst "` count."]
            pub fn [<$src _to_ $dst>]<T: DayCount>(value: T $(, $zone: T)?) -> T {
                Conversion::resolved([<$src:upper _TO_ $dst:upper>], zone_arg!($($zone)?))
                    .value(value)
            }

            #[doc = "Continuous `" $src "` count to `" $dst "` day number."]
            pub fn [<$src _to_ $dst n>]<T: DayCount>(value: T $(, $zone: T)?) -> T {
                Conversion::resolved([<$src:upper _TO_ $dst:upper>], zone_arg!($($zone)?))
                    .day_number(value)
            }

            #[doc = "Continuous `" $src "` count to `" $dst "` day number and fraction."]
            pub fn [<$src _to_ $dst nf>]<T: DayCount>(value: T $(, $zone: T)?) -> Split<T> {
                Conversion::resolved([<$src:upper _TO_ $dst:upper>], zone_arg!($($zone)?))
                    .split(value)
            }

            #[doc = "`" $src "` day number and fraction to continuous `" $dst "` count."]
            pub fn [<$src nf_to_ $dst>]<T: DayCount>(
                day_number: T,
                fraction: T
                $(, $zone: T)?
            ) -> Result<T, JulianError> {
                Conversion::resolved([<$src:upper _TO_ $dst:upper>], zone_arg!($($zone)?))
                    .from_split(day_number, fraction)
            }

            #[doc = "`" $src "` day number and fraction to `" $dst "` day number."]
            pub fn [<$src nf_to_ $dst n>]<T: DayCount>(
                day_number: T,
                fraction: T
                $(, $zone: T)?
            ) -> Result<T, JulianError> {
                Conversion::resolved([<$src:upper _TO_ $dst:upper>], zone_arg!($($zone)?))
                    .split_to_day_number(day_number, fraction)
            }

            #[doc = "`" $src "` day number and fraction to `" $dst "` day number and fraction."]
            pub fn [<$src nf_to_ $dst nf>]<T: DayCount>(
                day_number: T,
                fraction: T
                $(, $zone: T)?
            ) -> Result<Split<T>, JulianError> {
                Conversion::resolved([<$src:upper _TO_ $dst:upper>], zone_arg!($($zone)?))
                    .split_to_split(day_number, fraction)
            }
        }
    };
}

/// Day number to day number, for pairs sharing day boundary and zone relativity.
macro_rules! day_number_function {
    ($src:ident => $dst:ident) => {
        paste! {
            #[doc = "`" $src "` day number to `" $dst "` day number."]
            pub fn [<$src n_to_ $dst n>]<T: DayCount>(day_number: T) -> Result<T, JulianError> {
                Conversion::resolved([<$src:upper _TO_ $dst:upper>], None)
                    .split_to_day_number(day_number, T::zero())
            }
        }
    };
}

/// Cross product of two flavour lists; `(zone)` marks pairs that cross zone relativity.
macro_rules! cross_pairs {
    (@row $src:ident [$($dst:ident),*] $zone:tt) => {
        $( pair_functions!($src => $dst $zone); )*
    };
    ([$($src:ident),*] $dsts:tt $zone:tt) => {
        $( cross_pairs!(@row $src $dsts $zone); )*
    };
}

/// Cross product of one flavour class with itself.
macro_rules! day_number_class {
    (@row $src:ident [$($dst:ident),*]) => {
        $( day_number_function!($src => $dst); )*
    };
    ([$($src:ident),*]) => {
        day_number_class!(@all [$($src),*] [$($src),*]);
    };
    (@all [$($src:ident),*] $dsts:tt) => {
        $( day_number_class!(@row $src $dsts); )*
    };
}

cross_pairs!([jd, rjd, mjd, djd, tjd] [jd, rjd, mjd, djd, tjd] ());
cross_pairs!([cjd, rd, ld] [cjd, rd, ld] ());
cross_pairs!([jd, rjd, mjd, djd, tjd] [cjd, rd, ld] (zone));
cross_pairs!([cjd, rd, ld] [jd, rjd, mjd, djd, tjd] (zone));

day_number_class!([jd, rjd, djd]);
day_number_class!([mjd, tjd]);
day_number_class!([cjd, rd, ld]);
