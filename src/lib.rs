//! # Julian Date flavours
//!
//! Conversions between the eight linear day counts of the Julian Date family:
//!
//! - **UT flavours**: JD, RJD, MJD, DJD, TJD
//! - **zone-relative flavours**: CJD, RD, LD, counting days of the local clock
//!
//! Each flavour is available as a continuous count of days and as a day number with its day
//! fraction in `[0, 1)`. Every conversion is a translation by the difference of the two
//! epochs, shifted by the caller's zone offset when exactly one side is zone relative.
//!
//! ## Structure
//!
//! ```text
//! flavour    epoch table (const)
//!    └── pair        epoch difference, zone shift, fraction optionality per ordered pair
//!          └── conversion   four shapes, validation, floor split
//!                └── functions    jd_to_mjd, cjdnf_to_rdnf, ... (generated)
//! ```
//!
//! ## Number types
//!
//! Everything is generic over [`numeric::DayCount`], implemented for `f64` and, with the
//! default `rational` feature, for `num_rational::Ratio<I>`. Rationals give exact results
//! and exact round trips; `f64` loses precision as counts grow, which is a property of the
//! type rather than an error.
//!
//! ```rust
//! use julian_dates::functions::{jd_to_mjd, mjd_to_jd};
//! use num_rational::Rational64;
//!
//! let jd = Rational64::new(19_631_065, 8); // 2453883.125
//! let mjd = jd_to_mjd(jd);
//! assert_eq!(mjd, Rational64::new(431_061, 8)); // 53882.625
//! assert_eq!(mjd_to_jd(mjd), jd);
//! ```
//!
//! ## Errors
//!
//! Day numbers and fractions supplied by the caller are validated before use, see
//! [`julian_errors::JulianError`]. Nothing else fails.

pub mod constants;
pub mod conversion;
pub mod flavour;
pub mod functions;
pub mod julian_errors;
pub mod numeric;
pub mod pair;
pub mod split;
pub mod zone;

pub use conversion::Conversion;
pub use flavour::{DayBoundary, Flavour};
pub use julian_errors::JulianError;
pub use numeric::DayCount;
pub use pair::{Pair, ZoneShift, PAIRS};
pub use split::{floor_split, validate, Split};
