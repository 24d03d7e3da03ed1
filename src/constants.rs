//! # Constants for the Julian Date flavours
//!
//! This module centralizes the **epoch offsets** of every day-count flavour and the
//! **unit conversion factors** used to build zone offsets.
//!
//! ## Overview
//!
//! - Flavour epochs counted in half days, which is how the flavour table stores them
//! - The same epochs as `f64` Julian Dates, derived from the half-day counts
//! - Day subdivisions (hours, minutes, seconds per day)
//!
//! Every epoch of the family lies on a whole or half Julian day, so counting in half days
//! keeps the table exact for rational arithmetic. The `f64` constants serve callers that
//! only work in floating point.

// -------------------------------------------------------------------------------------------------
// Flavour epochs, counted in half days since JD 0
// -------------------------------------------------------------------------------------------------

pub(crate) const JD_EPOCH_HALF_DAYS: i64 = 0;
pub(crate) const RJD_EPOCH_HALF_DAYS: i64 = 4_800_000;
pub(crate) const MJD_EPOCH_HALF_DAYS: i64 = 4_800_001;
pub(crate) const DJD_EPOCH_HALF_DAYS: i64 = 4_830_040;
pub(crate) const TJD_EPOCH_HALF_DAYS: i64 = 4_880_001;
pub(crate) const CJD_EPOCH_HALF_DAYS: i64 = -1;
pub(crate) const RD_EPOCH_HALF_DAYS: i64 = 3_442_849;
pub(crate) const LD_EPOCH_HALF_DAYS: i64 = 4_598_319;

// -------------------------------------------------------------------------------------------------
// Same epochs as Julian Dates
// -------------------------------------------------------------------------------------------------

/// Reduced Julian Date epoch, 1858-11-16 12:00 UT
pub const RJD_EPOCH: f64 = RJD_EPOCH_HALF_DAYS as f64 / 2.0;

/// Modified Julian Date epoch, 1858-11-17 00:00 UT
pub const MJD_EPOCH: f64 = MJD_EPOCH_HALF_DAYS as f64 / 2.0;

/// Dublin Julian Date epoch, 1899-12-31 12:00 UT
pub const DJD_EPOCH: f64 = DJD_EPOCH_HALF_DAYS as f64 / 2.0;

/// Truncated Julian Date epoch, 1968-05-24 00:00 UT
pub const TJD_EPOCH: f64 = TJD_EPOCH_HALF_DAYS as f64 / 2.0;

/// Chronological Julian Date epoch, -4713-11-24 00:00 local time
pub const CJD_EPOCH: f64 = CJD_EPOCH_HALF_DAYS as f64 / 2.0;

/// Rata Die epoch, 0000-12-31 00:00 local time (day 1 is 0001-01-01)
pub const RD_EPOCH: f64 = RD_EPOCH_HALF_DAYS as f64 / 2.0;

/// Lilian Date epoch, 1582-10-14 00:00 local time (day 1 is the first Gregorian day)
pub const LD_EPOCH: f64 = LD_EPOCH_HALF_DAYS as f64 / 2.0;

// -------------------------------------------------------------------------------------------------
// Day subdivisions
// -------------------------------------------------------------------------------------------------

/// Number of hours in a day
pub const HOURS_PER_DAY: i64 = 24;

/// Number of minutes in a day
pub const MINUTES_PER_DAY: i64 = 1_440;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;
