//! Zone offsets in fractional days.
//!
//! The zone-relative flavours (CJD, RD, LD) need the offset of the local clock from UT as a
//! fraction of a day. These helpers build it from clock units in any [`DayCount`] type, exact
//! for rational types: a zone six hours behind UT is `-0.25`.
use crate::constants::{MINUTES_PER_DAY, SECONDS_PER_DAY};
use crate::numeric::DayCount;

/// Zone offset from a signed count of minutes ahead of UT.
///
/// UT+05:30 is `from_minutes(330)`, UT-05:30 is `from_minutes(-330)`.
pub fn from_minutes<T: DayCount>(minutes: i64) -> T {
    T::from_ratio(minutes, MINUTES_PER_DAY)
}

/// Zone offset from seconds ahead of UT.
pub fn from_seconds<T: DayCount>(seconds: i64) -> T {
    T::from_ratio(seconds, SECONDS_PER_DAY)
}
