//! # Resolution of a flavour pair
//!
//! A conversion from one flavour to another is a pure translation. Everything it needs is
//! fixed by the ordered pair `(src, dst)`:
//!
//! - the **epoch difference** `epoch(src) - epoch(dst)`, added to every source value;
//! - the **zone shift**: when exactly one side counts local-time days, the caller's zone
//!   offset is added (UT → local) or subtracted (local → UT);
//! - whether a **day number alone** identifies the destination day, which holds when both
//!   flavours change day at the same clock instant and share zone relativity.
//!
//! [`Pair::resolve`] is a `const fn`, so the generated conversion functions resolve their
//! pair at compile time. [`PAIRS`] holds the 64 resolutions precomputed for runtime lookup.
use itertools::Itertools;

use crate::flavour::Flavour;
use crate::numeric::DayCount;

/// How the caller's zone offset enters a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneShift {
    /// Both flavours share zone relativity, no zone offset is involved.
    None,
    /// UT to local time: the local clock reads ahead of UT by the offset.
    Add,
    /// Local time to UT.
    Subtract,
}

/// A resolved ordered pair of flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    src: Flavour,
    dst: Flavour,
    epoch_diff_half_days: i64,
    zone_shift: ZoneShift,
}

impl Pair {
    /// Resolve the conversion from `src` to `dst`.
    pub const fn resolve(src: Flavour, dst: Flavour) -> Self {
        let zone_shift = match (src.is_zone_relative(), dst.is_zone_relative()) {
            (false, true) => ZoneShift::Add,
            (true, false) => ZoneShift::Subtract,
            _ => ZoneShift::None,
        };
        Pair {
            src,
            dst,
            epoch_diff_half_days: src.epoch_half_days() - dst.epoch_half_days(),
            zone_shift,
        }
    }

    /// Look the pair up in [`PAIRS`].
    pub const fn lookup(src: Flavour, dst: Flavour) -> Self {
        PAIRS[src as usize][dst as usize]
    }

    /// Every ordered pair, source-major.
    pub fn all() -> impl Iterator<Item = Pair> {
        Flavour::ALL
            .into_iter()
            .cartesian_product(Flavour::ALL)
            .map(|(src, dst)| Pair::resolve(src, dst))
    }

    pub const fn src(&self) -> Flavour {
        self.src
    }

    pub const fn dst(&self) -> Flavour {
        self.dst
    }

    pub const fn zone_shift(&self) -> ZoneShift {
        self.zone_shift
    }

    /// `true` when the conversion consumes a zone offset.
    pub const fn requires_zone(&self) -> bool {
        !matches!(self.zone_shift, ZoneShift::None)
    }

    /// `true` when a day number converts to a day number without a fraction.
    ///
    /// Holds when the epoch difference is a whole number of days and no zone offset is
    /// involved: every source day then maps onto exactly one destination day.
    pub const fn fraction_optional(&self) -> bool {
        self.epoch_diff_half_days % 2 == 0 && !self.requires_zone()
    }

    /// The same conversion run backwards.
    pub const fn inverse(&self) -> Self {
        Pair::resolve(self.dst, self.src)
    }

    /// `epoch(src) - epoch(dst)`, in days.
    pub fn epoch_diff<T: DayCount>(&self) -> T {
        T::from_ratio(self.epoch_diff_half_days, 2)
    }

    /// Net amount added to a source count: the epoch difference, shifted by the zone offset
    /// when the pair crosses zone relativity.
    ///
    /// A zone offset given to a pair that does not cross zone relativity is ignored, and a
    /// missing one counts as no shift; callers that cannot guarantee the right arity go
    /// through [`crate::conversion::Conversion::new`], which checks it.
    pub(crate) fn offset<T: DayCount>(&self, zone: Option<T>) -> T {
        let epoch_diff = self.epoch_diff::<T>();
        match (self.zone_shift, zone) {
            (ZoneShift::Add, Some(zone)) => epoch_diff + zone,
            (ZoneShift::Subtract, Some(zone)) => epoch_diff - zone,
            _ => epoch_diff,
        }
    }
}

const fn build_pairs() -> [[Pair; 8]; 8] {
    let mut pairs = [[Pair::resolve(Flavour::Jd, Flavour::Jd); 8]; 8];
    let mut i = 0;
    while i < 8 {
        let mut j = 0;
        while j < 8 {
            pairs[i][j] = Pair::resolve(Flavour::ALL[i], Flavour::ALL[j]);
            j += 1;
        }
        i += 1;
    }
    pairs
}

/// All 64 resolved pairs, indexed `[src as usize][dst as usize]`.
pub const PAIRS: [[Pair; 8]; 8] = build_pairs();
