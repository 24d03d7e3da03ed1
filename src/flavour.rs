//! # Julian Date flavours
//!
//! Eight linear day counts share the Julian Date's unit (the day) but start counting at
//! different epochs. Five of them count **Universal Time** days; three count days of the
//! **local time zone** and therefore need a zone offset whenever they meet a UT flavour.
//!
//! | Flavour | Name | Epoch (JD) | Zone relative | Day starts at |
//! |---------|------|-----------:|:-------------:|---------------|
//! | [`Flavour::Jd`]  | Julian Date              |         0.0 | no  | noon     |
//! | [`Flavour::Rjd`] | Reduced Julian Date      | 2 400 000.0 | no  | noon     |
//! | [`Flavour::Mjd`] | Modified Julian Date     | 2 400 000.5 | no  | midnight |
//! | [`Flavour::Djd`] | Dublin Julian Date       | 2 415 020.0 | no  | noon     |
//! | [`Flavour::Tjd`] | Truncated Julian Date    | 2 440 000.5 | no  | midnight |
//! | [`Flavour::Cjd`] | Chronological Julian Date|        -0.5 | yes | midnight |
//! | [`Flavour::Rd`]  | Rata Die                 | 1 721 424.5 | yes | midnight |
//! | [`Flavour::Ld`]  | Lilian Date              | 2 299 159.5 | yes | midnight |
//!
//! The table is a `const` array; nothing in it can change after compilation.
//!
//! Typical use
//! -----------------
//! ```rust
//! use std::str::FromStr;
//! use julian_dates::flavour::{DayBoundary, Flavour};
//!
//! let mjd = Flavour::from_str("mjd").unwrap();
//! assert_eq!(mjd, Flavour::Mjd);
//! assert_eq!(mjd.epoch_offset::<f64>(), 2_400_000.5);
//! assert_eq!(mjd.day_boundary(), DayBoundary::Midnight);
//! assert_eq!(Flavour::Rd.to_string(), "RD");
//! ```
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CJD_EPOCH_HALF_DAYS, DJD_EPOCH_HALF_DAYS, JD_EPOCH_HALF_DAYS, LD_EPOCH_HALF_DAYS,
    MJD_EPOCH_HALF_DAYS, RD_EPOCH_HALF_DAYS, RJD_EPOCH_HALF_DAYS, TJD_EPOCH_HALF_DAYS,
};
use crate::julian_errors::JulianError;
use crate::numeric::DayCount;

/// One of the eight Julian Date day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flavour {
    Jd,
    Rjd,
    Mjd,
    Djd,
    Tjd,
    Cjd,
    Rd,
    Ld,
}

/// Clock instant at which a flavour's day number changes.
///
/// For UT flavours the instant is in Universal Time, for zone-relative flavours it is in
/// local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayBoundary {
    Noon,
    Midnight,
}

#[derive(Debug, Clone, Copy)]
struct FlavourRecord {
    abbreviation: &'static str,
    name: &'static str,
    epoch_half_days: i64,
    zone_relative: bool,
}

/// Indexed by `Flavour as usize`.
const FLAVOUR_TABLE: [FlavourRecord; 8] = [
    FlavourRecord {
        abbreviation: "JD",
        name: "Julian Date",
        epoch_half_days: JD_EPOCH_HALF_DAYS,
        zone_relative: false,
    },
    FlavourRecord {
        abbreviation: "RJD",
        name: "Reduced Julian Date",
        epoch_half_days: RJD_EPOCH_HALF_DAYS,
        zone_relative: false,
    },
    FlavourRecord {
        abbreviation: "MJD",
        name: "Modified Julian Date",
        epoch_half_days: MJD_EPOCH_HALF_DAYS,
        zone_relative: false,
    },
    FlavourRecord {
        abbreviation: "DJD",
        name: "Dublin Julian Date",
        epoch_half_days: DJD_EPOCH_HALF_DAYS,
        zone_relative: false,
    },
    FlavourRecord {
        abbreviation: "TJD",
        name: "Truncated Julian Date",
        epoch_half_days: TJD_EPOCH_HALF_DAYS,
        zone_relative: false,
    },
    FlavourRecord {
        abbreviation: "CJD",
        name: "Chronological Julian Date",
        epoch_half_days: CJD_EPOCH_HALF_DAYS,
        zone_relative: true,
    },
    FlavourRecord {
        abbreviation: "RD",
        name: "Rata Die",
        epoch_half_days: RD_EPOCH_HALF_DAYS,
        zone_relative: true,
    },
    FlavourRecord {
        abbreviation: "LD",
        name: "Lilian Date",
        epoch_half_days: LD_EPOCH_HALF_DAYS,
        zone_relative: true,
    },
];

impl Flavour {
    /// Every flavour, in table order.
    pub const ALL: [Flavour; 8] = [
        Flavour::Jd,
        Flavour::Rjd,
        Flavour::Mjd,
        Flavour::Djd,
        Flavour::Tjd,
        Flavour::Cjd,
        Flavour::Rd,
        Flavour::Ld,
    ];

    const fn record(self) -> FlavourRecord {
        FLAVOUR_TABLE[self as usize]
    }

    /// Upper-case abbreviation, e.g. `"MJD"`.
    pub const fn abbreviation(self) -> &'static str {
        self.record().abbreviation
    }

    /// Full name, e.g. `"Modified Julian Date"`.
    pub const fn name(self) -> &'static str {
        self.record().name
    }

    /// Epoch of the flavour counted in half Julian days.
    pub(crate) const fn epoch_half_days(self) -> i64 {
        self.record().epoch_half_days
    }

    /// `true` for the flavours counting local-time days (CJD, RD, LD).
    pub const fn is_zone_relative(self) -> bool {
        self.record().zone_relative
    }

    /// Epoch of the flavour, i.e. the Julian Date of its day zero.
    ///
    /// Return
    /// ------
    /// * the epoch in the requested number type, exact for rational types
    pub fn epoch_offset<T: DayCount>(self) -> T {
        T::from_ratio(self.epoch_half_days(), 2)
    }

    /// Instant at which the day number increments.
    ///
    /// Epochs on a whole Julian day start their days at noon like JD itself,
    /// epochs on a half day start at midnight.
    pub const fn day_boundary(self) -> DayBoundary {
        if self.epoch_half_days() % 2 == 0 {
            DayBoundary::Noon
        } else {
            DayBoundary::Midnight
        }
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for Flavour {
    type Err = JulianError;

    /// Parse a flavour from its abbreviation or its full name, ignoring ASCII case
    /// and surrounding whitespace.
    ///
    /// Arguments
    /// ---------
    /// * `s`: e.g. `"mjd"`, `"MJD"` or `"Modified Julian Date"`
    ///
    /// Return
    /// ------
    /// * the matching flavour, or [`JulianError::UnknownFlavour`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Flavour::ALL
            .into_iter()
            .find(|flavour| {
                flavour.abbreviation().eq_ignore_ascii_case(s)
                    || flavour.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| JulianError::UnknownFlavour(s.to_string()))
    }
}

#[cfg(test)]
mod flavour_test {
    use super::*;
    use crate::constants::{
        CJD_EPOCH, DJD_EPOCH, LD_EPOCH, MJD_EPOCH, RD_EPOCH, RJD_EPOCH, TJD_EPOCH,
    };

    #[test]
    fn test_table_order_matches_discriminants() {
        for (index, flavour) in Flavour::ALL.iter().enumerate() {
            assert_eq!(*flavour as usize, index);
        }
    }

    #[test]
    fn test_epoch_offsets() {
        let expected = [
            (Flavour::Jd, 0.0),
            (Flavour::Rjd, RJD_EPOCH),
            (Flavour::Mjd, MJD_EPOCH),
            (Flavour::Djd, DJD_EPOCH),
            (Flavour::Tjd, TJD_EPOCH),
            (Flavour::Cjd, CJD_EPOCH),
            (Flavour::Rd, RD_EPOCH),
            (Flavour::Ld, LD_EPOCH),
        ];
        for (flavour, epoch) in expected {
            assert_eq!(flavour.epoch_offset::<f64>(), epoch, "{flavour}");
        }
    }

    #[test]
    fn test_zone_relative() {
        let zoned: Vec<Flavour> = Flavour::ALL
            .into_iter()
            .filter(|f| f.is_zone_relative())
            .collect();
        assert_eq!(zoned, vec![Flavour::Cjd, Flavour::Rd, Flavour::Ld]);
    }

    #[test]
    fn test_day_boundary() {
        assert_eq!(Flavour::Jd.day_boundary(), DayBoundary::Noon);
        assert_eq!(Flavour::Rjd.day_boundary(), DayBoundary::Noon);
        assert_eq!(Flavour::Djd.day_boundary(), DayBoundary::Noon);
        assert_eq!(Flavour::Mjd.day_boundary(), DayBoundary::Midnight);
        assert_eq!(Flavour::Tjd.day_boundary(), DayBoundary::Midnight);
        assert_eq!(Flavour::Cjd.day_boundary(), DayBoundary::Midnight);
        assert_eq!(Flavour::Rd.day_boundary(), DayBoundary::Midnight);
        assert_eq!(Flavour::Ld.day_boundary(), DayBoundary::Midnight);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Flavour::from_str("jd"), Ok(Flavour::Jd));
        assert_eq!(Flavour::from_str(" TJD "), Ok(Flavour::Tjd));
        assert_eq!(Flavour::from_str("rata die"), Ok(Flavour::Rd));
        assert_eq!(
            Flavour::from_str("Chronological Julian Date"),
            Ok(Flavour::Cjd)
        );
        assert_eq!(
            Flavour::from_str("GPS"),
            Err(JulianError::UnknownFlavour("GPS".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for flavour in Flavour::ALL {
            assert_eq!(flavour.to_string().parse::<Flavour>(), Ok(flavour));
        }
    }
}
