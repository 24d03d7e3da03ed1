use thiserror::Error;

use crate::flavour::Flavour;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JulianError {
    #[error("Day number is not an integer: {0}")]
    NonIntegerDayNumber(String),

    #[error("Day fraction is outside [0, 1): {0}")]
    FractionOutOfRange(String),

    #[error("A zone offset is required to convert from {src} to {dst}")]
    MissingZoneOffset { src: Flavour, dst: Flavour },

    #[error("Day boundaries of {src} and {dst} differ, the day fraction cannot be omitted")]
    FractionRequired { src: Flavour, dst: Flavour },

    #[error("Unknown Julian Date flavour: {0}")]
    UnknownFlavour(String),
}
