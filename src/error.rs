//! Error types.

use std::error;
use std::fmt;
use std::num::TryFromIntError;
use std::time::SystemTimeError;

/// Alias for [`std::result::Result`] with the crate unified error
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for everything in the crate
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// The data provider could not supply a DST record for the specified year
    DataUnavailable(i32),
    /// Date time input error
    DateTimeInput(&'static str),
    /// Invalid schedule year range
    InvalidYearRange(&'static str),
    /// Invalid UTC offset
    InvalidUtcOffset,
    /// The process-wide local time zone has already been set
    LocalTimeZoneAlreadySet,
    /// The process-wide local time zone has not been set
    LocalTimeZoneNotSet,
    /// Integer conversion error
    ConversionError(TryFromIntError),
    /// System time error
    SystemTimeError(SystemTimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::DataUnavailable(year) => write!(f, "no DST data is available for year {}", year),
            Self::DateTimeInput(error) => write!(f, "invalid date time input: {}", error),
            Self::InvalidYearRange(error) => write!(f, "invalid year range: {}", error),
            Self::InvalidUtcOffset => f.write_str("invalid UTC offset"),
            Self::LocalTimeZoneAlreadySet => f.write_str("the process-wide local time zone has already been set"),
            Self::LocalTimeZoneNotSet => f.write_str("the process-wide local time zone has not been set"),
            Self::ConversionError(error) => error.fmt(f),
            Self::SystemTimeError(error) => error.fmt(f),
        }
    }
}

impl error::Error for Error {}

impl From<TryFromIntError> for Error {
    fn from(error: TryFromIntError) -> Self {
        Self::ConversionError(error)
    }
}

impl From<SystemTimeError> for Error {
    fn from(error: SystemTimeError) -> Self {
        Self::SystemTimeError(error)
    }
}
