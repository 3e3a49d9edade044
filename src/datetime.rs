//! Types related to a civil date time.

use crate::constants::*;
use crate::error::{Error, Result};

/// Wall-clock time of day
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct TimeOfDay {
    /// Hours since midnight in `[0, 23]`
    hour: u8,
    /// Minutes in `[0, 59]`
    minute: u8,
    /// Seconds in `[0, 59]`
    second: u8,
}

impl TimeOfDay {
    /// Midnight (`00:00:00`)
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0 };

    /// Construct a wall-clock time of day
    ///
    /// ## Inputs
    ///
    /// * `hour`: Hours since midnight in `[0, 23]`
    /// * `minute`: Minutes in `[0, 59]`
    /// * `second`: Seconds in `[0, 59]`
    ///
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if !(0..=23).contains(&hour) {
            return Err(Error::DateTimeInput("invalid hour"));
        }
        if !(0..=59).contains(&minute) {
            return Err(Error::DateTimeInput("invalid minute"));
        }
        if !(0..=59).contains(&second) {
            return Err(Error::DateTimeInput("invalid second"));
        }

        Ok(Self { hour, minute, second })
    }

    /// Returns hours since midnight in `[0, 23]`
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns minutes in `[0, 59]`
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns seconds in `[0, 59]`
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns seconds since midnight in `[0, 86399]`
    pub fn seconds_of_day(&self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR + self.minute as i64 * SECONDS_PER_MINUTE + self.second as i64
    }
}

/// Civil date exprimed in the [proleptic gregorian calendar](https://en.wikipedia.org/wiki/Proleptic_Gregorian_calendar)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct CivilDate {
    /// Year in `[1, 9999]`
    year: i32,
    /// Month in `[1, 12]`
    month: u8,
    /// Day of the month in `[1, 31]`
    month_day: u8,
}

impl CivilDate {
    /// Earliest representable date (`0001-01-01`)
    pub const MIN: Self = Self { year: MIN_YEAR, month: 1, month_day: 1 };

    /// Latest representable date (`9999-12-31`)
    pub const MAX: Self = Self { year: MAX_YEAR, month: 12, month_day: 31 };

    /// Construct a civil date
    ///
    /// ## Inputs
    ///
    /// * `year`: Year in `[1, 9999]`
    /// * `month`: Month in `[1, 12]`
    /// * `month_day`: Day of the month in `[1, 31]`
    ///
    pub fn new(year: i32, month: u8, month_day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::DateTimeInput("invalid year"));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::DateTimeInput("invalid month"));
        }
        if !(1..=31).contains(&month_day) {
            return Err(Error::DateTimeInput("invalid month day"));
        }

        let mut day_in_month = DAY_IN_MONTHS_NORMAL_YEAR[(month - 1) as usize];
        if month == 2 {
            day_in_month += is_leap_year(year) as i64;
        }

        if month_day as i64 > day_in_month {
            return Err(Error::DateTimeInput("invalid month day"));
        }

        Ok(Self { year, month, month_day })
    }

    /// Returns year in `[1, 9999]`
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns month in `[1, 12]`
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns day of the month in `[1, 31]`
    pub fn month_day(&self) -> u8 {
        self.month_day
    }

    /// Returns the date of the following day
    pub fn following_day(&self) -> Result<Self> {
        match Self::new(self.year, self.month, self.month_day + 1) {
            Ok(date) => Ok(date),
            Err(_) => match Self::new(self.year, self.month + 1, 1) {
                Ok(date) => Ok(date),
                Err(_) => Self::new(self.year + 1, 1, 1),
            },
        }
    }
}

/// Civil date time: a wall-clock reading without any time zone information
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct LocalDateTime {
    /// Civil date
    date: CivilDate,
    /// Wall-clock time of day
    time: TimeOfDay,
}

impl LocalDateTime {
    /// Construct a civil date time
    pub fn new(date: CivilDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Returns civil date
    pub fn date(&self) -> CivilDate {
        self.date
    }

    /// Returns wall-clock time of day
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns the seconds since Unix epoch of the wall-clock reading taken at face value
    pub fn seconds_since_epoch(&self) -> i64 {
        days_since_unix_epoch(self.date.year, self.date.month, self.date.month_day) * SECONDS_PER_DAY + self.time.seconds_of_day()
    }

    /// Construct a civil date time from seconds since Unix epoch, taken at face value
    pub fn from_seconds_since_epoch(seconds_since_epoch: i64) -> Result<Self> {
        let seconds = seconds_since_epoch.checked_sub(UNIX_OFFSET_SECS).ok_or(Error::DateTimeInput("invalid seconds since Unix epoch"))?;
        let mut remaining_days = seconds / SECONDS_PER_DAY;
        let mut remaining_seconds = seconds % SECONDS_PER_DAY;
        if remaining_seconds < 0 {
            remaining_seconds += SECONDS_PER_DAY;
            remaining_days -= 1;
        }

        let mut cycles_400_years = remaining_days / DAYS_PER_400_YEARS;
        remaining_days %= DAYS_PER_400_YEARS;
        if remaining_days < 0 {
            remaining_days += DAYS_PER_400_YEARS;
            cycles_400_years -= 1;
        }

        let cycles_100_years = (remaining_days / DAYS_PER_100_YEARS).min(3);
        remaining_days -= cycles_100_years * DAYS_PER_100_YEARS;

        let cycles_4_years = (remaining_days / DAYS_PER_4_YEARS).min(24);
        remaining_days -= cycles_4_years * DAYS_PER_4_YEARS;

        let remaining_years = (remaining_days / DAYS_PER_NORMAL_YEAR).min(3);
        remaining_days -= remaining_years * DAYS_PER_NORMAL_YEAR;

        let mut year = EPOCH_YEAR + remaining_years + cycles_4_years * 4 + cycles_100_years * 100 + cycles_400_years * 400;

        // Zero-based month, counted from March
        let mut month = 2;
        for days in DAY_IN_MONTHS_LEAP_YEAR_FROM_MARCH {
            if remaining_days < days {
                break;
            }
            remaining_days -= days;
            month += 1;
        }

        if month >= MONTHS_PER_YEAR {
            month -= MONTHS_PER_YEAR;
            year += 1;
        }

        let month_day = 1 + remaining_days;

        let hour = remaining_seconds / SECONDS_PER_HOUR;
        let minute = (remaining_seconds / SECONDS_PER_MINUTE) % MINUTES_PER_HOUR;
        let second = remaining_seconds % SECONDS_PER_MINUTE;

        let date = CivilDate::new(year.try_into()?, (month + 1).try_into()?, month_day.try_into()?)?;
        let time = TimeOfDay::new(hour.try_into()?, minute.try_into()?, second.try_into()?)?;

        Ok(Self { date, time })
    }
}

/// Check if a year is a leap year
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Compute the number of days since Unix epoch (`1970-01-01T00:00:00Z`)
///
/// ## Inputs
///
/// * `year`: Year
/// * `month`: Month in `[1, 12]`
/// * `month_day`: Day of the month in `[1, 31]`
///
pub(crate) fn days_since_unix_epoch(year: i32, month: u8, month_day: u8) -> i64 {
    let is_leap_year = is_leap_year(year);

    let year = year as i64;

    let mut result = (year - 1970) * 365;

    if year >= 1970 {
        result += (year - 1968) / 4;
        result -= (year - 1900) / 100;
        result += (year - 1600) / 400;

        if is_leap_year && month < 3 {
            result -= 1;
        }
    } else {
        result += (year - 1972) / 4;
        result -= (year - 2000) / 100;
        result += (year - 2000) / 400;

        if is_leap_year && month >= 3 {
            result += 1;
        }
    }

    result += CUM_DAY_IN_MONTHS_NORMAL_YEAR[(month - 1) as usize] + month_day as i64 - 1;

    result
}
