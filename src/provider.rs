//! Per-year DST data providers.

use crate::datetime::{CivilDate, LocalDateTime, TimeOfDay};
use crate::error::{Error, Result};

/// Raw daylight saving data for a single year, as returned by a platform query.
///
/// The record is a plain data carrier: no consistency between its start and end timestamps is
/// enforced, so degenerate or inverted windows are representable.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DstRecord {
    /// Year the record applies to
    year: i32,
    /// Wall-clock timestamp of the start of daylight saving time
    dst_start: LocalDateTime,
    /// Wall-clock timestamp of the end of daylight saving time
    dst_end: LocalDateTime,
    /// Offset from UTC in seconds when daylight saving time is not in effect
    base_utc_offset: i32,
    /// Additional offset in seconds when daylight saving time is in effect
    dst_delta: i32,
}

impl DstRecord {
    /// Construct a raw DST record
    pub fn new(year: i32, dst_start: LocalDateTime, dst_end: LocalDateTime, base_utc_offset: i32, dst_delta: i32) -> Self {
        Self { year, dst_start, dst_end, base_utc_offset, dst_delta }
    }

    /// Returns the year the record applies to
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the wall-clock timestamp of the start of daylight saving time
    pub fn dst_start(&self) -> LocalDateTime {
        self.dst_start
    }

    /// Returns the wall-clock timestamp of the end of daylight saving time
    pub fn dst_end(&self) -> LocalDateTime {
        self.dst_end
    }

    /// Returns the offset from UTC in seconds outside of daylight saving time
    pub fn base_utc_offset(&self) -> i32 {
        self.base_utc_offset
    }

    /// Returns the additional offset in seconds during daylight saving time
    pub fn dst_delta(&self) -> i32 {
        self.dst_delta
    }
}

/// Per-year DST data source.
///
/// How the data is obtained (file, syscall, registry) is up to the implementation.
pub trait DstDataProvider {
    /// Returns the DST record for the specified year, or `None` when no data is available
    fn dst_record(&self, year: i32) -> Option<DstRecord>;
}

/// Provider applying the same fixed-date DST policy to every year
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FixedDstProvider {
    /// Month of the start of daylight saving time, in `[1, 12]`
    start_month: u8,
    /// Day of the month of the start of daylight saving time, in `[1, 31]`
    start_day: u8,
    /// Wall-clock time of the start of daylight saving time
    start_time: TimeOfDay,
    /// Month of the end of daylight saving time, in `[1, 12]`
    end_month: u8,
    /// Day of the month of the end of daylight saving time, in `[1, 31]`
    end_day: u8,
    /// Wall-clock time of the end of daylight saving time
    end_time: TimeOfDay,
    /// Offset from UTC in seconds when daylight saving time is not in effect
    base_utc_offset: i32,
    /// Additional offset in seconds when daylight saving time is in effect
    dst_delta: i32,
}

impl FixedDstProvider {
    /// Construct a provider applying the same fixed-date DST policy to every year
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_month: u8,
        start_day: u8,
        start_time: TimeOfDay,
        end_month: u8,
        end_day: u8,
        end_time: TimeOfDay,
        base_utc_offset: i32,
        dst_delta: i32,
    ) -> Result<Self> {
        if !(1..=12).contains(&start_month) || !(1..=12).contains(&end_month) {
            return Err(Error::DateTimeInput("invalid month"));
        }
        if !(1..=31).contains(&start_day) || !(1..=31).contains(&end_day) {
            return Err(Error::DateTimeInput("invalid month day"));
        }

        Ok(Self { start_month, start_day, start_time, end_month, end_day, end_time, base_utc_offset, dst_delta })
    }
}

impl DstDataProvider for FixedDstProvider {
    fn dst_record(&self, year: i32) -> Option<DstRecord> {
        let dst_start = LocalDateTime::new(CivilDate::new(year, self.start_month, self.start_day).ok()?, self.start_time);
        let dst_end = LocalDateTime::new(CivilDate::new(year, self.end_month, self.end_day).ok()?, self.end_time);

        Some(DstRecord::new(year, dst_start, dst_end, self.base_utc_offset, self.dst_delta))
    }
}
