//! Custom time zones assembled from an adjustment schedule.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::constants::*;
use crate::datetime::LocalDateTime;
use crate::error::{Error, Result};
use crate::schedule::{AdjustmentRule, Schedule};

/// Time zone defined by a base UTC offset, display names and a daylight saving adjustment schedule
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CustomTimeZone {
    /// Offset from UTC in seconds when daylight saving time is not in effect
    base_utc_offset: i32,
    /// General display name
    display_name: Arc<str>,
    /// Display name outside of daylight saving time
    standard_name: Arc<str>,
    /// Display name during daylight saving time
    daylight_name: Arc<str>,
    /// Daylight saving adjustment schedule
    schedule: Schedule,
}

impl CustomTimeZone {
    /// Construct a custom time zone.
    ///
    /// The base UTC offset must be smaller than one day in absolute value.
    pub fn new(base_utc_offset: i32, display_name: &str, standard_name: &str, daylight_name: &str, schedule: Schedule) -> Result<Self> {
        if (base_utc_offset as i64).abs() >= SECONDS_PER_DAY {
            return Err(Error::InvalidUtcOffset);
        }

        Ok(Self {
            base_utc_offset,
            display_name: display_name.into(),
            standard_name: standard_name.into(),
            daylight_name: daylight_name.into(),
            schedule,
        })
    }

    /// Returns the UTC time zone
    pub fn utc() -> Self {
        Self {
            base_utc_offset: 0,
            display_name: "UTC".into(),
            standard_name: "UTC".into(),
            daylight_name: "UTC".into(),
            schedule: Schedule::empty(),
        }
    }

    /// Returns a time zone with a fixed UTC offset in seconds and no daylight saving
    pub fn fixed(base_utc_offset: i32) -> Result<Self> {
        let name = gmt_display_name(base_utc_offset);
        Self::new(base_utc_offset, &name, &name, &name, Schedule::empty())
    }

    /// Returns the offset from UTC in seconds outside of daylight saving time
    pub fn base_utc_offset(&self) -> i32 {
        self.base_utc_offset
    }

    /// Returns the general display name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the display name outside of daylight saving time
    pub fn standard_name(&self) -> &str {
        &self.standard_name
    }

    /// Returns the display name during daylight saving time
    pub fn daylight_name(&self) -> &str {
        &self.daylight_name
    }

    /// Returns the daylight saving adjustment schedule
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the offset from UTC in seconds applying at the specified Unix time
    pub fn ut_offset_at(&self, unix_time: i64) -> Result<i64> {
        let base = self.base_utc_offset as i64;

        let local_standard_seconds = unix_time.checked_add(base).ok_or(Error::DateTimeInput("invalid Unix time"))?;
        let local_standard = LocalDateTime::from_seconds_since_epoch(local_standard_seconds)?;

        let rule = match self.schedule.rule_for_date(local_standard.date()) {
            Some(rule) => rule,
            None => return Ok(base),
        };

        if self.is_dst(rule, unix_time, local_standard.date().year()) {
            Ok(base + rule.dst_delta() as i64)
        } else {
            Ok(base)
        }
    }

    /// Check the Unix time against the DST window of the rule covering its year.
    ///
    /// The standard offset applies to the start transition and the daylight offset to the end
    /// transition. A window whose start is after its end wraps around the year end, the
    /// southern-hemisphere convention. Coinciding transitions describe no daylight saving.
    fn is_dst(&self, rule: &AdjustmentRule, unix_time: i64, year: i32) -> bool {
        let base = self.base_utc_offset as i64;

        let start_wall = rule.dst_start().wall_seconds_for_year(year);
        let end_wall = rule.dst_end().wall_seconds_for_year(year);
        if start_wall == end_wall {
            return false;
        }

        let dst_start_unix = start_wall - base;
        let dst_end_unix = end_wall - (base + rule.dst_delta() as i64);

        match dst_start_unix.cmp(&dst_end_unix) {
            Ordering::Equal => false,
            Ordering::Less => dst_start_unix <= unix_time && unix_time < dst_end_unix,
            Ordering::Greater => unix_time < dst_end_unix || dst_start_unix <= unix_time,
        }
    }

    /// Project a Unix time to the local wall-clock reading
    pub fn to_local(&self, unix_time: i64) -> Result<LocalDateTime> {
        let ut_offset = self.ut_offset_at(unix_time)?;
        let local_seconds = unix_time.checked_add(ut_offset).ok_or(Error::DateTimeInput("invalid Unix time"))?;
        LocalDateTime::from_seconds_since_epoch(local_seconds)
    }

    /// Convert a UTC wall-clock reading to the local wall-clock reading
    pub fn convert_from_utc(&self, utc: LocalDateTime) -> Result<LocalDateTime> {
        self.to_local(utc.seconds_since_epoch())
    }
}

/// Returns the `(GMT±hh:mm) Local Time` display label for a base UTC offset in seconds
pub fn gmt_display_name(base_utc_offset: i32) -> String {
    let sign = if base_utc_offset < 0 { '-' } else { '+' };
    let offset = (base_utc_offset as i64).abs();

    let hours = offset / SECONDS_PER_HOUR;
    let minutes = (offset % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    format!("(GMT{}{:02}:{:02}) Local Time", sign, hours, minutes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datetime::{CivilDate, TimeOfDay};
    use crate::provider::FixedDstProvider;
    use crate::schedule::YearRange;

    fn eastern_time_zone() -> Result<CustomTimeZone> {
        let provider = FixedDstProvider::new(4, 5, TimeOfDay::new(2, 0, 0)?, 10, 25, TimeOfDay::new(2, 0, 0)?, -5 * 3600, 3600)?;
        let schedule = Schedule::build(&provider, YearRange::default())?;

        CustomTimeZone::new(-5 * 3600, &gmt_display_name(-5 * 3600), "Standard Time", "Daylight Time", schedule)
    }

    #[test]
    fn test_gmt_display_name() {
        assert_eq!(gmt_display_name(0), "(GMT+00:00) Local Time");
        assert_eq!(gmt_display_name(-5 * 3600), "(GMT-05:00) Local Time");
        assert_eq!(gmt_display_name(5 * 3600 + 30 * 60), "(GMT+05:30) Local Time");
        assert_eq!(gmt_display_name(-(9 * 3600 + 30 * 60)), "(GMT-09:30) Local Time");
    }

    #[test]
    fn test_constructors() -> Result<()> {
        let time_zone = eastern_time_zone()?;
        assert_eq!(time_zone.base_utc_offset(), -5 * 3600);
        assert_eq!(time_zone.display_name(), "(GMT-05:00) Local Time");
        assert_eq!(time_zone.standard_name(), "Standard Time");
        assert_eq!(time_zone.daylight_name(), "Daylight Time");
        assert_eq!(time_zone.schedule().len(), 70);

        let utc = CustomTimeZone::utc();
        assert_eq!(utc.base_utc_offset(), 0);
        assert_eq!(utc.display_name(), "UTC");
        assert!(utc.schedule().is_empty());

        let fixed = CustomTimeZone::fixed(-3600)?;
        assert_eq!(fixed.base_utc_offset(), -3600);
        assert_eq!(fixed.display_name(), "(GMT-01:00) Local Time");

        assert!(matches!(CustomTimeZone::fixed(86400), Err(Error::InvalidUtcOffset)));
        assert!(matches!(CustomTimeZone::fixed(-86400), Err(Error::InvalidUtcOffset)));

        Ok(())
    }

    #[test]
    fn test_ut_offset_at() -> Result<()> {
        let time_zone = eastern_time_zone()?;

        // 1990-01-15T12:00:00Z, outside of DST
        assert_eq!(time_zone.ut_offset_at(632404800)?, -5 * 3600);
        // 1990-07-01T12:00:00Z, during DST
        assert_eq!(time_zone.ut_offset_at(646833600)?, -4 * 3600);

        // Transition boundaries of 1970: DST starts at 1970-04-05T07:00:00Z
        assert_eq!(time_zone.ut_offset_at(8146799)?, -5 * 3600);
        assert_eq!(time_zone.ut_offset_at(8146800)?, -4 * 3600);
        // and ends at 1970-10-25T06:00:00Z
        assert_eq!(time_zone.ut_offset_at(25682399)?, -4 * 3600);
        assert_eq!(time_zone.ut_offset_at(25682400)?, -5 * 3600);

        Ok(())
    }

    #[test]
    fn test_ut_offset_outside_year_range() -> Result<()> {
        let time_zone = eastern_time_zone()?;

        // 1950-07-01T12:00:00Z: the sentinel before the range carries the 1970 policy
        assert_eq!(time_zone.ut_offset_at(-615470400)?, -4 * 3600);
        // 2050-07-01T12:00:00Z: the sentinel after the range carries the 2037 policy
        assert_eq!(time_zone.ut_offset_at(2540289600)?, -4 * 3600);

        Ok(())
    }

    #[test]
    fn test_wrapped_dst_window() -> Result<()> {
        // Southern-hemisphere style rule: DST from October 25 to April 5
        let provider = FixedDstProvider::new(10, 25, TimeOfDay::new(2, 0, 0)?, 4, 5, TimeOfDay::new(3, 0, 0)?, 10 * 3600, 3600)?;
        let schedule = Schedule::build(&provider, YearRange::new(1990, 1995)?)?;
        let time_zone = CustomTimeZone::new(10 * 3600, &gmt_display_name(10 * 3600), "Standard Time", "Daylight Time", schedule)?;

        // 1990-01-15T12:00:00Z, during DST
        assert_eq!(time_zone.ut_offset_at(632404800)?, 11 * 3600);
        // 1990-07-01T12:00:00Z, outside of DST
        assert_eq!(time_zone.ut_offset_at(646833600)?, 10 * 3600);

        Ok(())
    }

    #[test]
    fn test_degenerate_dst_window() -> Result<()> {
        // Coinciding transitions: the delta never applies
        let provider = FixedDstProvider::new(4, 5, TimeOfDay::new(2, 0, 0)?, 4, 5, TimeOfDay::new(2, 0, 0)?, -5 * 3600, 3600)?;
        let schedule = Schedule::build(&provider, YearRange::new(1990, 1995)?)?;
        let time_zone = CustomTimeZone::new(-5 * 3600, "degenerate", "Standard Time", "Daylight Time", schedule)?;

        assert_eq!(time_zone.ut_offset_at(632404800)?, -5 * 3600);
        assert_eq!(time_zone.ut_offset_at(646833600)?, -5 * 3600);

        Ok(())
    }

    #[test]
    fn test_extreme_unix_times() -> Result<()> {
        let time_zone = eastern_time_zone()?;
        assert!(time_zone.ut_offset_at(i64::MIN).is_err());
        assert!(time_zone.ut_offset_at(i64::MAX).is_err());
        assert!(time_zone.to_local(i64::MIN).is_err());

        let fixed = CustomTimeZone::fixed(3600)?;
        assert!(fixed.ut_offset_at(i64::MAX).is_err());
        assert!(fixed.to_local(i64::MAX).is_err());

        Ok(())
    }

    #[test]
    fn test_to_local() -> Result<()> {
        let time_zone = eastern_time_zone()?;

        // 1990-01-15T12:00:00Z
        let local = time_zone.to_local(632404800)?;
        assert_eq!(local.date(), CivilDate::new(1990, 1, 15)?);
        assert_eq!(local.time(), TimeOfDay::new(7, 0, 0)?);

        // 1990-07-01T12:00:00Z
        let local = time_zone.to_local(646833600)?;
        assert_eq!(local.date(), CivilDate::new(1990, 7, 1)?);
        assert_eq!(local.time(), TimeOfDay::new(8, 0, 0)?);

        let utc = LocalDateTime::new(CivilDate::new(1990, 7, 1)?, TimeOfDay::new(12, 0, 0)?);
        assert_eq!(time_zone.convert_from_utc(utc)?, local);

        // A fixed time zone applies its offset everywhere
        let fixed = CustomTimeZone::fixed(3600)?;
        let local = fixed.to_local(646833600)?;
        assert_eq!(local.time(), TimeOfDay::new(13, 0, 0)?);

        Ok(())
    }
}
