//! Daylight saving adjustment schedules.

use crate::constants::*;
use crate::datetime::{days_since_unix_epoch, CivilDate, LocalDateTime, TimeOfDay};
use crate::error::{Error, Result};
use crate::provider::DstDataProvider;

/// Fixed-date transition: a month, a day of the month and a wall-clock time of day.
///
/// Only the day, month and time-of-day components of the raw transition timestamp are kept;
/// its year is discarded so that the rule can be evaluated for any year.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FixedDateRule {
    /// Month in `[1, 12]`
    month: u8,
    /// Day of the month in `[1, 31]`
    month_day: u8,
    /// Wall-clock time of the transition
    time: TimeOfDay,
}

impl FixedDateRule {
    /// Construct a fixed-date transition
    ///
    /// ## Inputs
    ///
    /// * `month`: Month in `[1, 12]`
    /// * `month_day`: Day of the month in `[1, 31]`
    /// * `time`: Wall-clock time of the transition
    ///
    pub fn new(month: u8, month_day: u8, time: TimeOfDay) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::DateTimeInput("invalid month"));
        }
        if !(1..=31).contains(&month_day) {
            return Err(Error::DateTimeInput("invalid month day"));
        }

        Ok(Self { month, month_day, time })
    }

    /// Derive a fixed-date transition from the wall-clock timestamp of a transition, discarding its year
    pub fn from_local(local: LocalDateTime) -> Self {
        Self { month: local.date().month(), month_day: local.date().month_day(), time: local.time() }
    }

    /// Returns month in `[1, 12]`
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns day of the month in `[1, 31]`
    pub fn month_day(&self) -> u8 {
        self.month_day
    }

    /// Returns the wall-clock time of the transition
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Returns the wall-clock seconds since Unix epoch of the transition in the specified year.
    ///
    /// A February 29 rule resolves arithmetically to March 1 in non-leap years.
    pub(crate) fn wall_seconds_for_year(&self, year: i32) -> i64 {
        days_since_unix_epoch(year, self.month, self.month_day) * SECONDS_PER_DAY + self.time.seconds_of_day()
    }
}

/// Daylight saving adjustment rule covering a closed date interval
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AdjustmentRule {
    /// First date covered by the rule
    start_date: CivilDate,
    /// Last date covered by the rule
    end_date: CivilDate,
    /// Additional offset in seconds during daylight saving time
    dst_delta: i32,
    /// Start transition of daylight saving time
    dst_start: FixedDateRule,
    /// End transition of daylight saving time
    dst_end: FixedDateRule,
}

impl AdjustmentRule {
    /// Construct a daylight saving adjustment rule
    pub fn new(start_date: CivilDate, end_date: CivilDate, dst_delta: i32, dst_start: FixedDateRule, dst_end: FixedDateRule) -> Result<Self> {
        if start_date > end_date {
            return Err(Error::DateTimeInput("adjustment rule start date is after its end date"));
        }

        Ok(Self { start_date, end_date, dst_delta, dst_start, dst_end })
    }

    /// Returns the first date covered by the rule
    pub fn start_date(&self) -> CivilDate {
        self.start_date
    }

    /// Returns the last date covered by the rule
    pub fn end_date(&self) -> CivilDate {
        self.end_date
    }

    /// Returns the additional offset in seconds during daylight saving time
    pub fn dst_delta(&self) -> i32 {
        self.dst_delta
    }

    /// Returns the start transition of daylight saving time
    pub fn dst_start(&self) -> FixedDateRule {
        self.dst_start
    }

    /// Returns the end transition of daylight saving time
    pub fn dst_end(&self) -> FixedDateRule {
        self.dst_end
    }
}

/// Range of years covered by per-year adjustment rules
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct YearRange {
    /// First year of the range
    start: i32,
    /// Last year of the range
    end: i32,
}

impl YearRange {
    /// Construct a year range.
    ///
    /// The bounds are inclusive. The years adjacent to the range must be representable, since
    /// the sentinel rules extending the schedule start and end there.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidYearRange("start year is after end year"));
        }
        if start <= MIN_YEAR {
            return Err(Error::InvalidYearRange("no representable year before the range start"));
        }
        if end >= MAX_YEAR {
            return Err(Error::InvalidYearRange("no representable year after the range end"));
        }

        Ok(Self { start, end })
    }

    /// Returns the first year of the range
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Returns the last year of the range
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Returns the number of years in the range
    pub fn year_count(&self) -> usize {
        (self.end - self.start + 1) as usize
    }
}

impl Default for YearRange {
    /// Returns the `[1970, 2037]` range, the window supported by legacy `mktime`-based
    /// platform timezone queries
    fn default() -> Self {
        Self { start: 1970, end: 2037 }
    }
}

/// Ordered list of adjustment rules covering all representable dates
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Schedule {
    /// Adjustment rules, ordered by start date, non-overlapping and contiguous
    rules: Vec<AdjustmentRule>,
}

impl Schedule {
    /// Construct an empty schedule, for time zones without daylight saving
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build the schedule covering the specified year range.
    ///
    /// One rule is emitted per year in the range, and two sentinel rules extend the first and
    /// last years' DST policies to all representable dates before and after the range. A year
    /// the provider cannot answer, or answers with a record tagged with another year, aborts
    /// the build: no partial schedule is returned.
    ///
    /// The records are not checked for internal consistency, so inverted or degenerate DST
    /// windows are carried through and left to the consumer.
    pub fn build<P: DstDataProvider + ?Sized>(provider: &P, years: YearRange) -> Result<Self> {
        trace!("building adjustment schedule for years [{}, {}]", years.start(), years.end());

        let mut rules = Vec::with_capacity(years.year_count() + 2);

        for year in years.start()..=years.end() {
            let record = match provider.dst_record(year) {
                Some(record) => record,
                None => return Err(Error::DataUnavailable(year)),
            };

            // A record tagged with another year than the requested one is unusable data
            if record.year() != year {
                return Err(Error::DataUnavailable(year));
            }

            let dst_start = FixedDateRule::from_local(record.dst_start());
            let dst_end = FixedDateRule::from_local(record.dst_end());
            let dst_delta = record.dst_delta();

            if year == years.start() {
                rules.push(AdjustmentRule::new(CivilDate::MIN, CivilDate::new(year - 1, 12, 31)?, dst_delta, dst_start, dst_end)?);
            }

            rules.push(AdjustmentRule::new(CivilDate::new(year, 1, 1)?, CivilDate::new(year, 12, 31)?, dst_delta, dst_start, dst_end)?);

            if year == years.end() {
                rules.push(AdjustmentRule::new(CivilDate::new(year + 1, 1, 1)?, CivilDate::MAX, dst_delta, dst_start, dst_end)?);
            }
        }

        debug!("built adjustment schedule with {} rules for years [{}, {}]", rules.len(), years.start(), years.end());

        Ok(Self { rules })
    }

    /// Returns the adjustment rules, ordered by start date
    pub fn rules(&self) -> &[AdjustmentRule] {
        &self.rules
    }

    /// Returns the number of adjustment rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the schedule contains no rule
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the adjustment rule covering the specified date
    pub fn rule_for_date(&self, date: CivilDate) -> Option<&AdjustmentRule> {
        let index = self.rules.partition_point(|rule| rule.start_date() <= date);

        if index > 0 {
            let rule = &self.rules[index - 1];
            if date <= rule.end_date() {
                return Some(rule);
            }
        }

        None
    }

    /// Find the adjustment rule covering the specified year
    pub fn rule_for_year(&self, year: i32) -> Option<&AdjustmentRule> {
        match CivilDate::new(year, 1, 1) {
            Ok(date) => self.rule_for_date(date),
            Err(_) => None,
        }
    }
}
