#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! This crate builds a multi-decade daylight saving adjustment schedule from per-year DST data
//! and assembles a custom time zone around it, which can then be installed as the process-wide
//! local time zone.
//!
//! Raw DST data is supplied year by year through the [`DstDataProvider`] trait. From each
//! yearly record, [`Schedule::build`] derives a fixed-date adjustment rule covering that
//! calendar year, and extends the first and last years' policies to all representable dates
//! with two sentinel rules, so that the resulting schedule has no gap.
//!
//! # Usage
//!
//! ## Building a schedule
//!
//! ```rust
//! # fn main() -> Result<(), tz_custom::Error> {
//! use tz_custom::{FixedDstProvider, Schedule, TimeOfDay, YearRange};
//!
//! // A fixed-date policy: DST from April 5 at 02:00 to October 25 at 02:00,
//! // GMT-5 base offset, one hour of delta
//! let provider = FixedDstProvider::new(4, 5, TimeOfDay::new(2, 0, 0)?, 10, 25, TimeOfDay::new(2, 0, 0)?, -5 * 3600, 3600)?;
//!
//! // The default year range is the [1970, 2037] window of legacy platform timezone queries
//! let schedule = Schedule::build(&provider, YearRange::default())?;
//!
//! // One rule per year, plus the two sentinel rules
//! assert_eq!(schedule.len(), 68 + 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom time zone and process-wide installation
//!
//! ```rust
//! # fn main() -> Result<(), tz_custom::Error> {
//! use tz_custom::*;
//!
//! let provider = FixedDstProvider::new(4, 5, TimeOfDay::new(2, 0, 0)?, 10, 25, TimeOfDay::new(2, 0, 0)?, -5 * 3600, 3600)?;
//! let schedule = Schedule::build(&provider, YearRange::new(1970, 2037)?)?;
//!
//! let base_utc_offset = -5 * 3600;
//! let time_zone = CustomTimeZone::new(base_utc_offset, &gmt_display_name(base_utc_offset), "Standard Time", "Daylight Time", schedule)?;
//!
//! // 1990-07-01T12:00:00Z, within daylight saving time at GMT-5
//! let local = time_zone.to_local(646833600)?;
//! assert_eq!(local.date(), CivilDate::new(1990, 7, 1)?);
//! assert_eq!(local.time(), TimeOfDay::new(8, 0, 0)?);
//!
//! // Install the zone as the process-wide local time zone
//! set_local_time_zone(time_zone)?;
//! assert_eq!(local_time_zone()?.base_utc_offset(), -5 * 3600);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod logging;

mod constants;

pub mod datetime;
pub mod error;
pub mod local;
pub mod provider;
pub mod schedule;
pub mod timezone;

pub use crate::datetime::{CivilDate, LocalDateTime, TimeOfDay};
pub use crate::error::{Error, Result};
pub use crate::local::{local_time_zone, now_local, set_local_time_zone};
pub use crate::provider::{DstDataProvider, DstRecord, FixedDstProvider};
pub use crate::schedule::{AdjustmentRule, FixedDateRule, Schedule, YearRange};
pub use crate::timezone::{gmt_display_name, CustomTimeZone};
