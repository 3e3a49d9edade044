//! Process-wide local time zone configuration.
//!
//! The local time zone is explicit process-wide configuration with a set-once lifecycle:
//! install it at startup with [`set_local_time_zone`], read it thereafter.

use std::sync::OnceLock;
use std::time::SystemTime;

use crate::datetime::LocalDateTime;
use crate::error::{Error, Result};
use crate::timezone::CustomTimeZone;

static LOCAL_TIME_ZONE: OnceLock<CustomTimeZone> = OnceLock::new();

/// Install the process-wide local time zone.
///
/// Fails if a local time zone has already been installed.
pub fn set_local_time_zone(time_zone: CustomTimeZone) -> Result<()> {
    LOCAL_TIME_ZONE.set(time_zone).map_err(|_| Error::LocalTimeZoneAlreadySet)?;
    debug!("installed the process-wide local time zone");
    Ok(())
}

/// Returns the installed process-wide local time zone
pub fn local_time_zone() -> Result<&'static CustomTimeZone> {
    LOCAL_TIME_ZONE.get().ok_or(Error::LocalTimeZoneNotSet)
}

/// Returns the current wall-clock reading in the installed process-wide local time zone
pub fn now_local() -> Result<LocalDateTime> {
    let unix_time = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)?.as_secs().try_into()?;
    local_time_zone()?.to_local(unix_time)
}
