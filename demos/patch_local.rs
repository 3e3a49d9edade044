use tz_custom::*;

use std::time::SystemTime;

fn main() -> Result<()> {
    // Fixed-date DST data, as a platform per-year query would return it:
    // DST from April 5 at 02:00 to October 25 at 02:00, GMT-5 base offset, one hour of delta
    let provider = FixedDstProvider::new(4, 5, TimeOfDay::new(2, 0, 0)?, 10, 25, TimeOfDay::new(2, 0, 0)?, -5 * 3600, 3600)?;

    let schedule = Schedule::build(&provider, YearRange::default())?;

    let base_utc_offset = -5 * 3600;
    let time_zone = CustomTimeZone::new(base_utc_offset, &gmt_display_name(base_utc_offset), "Standard Time", "Daylight Time", schedule)?;
    println!("{}", time_zone.display_name());

    let unix_time: i64 = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)?.as_secs().try_into()?;

    println!("UTC: {:?}", LocalDateTime::from_seconds_since_epoch(unix_time)?);
    println!("LOCAL: {:?}", time_zone.to_local(unix_time)?);

    // Install the zone as the process-wide local time zone
    set_local_time_zone(time_zone)?;
    println!("LOCAL via process time zone: {:?}", now_local()?);

    Ok(())
}
