use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::US::Eastern;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Start and end of one watch session in Eastern civil time, plus the watch
/// length rendered as `H:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchInterval {
    pub start: String,
    pub end: String,
    pub duration: String,
}

/// Derive the Eastern-time interval for a play event. `timestamp_ms` is the
/// play start as a UTC epoch in milliseconds; `offset_seconds` is how long
/// the item was watched.
///
/// The end is computed by adding the offset to the start *instant*, so an
/// interval that crosses a DST transition shows the zone's wall-clock shift:
/// across spring-forward the formatted gap is offset + 1h, and across
/// fall-back a wall-clock time can repeat.
pub fn derive_interval(timestamp_ms: i64, offset_seconds: i64) -> Result<WatchInterval> {
    let start_utc: DateTime<Utc> = Utc
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .ok_or_else(|| anyhow!("timestamp {timestamp_ms} ms is out of range"))?;

    let start = start_utc.with_timezone(&Eastern);
    let end = start + Duration::seconds(offset_seconds);

    Ok(WatchInterval {
        start: start.format(DATETIME_FORMAT).to_string(),
        end: end.format(DATETIME_FORMAT).to_string(),
        duration: format_duration(offset_seconds),
    })
}

/// `H:MM:SS` with unbounded, un-padded hours: `0:30:00`, `25:00:00`.
pub fn format_duration(offset_seconds: i64) -> String {
    let hours = offset_seconds / 3600;
    let minutes = offset_seconds % 3600 / 60;
    let seconds = offset_seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_utc_millis_to_eastern() {
        let interval = derive_interval(1_700_000_000_000, 1800).unwrap();
        assert_eq!(interval.start, "2023-11-14 17:13:20");
        assert_eq!(interval.end, "2023-11-14 17:43:20");
        assert_eq!(interval.duration, "0:30:00");
    }

    #[test]
    fn test_zero_offset_start_equals_end() {
        let interval = derive_interval(1_700_000_000_000, 0).unwrap();
        assert_eq!(interval.start, interval.end);
        assert_eq!(interval.duration, "0:00:00");
    }

    #[test]
    fn test_spring_forward_shifts_wall_clock() {
        // 2024-03-10 06:30 UTC is 01:30 EST; one hour later the zone has
        // jumped to EDT, so a 1h offset lands at 03:30 on the wall clock.
        let interval = derive_interval(1_710_052_200_000, 3600).unwrap();
        assert_eq!(interval.start, "2024-03-10 01:30:00");
        assert_eq!(interval.end, "2024-03-10 03:30:00");
    }

    #[test]
    fn test_fall_back_repeats_wall_clock() {
        // 2024-11-03 05:30 UTC is 01:30 EDT; one hour later the zone has
        // fallen back to EST and the wall clock reads 01:30 again.
        let interval = derive_interval(1_730_611_800_000, 3600).unwrap();
        assert_eq!(interval.start, "2024-11-03 01:30:00");
        assert_eq!(interval.end, "2024-11-03 01:30:00");
    }

    #[test]
    fn test_fractional_second_timestamps_truncate_in_formatting() {
        let interval = derive_interval(1_700_000_000_500, 0).unwrap();
        assert_eq!(interval.start, "2023-11-14 17:13:20");
    }

    #[test]
    fn test_duration_hours_are_unbounded() {
        assert_eq!(format_duration(90_000), "25:00:00");
        assert_eq!(format_duration(61), "0:01:01");
        assert_eq!(format_duration(3599), "0:59:59");
    }
}
