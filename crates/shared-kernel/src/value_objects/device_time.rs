// crates/shared-kernel/src/value_objects/device_time.rs
use chrono::{DateTime, Local, TimeZone, Utc};

/// Microseconds between 0001-01-01T00:00:00Z and the Unix epoch.
const UNIX_EPOCH_OFFSET_MICROS: i64 = 62_135_596_800_000_000;

/// Timestamp in the device epoch: microseconds since 0001-01-01 UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DeviceTime(u64);

impl DeviceTime {
    #[inline]
    pub const fn micros(self) -> u64 {
        self.0
    }

    /// Instants before year 1 clamp to the device epoch.
    pub fn from_datetime<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        let micros = instant.timestamp_micros().saturating_add(UNIX_EPOCH_OFFSET_MICROS);
        Self(u64::try_from(micros).unwrap_or(0))
    }

    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let micros = i64::try_from(self.0).ok()?.checked_sub(UNIX_EPOCH_OFFSET_MICROS)?;
        DateTime::from_timestamp_micros(micros)
    }

    /// Renders the timestamp in the local time zone using a strftime pattern.
    pub fn format(self, pattern: &str) -> String {
        match self.to_datetime() {
            Some(instant) => instant.with_timezone(&Local).format(pattern).to_string(),
            None => "??".to_string(),
        }
    }
}

impl From<DateTime<Utc>> for DeviceTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_datetime(&instant)
    }
}
