//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ`.
///
/// Uses the system timezone unless another one is given.
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    zone: TimeZone,
}

impl<'a> LocalDateTime<'a> {
    /// Formats in the system timezone.
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self::in_zone(timestamp, TimeZone::system())
    }

    /// Formats in an explicit timezone.
    pub fn in_zone(timestamp: &'a Timestamp, zone: TimeZone) -> Self {
        Self { timestamp, zone }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.zone.clone())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
