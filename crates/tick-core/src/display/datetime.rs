//! Timestamps rendered in the system time zone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Full date and time, `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Calendar date only, `YYYY-MM-DD`. Used for target dates.
pub struct LocalDate<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%Y-%m-%d")
        )
    }
}
