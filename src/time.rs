use chrono::{DateTime, Utc};

/// A timestamp reported by Steam.
pub type ServerTime = DateTime<Utc>;

/// Converts a unix timestamp in seconds to a [`ServerTime`]. Out of range timestamps give `None`.
pub fn timestamp_to_server_time(timestamp: i64) -> Option<ServerTime> {
    DateTime::from_timestamp(timestamp, 0)
}
