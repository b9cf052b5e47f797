//! Conversions between the `time` types used by tower-sessions and the `chrono` types used
//! by the database models and DTOs.

use chrono::{DateTime, Utc};
use time::OffsetDateTime;

use crate::server::error::Error;

/// Converts a session expiry timestamp into a `chrono` UTC timestamp.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The same instant in `chrono`
/// - `Err(Error::ParseError)` - The instant is outside of the range `chrono` can represent
pub fn offset_to_utc(datetime: OffsetDateTime) -> Result<DateTime<Utc>, Error> {
    DateTime::<Utc>::from_timestamp(datetime.unix_timestamp(), datetime.nanosecond()).ok_or_else(
        || {
            Error::ParseError(format!(
                "Session expiry {} is out of range for a UTC timestamp",
                datetime
            ))
        },
    )
}
