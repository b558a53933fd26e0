//! Timestamp parsing and display formatting.
//!
//! Show times arrive from forms either as RFC 3339 strings or in the form
//! layer's default `YYYY-MM-DD HH:MM:SS` layout (taken as UTC). For display,
//! two English-locale patterns are offered:
//!
//! | style    | pattern                        | example                            |
//! |----------|--------------------------------|------------------------------------|
//! | `full`   | `EEEE MMMM d, y 'at' h:mma`    | `Tuesday May 21, 2019 at 9:30PM`   |
//! | `medium` | `EE MM dd, y h:mma`            | `Tue 05 21, 2019 9:30PM`           |

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Naive layout accepted from HTML forms.
pub const FORM_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const FULL_PATTERN: &str = "%A %B %-d, %Y at %-I:%M%p";
const MEDIUM_PATTERN: &str = "%a %m %d, %Y %-I:%M%p";

/// Display style for [`format_datetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Full,
    Medium,
}

/// Render a timestamp in one of the display styles.
pub fn format_datetime(value: Timestamp, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => FULL_PATTERN,
        DateFormat::Medium => MEDIUM_PATTERN,
    };
    value.format(pattern).to_string()
}

/// Parse a submitted timestamp.
///
/// Accepts RFC 3339 (any offset, normalized to UTC) or
/// [`FORM_DATETIME_FORMAT`] which is interpreted as UTC.
pub fn parse_datetime(value: &str) -> Result<Timestamp, CoreError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, FORM_DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| {
            CoreError::Validation(format!(
                "Invalid start_time '{value}', expected RFC 3339 or YYYY-MM-DD HH:MM:SS"
            ))
        })
}
