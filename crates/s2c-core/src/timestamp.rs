//! Parsing of the loosely-formatted time strings found in session exports.
//!
//! Serato writes times of day such as `20:10:29 GMT-4`. Only the leading
//! `HH:MM:SS` is significant; whatever follows is discarded.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::ParseError;

/// Number of leading characters that carry the `HH:MM:SS` time of day.
const TIME_OF_DAY_LEN: usize = 8;

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Accepted layouts, `D` standing for an ASCII digit. chrono alone would also
/// take space padding, single digits and signed or short years.
const TIME_SHAPE: &[u8] = b"DD:DD:DD";
const DATE_SHAPE: &[u8] = b"DD/DD/DDDD";

/// Parses a time-of-day field, optionally anchored to a session date.
///
/// Without a date the time is placed on a fixed calendar day, which keeps
/// durations between timestamps correct while the date itself is meaningless.
pub fn parse_timestamp(raw: &str, date: Option<NaiveDate>) -> Result<NaiveDateTime, ParseError> {
    let time = parse_time_of_day(raw)?;
    Ok(NaiveDateTime::new(date.unwrap_or_else(anchor_date), time))
}

/// Parses the `HH:MM:SS` prefix of `raw`, ignoring any trailing annotation.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ParseError> {
    let invalid = || ParseError::InvalidTime {
        value: raw.to_string(),
    };

    let head = raw
        .get(..TIME_OF_DAY_LEN)
        .filter(|head| has_shape(head, TIME_SHAPE))
        .ok_or_else(invalid)?;
    let time = NaiveTime::parse_from_str(head, TIME_FORMAT).map_err(|_| invalid())?;

    // chrono represents a leap second as nanoseconds past one billion
    if time.nanosecond() >= 1_000_000_000 {
        return Err(invalid());
    }
    Ok(time)
}

/// Parses a session date in `DD/MM/YYYY` form.
pub fn parse_session_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let invalid = || ParseError::InvalidDate {
        value: raw.to_string(),
    };

    if !has_shape(raw, DATE_SHAPE) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

fn has_shape(value: &str, shape: &[u8]) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape).all(|(byte, &expected)| match expected {
            b'D' => byte.is_ascii_digit(),
            separator => byte == separator,
        })
}

/// The day undated times are placed on.
fn anchor_date() -> NaiveDate {
    NaiveDate::default()
}
