//! Error types for the conversion pipeline.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Failures while reading a session export.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A time field did not start with a valid `HH:MM:SS`.
    #[error("invalid time of day: {value:?}")]
    InvalidTime { value: String },

    /// The session date was not a valid `DD/MM/YYYY` date.
    #[error("invalid session date: {value:?}")]
    InvalidDate { value: String },

    /// The date row had no first field.
    #[error("row {row}: missing session date")]
    MissingDate { row: usize },

    /// A track row had fewer than the required fields.
    #[error("row {row}: expected at least {expected} fields, found {found}")]
    TooFewFields {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A field within a track row failed to parse.
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<Self>,
    },

    /// The underlying CSV reader failed.
    #[error("failed to read CSV record")]
    Csv(#[from] csv::Error),
}

/// Failures while reconciling the track timeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// A track ends before it starts, e.g. a session crossing midnight.
    #[error("track {index} ends at {end} before it starts at {start}")]
    EndBeforeStart {
        index: usize,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// Failures while rendering a CUE sheet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CueError {
    /// CUE positions cannot be negative.
    #[error("cannot express negative duration of {seconds}s as a CUE position")]
    NegativeDuration { seconds: i64 },

    /// Writing into the output buffer failed.
    #[error("failed to format CUE sheet")]
    Format(#[from] std::fmt::Error),
}

/// Any failure of the full conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Timeline(#[from] TimelineError),

    #[error(transparent)]
    Cue(#[from] CueError),
}
