//! Tracks logged during a recorded DJ session.

use chrono::{NaiveDateTime, TimeDelta};

/// One logged performance segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// 1-based position in the session, also used as the CUE track number.
    pub index: usize,
    /// Track title, kept verbatim.
    pub title: String,
    /// Performer, kept verbatim.
    pub author: String,
    /// When the track started playing.
    pub start_time: NaiveDateTime,
    /// When the track stopped playing.
    ///
    /// Provisional until the timeline is reconciled against the next track.
    pub end_time: NaiveDateTime,
    /// Combined length of every earlier track.
    pub elapsed: TimeDelta,
}

impl Track {
    /// Creates a track with no elapsed time yet.
    pub fn new(
        index: usize,
        title: impl Into<String>,
        author: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            index,
            title: title.into(),
            author: author.into(),
            start_time,
            end_time,
            elapsed: TimeDelta::zero(),
        }
    }

    /// How long the track played.
    pub fn length(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}

/// Everything read from a single session export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// The session date as written in the export, if the layout carries one.
    pub recorded_date: Option<String>,
    /// Tracks in play order.
    pub tracks: Vec<Track>,
}
