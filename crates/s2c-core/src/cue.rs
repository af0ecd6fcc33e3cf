//! CUE sheet rendering.

use std::fmt::{self, Write};

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CueError;
use crate::track::Track;

/// A position within the audio file in CUE `MM:SS:FF` notation.
///
/// Sub-second precision is not tracked, so frames are always zero. Hours are
/// folded into minutes, which may grow past two digits for long sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CueTime {
    minutes: i64,
    seconds: i64,
}

impl CueTime {
    /// Total whole minutes, hours included.
    pub const fn minutes(self) -> i64 {
        self.minutes
    }

    /// Remaining seconds within the minute.
    pub const fn seconds(self) -> i64 {
        self.seconds
    }
}

impl TryFrom<TimeDelta> for CueTime {
    type Error = CueError;

    fn try_from(duration: TimeDelta) -> Result<Self, Self::Error> {
        let total = duration.num_seconds();
        if total < 0 {
            return Err(CueError::NegativeDuration { seconds: total });
        }
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        Ok(Self {
            minutes: hours * 60 + minutes,
            seconds: total % 60,
        })
    }
}

impl fmt::Display for CueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:00", self.minutes, self.seconds)
    }
}

/// Which `INDEX` lines each track block carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexMarkers {
    /// `INDEX 00` at the elapsed offset and `INDEX 01` where the track ends.
    #[default]
    Both,
    /// Only `INDEX 00`, as older sheets were written.
    PregapOnly,
}

/// Fixed text surrounding the track blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetOptions {
    /// Text of the `REM COMMENT` line.
    pub comment: String,
    /// File name on the `FILE` line.
    pub audio_file: String,
    /// File type on the `FILE` line.
    pub audio_format: String,
    /// Which `INDEX` lines to emit.
    pub index_markers: IndexMarkers,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            comment: "Recorded by Serato DJ".to_string(),
            audio_file: "noname.wav".to_string(),
            audio_format: "WAV".to_string(),
            index_markers: IndexMarkers::default(),
        }
    }
}

/// Renders a complete CUE sheet for tracks whose elapsed times are set.
pub fn render_sheet(
    recorded_date: Option<&str>,
    tracks: &[Track],
    options: &SheetOptions,
) -> Result<String, CueError> {
    let mut out = String::new();
    write_preamble(&mut out, recorded_date, options)?;
    for track in tracks {
        write_track(&mut out, track, options.index_markers)?;
    }
    Ok(out)
}

fn write_preamble(
    out: &mut String,
    recorded_date: Option<&str>,
    options: &SheetOptions,
) -> fmt::Result {
    writeln!(out, "REM COMMENT \"{}\"", options.comment)?;
    if let Some(date) = recorded_date {
        writeln!(out, "REM DATE {date}")?;
    }
    writeln!(
        out,
        "FILE \"{}\" {}",
        options.audio_file, options.audio_format
    )
}

/// Appends one `TRACK` block.
pub fn write_track(out: &mut String, track: &Track, markers: IndexMarkers) -> Result<(), CueError> {
    let start = CueTime::try_from(track.elapsed)?;
    let end = CueTime::try_from(track.elapsed + track.length())?;
    debug!(index = track.index, %start, %end, "rendering track");

    writeln!(out, "  TRACK {:02} AUDIO", track.index)?;
    writeln!(out, "    TITLE \"{}\"", track.title)?;
    writeln!(out, "    PERFORMER \"{}\"", track.author)?;
    writeln!(out, "    INDEX 00 {start}")?;
    if markers == IndexMarkers::Both {
        writeln!(out, "    INDEX 01 {end}")?;
    }
    Ok(())
}
