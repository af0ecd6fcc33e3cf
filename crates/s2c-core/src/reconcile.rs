//! Timeline passes over a session's tracks.
//!
//! Logged end times are approximate. The next track's start is the real
//! boundary, so [`reconcile`] moves every end time onto it before
//! [`accumulate`] computes each track's offset into the recording.

use chrono::TimeDelta;
use tracing::debug;

use crate::TimelineError;
use crate::track::Track;

/// Closes the gaps and overlaps between consecutive tracks.
///
/// Each track except the last ends where the next one starts. The last keeps
/// its logged end time. Fails if any track would end before it starts.
pub fn reconcile(mut tracks: Vec<Track>) -> Result<Vec<Track>, TimelineError> {
    for idx in 1..tracks.len() {
        let next_start = tracks[idx].start_time;
        let track = &mut tracks[idx - 1];
        if track.end_time != next_start {
            debug!(
                index = track.index,
                logged = %track.end_time,
                reconciled = %next_start,
                "moved track end to next start"
            );
        }
        track.end_time = next_start;
    }

    if let Some(track) = tracks.iter().find(|track| track.end_time < track.start_time) {
        return Err(TimelineError::EndBeforeStart {
            index: track.index,
            start: track.start_time,
            end: track.end_time,
        });
    }

    Ok(tracks)
}

/// Sets each track's elapsed time to the total length of the tracks before it.
pub fn accumulate(mut tracks: Vec<Track>) -> Vec<Track> {
    let mut elapsed = TimeDelta::zero();
    for track in &mut tracks {
        track.elapsed = elapsed;
        elapsed += track.length();
        debug!(index = track.index, elapsed = %track.elapsed, length = %track.length(), "accumulated track");
    }
    tracks
}
