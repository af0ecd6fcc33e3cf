//! Reading session exports into an ordered list of tracks.

use std::io::Read;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ParseError;
use crate::timestamp::{parse_session_date, parse_timestamp};
use crate::track::{Session, Track};

/// Title, author, start time and end time.
const TRACK_FIELDS: usize = 4;

/// Which rows of an export carry something other than tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionLayout {
    /// The row after the header holds the session date in its first field.
    #[default]
    Dated,
    /// Every row after the header is a track.
    Undated,
}

/// Reads a comma-separated session export.
pub fn read_session<R: Read>(reader: R, layout: SessionLayout) -> Result<Session, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    parse_records(&records, layout)
}

/// Builds a session from already-split rows, header included.
pub fn parse_records(records: &[StringRecord], layout: SessionLayout) -> Result<Session, ParseError> {
    let mut session = Session::default();
    // Row numbers are 1-based to match what a spreadsheet shows.
    let mut rows = records.iter().enumerate().map(|(idx, record)| (idx + 1, record));

    if let Some((row, _)) = rows.next() {
        debug!(row, "skipping header row");
    }

    let mut day = None;
    if layout == SessionLayout::Dated {
        if let Some((row, record)) = rows.next() {
            let date = record
                .get(0)
                .filter(|date| !date.is_empty())
                .ok_or(ParseError::MissingDate { row })?;
            day = Some(parse_session_date(date).map_err(|source| ParseError::Row {
                row,
                source: Box::new(source),
            })?);
            debug!(row, date, "captured session date");
            session.recorded_date = Some(date.to_string());
        }
    }

    for (row, record) in rows {
        let index = session.tracks.len() + 1;
        let track = parse_track(row, index, record, day)?;
        debug!(row, index, title = %track.title, start = %track.start_time, end = %track.end_time, "parsed track");
        session.tracks.push(track);
    }

    Ok(session)
}

fn parse_track(
    row: usize,
    index: usize,
    record: &StringRecord,
    date: Option<NaiveDate>,
) -> Result<Track, ParseError> {
    if record.len() < TRACK_FIELDS {
        return Err(ParseError::TooFewFields {
            row,
            expected: TRACK_FIELDS,
            found: record.len(),
        });
    }

    let timestamp = |raw: &str| {
        parse_timestamp(raw, date).map_err(|source| ParseError::Row {
            row,
            source: Box::new(source),
        })
    };

    Ok(Track::new(
        index,
        &record[0],
        &record[1],
        timestamp(&record[2])?,
        timestamp(&record[3])?,
    ))
}
