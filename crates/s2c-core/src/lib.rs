//! Core conversion logic for serato2cue.
//!
//! This crate turns a Serato DJ session export into a CUE sheet:
//! - Ingest: reading CSV rows into timestamped tracks
//! - Reconcile: snapping each track's end onto the next track's start
//! - Accumulate: computing every track's offset into the recording
//! - Render: writing the CUE sheet text

pub mod convert;
pub mod cue;
mod error;
pub mod ingest;
pub mod reconcile;
pub mod timestamp;
pub mod track;

pub use convert::{ConvertOptions, convert};
pub use cue::{CueTime, IndexMarkers, SheetOptions, render_sheet};
pub use error::{ConvertError, CueError, ParseError, TimelineError};
pub use ingest::{SessionLayout, parse_records, read_session};
pub use reconcile::{accumulate, reconcile};
pub use track::{Session, Track};
