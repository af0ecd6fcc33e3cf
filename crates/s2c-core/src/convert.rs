//! The full export-to-CUE pipeline.

use std::io::Read;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConvertError;
use crate::cue::{SheetOptions, render_sheet};
use crate::ingest::{SessionLayout, read_session};
use crate::reconcile::{accumulate, reconcile};

/// Settings for a single conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Where the session date lives in the export.
    pub layout: SessionLayout,
    /// Text and markers of the rendered sheet.
    pub sheet: SheetOptions,
}

/// Reads a session export and renders it as a CUE sheet.
///
/// Nothing is returned unless every stage succeeds.
pub fn convert<R: Read>(reader: R, options: &ConvertOptions) -> Result<String, ConvertError> {
    let session = read_session(reader, options.layout)?;
    debug!(
        tracks = session.tracks.len(),
        date = ?session.recorded_date,
        "read session"
    );

    let tracks = accumulate(reconcile(session.tracks)?);
    let sheet = render_sheet(session.recorded_date.as_deref(), &tracks, &options.sheet)?;
    Ok(sheet)
}
