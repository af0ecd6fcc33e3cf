//! The convert command: session export in, CUE sheet out.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use s2c_core::ConvertOptions;

/// Renders the session export at `input` as a CUE sheet.
pub fn render_file(input: &Path, options: &ConvertOptions) -> Result<String> {
    let file =
        File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    s2c_core::convert(BufReader::new(file), options)
        .with_context(|| format!("failed to convert {}", input.display()))
}

/// Writes a finished sheet to `output`, or stdout when no path is given.
pub fn write_sheet(sheet: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, sheet).with_context(|| format!("failed to write {}", path.display()))
        }
        None => write_to(&mut io::stdout().lock(), sheet),
    }
}

fn write_to<W: Write>(writer: &mut W, sheet: &str) -> Result<()> {
    writer
        .write_all(sheet.as_bytes())
        .and_then(|()| writer.flush())
        .context("failed to write CUE sheet")
}
