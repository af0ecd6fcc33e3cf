//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::FalseyValueParser;

use s2c_core::{ConvertOptions, IndexMarkers, SessionLayout};

use crate::Config;

/// Convert a Serato DJ session export into a CUE sheet.
///
/// Reads the CSV written by Serato's history export and prints a CUE sheet
/// indexing every played track within a single recording of the session.
#[derive(Debug, Parser)]
#[command(
    name = "serato2cue",
    version,
    about,
    long_about = None,
    override_usage = "serato2cue [OPTIONS] <SESSION_CSV>"
)]
pub struct Cli {
    /// Path to the exported session CSV.
    // Required, but checked in `main` so a missing path exits with status 1.
    #[arg(value_name = "SESSION_CSV")]
    pub input: Option<PathBuf>,

    /// Enable verbose output on stderr. Also enabled by `DEBUG=y`.
    #[arg(short, long, env = "DEBUG", value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the sheet to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The export has no session date row after the header.
    #[arg(long)]
    pub no_date_row: bool,

    /// Emit only `INDEX 00` for each track.
    #[arg(long)]
    pub pregap_only: bool,

    /// Audio file name for the `FILE` line.
    #[arg(long)]
    pub audio_file: Option<String>,
}

impl Cli {
    /// Builds conversion options from loaded config, letting flags win.
    pub fn convert_options(&self, config: Config) -> ConvertOptions {
        let mut options = config.into_options();
        if self.no_date_row {
            options.layout = SessionLayout::Undated;
        }
        if self.pregap_only {
            options.sheet.index_markers = IndexMarkers::PregapOnly;
        }
        if let Some(audio_file) = &self.audio_file {
            options.sheet.audio_file.clone_from(audio_file);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "serato2cue",
            "--no-date-row",
            "--pregap-only",
            "--audio-file",
            "set.wav",
            "session.csv",
        ]);
        let options = cli.convert_options(Config::default());

        assert_eq!(cli.input, Some(PathBuf::from("session.csv")));
        assert_eq!(options.layout, SessionLayout::Undated);
        assert_eq!(options.sheet.index_markers, IndexMarkers::PregapOnly);
        assert_eq!(options.sheet.audio_file, "set.wav");
    }

    #[test]
    fn config_is_kept_without_flags() {
        let cli = Cli::parse_from(["serato2cue", "session.csv"]);
        let config = Config {
            audio_file: "friday.wav".to_string(),
            layout: SessionLayout::Undated,
            ..Config::default()
        };
        let options = cli.convert_options(config);

        assert_eq!(options.layout, SessionLayout::Undated);
        assert_eq!(options.sheet.index_markers, IndexMarkers::Both);
        assert_eq!(options.sheet.audio_file, "friday.wav");
    }

    #[test]
    fn usage_marks_session_csv_as_required() {
        use clap::CommandFactory;

        let usage = Cli::command().render_usage().to_string();
        assert_eq!(usage.trim_end(), "Usage: serato2cue [OPTIONS] <SESSION_CSV>");
    }

    #[test]
    fn input_is_optional_at_parse_time() {
        let cli = Cli::parse_from(["serato2cue"]);
        assert!(cli.input.is_none());
    }
}
