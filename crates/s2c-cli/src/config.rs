//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use s2c_core::{ConvertOptions, IndexMarkers, SessionLayout, SheetOptions};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Text of the `REM COMMENT` line.
    pub comment: String,
    /// File name on the `FILE` line.
    pub audio_file: String,
    /// File type on the `FILE` line.
    pub audio_format: String,
    /// Whether exports carry a session date row.
    pub layout: SessionLayout,
    /// Which `INDEX` lines each track gets.
    pub index_markers: IndexMarkers,
}

impl Default for Config {
    fn default() -> Self {
        let sheet = SheetOptions::default();
        Self {
            comment: sheet.comment,
            audio_file: sheet.audio_file,
            audio_format: sheet.audio_format,
            layout: SessionLayout::default(),
            index_markers: sheet.index_markers,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // SERATO2CUE_AUDIO_FILE and friends
        figment = figment.merge(Env::prefixed("SERATO2CUE_"));

        figment.extract()
    }

    /// Splits the configuration into pipeline options.
    pub fn into_options(self) -> ConvertOptions {
        ConvertOptions {
            layout: self.layout,
            sheet: SheetOptions {
                comment: self.comment,
                audio_file: self.audio_file,
                audio_format: self.audio_format,
                index_markers: self.index_markers,
            },
        }
    }
}

/// Returns the platform-specific config directory for serato2cue.
///
/// On Linux: `~/.config/serato2cue`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("serato2cue"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn test_dirs_config_path_ends_with_app_name() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "serato2cue");
    }

    #[test]
    fn test_default_config_matches_sheet_defaults() {
        let options = Config::default().into_options();
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(
            &path,
            "audio_file = \"friday.flac\"\naudio_format = \"WAVE\"\nlayout = \"undated\"\nindex_markers = \"pregap_only\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.audio_file, "friday.flac");
        assert_eq!(config.audio_format, "WAVE");
        assert_eq!(config.layout, SessionLayout::Undated);
        assert_eq!(config.index_markers, IndexMarkers::PregapOnly);
        assert_eq!(config.comment, "Recorded by Serato DJ");
    }

    #[test]
    fn test_load_from_rejects_unknown_layout() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "layout = \"sideways\"\n").unwrap();

        assert!(Config::load_from(Some(&path)).is_err());
    }
}
