use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/jukebox/config.toml` or `~/.config/jukebox/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `JUKEBOX__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Whether a fresh library starts with the built-in tracks.
    pub seed: bool,
    /// CSV file merged into the library by the import action.
    pub import_path: Option<PathBuf>,
    /// Run the import once at startup.
    pub import_on_startup: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            seed: true,
            import_path: Some(PathBuf::from("new_tracks.csv")),
            import_on_startup: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Which track fields to show in the details view, and in what order.
    ///
    /// Example: ["name", "artist", "rating", "plays"]
    pub detail_fields: Vec<TrackField>,

    /// Separator used to join `detail_fields`.
    pub detail_separator: String,

    /// Shown instead of the listing when the library has no tracks.
    pub empty_library_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            detail_fields: vec![
                TrackField::Name,
                TrackField::Artist,
                TrackField::Rating,
                TrackField::Plays,
            ],
            detail_separator: "\n".to_string(),
            empty_library_text: "Library is empty.".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Name,
    Artist,
    Rating,
    #[serde(alias = "play-count", alias = "play_count")]
    Plays,
    Stars,
    /// The one-line `name - artist stars` summary.
    Info,
}
