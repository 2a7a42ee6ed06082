use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/rhythmflow/config.toml` or `~/.config/rhythmflow/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RHYTHMFLOW__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume slider position at startup, 0-100.
    pub initial_volume: u8,
    /// How far one `+`/`-` press moves the volume slider.
    pub volume_step: u8,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 50,
            volume_step: 5,
        }
    }
}

/// Texts rendered by the now-playing box and header.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Title line when nothing is loaded.
    pub idle_title: String,
    /// Secondary line when nothing is loaded.
    pub idle_subtitle: String,
    /// Secondary line once songs were added but nothing played yet.
    pub ready_subtitle: String,
    /// Secondary line under a playing track's name.
    pub track_subtitle: String,
    pub error_title: String,
    pub error_subtitle: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ RhythmFlow ~ ".to_string(),
            idle_title: "No song loaded".to_string(),
            idle_subtitle: "Add songs to start listening!".to_string(),
            ready_subtitle: "Ready to play!".to_string(),
            track_subtitle: "Unknown Artist - Unknown Album".to_string(),
            error_title: "Error playing song.".to_string(),
            error_subtitle: "Check file path or format.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions offered when adding a directory (case-insensitive,
    /// without dot). `"*"` accepts every file.
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "wav".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Write a log file at all.
    pub enabled: bool,
    /// `tracing` filter directive, e.g. `info` or `rhythmflow=debug`.
    /// `RHYTHMFLOW_LOG` takes precedence when set.
    pub level: String,
    /// Log file location; defaults to the XDG state directory.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}
