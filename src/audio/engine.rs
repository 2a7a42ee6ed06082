//! The capabilities the playlist controller needs from a playback backend.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures reported by an [`AudioEngine`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// No audio output device could be opened.
    #[error("no audio output device: {0}")]
    Output(#[from] rodio::StreamError),
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file exists but is not a format the decoder understands.
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("no track loaded")]
    NothingLoaded,
}

/// A single playback session: one loaded track at a time.
///
/// Calls are synchronous and expected to return quickly; the engine is
/// owned exclusively by the controller.
pub trait AudioEngine {
    /// Prepare `path` for playback, replacing whatever was loaded before.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;
    /// Start the loaded track from the beginning.
    fn play(&mut self) -> Result<(), EngineError>;
    fn pause(&mut self);
    fn unpause(&mut self);
    /// Halt playback and forget the loaded track.
    fn stop(&mut self);
    /// Whether audio is actively being produced (loaded, not paused, not drained).
    fn is_busy(&self) -> bool;
    /// Set the output volume on a normalized `0.0..=1.0` scale.
    fn set_volume(&mut self, volume: f32);
}
