use std::path::PathBuf;

use thiserror::Error;

use crate::audio::EngineError;

/// Everything a controller command can refuse or fail with.
///
/// All variants but `Playback` mean the user asked for something that needs
/// input first; they never change state.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("No songs selected.")]
    NoSongsSelected,
    #[error("Please add songs to the playlist.")]
    NothingToPlay,
    #[error("No track selected. Pick a song from the playlist.")]
    NoTrackSelected,
    #[error("Playlist is empty.")]
    PlaylistEmpty,
    #[error("Please select a song to remove.")]
    NothingToRemove,
    #[error("Could not play song: {source}")]
    Playback {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}

impl PlayerError {
    /// True for the "needs more input" class, false for playback failures.
    pub fn is_user_input(&self) -> bool {
        !matches!(self, Self::Playback { .. })
    }
}
