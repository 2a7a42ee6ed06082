//! Application model types: `PlaybackState` and `NowPlaying`.

/// The playback state of the application.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What the now-playing box should show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum NowPlaying {
    /// Nothing loaded.
    #[default]
    Idle,
    /// Songs were added while idle; nothing started yet.
    Ready,
    /// Display name of the track that was started last.
    Track(String),
    /// The last load/play attempt failed.
    Error,
}
