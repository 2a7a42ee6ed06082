//! Application module: the playlist controller and the state it publishes.
//!
//! `Controller` owns the playlist, the playback cursor and state, and is the
//! only caller of the audio engine. `View` holds what belongs to the
//! presentation alone (highlighted row, volume slider, add prompt, notice).

mod controller;
mod error;
mod model;
mod notice;
mod playlist;
mod view;

pub use controller::Controller;
pub use error::PlayerError;
pub use model::{NowPlaying, PlaybackState};
pub use notice::{Notice, NoticeKind};
pub use view::View;
