//! Library module: tracks and the helpers used to pick files for the playlist.
//!
//! Playlists only ever hold paths; this module turns what the user typed
//! (a file or a directory) into an ordered list of those paths.

mod display;
mod model;
mod scan;

pub use model::Track;
pub use scan::resolve_selection;
