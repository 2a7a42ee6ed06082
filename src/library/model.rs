use std::path::PathBuf;

use super::display::display_name;

/// A reference to one playable audio file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub path: PathBuf,
    pub display: String,
}

impl Track {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = display_name(&path);
        Self { path, display }
    }
}
