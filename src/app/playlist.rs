use std::path::PathBuf;

use crate::library::Track;

/// Ordered list of tracks. Insertion order is display and traversal order;
/// the same path may appear more than once.
#[derive(Clone, Debug, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `paths` in order, returning how many tracks were added.
    pub fn extend<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let before = self.tracks.len();
        self.tracks.extend(paths.into_iter().map(Track::new));
        self.tracks.len() - before
    }

    /// Remove and return the track at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<Track> {
        (index < self.tracks.len()).then(|| self.tracks.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}
