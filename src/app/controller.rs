//! The playlist and playback state machine.
//!
//! States: `Stopped -> Playing -> Paused -> Playing -> Stopped`. `next` and
//! `previous` always (re)load a track and land in `Playing`, or in `Stopped`
//! with an error display when the engine fails.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::audio::AudioEngine;
use crate::library::Track;

use super::error::PlayerError;
use super::model::{NowPlaying, PlaybackState};
use super::playlist::Playlist;

pub struct Controller<E> {
    engine: E,
    playlist: Playlist,
    cursor: Option<usize>,
    state: PlaybackState,
    now_playing: NowPlaying,
}

impl<E: AudioEngine> Controller<E> {
    /// Create a controller with an empty playlist, no cursor, stopped.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            playlist: Playlist::new(),
            cursor: None,
            state: PlaybackState::Stopped,
            now_playing: NowPlaying::Idle,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Index of the selected/loaded track, if any.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Append `paths` to the playlist, unvalidated, returning how many were added.
    pub fn add_tracks<I>(&mut self, paths: I) -> Result<usize, PlayerError>
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let added = self.playlist.extend(paths);
        if added == 0 {
            return Err(PlayerError::NoSongsSelected);
        }

        if self.now_playing == NowPlaying::Idle {
            self.now_playing = NowPlaying::Ready;
        }
        info!(added, total = self.playlist.len(), "songs added");
        Ok(added)
    }

    /// Move the cursor to `index` and play.
    ///
    /// Goes through [`Controller::play`], so while paused this resumes the
    /// paused track; the new cursor takes effect on the next fresh start.
    pub fn select_track(&mut self, index: usize) -> Result<(), PlayerError> {
        if index >= self.playlist.len() {
            return Err(PlayerError::NoTrackSelected);
        }
        self.cursor = Some(index);
        self.play()
    }

    /// Resume when paused, otherwise (re)start the track under the cursor.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        if self.state == PlaybackState::Paused {
            self.engine.unpause();
            self.state = PlaybackState::Playing;
            debug!("resumed");
            return Ok(());
        }

        if self.playlist.is_empty() {
            return Err(PlayerError::NothingToPlay);
        }
        if self.cursor.is_none() {
            return Err(PlayerError::NoTrackSelected);
        }
        self.start_at_cursor()
    }

    /// Pause if the engine is actually producing sound.
    pub fn pause(&mut self) {
        if self.engine.is_busy() {
            self.engine.pause();
            self.state = PlaybackState::Paused;
            debug!("paused");
        }
    }

    /// Stop playback and reset the now-playing display. The cursor is kept.
    pub fn stop(&mut self) {
        self.engine.stop();
        self.state = PlaybackState::Stopped;
        self.now_playing = NowPlaying::Idle;
        debug!("stopped");
    }

    /// Advance the cursor with wraparound and start the new track.
    pub fn next(&mut self) -> Result<(), PlayerError> {
        let len = self.playlist.len();
        if len == 0 {
            return Err(PlayerError::PlaylistEmpty);
        }
        self.cursor = Some(self.cursor.map_or(0, |c| (c + 1) % len));
        self.start_at_cursor()
    }

    /// Step the cursor back with wraparound and start the new track.
    pub fn previous(&mut self) -> Result<(), PlayerError> {
        let len = self.playlist.len();
        if len == 0 {
            return Err(PlayerError::PlaylistEmpty);
        }
        self.cursor = Some(self.cursor.map_or(len - 1, |c| (c + len - 1) % len));
        self.start_at_cursor()
    }

    /// Remove the track at the selected row.
    ///
    /// Removing the track under the cursor stops playback and clears the
    /// cursor; removing one before it shifts the cursor down. Nothing starts
    /// playing as a result of a removal.
    pub fn remove_track(&mut self, selection: Option<usize>) -> Result<Track, PlayerError> {
        let index = selection
            .filter(|&i| i < self.playlist.len())
            .ok_or(PlayerError::NothingToRemove)?;

        if self.cursor == Some(index) {
            self.stop();
            self.cursor = None;
        }

        let removed = self
            .playlist
            .remove(index)
            .ok_or(PlayerError::NothingToRemove)?;

        if let Some(c) = self.cursor {
            if index < c {
                self.cursor = Some(c - 1);
            }
        }

        info!(index, track = %removed.display, "song removed");
        Ok(removed)
    }

    /// Forward a 0-100 slider value to the engine as 0.0-1.0.
    pub fn set_volume(&mut self, percent: u8) {
        self.engine.set_volume(f32::from(percent) / 100.0);
    }

    fn start_at_cursor(&mut self) -> Result<(), PlayerError> {
        let Some(track) = self.cursor.and_then(|i| self.playlist.get(i)).cloned() else {
            return Err(PlayerError::NoTrackSelected);
        };

        let started = self
            .engine
            .load(&track.path)
            .and_then(|()| self.engine.play());

        match started {
            Ok(()) => {
                self.state = PlaybackState::Playing;
                info!(track = %track.display, "now playing");
                self.now_playing = NowPlaying::Track(track.display);
                Ok(())
            }
            Err(source) => {
                warn!(path = %track.path.display(), error = %source, "playback failed");
                self.engine.stop();
                self.state = PlaybackState::Stopped;
                self.now_playing = NowPlaying::Error;
                Err(PlayerError::Playback {
                    path: track.path,
                    source,
                })
            }
        }
    }
}
