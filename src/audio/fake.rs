//! Recording stand-in for a real output device.

use std::io;
use std::path::{Path, PathBuf};

use super::engine::{AudioEngine, EngineError};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Load(PathBuf),
    Play,
    Pause,
    Unpause,
    Stop,
    SetVolume(f32),
}

/// Records every call; paths listed in `broken` fail to load.
#[derive(Default)]
pub(crate) struct FakeEngine {
    pub(crate) calls: Vec<Call>,
    pub(crate) loaded: Option<PathBuf>,
    pub(crate) busy: bool,
    pub(crate) broken: Vec<PathBuf>,
}

impl AudioEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        self.calls.push(Call::Load(path.to_path_buf()));
        if self.broken.iter().any(|p| p == path) {
            return Err(EngineError::Open {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            });
        }
        self.loaded = Some(path.to_path_buf());
        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.calls.push(Call::Play);
        if self.loaded.is_none() {
            return Err(EngineError::NothingLoaded);
        }
        self.busy = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
        self.busy = false;
    }

    fn unpause(&mut self) {
        self.calls.push(Call::Unpause);
        self.busy = self.loaded.is_some();
    }

    fn stop(&mut self) {
        self.calls.push(Call::Stop);
        self.busy = false;
        self.loaded = None;
    }

    fn is_busy(&self) -> bool {
        self.busy
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(Call::SetVolume(volume));
    }
}

impl FakeEngine {
    /// The last volume passed to `set_volume`, if any.
    pub(crate) fn last_volume(&self) -> Option<f32> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::SetVolume(v) => Some(*v),
            _ => None,
        })
    }
}
