use std::path::{Path, PathBuf};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use super::engine::{AudioEngine, EngineError};
use super::sink::{FileSource, open_source, start_sink};

/// [`AudioEngine`] backed by the default `rodio` output device.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<(PathBuf, FileSource)>,
    volume: f32,
}

impl RodioEngine {
    /// Open the default output stream. Call once at startup.
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when the stream is dropped, which would land on top of the TUI.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            loaded: None,
            volume: 1.0,
        })
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        self.stop();
        let source = open_source(path)?;
        debug!(path = %path.display(), "loaded");
        self.loaded = Some((path.to_path_buf(), source));
        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        let (path, source) = self.loaded.take().ok_or(EngineError::NothingLoaded)?;
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(start_sink(&self.stream, source, self.volume));
        debug!(path = %path.display(), "playing");
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.loaded = None;
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|sink| !sink.is_paused() && !sink.empty())
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume);
        }
    }
}
