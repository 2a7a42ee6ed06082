//! Utilities for turning a file path into a playing `rodio` sink.
//!
//! Opening and probing happen at load time so that a bad file is reported
//! before anything is connected to the mixer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use super::engine::EngineError;

pub(super) type FileSource = Decoder<BufReader<File>>;

/// Open `path` and probe it with the decoder.
pub(super) fn open_source(path: &Path) -> Result<FileSource, EngineError> {
    let file = File::open(path).map_err(|source| EngineError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Decoder::new(BufReader::new(file)).map_err(|source| EngineError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Create a sink on `stream`'s mixer already playing `source` at `volume`.
pub(super) fn start_sink(stream: &OutputStream, source: FileSource, volume: f32) -> Sink {
    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.play();
    sink
}
