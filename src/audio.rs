//! Audio engine seam and its `rodio` implementation.
//!
//! The controller only talks to the [`AudioEngine`] trait; `RodioEngine`
//! is the one used at runtime, tests plug in a recording fake.

mod engine;
mod rodio_engine;
mod sink;

pub use engine::{AudioEngine, EngineError};
pub use rodio_engine::RodioEngine;

#[cfg(test)]
pub(crate) mod fake;
