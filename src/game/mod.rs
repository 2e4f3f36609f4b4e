//! Simulation core: bird physics, pipe stream, collisions and the phase machine.
//!
//! Nothing in here touches the terminal. Everything is measured in pixels and
//! advanced in fixed ticks, the renderer maps pixels to cells afterwards.

mod bird;
mod object;
mod pipe;
mod session;
mod stream;
mod tuning;
mod viewport;

use thiserror::Error;

pub use self::{
    bird::Bird,
    object::Hitbox,
    pipe::Pipe,
    session::{Phase, Session},
    stream::PipeStream,
    tuning::Tuning,
    viewport::Viewport,
};

/// False for NaN as well as for zero and below.
pub(crate) fn positive(value: f32) -> bool {
    value > 0.0
}

/// False for NaN.
pub(crate) fn at_least(value: f32, min: f32) -> bool {
    value >= min
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("playfield {width}x{height} is too small: pipes need at least {required} pixels of height")]
    PlayfieldTooSmall { width: f32, height: f32, required: f32 },
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}
