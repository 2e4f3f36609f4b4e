use std::ops::RangeInclusive;

use super::{at_least, positive, GameError, Tuning};

/// Screen dimensions in pixels, checked against the pipe geometry.
///
/// A `Viewport` can only be built when a pipe gap fits inside it, so anything that spawns
/// pipes never sees a degenerate range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    gap_min: f32,
    gap_max: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Result<Self, GameError> {
        let required = tuning.required_height();
        if !positive(width) || !at_least(height, required) {
            return Err(GameError::PlayfieldTooSmall { width, height, required });
        }

        Ok(Self { width, height, gap_min: tuning.pipe_margin, gap_max: height - tuning.pipe_gap - tuning.pipe_margin })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Where the top of a pipe gap may start.
    pub fn gap_range(&self) -> RangeInclusive<f32> {
        self.gap_min..=self.gap_max
    }

    /// Whether something `height` tall at `y` is fully between ceiling and floor.
    ///
    /// Touching the ceiling (`y == 0`) or the floor (`y + height == self.height`) still counts
    /// as inside: only crossing an edge is fatal, not contact as with `y <= 0 || y + h >= H`.
    pub fn holds(&self, y: f32, height: f32) -> bool {
        y >= 0.0 && y + height <= self.height
    }
}
