use serde::Deserialize;

use super::{at_least, positive, GameError};
use crate::constants::game;

/// Physics and geometry knobs. Distances are pixels, speeds are pixels per tick.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub scroll_speed: f32,
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub flap_ticks: u16,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub pipe_gap: f32,
    pub pipe_spacing: f32,
    pub pipe_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: game::GRAVITY,
            jump_impulse: game::JUMP_IMPULSE,
            scroll_speed: game::SCROLL_SPEED,
            bird_x: game::BIRD_X,
            bird_width: game::BIRD_WIDTH,
            bird_height: game::BIRD_HEIGHT,
            flap_ticks: game::FLAP_TICKS,
            pipe_width: game::PIPE_WIDTH,
            pipe_height: game::PIPE_HEIGHT,
            pipe_gap: game::PIPE_GAP,
            pipe_spacing: game::PIPE_SPACING,
            pipe_margin: game::PIPE_MARGIN,
        }
    }
}

impl Tuning {
    /// Smallest playfield height that still fits a gap with a margin on both sides.
    pub fn required_height(&self) -> f32 {
        self.pipe_gap + 2.0 * self.pipe_margin
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let must_be_positive = [
            ("gravity", self.gravity),
            ("scroll_speed", self.scroll_speed),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_gap", self.pipe_gap),
            ("pipe_spacing", self.pipe_spacing),
        ];
        if let Some((name, value)) = must_be_positive.iter().find(|(_, value)| !positive(*value)) {
            return Err(GameError::InvalidTuning(format!("{name} must be positive, got {value}")));
        }
        if !positive(-self.jump_impulse) {
            return Err(GameError::InvalidTuning(format!(
                "jump_impulse must point upwards (negative), got {}",
                self.jump_impulse
            )));
        }
        if !at_least(self.pipe_margin, 0.0) {
            return Err(GameError::InvalidTuning(format!("pipe_margin must not be negative, got {}", self.pipe_margin)));
        }
        if !at_least(self.bird_x, 0.0) {
            return Err(GameError::InvalidTuning(format!("bird_x must not be negative, got {}", self.bird_x)));
        }
        Ok(())
    }
}
