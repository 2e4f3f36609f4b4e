use super::{Hitbox, Tuning, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    velocity: f32,
    alive: bool,
    flap_ticks: u16,
}

impl Bird {
    /// A resting bird halfway down the screen.
    pub fn new(tuning: &Tuning, viewport: &Viewport) -> Self {
        Bird {
            x: tuning.bird_x,
            y: (viewport.height() / 2.0).floor(),
            width: tuning.bird_width,
            height: tuning.bird_height,
            velocity: 0.0,
            alive: true,
            flap_ticks: 0,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// True while the wing animation started by the last jump is running.
    pub fn is_flapping(&self) -> bool {
        self.flap_ticks > 0
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, self.width, self.height)
    }

    /// Replaces the current velocity with the upward impulse.
    pub fn jump(&mut self, tuning: &Tuning) {
        self.velocity = tuning.jump_impulse;
        self.flap_ticks = tuning.flap_ticks;
    }

    /// One tick of gravity. Leaving the screen vertically kills the bird.
    pub fn fall(&mut self, gravity: f32, viewport: &Viewport) {
        self.velocity += gravity;
        self.y += self.velocity;
        self.flap_ticks = self.flap_ticks.saturating_sub(1);

        if !viewport.holds(self.y, self.height) {
            self.alive = false;
        }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, y: f32, velocity: f32) {
        self.y = y;
        self.velocity = velocity;
    }
}
