use std::collections::VecDeque;

use rand::Rng;
use tracing::trace;

use super::{Bird, Pipe, Tuning, Viewport};

/// Pipes on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct PipeStream {
    pipes: VecDeque<Pipe>,
}

impl PipeStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn clear(&mut self) {
        self.pipes.clear();
    }

    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push_back(pipe);
    }

    /// Runs one tick of the pipe lifecycle against `bird` and returns the points earned.
    ///
    /// Order: spawn, then per pipe scroll, collide and score, then retire whatever left the
    /// screen. The very first spawn into an empty stream is worth a point on its own.
    pub fn advance<R: Rng>(&mut self, bird: &mut Bird, viewport: &Viewport, tuning: &Tuning, rng: &mut R) -> u32 {
        let mut points = 0;

        let spawn = match self.pipes.back() {
            None => {
                points += 1;
                true
            },
            Some(newest) => newest.x() < viewport.width() - tuning.pipe_spacing,
        };
        if spawn {
            let pipe = Pipe::spawn(viewport, rng);
            trace!(gap_y = pipe.gap_y(), "pipe spawned");
            self.pipes.push_back(pipe);
        }

        let hitbox = bird.hitbox();
        for pipe in self.pipes.iter_mut() {
            pipe.move_left(tuning.scroll_speed);

            if pipe.hits(&hitbox, tuning) || !viewport.holds(hitbox.y, hitbox.height) {
                bird.kill();
            }
            if pipe.pass(bird.x(), tuning) {
                points += 1;
            }
        }

        let before = self.pipes.len();
        self.pipes.retain(|pipe| pipe.visible(tuning));
        if self.pipes.len() != before {
            trace!(retired = before - self.pipes.len(), "pipes left the screen");
        }

        points
    }
}
