use rand::rngs::StdRng;
use tracing::{debug, info};

use super::{Bird, Pipe, PipeStream, Tuning, Viewport};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Start,
    Playing,
    GameOver,
}

/// One run of the game, from the start screen through any number of restarts.
///
/// The app loop is the only writer: it feeds [`Session::activate`] for every queued key press
/// and [`Session::tick`] at the fixed tick rate. Renderers only read.
#[derive(Debug)]
pub struct Session {
    tuning: Tuning,
    viewport: Viewport,
    phase: Phase,
    bird: Bird,
    pipes: PipeStream,
    score: u32,
    rng: StdRng,
}

impl Session {
    pub fn new(tuning: Tuning, viewport: Viewport, rng: StdRng) -> Self {
        let bird = Bird::new(&tuning, &viewport);
        Self { tuning, viewport, phase: Phase::default(), bird, pipes: PipeStream::new(), score: 0, rng }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.iter()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The single player action: start, jump, or restart depending on the phase.
    pub fn activate(&mut self) {
        match self.phase {
            Phase::Start => {
                self.phase = Phase::Playing;
                info!("game started");
            },
            Phase::Playing => {
                if self.bird.is_alive() {
                    self.bird.jump(&self.tuning);
                }
            },
            Phase::GameOver => self.restart(),
        }
    }

    /// Advances the simulation by one tick. Does nothing outside [`Phase::Playing`].
    pub fn tick(&mut self) {
        if self.phase != Phase::Playing || !self.bird.is_alive() {
            return;
        }

        self.bird.fall(self.tuning.gravity, &self.viewport);
        self.score += self.pipes.advance(&mut self.bird, &self.viewport, &self.tuning, &mut self.rng);

        if !self.bird.is_alive() {
            self.phase = Phase::GameOver;
            info!(score = self.score, y = self.bird.y(), velocity = self.bird.velocity(), "bird crashed");
        }
    }

    /// Later spawns and text layout use the new size, pipes already on screen stay put.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!(width = viewport.width(), height = viewport.height(), "viewport changed");
            self.viewport = viewport;
        }
    }

    fn restart(&mut self) {
        info!(score = self.score, "restarting");
        self.bird = Bird::new(&self.tuning, &self.viewport);
        self.pipes.clear();
        self.score = 0;
        self.phase = Phase::Start;
    }

    #[cfg(test)]
    pub(crate) fn parts_mut(&mut self) -> (&mut Bird, &mut PipeStream) {
        (&mut self.bird, &mut self.pipes)
    }
}
