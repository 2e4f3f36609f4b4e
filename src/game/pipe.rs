use rand::Rng;

use super::{Hitbox, Tuning, Viewport};

/// A top and a bottom segment sharing one gap. `gap_y` is where the gap starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    x: f32,
    gap_y: f32,
    passed: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_y: f32) -> Self {
        Pipe { x, gap_y, passed: false }
    }

    /// A fresh pipe at the right edge with a random gap.
    pub fn spawn<R: Rng>(viewport: &Viewport, rng: &mut R) -> Self {
        Pipe::new(viewport.width(), rng.gen_range(viewport.gap_range()))
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn gap_y(&self) -> f32 {
        self.gap_y
    }

    pub fn is_passed(&self) -> bool {
        self.passed
    }

    pub fn right(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    pub fn move_left(&mut self, step: f32) {
        self.x -= step;
    }

    /// Top then bottom segment.
    pub fn segments(&self, tuning: &Tuning) -> [Hitbox; 2] {
        [
            Hitbox::new(self.x, self.gap_y - tuning.pipe_height, tuning.pipe_width, tuning.pipe_height),
            Hitbox::new(self.x, self.gap_y + tuning.pipe_gap, tuning.pipe_width, tuning.pipe_height),
        ]
    }

    pub fn hits(&self, other: &Hitbox, tuning: &Tuning) -> bool {
        self.segments(tuning).iter().any(|segment| segment.overlaps(other))
    }

    /// Marks the pipe passed once `bird_x` is beyond its right edge.
    /// Returns true only on the tick that happens.
    pub fn pass(&mut self, bird_x: f32, tuning: &Tuning) -> bool {
        if !self.passed && bird_x > self.right(tuning) {
            self.passed = true;
            return true;
        }
        false
    }

    pub fn visible(&self, tuning: &Tuning) -> bool {
        self.right(tuning) >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_spawn_at_right_edge() {
        let tuning = Tuning::default();
        let viewport = Viewport::new(400.0, 600.0, &tuning).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pipe = Pipe::spawn(&viewport, &mut rng);
            assert_eq!(pipe.x(), 400.0);
            assert!(!pipe.is_passed());
            assert!(viewport.gap_range().contains(&pipe.gap_y()), "gap {} out of range", pipe.gap_y());
        }
    }

    #[test]
    fn test_segments() {
        let tuning = Tuning::default();
        let pipe = Pipe::new(200.0, 300.0);
        let [top, bottom] = pipe.segments(&tuning);
        assert_eq!(top, Hitbox::new(200.0, -200.0, 100.0, 500.0));
        assert_eq!(bottom, Hitbox::new(200.0, 550.0, 100.0, 500.0));
        assert_eq!(bottom.y - top.bottom(), tuning.pipe_gap);
    }

    #[test]
    fn test_hits() {
        let tuning = Tuning::default();
        let pipe = Pipe::new(100.0, 300.0);

        // Inside the gap.
        assert!(!pipe.hits(&Hitbox::new(100.0, 350.0, 70.0, 50.0), &tuning));
        // Clipping the top segment.
        assert!(pipe.hits(&Hitbox::new(100.0, 260.0, 70.0, 50.0), &tuning));
        // Clipping the bottom segment.
        assert!(pipe.hits(&Hitbox::new(100.0, 510.0, 70.0, 50.0), &tuning));
        // Resting exactly on the gap edges.
        assert!(!pipe.hits(&Hitbox::new(100.0, 300.0, 70.0, 50.0), &tuning));
        assert!(!pipe.hits(&Hitbox::new(100.0, 500.0, 70.0, 50.0), &tuning));
        // Just left of the pipe.
        assert!(!pipe.hits(&Hitbox::new(30.0, 0.0, 70.0, 50.0), &tuning));
    }

    #[test]
    fn test_pass_once() {
        let tuning = Tuning::default();
        let mut pipe = Pipe::new(0.0, 300.0);
        assert!(!pipe.pass(100.0, &tuning));
        assert!(pipe.pass(100.5, &tuning));
        assert!(pipe.is_passed());
        assert!(!pipe.pass(200.0, &tuning));
    }

    #[test]
    fn test_visible() {
        let tuning = Tuning::default();
        let mut pipe = Pipe::new(-98.0, 300.0);
        assert!(pipe.visible(&tuning));
        pipe.move_left(2.0);
        assert!(pipe.visible(&tuning));
        pipe.move_left(2.0);
        assert!(!pipe.visible(&tuning));
    }
}
