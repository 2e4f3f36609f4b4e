/// Axis-aligned rectangle in screen pixels, `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap: rectangles sharing only an edge do not collide.
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        interval_sec(self.x, self.right(), other.x, other.right())
            && interval_sec(self.y, self.bottom(), other.y, other.bottom())
    }
}

fn interval_sec(l1: f32, r1: f32, l2: f32, r2: f32) -> bool {
    l1 < r2 && l2 < r1
}
