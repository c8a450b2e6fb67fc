/// A position in viewport (client) coordinates, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// State of the custom cursor: a dot glued to the pointer and a ring that
/// trails behind it.
#[derive(Debug, Clone)]
pub struct CursorFollower {
    easing: f64,
    pointer: Point,
    ring: Point,
    hovering: bool,
}

impl CursorFollower {
    pub fn new(easing: f64) -> Self {
        Self {
            easing,
            pointer: Point::default(),
            ring: Point::default(),
            hovering: false,
        }
    }

    /// Record a pointer move; returns where the dot goes.
    pub fn pointer_moved(&mut self, to: Point) -> Point {
        self.pointer = to;
        to
    }

    /// Advance the ring one frame toward the pointer; returns its new position.
    pub fn step(&mut self) -> Point {
        self.ring.x += (self.pointer.x - self.ring.x) * self.easing;
        self.ring.y += (self.pointer.y - self.ring.y) * self.easing;
        self.ring
    }

    pub fn ring(&self) -> Point {
        self.ring
    }

    /// Returns true if the hover state changed.
    pub fn set_hover(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}
