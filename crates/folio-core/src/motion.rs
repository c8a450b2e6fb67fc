//! Pointer-driven decoration: parallax on floating shapes, card tilt, and the
//! staggered hero entrance.

use crate::cursor::Point;

/// Offset of a floating element for a pointer position.
///
/// Deeper elements (higher `index`) move further: `(index + 1) * speed` px
/// at the viewport edges, zero at its center.
pub fn parallax_offset(index: usize, pointer: Point, viewport: (f64, f64), speed: f64) -> Point {
    let (width, height) = viewport;
    if width <= 0.0 || height <= 0.0 {
        return Point::default();
    }
    let depth = (index + 1) as f64 * speed;
    Point {
        x: (pointer.x / width - 0.5) * depth,
        y: (pointer.y / height - 0.5) * depth,
    }
}

pub fn translate_css(offset: Point) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// A card's bounding box in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation of a tilted card, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

pub const NEUTRAL_TILT_CSS: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

impl Tilt {
    /// Tilt toward the pointer: the card's edge under the cursor dips away.
    pub fn toward(pointer: Point, card: Rect, divisor: f64) -> Self {
        let x = pointer.x - card.left;
        let y = pointer.y - card.top;
        let center_x = card.width / 2.0;
        let center_y = card.height / 2.0;
        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// `animation-delay` for the `index`-th hero element.
pub fn stagger_delay(index: usize, step_secs: f64) -> String {
    format!("{}s", index as f64 * step_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_center_is_still() {
        let offset = parallax_offset(3, Point::new(500.0, 400.0), (1000.0, 800.0), 15.0);
        assert_eq!(offset, Point::default());
    }

    #[test]
    fn test_parallax_scales_with_index() {
        let corner = Point::new(1000.0, 0.0);
        let first = parallax_offset(0, corner, (1000.0, 800.0), 15.0);
        let third = parallax_offset(2, corner, (1000.0, 800.0), 15.0);
        assert_eq!(first, Point::new(7.5, -7.5));
        assert_eq!(third, Point::new(22.5, -22.5));
        assert_eq!(translate_css(first), "translate(7.5px, -7.5px)");
    }

    #[test]
    fn test_parallax_degenerate_viewport() {
        let offset = parallax_offset(1, Point::new(10.0, 10.0), (0.0, 800.0), 15.0);
        assert_eq!(offset, Point::default());
    }

    #[test]
    fn test_tilt_from_card_corner() {
        let card = Rect {
            left: 100.0,
            top: 200.0,
            width: 300.0,
            height: 240.0,
        };
        // top-left corner of the card
        let tilt = Tilt::toward(Point::new(100.0, 200.0), card, 30.0);
        assert_eq!(tilt.rotate_x, -4.0);
        assert_eq!(tilt.rotate_y, 5.0);
        assert_eq!(
            tilt.css(),
            "perspective(1000px) rotateX(-4deg) rotateY(5deg) translateY(-8px)"
        );
    }

    #[test]
    fn test_tilt_at_center_is_flat() {
        let card = Rect {
            left: 0.0,
            top: 0.0,
            width: 200.0,
            height: 100.0,
        };
        let tilt = Tilt::toward(Point::new(100.0, 50.0), card, 30.0);
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 0.15), "0s");
        assert_eq!(stagger_delay(2, 0.15), "0.3s");
        assert_eq!(stagger_delay(3, 0.25), "0.75s");
    }
}
