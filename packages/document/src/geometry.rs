//! Canvas geometry.

use serde::{Deserialize, Serialize};

/// Width of the virtual canvas (A4 at 96 DPI).
pub const PAGE_WIDTH: f64 = 794.0;

/// Height of the virtual canvas (A4 at 96 DPI).
pub const PAGE_HEIGHT: f64 = 1123.0;

/// A position on the canvas, in virtual units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    pub fn delta_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Axis-aligned rectangle. Zero or negative extents are legal and are
/// treated like any other rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// True when the open horizontal spans of both rectangles intersect.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.x < other.right() && self.right() > other.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 10.0);
        let b = Rect::new(100.0, 0.0, 50.0, 10.0);
        assert!(!a.overlaps_horizontally(&b));
        assert!(!b.overlaps_horizontally(&a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.overlaps_horizontally(&b));
        assert_eq!(a.bottom(), 100.0);
        assert_eq!(b.right(), 150.0);
    }

    #[test]
    fn test_zero_width_inside_span_overlaps() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let line = Rect::new(50.0, 0.0, 0.0, 100.0);
        assert!(line.overlaps_horizontally(&a));
    }
}
