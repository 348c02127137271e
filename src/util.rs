//! Geometry value types shared by the drawing engine and the input layer.
//!
//! All coordinates are surface-local `f64` values: the origin is the top-left
//! corner of the drawing surface and values may be fractional.

use serde::{Deserialize, Serialize};

/// A position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle in surface coordinates.
///
/// Unlike a damage rectangle, zero-sized rectangles are allowed here; a draft
/// starts out as a zero-sized box anchored at the press position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the axis-aligned box spanned by two opposite corners.
    ///
    /// The corners may be given in any order, so dragging up-left from the
    /// anchor produces the same rectangle as dragging down-right to it.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns true when `x` lies within the horizontal extent (edges included).
    pub fn spans_x(&self, x: f64) -> bool {
        x >= self.x && x <= self.right()
    }

    /// Returns true when `y` lies within the vertical extent (edges included).
    pub fn spans_y(&self, y: f64) -> bool {
        y >= self.y && y <= self.bottom()
    }

    /// Inclusive containment on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        self.spans_x(point.x) && self.spans_y(point.y)
    }

    /// Returns true if both dimensions reach `min`.
    pub fn at_least(&self, min: f64) -> bool {
        self.width >= min && self.height >= min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_any_drag_direction() {
        let down_right = Rect::from_corners(Point::new(10.0, 20.0), Point::new(60.0, 90.0));
        let up_left = Rect::from_corners(Point::new(60.0, 90.0), Point::new(10.0, 20.0));
        assert_eq!(down_right, up_left);
        assert_eq!(down_right, Rect::new(10.0, 20.0, 50.0, 70.0));
    }

    #[test]
    fn containment_includes_every_edge() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(100.0, 50.0)));
        assert!(rect.contains(Point::new(100.0, 0.0)));
        assert!(!rect.contains(Point::new(100.5, 25.0)));
        assert!(!rect.contains(Point::new(50.0, -0.1)));
    }

    #[test]
    fn distance_is_euclidean() {
        let d = Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn at_least_checks_both_dimensions() {
        assert!(Rect::new(0.0, 0.0, 40.0, 40.0).at_least(40.0));
        assert!(!Rect::new(0.0, 0.0, 40.0, 39.9).at_least(40.0));
    }
}
