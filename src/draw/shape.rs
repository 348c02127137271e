//! Pill definitions: rounded rectangles with an optional single rounded corner.

use super::color::Color;
use crate::util::{Point, Rect};
use serde::Serialize;
use std::fmt;

/// Opaque identifier assigned to a pill when it is created.
///
/// Ids are never reused within a session; a pill keeps its id while it is
/// dragged or pushed aside by a split, and split children receive fresh ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pill-{}", self.0)
    }
}

/// Which single corner of a split child keeps its rounding.
///
/// A pill without a mask renders all four corners rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerMask {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A rounded rectangle on the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Pill {
    /// Stable identifier
    pub id: ShapeId,
    /// Bounds in surface coordinates (top-left origin plus size)
    pub bounds: Rect,
    /// Fill color, carried unchanged into split children
    pub color: Color,
    /// Nominal corner radius requested at creation
    pub corner_radius: f64,
    /// Rounded corner hint for split children; `None` rounds every corner
    pub corner_mask: Option<CornerMask>,
}

impl Pill {
    /// Creates a freshly drawn pill with all corners rounded.
    pub fn new(id: ShapeId, bounds: Rect, color: Color, corner_radius: f64) -> Self {
        Self {
            id,
            bounds,
            color,
            corner_radius,
            corner_mask: None,
        }
    }

    /// Builds a child covering `bounds` that inherits color and radius.
    pub(crate) fn child(&self, id: ShapeId, bounds: Rect, corner_mask: Option<CornerMask>) -> Self {
        Self {
            id,
            bounds,
            color: self.color,
            corner_radius: self.corner_radius,
            corner_mask,
        }
    }

    pub fn origin(&self) -> Point {
        self.bounds.origin()
    }

    /// Moves the pill so its top-left corner sits at `origin`; size is unchanged.
    pub fn move_to(&mut self, origin: Point) {
        self.bounds.x = origin.x;
        self.bounds.y = origin.y;
    }

    /// Inclusive containment test against the pill's bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Radius actually rendered: never more than half the smaller dimension.
    pub fn effective_corner_radius(&self) -> f64 {
        clamp_radius(self.corner_radius, &self.bounds)
    }

    /// Per-corner radii in `[top_left, top_right, bottom_right, bottom_left]` order.
    ///
    /// A masked pill rounds only the masked corner; the other three are square.
    pub fn corner_radii(&self) -> [f64; 4] {
        let r = self.effective_corner_radius();
        match self.corner_mask {
            None => [r; 4],
            Some(CornerMask::TopLeft) => [r, 0.0, 0.0, 0.0],
            Some(CornerMask::TopRight) => [0.0, r, 0.0, 0.0],
            Some(CornerMask::BottomRight) => [0.0, 0.0, r, 0.0],
            Some(CornerMask::BottomLeft) => [0.0, 0.0, 0.0, r],
        }
    }
}

/// Caps a nominal corner radius at half the smaller side of `bounds`.
pub fn clamp_radius(radius: f64, bounds: &Rect) -> f64 {
    radius.min(bounds.width / 2.0).min(bounds.height / 2.0)
}
