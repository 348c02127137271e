//! Render model: a presentation-agnostic snapshot of what should be on screen.
//!
//! Any frontend (immediate or retained mode) can consume a [`RenderModel`]
//! without knowing anything about gesture handling. It is rebuilt on demand
//! from the committed frame plus the transient gesture state.

use super::color::Color;
use super::shape::{Pill, ShapeId, clamp_radius};
use crate::util::{Point, Rect};
use serde::Serialize;

/// Pointer cursor to show while hovering a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    Grab,
    Grabbing,
}

/// One styled box to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPill {
    pub id: Option<ShapeId>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `#RRGGBB` fill
    pub color: String,
    /// `[top_left, top_right, bottom_right, bottom_left]`
    pub corner_radii: [f64; 4],
    pub opacity: f64,
    pub cursor: Option<Cursor>,
}

impl RenderPill {
    /// Projects a committed pill.
    pub fn committed(pill: &Pill, cursor: Cursor) -> Self {
        Self::project(pill, Some(pill.id), 1.0, Some(cursor))
    }

    /// Projects the in-progress draft; drafts have no id and round every corner.
    pub fn draft(bounds: Rect, color: Color, corner_radius: f64, opacity: f64) -> Self {
        Self {
            id: None,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            color: color.to_hex(),
            corner_radii: [clamp_radius(corner_radius, &bounds); 4],
            opacity,
            cursor: None,
        }
    }

    fn project(pill: &Pill, id: Option<ShapeId>, opacity: f64, cursor: Option<Cursor>) -> Self {
        Self {
            id,
            x: pill.bounds.x,
            y: pill.bounds.y,
            width: pill.bounds.width,
            height: pill.bounds.height,
            color: pill.color.to_hex(),
            corner_radii: pill.corner_radii(),
            opacity,
            cursor,
        }
    }
}

/// Crosshair guide lines through the latest pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Crosshair {
    /// X of the vertical guide line
    pub x: f64,
    /// Y of the horizontal guide line
    pub y: f64,
}

impl From<Point> for Crosshair {
    fn from(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// Everything a frontend needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    /// Committed pills, bottom to top
    pub pills: Vec<RenderPill>,
    /// Draft pill, present only once it is large enough to commit
    pub draft: Option<RenderPill>,
    pub crosshair: Option<Crosshair>,
    /// Current gesture mode name (`idle`, `drawing` or `dragging`)
    pub mode: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;
    use crate::draw::shape::CornerMask;

    #[test]
    fn committed_projection_carries_geometry_and_style() {
        let mut pill = Pill::new(ShapeId(9), Rect::new(5.0, 6.0, 50.0, 30.0), WHITE, 20.0);
        pill.corner_mask = Some(CornerMask::TopLeft);

        let rendered = RenderPill::committed(&pill, Cursor::Grabbing);
        assert_eq!(rendered.id, Some(ShapeId(9)));
        assert_eq!((rendered.x, rendered.y), (5.0, 6.0));
        assert_eq!(rendered.color, "#FFFFFF");
        assert_eq!(rendered.corner_radii, [15.0, 0.0, 0.0, 0.0]);
        assert_eq!(rendered.opacity, 1.0);
        assert_eq!(rendered.cursor, Some(Cursor::Grabbing));
    }

    #[test]
    fn draft_projection_rounds_all_corners_and_is_translucent() {
        let rendered = RenderPill::draft(Rect::new(0.0, 0.0, 60.0, 44.0), WHITE, 30.0, 0.7);
        assert_eq!(rendered.id, None);
        assert_eq!(rendered.corner_radii, [22.0; 4]);
        assert_eq!(rendered.opacity, 0.7);
        assert_eq!(rendered.cursor, None);
    }

    #[test]
    fn render_model_serializes_to_json() {
        let pill = Pill::new(ShapeId(1), Rect::new(0.0, 0.0, 40.0, 40.0), WHITE, 20.0);
        let model = RenderModel {
            pills: vec![RenderPill::committed(&pill, Cursor::Grab)],
            draft: None,
            crosshair: Some(Crosshair { x: 3.0, y: 4.0 }),
            mode: "idle",
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["pills"][0]["id"], 1);
        assert_eq!(json["pills"][0]["cursor"], "grab");
        assert_eq!(json["crosshair"]["x"], 3.0);
        assert!(json["draft"].is_null());
    }
}
