//! Frame container for the committed, ordered pill collection.

use super::shape::{Pill, ShapeId};
use crate::util::Point;

/// Container for all committed pills.
///
/// Pills are kept in draw order (first = bottom layer, last = top layer). The
/// collection is only ever replaced wholesale after a split so readers never
/// observe a partially applied split.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    shapes: Vec<Pill>,
}

impl Frame {
    /// Creates a new empty frame with no pills.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Builds a frame from pills already in draw order.
    pub fn from_shapes(shapes: Vec<Pill>) -> Self {
        Self { shapes }
    }

    /// Pills in draw order.
    pub fn shapes(&self) -> &[Pill] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Pill> {
        self.shapes.iter().find(|pill| pill.id == id)
    }

    /// Adds a pill on top of every existing pill.
    pub fn add_shape(&mut self, pill: Pill) {
        debug_assert!(self.get(pill.id).is_none(), "duplicate pill id {}", pill.id);
        self.shapes.push(pill);
    }

    /// Moves a single pill's origin. Returns `false` if the id is unknown.
    pub fn move_shape(&mut self, id: ShapeId, origin: Point) -> bool {
        match self.shapes.iter_mut().find(|pill| pill.id == id) {
            Some(pill) => {
                pill.move_to(origin);
                true
            }
            None => false,
        }
    }

    /// Atomically swaps in a new collection (used to commit split results).
    pub fn replace_all(&mut self, shapes: Vec<Pill>) {
        self.shapes = shapes;
    }

    /// Returns the id of the topmost pill containing `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        hit_test(&self.shapes, point)
    }
}

/// Finds the topmost pill whose bounds contain `point` (edges inclusive).
///
/// Scans from the top of the draw order down and stops at the first match, so
/// the most recently drawn of several overlapping pills wins.
pub fn hit_test(shapes: &[Pill], point: Point) -> Option<ShapeId> {
    shapes
        .iter()
        .rev()
        .find(|pill| pill.contains(point))
        .map(|pill| pill.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};
    use crate::util::Rect;

    fn pill(id: u64, x: f64, y: f64, w: f64, h: f64) -> Pill {
        Pill::new(ShapeId(id), Rect::new(x, y, w, h), WHITE, 20.0)
    }

    #[test]
    fn hit_test_prefers_the_topmost_pill() {
        let mut frame = Frame::new();
        frame.add_shape(pill(1, 0.0, 0.0, 100.0, 100.0));
        frame.add_shape(pill(2, 50.0, 50.0, 100.0, 100.0));

        assert_eq!(frame.hit_test(Point::new(75.0, 75.0)), Some(ShapeId(2)));
        assert_eq!(frame.hit_test(Point::new(10.0, 10.0)), Some(ShapeId(1)));
        assert_eq!(frame.hit_test(Point::new(200.0, 10.0)), None);
    }

    #[test]
    fn hit_test_counts_edges_as_inside() {
        let frame = Frame::from_shapes(vec![pill(7, 10.0, 10.0, 40.0, 40.0)]);
        assert_eq!(frame.hit_test(Point::new(50.0, 50.0)), Some(ShapeId(7)));
        assert_eq!(frame.hit_test(Point::new(10.0, 50.0)), Some(ShapeId(7)));
        assert_eq!(frame.hit_test(Point::new(50.01, 50.0)), None);
    }

    #[test]
    fn move_shape_touches_only_the_target() {
        let mut frame = Frame::new();
        frame.add_shape(pill(1, 0.0, 0.0, 40.0, 40.0));
        frame.add_shape(pill(2, 100.0, 0.0, 40.0, 40.0));

        assert!(frame.move_shape(ShapeId(2), Point::new(300.0, 200.0)));
        assert_eq!(frame.get(ShapeId(2)).unwrap().origin(), Point::new(300.0, 200.0));
        assert_eq!(frame.get(ShapeId(1)).unwrap().origin(), Point::new(0.0, 0.0));
        assert!(!frame.move_shape(ShapeId(99), Point::new(0.0, 0.0)));
    }

    #[test]
    fn replace_all_swaps_the_whole_collection() {
        let mut frame = Frame::from_shapes(vec![pill(1, 0.0, 0.0, 40.0, 40.0)]);
        let mut replacement = pill(5, 1.0, 1.0, 40.0, 40.0);
        replacement.color = BLACK;
        frame.replace_all(vec![replacement.clone()]);
        assert_eq!(frame.shapes(), &[replacement]);
    }
}
