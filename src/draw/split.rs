//! Partitioning pills at a split point.
//!
//! A split point acts like a pair of crosshair cuts through the whole surface:
//! the vertical cut runs through `point.x`, the horizontal cut through
//! `point.y`. Every pill is evaluated independently against both cuts:
//!
//! - crossed by both cuts: up to four quadrant children
//! - crossed by the vertical cut only: left and right halves
//! - crossed by the horizontal cut only: top and bottom halves
//! - crossed by neither: carried through untouched
//!
//! Children smaller than [`SplitSettings::min_part_size`] on either axis are
//! never created. A pill that cannot yield any child is pushed clear of the
//! cut instead of being removed.

use super::shape::{CornerMask, Pill, ShapeId};
use crate::util::{Point, Rect};
use log::debug;

/// Default minimum width/height of a split child.
pub const DEFAULT_MIN_PART_SIZE: f64 = 20.0;
/// Default gap left between a dodging pill and the cut it avoided.
pub const DEFAULT_SPLIT_CLEARANCE: f64 = 5.0;

/// Tunables for [`split_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitSettings {
    /// Minimum width and height of any child produced by a split
    pub min_part_size: f64,
    /// Distance kept between the cut and a pill that was too small to split
    pub clearance: f64,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            min_part_size: DEFAULT_MIN_PART_SIZE,
            clearance: DEFAULT_SPLIT_CLEARANCE,
        }
    }
}

/// Hands out pill ids in increasing order.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continues numbering after the largest id already in use.
    pub fn starting_after<'a>(shapes: impl IntoIterator<Item = &'a Pill>) -> Self {
        let max = shapes.into_iter().map(|pill| pill.id.0).max().unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn next_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next);
        self.next += 1;
        id
    }
}

/// Side of a pill that ended up thinner than the minimum part size.
///
/// Declaration order is the resolution priority when several sides are short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deficiency {
    Left,
    Right,
    Top,
    Bottom,
}

/// Distances from the pill edges to the split point.
#[derive(Debug, Clone, Copy)]
struct Cut {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Cut {
    fn new(bounds: &Rect, point: Point) -> Self {
        let left = point.x - bounds.x;
        let top = point.y - bounds.y;
        Self {
            left,
            right: bounds.width - left,
            top,
            bottom: bounds.height - top,
        }
    }

    fn first_deficiency(&self, min: f64) -> Option<Deficiency> {
        if self.left < min {
            Some(Deficiency::Left)
        } else if self.right < min {
            Some(Deficiency::Right)
        } else if self.top < min {
            Some(Deficiency::Top)
        } else if self.bottom < min {
            Some(Deficiency::Bottom)
        } else {
            None
        }
    }
}

/// Splits every pill in `shapes` at `point`, returning the new collection.
///
/// Children take the place of their parent in the draw order. Untouched pills
/// keep their ids; new children draw fresh ids from `ids`.
pub fn split_at(
    shapes: &[Pill],
    point: Point,
    settings: &SplitSettings,
    ids: &mut IdAllocator,
) -> Vec<Pill> {
    let mut result = Vec::with_capacity(shapes.len());

    for pill in shapes {
        let crosses_vertical_cut = pill.bounds.spans_x(point.x);
        let crosses_horizontal_cut = pill.bounds.spans_y(point.y);

        match (crosses_vertical_cut, crosses_horizontal_cut) {
            (true, true) => split_quadrants(pill, point, settings, ids, &mut result),
            (true, false) => split_columns(pill, point, settings, ids, &mut result),
            (false, true) => split_rows(pill, point, settings, ids, &mut result),
            (false, false) => result.push(pill.clone()),
        }
    }

    result
}

fn split_quadrants(
    pill: &Pill,
    point: Point,
    settings: &SplitSettings,
    ids: &mut IdAllocator,
    out: &mut Vec<Pill>,
) {
    let b = pill.bounds;
    let cut = Cut::new(&b, point);
    let min = settings.min_part_size;

    let quadrants = [
        (CornerMask::TopLeft, Rect::new(b.x, b.y, cut.left, cut.top)),
        (CornerMask::TopRight, Rect::new(point.x, b.y, cut.right, cut.top)),
        (CornerMask::BottomLeft, Rect::new(b.x, point.y, cut.left, cut.bottom)),
        (CornerMask::BottomRight, Rect::new(point.x, point.y, cut.right, cut.bottom)),
    ];

    let before = out.len();
    for (corner, bounds) in quadrants {
        if !bounds.at_least(min) {
            continue;
        }
        // Only a pill that still has all four original corners hands one out.
        let mask = pill.corner_mask.or(Some(corner));
        out.push(pill.child(ids.next_id(), bounds, mask));
    }

    let produced = out.len() - before;
    if produced == 0 {
        out.push(dodge(pill, point, settings, cut.first_deficiency(min)));
    } else {
        debug!("Split {} into {} quadrant(s)", pill.id, produced);
    }
}

fn split_columns(
    pill: &Pill,
    point: Point,
    settings: &SplitSettings,
    ids: &mut IdAllocator,
    out: &mut Vec<Pill>,
) {
    let b = pill.bounds;
    let cut = Cut::new(&b, point);
    let min = settings.min_part_size;

    if cut.left >= min && cut.right >= min {
        let left = Rect::new(b.x, b.y, cut.left, b.height);
        let right = Rect::new(point.x, b.y, cut.right, b.height);
        out.push(pill.child(ids.next_id(), left, pill.corner_mask));
        out.push(pill.child(ids.next_id(), right, pill.corner_mask));
        debug!("Split {} into left/right halves", pill.id);
    } else {
        let side = if cut.left < min {
            Deficiency::Left
        } else {
            Deficiency::Right
        };
        out.push(dodge(pill, point, settings, Some(side)));
    }
}

fn split_rows(
    pill: &Pill,
    point: Point,
    settings: &SplitSettings,
    ids: &mut IdAllocator,
    out: &mut Vec<Pill>,
) {
    let b = pill.bounds;
    let cut = Cut::new(&b, point);
    let min = settings.min_part_size;

    if cut.top >= min && cut.bottom >= min {
        let top = Rect::new(b.x, b.y, b.width, cut.top);
        let bottom = Rect::new(b.x, point.y, b.width, cut.bottom);
        out.push(pill.child(ids.next_id(), top, pill.corner_mask));
        out.push(pill.child(ids.next_id(), bottom, pill.corner_mask));
        debug!("Split {} into top/bottom halves", pill.id);
    } else {
        let side = if cut.top < min {
            Deficiency::Top
        } else {
            Deficiency::Bottom
        };
        out.push(dodge(pill, point, settings, Some(side)));
    }
}

/// Pushes an unsplittable pill clear of the cut on its deficient side.
fn dodge(pill: &Pill, point: Point, settings: &SplitSettings, side: Option<Deficiency>) -> Pill {
    let mut moved = pill.clone();
    let b = pill.bounds;
    let gap = settings.clearance;

    match side {
        Some(Deficiency::Left) => moved.bounds.x = point.x + gap,
        Some(Deficiency::Right) => moved.bounds.x = point.x - b.width - gap,
        Some(Deficiency::Top) => moved.bounds.y = point.y + gap,
        Some(Deficiency::Bottom) => moved.bounds.y = point.y - b.height - gap,
        None => {}
    }

    debug!(
        "{} too small to split at ({:.1}, {:.1}); moved to ({:.1}, {:.1})",
        pill.id, point.x, point.y, moved.bounds.x, moved.bounds.y
    );
    moved
}
