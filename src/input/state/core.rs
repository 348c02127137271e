//! Gesture state machine and input state management.

use crate::draw::{Color, Frame, IdAllocator, Pill, ShapeId, SplitSettings, split_at};
use crate::input::palette::ColorPicker;
use crate::util::{Point, Rect};
use std::time::{Duration, Instant};

/// Default minimum width/height of a drawn pill.
pub const DEFAULT_MIN_SHAPE_SIZE: f64 = 40.0;
/// Default nominal corner radius of a drawn pill.
pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;
/// Default travel (surface units) that turns a press on a pill into a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 5.0;
/// Default longest press that still counts as a click.
pub const DEFAULT_CLICK_TIME: Duration = Duration::from_millis(200);
/// Default farthest release (from the press position) that still counts as a click.
pub const DEFAULT_CLICK_DISTANCE: f64 = 10.0;
/// Default draft opacity while drawing.
pub const DEFAULT_DRAFT_OPACITY: f64 = 0.7;

/// Current gesture state machine.
///
/// Tracks whether the user is idle, drawing a new pill, or dragging one.
/// A press on a pill does not start a drag straight away: it parks in
/// `PendingDrag` until the pointer travels past the drag threshold, and a
/// release while still pending is treated as a click that splits.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing or dragging
    Idle,
    /// Pressed on a pill; not yet decided between click and drag
    PendingDrag {
        /// Pill under the press
        id: ShapeId,
        /// Pointer position minus pill origin at press time
        offset: Point,
    },
    /// Drawing a new pill from an anchor (mouse button held down on empty space)
    Drawing {
        /// Where the press happened
        anchor: Point,
        /// Latest box between the anchor and the pointer that met the minimum
        /// size; zero-sized until then
        bounds: Rect,
        /// Fill picked when the gesture started
        color: Color,
    },
    /// Moving a pill with the pointer
    Dragging {
        /// Pill being moved
        id: ShapeId,
        /// Pointer position minus pill origin at press time
        offset: Point,
    },
}

impl DrawingState {
    /// Gesture mode name as shown to frontends (`PendingDrag` reads as idle).
    pub fn mode_name(&self) -> &'static str {
        match self {
            DrawingState::Idle | DrawingState::PendingDrag { .. } => "idle",
            DrawingState::Drawing { .. } => "drawing",
            DrawingState::Dragging { .. } => "dragging",
        }
    }
}

/// Where and when the primary button went down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressRecord {
    pub position: Point,
    pub time: Instant,
}

/// Thresholds that shape gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    /// Minimum width and height of a committed pill
    pub min_shape_size: f64,
    /// Nominal corner radius given to new pills
    pub corner_radius: f64,
    /// Travel from the press position that promotes a pending press to a drag
    pub drag_threshold: f64,
    /// A release sooner than this after the press may count as a click
    pub click_time: Duration,
    /// A release closer than this to the press position may count as a click
    pub click_distance: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            min_shape_size: DEFAULT_MIN_SHAPE_SIZE,
            corner_radius: DEFAULT_CORNER_RADIUS,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            click_time: DEFAULT_CLICK_TIME,
            click_distance: DEFAULT_CLICK_DISTANCE,
        }
    }
}

/// Everything [`InputState`] needs besides the color picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSettings {
    pub gesture: GestureSettings,
    pub split: SplitSettings,
    /// Whether the render model includes crosshair guides
    pub show_crosshair: bool,
    /// Opacity of the draft pill while drawing
    pub draft_opacity: f64,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            gesture: GestureSettings::default(),
            split: SplitSettings::default(),
            show_crosshair: true,
            draft_opacity: DEFAULT_DRAFT_OPACITY,
        }
    }
}

/// Main input state containing the pill collection and gesture state.
///
/// This struct owns the committed [`Frame`] and processes pointer events to
/// draw, drag and split pills. Between events the frame is always fully
/// updated; split results are swapped in as a whole.
pub struct InputState {
    /// Committed pills in draw order
    pub(crate) frame: Frame,
    /// Current gesture state machine
    pub state: DrawingState,
    /// Primary-button press that started the current gesture
    pub(crate) press: Option<PressRecord>,
    /// Latest pointer position (drives the crosshair guides)
    pub pointer: Option<Point>,
    /// Surface bounds in client coordinates; `None` until the frontend reports them
    pub(crate) surface: Option<Rect>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    pub settings: InputSettings,
    pub(crate) ids: IdAllocator,
    pub(crate) colors: ColorPicker,
}

impl InputState {
    /// Creates an empty surface with the given settings and color picker.
    pub fn new(settings: InputSettings, colors: ColorPicker) -> Self {
        Self {
            frame: Frame::new(),
            state: DrawingState::Idle,
            press: None,
            pointer: None,
            surface: None,
            needs_redraw: true,
            settings,
            ids: IdAllocator::new(),
            colors,
        }
    }

    /// Creates a state that starts out with `pills` already committed.
    ///
    /// New ids continue after the largest id in `pills`.
    pub fn with_pills(settings: InputSettings, colors: ColorPicker, pills: Vec<Pill>) -> Self {
        let mut state = Self::new(settings, colors);
        state.ids = IdAllocator::starting_after(&pills);
        state.frame = Frame::from_shapes(pills);
        state
    }

    /// Committed pills, bottom to top.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Updates the surface bounds (in client coordinates).
    ///
    /// Passing `None` marks the surface as unavailable; pointer events are then
    /// discarded until bounds are reported again.
    pub fn update_surface(&mut self, bounds: Option<Rect>) {
        self.surface = bounds;
    }

    /// Translates a client position into surface-local coordinates.
    pub fn to_surface(&self, x: f64, y: f64) -> Option<Point> {
        self.surface.map(|bounds| Point::new(x - bounds.x, y - bounds.y))
    }

    /// Returns the pill targeted by a pending or active drag.
    pub fn drag_target(&self) -> Option<ShapeId> {
        match self.state {
            DrawingState::PendingDrag { id, .. } | DrawingState::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Splits every pill at `point` and commits the result in one step.
    pub fn split_at_point(&mut self, point: Point) {
        let before = self.frame.len();
        let result = split_at(
            self.frame.shapes(),
            point,
            &self.settings.split,
            &mut self.ids,
        );
        self.frame.replace_all(result);
        self.needs_redraw = true;
        log::info!(
            "Split at ({:.1}, {:.1}): {} pill(s) -> {}",
            point.x,
            point.y,
            before,
            self.frame.len()
        );
    }

    /// Commits a drawn box as a new top-most pill with all corners rounded.
    pub(crate) fn commit_pill(&mut self, bounds: Rect, color: Color) -> ShapeId {
        let id = self.ids.next_id();
        self.frame.add_shape(Pill::new(
            id,
            bounds,
            color,
            self.settings.gesture.corner_radius,
        ));
        self.needs_redraw = true;
        log::info!(
            "Committed {} at ({:.1}, {:.1}) size {:.1}x{:.1}",
            id,
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height
        );
        id
    }

    /// Drops any in-progress gesture without committing anything.
    pub fn cancel_gesture(&mut self) {
        if !matches!(self.state, DrawingState::Idle) {
            log::debug!("Cancelled {} gesture", self.state.mode_name());
            self.needs_redraw = true;
        }
        self.state = DrawingState::Idle;
        self.press = None;
    }
}
