//! Generic pointer event types for frontend independence.

use std::time::Instant;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (draw, drag and split)
    Left,
    /// Right mouse button (cancel the current gesture)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Press(MouseButton),
    Motion,
    Release(MouseButton),
}

/// A pointer event in window/client coordinates.
///
/// Frontends forward raw events here; [`InputState::handle_pointer_event`]
/// translates them into surface-local coordinates using the current surface
/// bounds, so the surface may scroll or move between events.
///
/// [`InputState::handle_pointer_event`]: super::InputState::handle_pointer_event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Client X coordinate
    pub x: f64,
    /// Client Y coordinate
    pub y: f64,
    /// When the event was generated
    pub time: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f64, y: f64, time: Instant) -> Self {
        Self { kind, x, y, time }
    }
}
