use crate::input::events::{MouseButton, PointerEvent, PointerEventKind};
use crate::util::{Point, Rect};
use log::debug;
use std::time::Instant;

use super::core::PressRecord;
use super::{DrawingState, InputState};

impl InputState {
    /// Processes a raw pointer event in client coordinates.
    ///
    /// The position is translated into surface-local coordinates using the
    /// latest surface bounds. Without surface bounds the event is discarded
    /// and no state changes.
    ///
    /// # Returns
    /// `true` if the event was handled, `false` if it was discarded
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        let Some(local) = self.to_surface(event.x, event.y) else {
            debug!("No surface bounds; discarding {:?}", event.kind);
            return false;
        };

        match event.kind {
            PointerEventKind::Press(button) => {
                self.on_mouse_press(button, local.x, local.y, event.time)
            }
            PointerEventKind::Motion => self.on_mouse_motion(local.x, local.y),
            PointerEventKind::Release(button) => {
                self.on_mouse_release(button, local.x, local.y, event.time)
            }
        }
        true
    }

    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Surface X coordinate
    /// * `y` - Surface Y coordinate
    /// * `time` - When the press happened
    ///
    /// # Behavior
    /// - Left press on a pill: remembers it as a drag candidate (no drag yet)
    /// - Left press on empty space: starts drawing a zero-sized draft
    /// - Right press: cancels the current gesture
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64, time: Instant) {
        let point = Point::new(x, y);
        self.pointer = Some(point);

        match button {
            MouseButton::Left => {
                self.press = Some(PressRecord {
                    position: point,
                    time,
                });

                let target = self
                    .frame
                    .hit_test(point)
                    .and_then(|id| self.frame.get(id))
                    .map(|pill| (pill.id, point.offset_from(pill.origin())));

                self.state = match target {
                    Some((id, offset)) => {
                        debug!("Press on {id}; waiting to tell click from drag");
                        DrawingState::PendingDrag { id, offset }
                    }
                    None => {
                        let color = self.colors.pick();
                        debug!("Press on empty space; drawing in {color}");
                        DrawingState::Drawing {
                            anchor: point,
                            bounds: Rect::new(x, y, 0.0, 0.0),
                            color,
                        }
                    }
                };
                self.needs_redraw = true;
            }
            MouseButton::Right => self.cancel_gesture(),
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion events.
    ///
    /// # Arguments
    /// * `x` - Current surface X coordinate
    /// * `y` - Current surface Y coordinate
    ///
    /// # Behavior
    /// - Drawing: stretches the draft between the anchor and the pointer; a box
    ///   below the minimum size leaves the last eligible draft in place
    /// - Pending drag: promotes to a drag once the pointer leaves the threshold
    /// - Dragging: moves the dragged pill so it keeps its grab offset
    /// - Always: updates the crosshair position
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.pointer = Some(point);
        self.needs_redraw = true;

        if let DrawingState::PendingDrag { id, offset } = self.state {
            let travelled = self
                .press
                .map(|press| press.position.distance_to(point))
                .unwrap_or(0.0);
            if travelled > self.settings.gesture.drag_threshold {
                debug!("Dragging {id} after {travelled:.1} units of travel");
                self.state = DrawingState::Dragging { id, offset };
            }
        }

        match self.state {
            DrawingState::Drawing {
                anchor,
                ref mut bounds,
                ..
            } => {
                let stretched = Rect::from_corners(anchor, point);
                if stretched.at_least(self.settings.gesture.min_shape_size) {
                    *bounds = stretched;
                }
            }
            DrawingState::Dragging { id, offset } => {
                if !self.frame.move_shape(id, point.offset_from(offset)) {
                    debug!("Dragged {id} no longer exists; ending drag");
                    self.state = DrawingState::Idle;
                }
            }
            DrawingState::Idle | DrawingState::PendingDrag { .. } => {}
        }
    }

    /// Processes mouse button release events.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was released
    /// * `x` - Surface X coordinate at release
    /// * `y` - Surface Y coordinate at release
    /// * `time` - When the release happened
    ///
    /// # Behavior
    /// When the left button is released:
    /// - Drawing: commits the draft if both sides reach the minimum size
    /// - Pending drag released quickly and close by: splits at the press position
    /// - Dragging: the pill simply stays where it was dropped
    ///
    /// The gesture always ends in `Idle`.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64, time: Instant) {
        if button != MouseButton::Left {
            return;
        }

        let point = Point::new(x, y);
        self.pointer = Some(point);
        let press = self.press.take();
        let state = std::mem::replace(&mut self.state, DrawingState::Idle);
        self.needs_redraw = true;

        match state {
            DrawingState::Drawing { bounds, color, .. } => {
                if bounds.at_least(self.settings.gesture.min_shape_size) {
                    self.commit_pill(bounds, color);
                } else {
                    debug!(
                        "Discarding {:.1}x{:.1} draft below minimum size",
                        bounds.width, bounds.height
                    );
                }
            }
            DrawingState::PendingDrag { id, .. } => {
                let Some(press) = press else {
                    return;
                };
                let elapsed = time.saturating_duration_since(press.time);
                let distance = press.position.distance_to(point);
                let gesture = &self.settings.gesture;

                if elapsed < gesture.click_time && distance < gesture.click_distance {
                    debug!("Click on {id}; splitting");
                    self.split_at_point(press.position);
                } else {
                    debug!(
                        "Press on {id} held {}ms over {distance:.1} units; not a click",
                        elapsed.as_millis()
                    );
                }
            }
            DrawingState::Dragging { id, .. } => {
                debug!("Dropped {id} at ({x:.1}, {y:.1})");
            }
            DrawingState::Idle => {}
        }
    }
}
