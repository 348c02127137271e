use crate::draw::{Crosshair, Cursor, RenderModel, RenderPill};
use crate::util::Rect;

use super::{DrawingState, InputState};

impl InputState {
    /// Returns the draft bounds while drawing, once they are large enough to commit.
    ///
    /// A draft smaller than the minimum pill size on either side is not shown
    /// and would be discarded on release.
    pub fn provisional_bounds(&self) -> Option<Rect> {
        match &self.state {
            DrawingState::Drawing { bounds, .. }
                if bounds.at_least(self.settings.gesture.min_shape_size) =>
            {
                Some(*bounds)
            }
            _ => None,
        }
    }

    /// Returns the draft pill for live preview, if one is eligible.
    pub fn provisional_pill(&self) -> Option<RenderPill> {
        let DrawingState::Drawing { color, .. } = &self.state else {
            return None;
        };
        self.provisional_bounds().map(|bounds| {
            RenderPill::draft(
                bounds,
                *color,
                self.settings.gesture.corner_radius,
                self.settings.draft_opacity,
            )
        })
    }

    /// Projects committed pills plus gesture state into a render model.
    pub fn render_model(&self) -> RenderModel {
        let dragging = match self.state {
            DrawingState::Dragging { id, .. } => Some(id),
            _ => None,
        };

        let pills = self
            .frame
            .shapes()
            .iter()
            .map(|pill| {
                let cursor = if dragging == Some(pill.id) {
                    Cursor::Grabbing
                } else {
                    Cursor::Grab
                };
                RenderPill::committed(pill, cursor)
            })
            .collect();

        RenderModel {
            pills,
            draft: self.provisional_pill(),
            crosshair: self
                .pointer
                .filter(|_| self.settings.show_crosshair)
                .map(Crosshair::from),
            mode: self.state.mode_name(),
        }
    }

    /// Clears the redraw flag, returning whether a redraw was pending.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
