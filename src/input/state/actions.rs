use crate::draw::DrawingSurface;

use super::{InputState, PenState};

impl InputState {
    /// Flips the drawing-enabled flag and returns the new value.
    ///
    /// Disabling leaves the pen state as it is. Re-enabling drops any run
    /// that was in progress, so the next pointing tick starts a new stroke
    /// instead of connecting to a stale fingertip position.
    pub fn toggle_drawing(&mut self) -> bool {
        self.drawing_enabled = !self.drawing_enabled;
        if self.drawing_enabled {
            self.pen = PenState::Idle;
        }
        self.status.update(if self.drawing_enabled {
            "Drawing enabled"
        } else {
            "Drawing disabled"
        });
        self.drawing_enabled
    }

    /// Wipes every pixel of the surface.
    pub fn clear_canvas(&mut self, surface: &mut dyn DrawingSurface) {
        surface.clear();
        self.status.update("Canvas cleared");
    }
}
