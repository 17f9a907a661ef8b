use crate::draw::{DrawingSurface, Shape};
use crate::input::events::MouseButton;

use super::InputState;

impl InputState {
    /// Processes a mouse button press.
    ///
    /// A left press starts a drag at `(x, y)` unless drawing is disabled.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left || !self.drawing_enabled {
            return;
        }
        self.mouse_drag = Some((x, y));
    }

    /// Processes pointer motion.
    ///
    /// While dragging, draws one segment from the previous pointer position
    /// and moves the drag to `(x, y)`.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64, surface: &mut dyn DrawingSurface) {
        if !self.drawing_enabled {
            return;
        }
        let Some((last_x, last_y)) = self.mouse_drag else {
            return;
        };

        surface.draw(Shape::Segment {
            x1: last_x,
            y1: last_y,
            x2: x,
            y2: y,
            color: self.style.mouse_color,
            thick: self.style.thickness,
        });
        self.mouse_drag = Some((x, y));
    }

    /// Processes a mouse button release. Ends any drag, even while disabled.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.mouse_drag = None;
        }
    }
}
