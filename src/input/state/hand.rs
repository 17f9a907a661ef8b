use crate::draw::{DrawingSurface, Shape};
use crate::gesture::{self, HandLandmarks};

use super::{InputState, PenState};

const STARTED_MESSAGE: &str = "Drawing started - move your finger to draw!";
const STOPPED_MESSAGE: &str = "Drawing stopped - point with index finger to continue";
const NO_HAND_MESSAGE: &str = "No hand detected - show your hand to continue";

impl InputState {
    /// Processes one hand-tracker result.
    ///
    /// # Arguments
    /// * `hand` - The detected hand, or `None` when no hand is visible
    /// * `surface` - Surface to draw on; its size scales the fingertip position
    ///
    /// # Behavior
    /// - Drawing disabled: ignored entirely
    /// - No hand, or hand not pointing: ends the run (one status update)
    /// - Pointing while idle: starts a run at the fingertip, no segment
    /// - Pointing while drawing: one segment from the previous fingertip
    ///
    /// Every pointing tick also marks the fingertip with a filled circle.
    pub fn on_hand_result(
        &mut self,
        hand: Option<&HandLandmarks>,
        surface: &mut dyn DrawingSurface,
    ) {
        if !self.drawing_enabled {
            return;
        }

        let Some(hand) = hand else {
            if self.end_pen_run() {
                self.status.update(NO_HAND_MESSAGE);
            }
            return;
        };

        if !gesture::is_pointing(hand) {
            if self.end_pen_run() {
                self.status.update(STOPPED_MESSAGE);
            }
            return;
        }

        let (width, height) = surface.size();
        let (x, y) = hand.index_tip_position(width, height);

        match self.pen {
            PenState::Idle => {
                log::debug!("Pen run started at ({:.1}, {:.1})", x, y);
                self.status.update(STARTED_MESSAGE);
            }
            PenState::Drawing { last_x, last_y } => {
                surface.draw(Shape::Segment {
                    x1: last_x,
                    y1: last_y,
                    x2: x,
                    y2: y,
                    color: self.style.hand_color,
                    thick: self.style.thickness,
                });
            }
        }
        self.pen = PenState::Drawing {
            last_x: x,
            last_y: y,
        };

        surface.draw(Shape::Marker {
            cx: x,
            cy: y,
            radius: self.style.marker_radius,
            color: self.style.marker_color,
        });
    }
}
