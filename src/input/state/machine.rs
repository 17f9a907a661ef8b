//! Draw-state machine and input state.

use crate::config::DrawingConfig;
use crate::draw::Color;
use crate::status::StatusLine;

pub(super) const READY_MESSAGE: &str = "Ready to start. Send 'start' to open the camera.";

/// Hand-driven pen state.
///
/// The last fingertip position only exists while a run is in progress, so a
/// new run can never connect to a position left over from an earlier one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenState {
    /// No stroke in progress (initial and resting state)
    Idle,
    /// A pointing run is in progress
    Drawing {
        /// Fingertip X at the previous tick, in surface pixels
        last_x: f64,
        /// Fingertip Y at the previous tick, in surface pixels
        last_y: f64,
    },
}

/// Fixed styling for everything the controller draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Segment color for hand-driven strokes
    pub hand_color: Color,
    /// Segment color for mouse-driven strokes
    pub mouse_color: Color,
    /// Fill color of the fingertip marker
    pub marker_color: Color,
    /// Segment width in pixels
    pub thickness: f64,
    /// Fingertip marker radius in pixels
    pub marker_radius: f64,
}

impl StrokeStyle {
    pub fn from_config(config: &DrawingConfig) -> Self {
        Self {
            hand_color: config.hand_color.to_color(),
            mouse_color: config.mouse_color.to_color(),
            marker_color: config.marker_color.to_color(),
            thickness: config.stroke_width,
            marker_radius: config.marker_radius,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::from_config(&DrawingConfig::default())
    }
}

/// All drawing-session state touched by the event loop.
///
/// Only the dispatch thread owns this, so nothing here is synchronized.
pub struct InputState {
    /// Hand-driven pen state machine
    pub pen: PenState,
    /// Last pointer position while the mouse button is held
    pub mouse_drag: Option<(f64, f64)>,
    /// Whether drawing input is accepted (toggled by the user)
    pub drawing_enabled: bool,
    /// Stroke and marker styling
    pub style: StrokeStyle,
    /// Status line reporting the latest lifecycle or drawing event
    pub status: StatusLine,
}

impl InputState {
    pub fn new(style: StrokeStyle, drawing_enabled: bool) -> Self {
        Self {
            pen: PenState::Idle,
            mouse_drag: None,
            drawing_enabled,
            style,
            status: StatusLine::new(READY_MESSAGE),
        }
    }

    /// Whether a hand-driven run is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.pen, PenState::Drawing { .. })
    }

    /// Label for the drawing toggle control.
    pub fn toggle_label(&self) -> String {
        format!(
            "Toggle Drawing: {}",
            if self.drawing_enabled { "ON" } else { "OFF" }
        )
    }

    /// Ends the current pen run. Returns true if a run was in progress.
    pub(crate) fn end_pen_run(&mut self) -> bool {
        let was_drawing = self.is_drawing();
        self.pen = PenState::Idle;
        was_drawing
    }
}
