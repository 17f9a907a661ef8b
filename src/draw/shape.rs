//! Drawing commands issued to the overlay.

use super::color::Color;

/// A single drawing command.
///
/// The controller never draws polylines: every freehand stroke is a chain of
/// independent segments, one per input tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Straight stroke between two pixel positions, drawn with a round cap
    Segment {
        /// Starting X coordinate
        x1: f64,
        /// Starting Y coordinate
        y1: f64,
        /// Ending X coordinate
        x2: f64,
        /// Ending Y coordinate
        y2: f64,
        /// Stroke color
        color: Color,
        /// Line thickness in pixels
        thick: f64,
    },
    /// Filled circle marking the tracked fingertip
    Marker {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Circle radius in pixels
        radius: f64,
        /// Fill color
        color: Color,
    },
}

impl Shape {
    pub fn is_segment(&self) -> bool {
        matches!(self, Shape::Segment { .. })
    }

    /// Returns the segment end points, if this is a segment.
    pub fn segment_points(&self) -> Option<((f64, f64), (f64, f64))> {
        match *self {
            Shape::Segment { x1, y1, x2, y2, .. } => Some(((x1, y1), (x2, y2))),
            Shape::Marker { .. } => None,
        }
    }
}
