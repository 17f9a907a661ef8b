//! Frame container for managing collections of shapes.

use super::shape::Shape;

/// Every shape drawn since the canvas was last cleared.
///
/// Shapes are kept in draw order (first = bottom layer, last = top layer) so
/// the overlay can be re-rendered or inspected after the fact.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Vector of all shapes in draw order
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Removes all shapes from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Adds a new shape to the frame (drawn on top of existing shapes).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates over the segments only, skipping fingertip markers.
    pub fn segments(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|shape| shape.is_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{GREEN, RED};

    #[test]
    fn segments_skip_markers() {
        let mut frame = Frame::new();
        frame.add_shape(Shape::Marker {
            cx: 1.0,
            cy: 1.0,
            radius: 8.0,
            color: RED,
        });
        frame.add_shape(Shape::Segment {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
            color: GREEN,
            thick: 3.0,
        });

        assert_eq!(frame.segments().count(), 1);
        frame.clear();
        assert!(frame.is_empty());
    }
}
