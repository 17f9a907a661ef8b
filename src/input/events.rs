//! Input event types consumed by the drawing loop.

use crate::gesture::HandLandmarks;

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// User-triggered controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Open the camera and start hand tracking
    Start,
    /// Flip the drawing-enabled flag
    ToggleDrawing,
    /// Wipe the canvas
    Clear,
    /// Write the canvas to a PNG file
    Save,
    /// Leave the event loop
    Quit,
}

/// One event for the drawing loop, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// One tracker result: the detected hand, or `None` when no hand is visible
    Hand(Option<HandLandmarks>),
    /// Mouse button pressed at a canvas position
    MousePress { button: MouseButton, x: f64, y: f64 },
    /// Pointer moved to a canvas position
    MouseMotion { x: f64, y: f64 },
    /// Mouse button released
    MouseRelease { button: MouseButton },
    /// A control action
    Control(ControlAction),
    /// The tracker stopped sending results, with the failure if it failed
    TrackerStopped(Option<String>),
}
