//! Input handling and the draw-state machine.
//!
//! Hand-tracker results and mouse events are turned into drawing commands
//! here. The hand path runs through the gesture classifier; the mouse path
//! draws directly and never touches the hand-driven pen state.

pub mod events;
pub mod script;
pub mod state;

pub use events::{ControlAction, InputEvent, MouseButton};
pub use script::{ScriptError, parse_line, parse_script};
pub use state::{InputState, PenState, StrokeStyle};
