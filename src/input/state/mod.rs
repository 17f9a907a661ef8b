mod actions;
mod hand;
mod machine;
mod mouse;
#[cfg(test)]
mod tests;

pub use machine::{InputState, PenState, StrokeStyle};
