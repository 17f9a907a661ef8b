//! Finger-drawing overlay driven by hand landmarks.
//!
//! Tracker results flow through the gesture classifier into the pen state
//! machine, which draws onto a transparent Cairo canvas. A mouse fallback,
//! toggle and clear controls and a one-line status channel share the same
//! event loop.

pub mod app;
pub mod config;
pub mod draw;
pub mod export;
pub mod gesture;
pub mod input;
pub mod notification;
pub mod status;
pub mod tracking;
pub mod ui;
pub mod util;

pub use app::{App, AppOptions};
pub use config::Config;
