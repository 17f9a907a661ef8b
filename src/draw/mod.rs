//! Rendering primitives and shape definitions (Cairo-based).
//!
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: segment and fingertip-marker drawing commands
//! - [`Frame`]: shapes drawn since the last clear
//! - [`DrawingSurface`]: the seam the controller draws through
//! - [`CairoCanvas`]: transparent image surface implementing it

pub mod canvas;
pub mod color;
pub mod frame;
pub mod render;
pub mod shape;
pub mod surface;

pub use canvas::CairoCanvas;
pub use color::Color;
pub use frame::Frame;
pub use render::render_shape;
pub use shape::Shape;
pub use surface::DrawingSurface;

#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, SKY, WHITE, YELLOW};
