//! The drawing-surface seam between the controller and the renderer.

use super::shape::Shape;

/// A 2D surface that accepts drawing commands.
///
/// The controller only ever talks to this trait, so a Cairo image surface,
/// an on-screen overlay or a test recorder can sit behind it.
pub trait DrawingSurface {
    /// Surface size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Draws one shape on top of everything drawn so far.
    fn draw(&mut self, shape: Shape);

    /// Wipes every pixel.
    fn clear(&mut self);
}
