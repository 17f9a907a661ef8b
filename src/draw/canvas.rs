//! Transparent Cairo canvas backing the overlay.

use super::frame::Frame;
use super::render::{clear_surface, render_shape};
use super::shape::Shape;
use super::surface::DrawingSurface;
use crate::config::UiConfig;
use crate::ui;
use anyhow::{Context as _, Result, anyhow};
use cairo::{Context, Format, ImageSurface};

/// ARGB32 image surface that starts fully transparent.
///
/// Shapes are rendered onto the surface as they arrive and also kept in a
/// [`Frame`] until the next clear.
pub struct CairoCanvas {
    surface: ImageSurface,
    frame: Frame,
    width: u32,
    height: u32,
}

impl CairoCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)
            .with_context(|| format!("Failed to create {width}x{height} canvas surface"))?;

        Ok(Self {
            surface,
            frame: Frame::new(),
            width,
            height,
        })
    }

    /// Shapes drawn since the last clear.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Copies the canvas into a new surface, optionally with the status bar
    /// painted on top.
    pub fn composite(&self, status: Option<(&str, &UiConfig)>) -> Result<ImageSurface> {
        let output = ImageSurface::create(Format::ARgb32, self.width as i32, self.height as i32)
            .context("Failed to create export surface")?;
        {
            let ctx = Context::new(&output).context("Failed to create export context")?;
            ctx.set_source_surface(&self.surface, 0.0, 0.0)
                .context("Failed to use canvas as paint source")?;
            ctx.paint().context("Failed to copy canvas")?;

            if let Some((text, ui_config)) = status {
                ui::render_status_bar(
                    &ctx,
                    text,
                    ui_config.status_bar_position,
                    &ui_config.status_bar_style,
                    self.width,
                    self.height,
                );
            }
        }
        output.flush();
        Ok(output)
    }

    /// Encodes the canvas as PNG bytes.
    pub fn encode_png(&self, status: Option<(&str, &UiConfig)>) -> Result<Vec<u8>> {
        let output = self.composite(status)?;
        let mut bytes = Vec::new();
        output
            .write_to_png(&mut bytes)
            .map_err(|e| anyhow!("Failed to encode canvas as PNG: {e}"))?;
        Ok(bytes)
    }

    fn with_cairo(&self, f: impl FnOnce(&Context)) {
        match Context::new(&self.surface) {
            Ok(ctx) => f(&ctx),
            Err(e) => log::warn!("Failed to create drawing context: {}", e),
        }
    }
}

impl DrawingSurface for CairoCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&mut self, shape: Shape) {
        self.with_cairo(|ctx| render_shape(ctx, &shape));
        self.frame.add_shape(shape);
    }

    fn clear(&mut self) {
        self.with_cairo(clear_surface);
        self.frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{GREEN, RED};

    fn has_pixels(surface: &mut ImageSurface) -> bool {
        surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false)
    }

    #[test]
    fn new_canvas_is_transparent() {
        let canvas = CairoCanvas::new(64, 48).unwrap();
        let mut out = canvas.composite(None).unwrap();
        assert!(!has_pixels(&mut out));
        assert_eq!(canvas.size(), (64, 48));
    }

    #[test]
    fn drawing_then_clearing_wipes_pixels() {
        let mut canvas = CairoCanvas::new(64, 48).unwrap();
        canvas.draw(Shape::Segment {
            x1: 4.0,
            y1: 4.0,
            x2: 40.0,
            y2: 30.0,
            color: GREEN,
            thick: 3.0,
        });
        canvas.draw(Shape::Marker {
            cx: 40.0,
            cy: 30.0,
            radius: 8.0,
            color: RED,
        });
        assert_eq!(canvas.frame().shapes.len(), 2);
        assert!(has_pixels(&mut canvas.composite(None).unwrap()));

        canvas.clear();
        assert!(canvas.frame().is_empty());
        assert!(!has_pixels(&mut canvas.composite(None).unwrap()));
    }

    #[test]
    fn encodes_png_signature() {
        let canvas = CairoCanvas::new(8, 8).unwrap();
        let bytes = canvas.encode_png(None).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
