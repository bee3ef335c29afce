//! Glyph rasterization using swash
//!
//! Converts font glyph outlines to 8-bit coverage bitmaps that the renderer
//! composites onto the canvas.

use crate::font::FontFace;
use crate::{Result, TextError};
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;

/// Rasterized glyph bitmap with placement
#[derive(Debug, Clone, Default)]
pub struct RasterizedGlyph {
    /// Coverage bitmap, one byte per pixel, row-major
    pub bitmap: Vec<u8>,
    /// Bitmap width in pixels
    pub width: u32,
    /// Bitmap height in pixels
    pub height: u32,
    /// Horizontal bearing (offset from origin to left edge)
    pub bearing_x: i32,
    /// Vertical bearing (offset from baseline to top edge)
    pub bearing_y: i32,
    /// Horizontal advance to the next glyph position, in pixels
    pub advance: f32,
}

impl RasterizedGlyph {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Glyph rasterizer using swash
pub struct GlyphRasterizer {
    /// Swash scale context (caches scaling state)
    scale_context: ScaleContext,
}

impl GlyphRasterizer {
    /// Create a new glyph rasterizer
    pub fn new() -> Self {
        Self {
            scale_context: ScaleContext::new(),
        }
    }

    /// Rasterize a glyph at the given font size
    pub fn rasterize(
        &mut self,
        font: &FontFace,
        glyph_id: u16,
        font_size: f32,
    ) -> Result<RasterizedGlyph> {
        let swash_font = swash::FontRef::from_index(font.data(), font.face_index() as usize)
            .ok_or(TextError::InvalidFontData)?;

        let advance = swash_font
            .glyph_metrics(&[])
            .scale(font_size)
            .advance_width(glyph_id);

        let mut scaler = self
            .scale_context
            .builder(swash_font)
            .size(font_size)
            .hint(true)
            .build();

        let image = Render::new(&[Source::Outline, Source::Bitmap(StrikeWith::BestFit)])
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id);

        let Some(img) = image else {
            // Empty glyph (like space) - no bitmap but has advance
            return Ok(RasterizedGlyph {
                advance,
                ..RasterizedGlyph::default()
            });
        };

        let width = img.placement.width;
        let height = img.placement.height;
        let pixels = (width * height) as usize;

        // Bitmap strikes can come back as RGBA; keep the alpha channel only
        let bitmap = if img.data.len() == pixels * 4 {
            img.data.chunks_exact(4).map(|px| px[3]).collect()
        } else {
            img.data
        };

        Ok(RasterizedGlyph {
            bitmap,
            width,
            height,
            bearing_x: img.placement.left,
            bearing_y: img.placement.top,
            advance,
        })
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
