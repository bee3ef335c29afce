//! Text renderer
//!
//! Single-line text measurement and drawing that combines shaping,
//! rasterization and glyph caching.
//!
//! Text is positioned by its origin: the left edge of the line at the
//! ascender. The baseline sits `round(ascent)` pixels below the origin.
//! Extents are integer pixel boxes relative to that origin.

use crate::font::FontFace;
use crate::rasterizer::{GlyphRasterizer, RasterizedGlyph};
use crate::shaper::TextShaper;
use crate::Result;
use cognify_paint::{Canvas, Color};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Pixel box of a piece of text relative to its draw origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextExtent {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Vertical metrics of a line at a given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Ascender in pixels (distance from baseline to top of em box)
    pub ascent: f32,
    /// Descender in pixels (typically negative)
    pub descent: f32,
}

/// Cache key: glyph ID and font size bits
type GlyphKey = (u16, u32);

struct PlacedGlyph {
    key: GlyphKey,
    left: i32,
    top: i32,
}

/// Text renderer bound to one font face
pub struct TextRenderer {
    face: Option<Arc<FontFace>>,
    shaper: TextShaper,
    rasterizer: GlyphRasterizer,
    glyph_cache: FxHashMap<GlyphKey, RasterizedGlyph>,
}

impl TextRenderer {
    pub fn new(face: Arc<FontFace>) -> Self {
        Self {
            face: Some(face),
            shaper: TextShaper::new(),
            rasterizer: GlyphRasterizer::new(),
            glyph_cache: FxHashMap::default(),
        }
    }

    /// A renderer without any font: every string measures empty and
    /// drawing leaves the canvas untouched.
    pub fn headless() -> Self {
        Self {
            face: None,
            shaper: TextShaper::new(),
            rasterizer: GlyphRasterizer::new(),
            glyph_cache: FxHashMap::default(),
        }
    }

    pub fn face(&self) -> Option<&Arc<FontFace>> {
        self.face.as_ref()
    }

    pub fn is_headless(&self) -> bool {
        self.face.is_none()
    }

    pub fn line_metrics(&self, font_size: f32) -> LineMetrics {
        match &self.face {
            Some(face) => {
                let scale = face.scale(font_size);
                LineMetrics {
                    ascent: face.ascender() as f32 * scale,
                    descent: face.descender() as f32 * scale,
                }
            }
            None => LineMetrics {
                ascent: 0.0,
                descent: 0.0,
            },
        }
    }

    /// Measure `text` at `font_size` without drawing it
    pub fn measure(&mut self, text: &str, font_size: f32) -> Result<TextExtent> {
        let (_, extent) = self.place(text, font_size)?;
        Ok(extent)
    }

    /// Draw `text` with its origin at `(x, y)` and return its extent
    pub fn draw(
        &mut self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        text: &str,
        font_size: f32,
        color: Color,
    ) -> Result<TextExtent> {
        let (placed, extent) = self.place(text, font_size)?;
        for glyph in &placed {
            let Some(raster) = self.glyph_cache.get(&glyph.key) else {
                continue;
            };
            canvas.blend_mask(
                x + glyph.left,
                y + glyph.top,
                raster.width,
                raster.height,
                &raster.bitmap,
                color,
            );
        }
        Ok(extent)
    }

    /// Shape, rasterize (through the cache) and position every glyph
    fn place(&mut self, text: &str, font_size: f32) -> Result<(Vec<PlacedGlyph>, TextExtent)> {
        let Some(face) = self.face.clone() else {
            return Ok((Vec::new(), TextExtent::default()));
        };
        if text.is_empty() {
            return Ok((Vec::new(), TextExtent::default()));
        }

        let shaped = self.shaper.shape(&face, text, font_size)?;
        let baseline = self.line_metrics(font_size).ascent.round() as i32;

        let mut placed = Vec::with_capacity(shaped.glyphs.len());
        let mut ink: Option<TextExtent> = None;

        for glyph in &shaped.glyphs {
            let key = (glyph.glyph_id, font_size.to_bits());
            if !self.glyph_cache.contains_key(&key) {
                let raster = self.rasterizer.rasterize(&face, glyph.glyph_id, font_size)?;
                self.glyph_cache.insert(key, raster);
            }
            let Some(raster) = self.glyph_cache.get(&key) else {
                continue;
            };
            if raster.is_empty() {
                continue;
            }

            let left = glyph.x.round() as i32 + raster.bearing_x;
            let top = baseline - glyph.y_offset.round() as i32 - raster.bearing_y;
            let bounds = TextExtent {
                left,
                top,
                right: left + raster.width as i32,
                bottom: top + raster.height as i32,
            };
            ink = Some(match ink {
                Some(acc) => TextExtent {
                    left: acc.left.min(bounds.left),
                    top: acc.top.min(bounds.top),
                    right: acc.right.max(bounds.right),
                    bottom: acc.bottom.max(bounds.bottom),
                },
                None => bounds,
            });
            placed.push(PlacedGlyph { key, left, top });
        }

        let advance = shaped.advance.ceil() as i32;
        let extent = match ink {
            Some(ink) => TextExtent {
                left: ink.left.min(0),
                top: ink.top,
                right: ink.right.max(advance),
                bottom: ink.bottom,
            },
            // Whitespace only: no ink, but the pen still moved
            None => TextExtent {
                left: 0,
                top: 0,
                right: advance,
                bottom: 0,
            },
        };

        Ok((placed, extent))
    }
}
