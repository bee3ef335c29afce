//! Text shaping using rustybuzz
//!
//! Turns a string into positioned glyphs (kerning and ligatures applied),
//! scaled from font units to pixels.

use crate::font::FontFace;
use crate::{Result, TextError};

/// A shaped glyph positioned on a single line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    /// Glyph ID in the font
    pub glyph_id: u16,
    /// Byte offset of the source cluster in the input text
    pub cluster: u32,
    /// Pen position of the glyph origin, in pixels from the line start
    pub x: f32,
    /// Vertical offset from the baseline in pixels (positive = up)
    pub y_offset: f32,
    /// Horizontal advance in pixels
    pub advance: f32,
}

/// Result of shaping one line of text
#[derive(Debug, Clone, Default)]
pub struct ShapedText {
    pub glyphs: Vec<ShapedGlyph>,
    /// Total advance width in pixels
    pub advance: f32,
}

/// Text shaper using rustybuzz (HarfBuzz port)
#[derive(Debug, Default)]
pub struct TextShaper;

impl TextShaper {
    pub fn new() -> Self {
        Self
    }

    /// Shape `text` with `font` at `font_size` pixels
    pub fn shape(&self, font: &FontFace, text: &str, font_size: f32) -> Result<ShapedText> {
        if text.is_empty() {
            return Ok(ShapedText::default());
        }

        let face = rustybuzz::Face::from_slice(font.data(), font.face_index())
            .ok_or(TextError::InvalidFontData)?;

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let output = rustybuzz::shape(&face, &[], buffer);
        let scale = font.scale(font_size);

        let mut glyphs = Vec::with_capacity(output.len());
        let mut pen = 0.0f32;
        for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
            let advance = pos.x_advance as f32 * scale;
            glyphs.push(ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                cluster: info.cluster,
                x: pen + pos.x_offset as f32 * scale,
                y_offset: pos.y_offset as f32 * scale,
                advance,
            });
            pen += advance;
        }

        Ok(ShapedText {
            glyphs,
            advance: pen,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FontRegistry;
    use std::sync::Arc;

    fn any_font() -> Option<Arc<FontFace>> {
        FontRegistry::with_default_search_paths()
            .load_font("HelveticaNeue")
            .map_err(|e| eprintln!("No usable font on this machine ({}); skipping.", e))
            .ok()
    }

    #[test]
    fn test_advance_is_sum_of_glyph_advances() {
        let Some(font) = any_font() else { return };
        let shaped = TextShaper::new()
            .shape(&font, "Custom Skill Developer", 52.0)
            .expect("shape");
        assert!(!shaped.glyphs.is_empty());
        let sum: f32 = shaped.glyphs.iter().map(|g| g.advance).sum();
        assert!((shaped.advance - sum).abs() < 1e-3, "{} vs {}", shaped.advance, sum);
        assert!(shaped.advance > 0.0);
    }

    #[test]
    fn test_pen_walks_left_to_right() {
        let Some(font) = any_font() else { return };
        let shaped = TextShaper::new().shape(&font, "HHH", 20.0).expect("shape");
        assert_eq!(shaped.glyphs.len(), 3);
        assert!(shaped.glyphs[0].x < shaped.glyphs[1].x);
        assert!(shaped.glyphs[1].x < shaped.glyphs[2].x);
        assert_eq!(shaped.glyphs[0].cluster, 0);
        assert_eq!(shaped.glyphs[2].cluster, 2);
    }

    #[test]
    fn test_empty_text_has_no_glyphs() {
        let Some(font) = any_font() else { return };
        let shaped = TextShaper::new().shape(&font, "", 20.0).expect("shape");
        assert!(shaped.glyphs.is_empty());
        assert_eq!(shaped.advance, 0.0);
    }
}
