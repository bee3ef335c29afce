//! Text rendering for the Cognify artwork generators
//!
//! This crate provides:
//! - Font loading from candidate file paths with a system default fallback
//! - Font parsing (TTF/OTF/TTC via ttf-parser)
//! - Text shaping (HarfBuzz via rustybuzz)
//! - Glyph rasterization (swash)
//! - Single-line text measurement and drawing onto a `cognify_paint::Canvas`

pub mod font;
pub mod rasterizer;
pub mod registry;
pub mod renderer;
pub mod shaper;

pub use font::{FaceSource, FontFace};
pub use rasterizer::{GlyphRasterizer, RasterizedGlyph};
pub use registry::{FontRegistry, DEFAULT_SANS_FAMILIES, DEFAULT_SEARCH_PATHS};
pub use renderer::{LineMetrics, TextExtent, TextRenderer};
pub use shaper::{ShapedGlyph, ShapedText, TextShaper};

use thiserror::Error;

/// Text rendering errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font: {0}")]
    FontLoadError(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("No font available for '{0}' and no system default font found")]
    NoFontAvailable(String),

    #[error("Invalid font data")]
    InvalidFontData,
}

pub type Result<T> = std::result::Result<T, TextError>;
