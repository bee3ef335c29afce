//! Cognify Paint/Canvas API
//!
//! A small CPU raster canvas for the Cognify artwork generators.
//!
//! # Features
//!
//! - 8-bit colors with truncating interpolation
//! - Shape primitives (rect, rounded rect) with SDF anti-aliasing
//! - Linear and weighted gradient fills, per pixel or in coarse blocks
//! - Pixel-exact lines with inclusive endpoints
//! - Coverage mask compositing for glyphs
//! - PNG encoding

pub mod canvas;
pub mod color;
pub mod gradient;
pub mod primitives;

pub use canvas::{Canvas, Stroke};
pub use color::Color;
pub use gradient::{Gradient, GradientStop};
pub use primitives::*;

use thiserror::Error;

/// Paint errors
#[derive(Error, Debug)]
pub enum PaintError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaintError>;
