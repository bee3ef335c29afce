//! Cognify artwork
//!
//! The two fixed images published with the Custom Skill Developer guide:
//!
//! - [`banner`]: the docs banner, also saved as the repository social preview
//! - [`social`]: the social preview, copied into the docs image directory
//!
//! Both are 1280x640 and drawn from constants; there is nothing to
//! configure beyond where the files land and which font is used.
//!
//! # Example
//!
//! ```no_run
//! use cognify_art::{output::OutputLayout, Artwork};
//! use cognify_text::{FontRegistry, TextRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let face = FontRegistry::with_default_search_paths().load_font("HelveticaNeue")?;
//! let mut text = TextRenderer::new(face);
//! let canvas = Artwork::Banner.render(&mut text)?;
//! let written = Artwork::Banner.publish(&canvas, &OutputLayout::new("."))?;
//! println!("wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod banner;
pub mod layout;
pub mod output;
pub mod social;

use std::fmt;
use std::path::PathBuf;

use cognify_paint::{Canvas, PaintError};
use cognify_text::{TextError, TextRenderer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use output::{AssetAction, AssetReport, ArtworkReport, OutputLayout, WrittenAsset};

/// Canvas width shared by both artworks (GitHub social preview size)
pub const WIDTH: u32 = 1280;
/// Canvas height shared by both artworks
pub const HEIGHT: u32 = 640;

/// Artwork errors
#[derive(Error, Debug)]
pub enum ArtError {
    #[error("Text rendering failed: {0}")]
    Text(#[from] TextError),

    #[error("Failed to write {path}: {source}")]
    Paint {
        path: PathBuf,
        #[source]
        source: PaintError,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArtError>;

/// The artworks this crate knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Artwork {
    Banner,
    SocialPreview,
}

impl Artwork {
    pub const ALL: [Artwork; 2] = [Artwork::Banner, Artwork::SocialPreview];

    pub fn name(&self) -> &'static str {
        match self {
            Artwork::Banner => "banner",
            Artwork::SocialPreview => "social-preview",
        }
    }

    /// Draw the artwork onto a fresh canvas
    pub fn render(&self, text: &mut TextRenderer) -> Result<Canvas> {
        match self {
            Artwork::Banner => banner::render_banner(text),
            Artwork::SocialPreview => social::render_social_preview(text),
        }
    }

    /// Write the rendered canvas to every location this artwork is published to
    pub fn publish(&self, canvas: &Canvas, layout: &OutputLayout) -> Result<Vec<WrittenAsset>> {
        match self {
            Artwork::Banner => output::publish_banner(canvas, layout),
            Artwork::SocialPreview => output::publish_social_preview(canvas, layout),
        }
    }
}

impl fmt::Display for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
