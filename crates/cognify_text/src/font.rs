//! Font faces
//!
//! A `FontFace` owns the raw font bytes and the face index inside them (TTC
//! collections hold several faces). The data is validated once with
//! ttf-parser; shaping and rasterization re-borrow it on demand.

use crate::{Result, TextError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where a face was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceSource {
    /// One of the candidate font paths
    File(PathBuf),
    /// The system default font, by family name
    System(String),
}

impl fmt::Display for FaceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceSource::File(path) => write!(f, "{}", path.display()),
            FaceSource::System(name) => write!(f, "system font '{}'", name),
        }
    }
}

/// A parsed font face
#[derive(Clone)]
pub struct FontFace {
    data: Arc<Vec<u8>>,
    face_index: u32,
    family_name: String,
    source: FaceSource,
    units_per_em: u16,
    ascender: i16,
    descender: i16,
}

impl FontFace {
    /// Create a face from font bytes, validating them
    pub fn from_data_with_index(data: Vec<u8>, face_index: u32, source: FaceSource) -> Result<Self> {
        let face = ttf_parser::Face::parse(&data, face_index)
            .map_err(|e| TextError::FontParseError(format!("{}: {}", source, e)))?;

        let family_name = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY && name.is_unicode())
            .find_map(|name| name.to_string())
            .unwrap_or_default();
        let units_per_em = face.units_per_em();
        let ascender = face.ascender();
        let descender = face.descender();

        Ok(Self {
            data: Arc::new(data),
            face_index,
            family_name,
            source,
            units_per_em,
            ascender,
            descender,
        })
    }

    /// Read and validate the first face of a font file
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| {
            TextError::FontLoadError(format!("Failed to read font file {:?}: {}", path, e))
        })?;
        Self::from_data_with_index(data, 0, FaceSource::File(path.to_path_buf()))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn source(&self) -> &FaceSource {
        &self.source
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Ascender in font units (positive, above the baseline)
    pub fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Descender in font units (typically negative)
    pub fn descender(&self) -> i16 {
        self.descender
    }

    /// Scale factor from font units to pixels at `font_size`
    pub fn scale(&self, font_size: f32) -> f32 {
        font_size / self.units_per_em.max(1) as f32
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("family_name", &self.family_name)
            .field("face_index", &self.face_index)
            .field("source", &self.source)
            .field("units_per_em", &self.units_per_em)
            .finish_non_exhaustive()
    }
}
