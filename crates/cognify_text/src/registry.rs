//! Font registry for candidate-path lookup and caching
//!
//! Fonts are looked up by name in a fixed list of path templates. When none
//! of the candidates loads, the registry falls back to the system default
//! sans-serif face discovered through fontdb.

use crate::font::{FaceSource, FontFace};
use crate::{Result, TextError};
use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Candidate font locations, tried in order. `{name}` is replaced by the
/// requested font name.
pub const DEFAULT_SEARCH_PATHS: &[&str] = &[
    "/System/Library/Fonts/{name}.ttc",
    "/System/Library/Fonts/{name}.ttf",
    "/Library/Fonts/{name}.ttf",
    "/Library/Fonts/{name}.ttc",
    "/System/Library/Fonts/Supplemental/{name}.ttf",
    "/System/Library/Fonts/Supplemental/{name}.ttc",
];

/// Sans-serif families tried, in order, for the default font before the
/// generic sans-serif family
pub const DEFAULT_SANS_FAMILIES: &[&str] = &[
    "Helvetica Neue",
    "Helvetica",
    "Arial",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
];

const DEFAULT_FONT_KEY: &str = "__default";

/// Font registry that resolves font names to faces and caches the results
pub struct FontRegistry {
    /// Path templates containing `{name}`
    search_paths: Vec<String>,
    /// System font database, scanned on first default-font request
    db: Option<Database>,
    /// Cached FontFace instances (Some = found, None = not found)
    faces: FxHashMap<String, Option<Arc<FontFace>>>,
}

impl FontRegistry {
    /// Create a registry searching the given path templates
    pub fn new<I, S>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            db: None,
            faces: FxHashMap::default(),
        }
    }

    /// Create a registry searching [`DEFAULT_SEARCH_PATHS`]
    pub fn with_default_search_paths() -> Self {
        Self::new(DEFAULT_SEARCH_PATHS.iter().copied())
    }

    pub fn search_paths(&self) -> &[String] {
        &self.search_paths
    }

    /// Expand every search path template for `name`
    pub fn candidate_paths(&self, name: &str) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .map(|template| PathBuf::from(template.replace("{name}", name)))
            .collect()
    }

    /// Load a font by name (e.g., "HelveticaNeue")
    ///
    /// Existing candidate files are tried in order; one that fails to read or
    /// parse is skipped. With no usable candidate the default font is used.
    pub fn load_font(&mut self, name: &str) -> Result<Arc<FontFace>> {
        // Check cache first (includes failed lookups as None)
        if let Some(cached) = self.faces.get(name) {
            return cached
                .clone()
                .ok_or_else(|| TextError::NoFontAvailable(name.to_string()));
        }

        if let Some(face) = self.load_candidate(name) {
            let face = Arc::new(face);
            self.faces.insert(name.to_string(), Some(Arc::clone(&face)));
            return Ok(face);
        }

        tracing::debug!("No candidate font file for '{}', using default font", name);
        match self.load_default() {
            Ok(face) => {
                self.faces.insert(name.to_string(), Some(Arc::clone(&face)));
                Ok(face)
            }
            Err(e) => {
                tracing::debug!("Default font unavailable: {}", e);
                self.faces.insert(name.to_string(), None);
                Err(TextError::NoFontAvailable(name.to_string()))
            }
        }
    }

    fn load_candidate(&self, name: &str) -> Option<FontFace> {
        for path in self.candidate_paths(name) {
            if !path.exists() {
                continue;
            }
            match FontFace::from_file(&path) {
                Ok(face) => {
                    tracing::debug!("Loaded font '{}' from {}", name, path.display());
                    return Some(face);
                }
                Err(e) => {
                    tracing::debug!("Skipping font candidate {}: {}", path.display(), e);
                }
            }
        }
        None
    }

    /// Load the default font: the first installed family from
    /// [`DEFAULT_SANS_FAMILIES`], then fontdb's generic sans-serif, then any
    /// face at all
    pub fn load_default(&mut self) -> Result<Arc<FontFace>> {
        if let Some(cached) = self.faces.get(DEFAULT_FONT_KEY) {
            return cached.clone().ok_or_else(|| {
                TextError::FontLoadError("Default font not found (cached)".to_string())
            });
        }

        let db = self.db.get_or_insert_with(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            tracing::debug!("Scanned {} system font faces", db.len());
            db
        });

        let families: Vec<Family<'_>> = DEFAULT_SANS_FAMILIES
            .iter()
            .map(|name| Family::Name(*name))
            .chain(std::iter::once(Family::SansSerif))
            .collect();
        let query = Query {
            families: &families,
            weight: Weight::NORMAL,
            style: Style::Normal,
            stretch: Stretch::Normal,
        };

        // Any face at all beats no text
        let id = db.query(&query).or_else(|| db.faces().next().map(|info| info.id));
        let face = match id {
            Some(id) => load_face_by_id(db, id),
            None => Err(TextError::FontLoadError(
                "No system fonts installed".to_string(),
            )),
        };

        match face {
            Ok(face) => {
                tracing::debug!("Default font: {}", face.source());
                let face = Arc::new(face);
                self.faces
                    .insert(DEFAULT_FONT_KEY.to_string(), Some(Arc::clone(&face)));
                Ok(face)
            }
            Err(e) => {
                self.faces.insert(DEFAULT_FONT_KEY.to_string(), None);
                Err(e)
            }
        }
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::with_default_search_paths()
    }
}

/// Load a font face by fontdb ID
fn load_face_by_id(db: &Database, id: fontdb::ID) -> Result<FontFace> {
    let family = db
        .face(id)
        .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_default();

    // Get the face source info
    let (src, face_index) = db
        .face_source(id)
        .ok_or_else(|| TextError::FontLoadError("Font source not found".to_string()))?;

    // Load the font data
    let data = match src {
        Source::File(path) => std::fs::read(&path).map_err(|e| {
            TextError::FontLoadError(format!("Failed to read font file {:?}: {}", path, e))
        })?,
        Source::Binary(arc) => arc.as_ref().as_ref().to_vec(),
        Source::SharedFile(_path, data) => data.as_ref().as_ref().to_vec(),
    };

    FontFace::from_data_with_index(data, face_index, FaceSource::System(family))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_in_order() {
        let registry = FontRegistry::with_default_search_paths();
        let paths = registry.candidate_paths("HelveticaNeue");
        assert_eq!(paths.len(), 6);
        assert_eq!(paths[0], PathBuf::from("/System/Library/Fonts/HelveticaNeue.ttc"));
        assert_eq!(
            paths[5],
            PathBuf::from("/System/Library/Fonts/Supplemental/HelveticaNeue.ttc")
        );
    }

    #[test]
    fn test_broken_candidate_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("Broken.ttf"), b"not a font").expect("write");
        let template = format!("{}/{{name}}.ttf", dir.path().display());

        let registry = FontRegistry::new([template]);
        assert!(registry.load_candidate("Broken").is_none());
    }

    /// First preferred sans family installed on this machine, if any
    fn installed_sans_family() -> Option<&'static str> {
        let mut db = Database::new();
        db.load_system_fonts();
        DEFAULT_SANS_FAMILIES.iter().copied().find(|name| {
            db.faces()
                .any(|face| face.families.iter().any(|(family, _)| family.as_str() == *name))
        })
    }

    #[test]
    fn test_missing_font_falls_back_to_default() {
        let mut registry = FontRegistry::new(["/nonexistent/{name}.ttf"]);
        match registry.load_font("NoSuchFont") {
            Ok(face) => assert!(matches!(face.source(), FaceSource::System(_))),
            Err(e) => assert!(matches!(e, TextError::NoFontAvailable(_))),
        }
        // Second lookup is served from the cache with the same outcome
        let again = registry.load_font("NoSuchFont");
        assert_eq!(again.is_ok(), registry.faces.get("NoSuchFont").unwrap().is_some());
    }

    #[test]
    fn test_default_prefers_installed_sans_family() {
        let Some(expected) = installed_sans_family() else {
            eprintln!("No preferred sans family installed; skipping.");
            return;
        };
        let mut registry = FontRegistry::new(["/nonexistent/{name}.ttf"]);
        let face = registry.load_default().expect("default font");
        assert_eq!(face.source(), &FaceSource::System(expected.to_string()));
    }
}
