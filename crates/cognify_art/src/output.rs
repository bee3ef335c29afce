//! Publishing rendered artwork
//!
//! Writes canvases to their fixed locations under a repository root and
//! keeps a record of every file produced, which the CLI can dump as JSON.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use cognify_paint::Canvas;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{ArtError, Artwork, Result};

/// Where the artwork files live relative to a repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn docs_images_dir(&self) -> PathBuf {
        self.root.join("docs").join("images")
    }

    pub fn banner_path(&self) -> PathBuf {
        self.docs_images_dir().join("banner.png")
    }

    pub fn social_path(&self) -> PathBuf {
        self.root.join("social-preview.png")
    }

    pub fn docs_social_path(&self) -> PathBuf {
        self.docs_images_dir().join("social-preview.png")
    }
}

/// How a file came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetAction {
    Saved,
    Copied,
}

/// One file written during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenAsset {
    pub path: PathBuf,
    pub bytes: u64,
    pub action: AssetAction,
}

impl WrittenAsset {
    /// Size rounded to whole kilobytes, e.g. `"48KB"`
    pub fn size_kb(&self) -> String {
        format!("{:.0}KB", self.bytes as f64 / 1024.0)
    }
}

/// Write the banner to `docs/images/banner.png` and the same raster to
/// `social-preview.png` at the root.
pub fn publish_banner(canvas: &Canvas, layout: &OutputLayout) -> Result<Vec<WrittenAsset>> {
    create_dir(&layout.docs_images_dir())?;

    let banner = save(canvas, layout.banner_path())?;
    info!("Banner saved to: {}", banner.path.display());
    info!("Size: {}", banner.size_kb());

    let social = save(canvas, layout.social_path())?;
    info!("Social preview saved to: {}", social.path.display());

    Ok(vec![banner, social])
}

/// Write `social-preview.png` at the root and copy it into `docs/images`.
pub fn publish_social_preview(canvas: &Canvas, layout: &OutputLayout) -> Result<Vec<WrittenAsset>> {
    create_dir(layout.root())?;

    let social = save(canvas, layout.social_path())?;
    info!("Social preview saved to: {}", social.path.display());
    info!("Size: {}", social.size_kb());

    create_dir(&layout.docs_images_dir())?;
    let dest = layout.docs_social_path();
    let bytes = fs::copy(&social.path, &dest).map_err(|source| ArtError::Io {
        path: dest.clone(),
        source,
    })?;
    info!("Copied to: {}", dest.display());

    let copied = WrittenAsset {
        path: dest,
        bytes,
        action: AssetAction::Copied,
    };
    Ok(vec![social, copied])
}

fn save(canvas: &Canvas, path: PathBuf) -> Result<WrittenAsset> {
    match canvas.save_png(&path) {
        Ok(bytes) => Ok(WrittenAsset {
            path,
            bytes,
            action: AssetAction::Saved,
        }),
        Err(source) => Err(ArtError::Paint { path, source }),
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| ArtError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Outcome of rendering and publishing one artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkReport {
    pub artwork: Artwork,
    pub width: u32,
    pub height: u32,
    /// Font the text was drawn with; `None` when no font could be loaded
    pub font: Option<String>,
    pub assets: Vec<WrittenAsset>,
}

/// Machine-readable summary of a generator run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetReport {
    pub artworks: Vec<ArtworkReport>,
}

impl AssetReport {
    pub fn push(&mut self, report: ArtworkReport) {
        self.artworks.push(report);
    }

    /// Total bytes across every written file
    pub fn total_bytes(&self) -> u64 {
        self.artworks
            .iter()
            .flat_map(|a| a.assets.iter())
            .map(|asset| asset.bytes)
            .sum()
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        fs::write(path, payload).map_err(|source| ArtError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        let io = |source: std::io::Error| ArtError::Io {
            path: PathBuf::from("<writer>"),
            source,
        };
        writer.write_all(payload.as_bytes()).map_err(io)?;
        writer.write_all(b"\n").map_err(io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_paths() {
        let layout = OutputLayout::new("/repo");
        assert_eq!(layout.banner_path(), PathBuf::from("/repo/docs/images/banner.png"));
        assert_eq!(layout.social_path(), PathBuf::from("/repo/social-preview.png"));
        assert_eq!(
            layout.docs_social_path(),
            PathBuf::from("/repo/docs/images/social-preview.png")
        );
    }

    #[test]
    fn test_size_kb_rounds() {
        let asset = |bytes| WrittenAsset {
            path: PathBuf::from("a.png"),
            bytes,
            action: AssetAction::Saved,
        };
        assert_eq!(asset(49_152).size_kb(), "48KB");
        assert_eq!(asset(1_600).size_kb(), "2KB");
        assert_eq!(asset(0).size_kb(), "0KB");
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = AssetReport::default();
        report.push(ArtworkReport {
            artwork: Artwork::SocialPreview,
            width: 1280,
            height: 640,
            font: None,
            assets: vec![WrittenAsset {
                path: PathBuf::from("social-preview.png"),
                bytes: 2048,
                action: AssetAction::Copied,
            }],
        });
        assert_eq!(report.total_bytes(), 2048);

        let mut out = Vec::new();
        report.write_to_writer(&mut out).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value["artworks"][0]["artwork"], "social_preview");
        assert_eq!(value["artworks"][0]["assets"][0]["action"], "copied");
        assert_eq!(value["artworks"][0]["font"], serde_json::Value::Null);
    }
}
