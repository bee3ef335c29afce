//! cognify-art: renders the Cognify docs banner and social preview

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cognify_art::{Artwork, ArtworkReport, AssetReport, OutputLayout};
use cognify_text::{FontRegistry, TextRenderer};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{ArtConfig, FontsConfig};

#[derive(Parser, Debug)]
#[command(name = "cognify-art", author, version, about)]
struct Cli {
    /// Config file (default: ./cognify-art.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Repository root the assets are written under
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Font name substituted into the search paths
    #[arg(long, global = true)]
    font_family: Option<String>,

    /// Write a JSON summary of the written files
    #[arg(long, global = true)]
    report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the docs banner (also saved as the root social preview)
    Banner,
    /// Render the social preview and copy it into docs/images
    SocialPreview,
    /// Render the banner, then the social preview
    All,
    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => ArtConfig::load_file(path)?,
        None => ArtConfig::load_from_dir(Path::new("."))?,
    };
    if let Some(root) = cli.root {
        config.output.root = root;
    }
    if let Some(family) = cli.font_family {
        config.fonts.family = family;
    }

    let artworks: &[Artwork] = match cli.command {
        Commands::Banner => &[Artwork::Banner],
        Commands::SocialPreview => &[Artwork::SocialPreview],
        Commands::All => &Artwork::ALL,
        Commands::Config => {
            print!("{}", config.to_toml()?);
            return Ok(());
        }
    };

    let layout = OutputLayout::new(&config.output.root);
    let mut report = AssetReport::default();
    for &artwork in artworks {
        report.push(generate(artwork, &config.fonts, &layout)?);
    }

    if let Some(path) = &cli.report {
        report
            .write_to_path(path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        info!("Report written to: {}", path.display());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Renderer for one artwork run. Falls back to drawing no text at all when
/// neither the configured font nor a system font can be loaded.
fn text_renderer(fonts: &FontsConfig) -> TextRenderer {
    let mut registry = FontRegistry::new(fonts.search_paths.iter().cloned());
    match registry.load_font(&fonts.family) {
        Ok(face) => {
            debug!("Using font {} from {}", face.family_name(), face.source());
            TextRenderer::new(face)
        }
        Err(e) => {
            warn!("{}; rendering without text", e);
            TextRenderer::headless()
        }
    }
}

fn generate(artwork: Artwork, fonts: &FontsConfig, layout: &OutputLayout) -> Result<ArtworkReport> {
    let mut text = text_renderer(fonts);
    let font = text.face().map(|face| face.source().to_string());

    let canvas = artwork
        .render(&mut text)
        .with_context(|| format!("Failed to render {}", artwork))?;
    let assets = artwork
        .publish(&canvas, layout)
        .with_context(|| format!("Failed to publish {}", artwork))?;

    Ok(ArtworkReport {
        artwork,
        width: canvas.width(),
        height: canvas.height(),
        font,
        assets,
    })
}
