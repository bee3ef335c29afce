use cognify_art::{AssetAction, Artwork, OutputLayout, HEIGHT, WIDTH};
use cognify_text::{FontRegistry, TextRenderer};
use pretty_assertions::assert_eq;

fn decoded_size(path: &std::path::Path) -> (u32, u32) {
    image::open(path).expect("decode").to_rgb8().dimensions()
}

#[test]
fn banner_writes_docs_banner_and_root_preview() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = OutputLayout::new(dir.path());

    let canvas = Artwork::Banner
        .render(&mut TextRenderer::headless())
        .expect("render");
    let written = Artwork::Banner.publish(&canvas, &layout).expect("publish");

    let paths: Vec<_> = written.iter().map(|a| a.path.clone()).collect();
    assert_eq!(paths, vec![layout.banner_path(), layout.social_path()]);
    assert!(written.iter().all(|a| a.action == AssetAction::Saved));

    for asset in &written {
        assert_eq!(decoded_size(&asset.path), (WIDTH, HEIGHT));
        assert_eq!(asset.bytes, std::fs::metadata(&asset.path).expect("metadata").len());
    }
    assert_eq!(
        std::fs::read(layout.banner_path()).expect("banner"),
        std::fs::read(layout.social_path()).expect("social")
    );
}

#[test]
fn social_preview_is_copied_into_docs() {
    let dir = tempfile::tempdir().expect("tempdir");
    // docs/images does not exist yet
    let layout = OutputLayout::new(dir.path().join("repo"));

    let canvas = Artwork::SocialPreview
        .render(&mut TextRenderer::headless())
        .expect("render");
    let written = Artwork::SocialPreview
        .publish(&canvas, &layout)
        .expect("publish");

    assert_eq!(written.len(), 2);
    assert_eq!(written[0].path, layout.social_path());
    assert_eq!(written[0].action, AssetAction::Saved);
    assert_eq!(written[1].path, layout.docs_social_path());
    assert_eq!(written[1].action, AssetAction::Copied);
    assert_eq!(written[0].bytes, written[1].bytes);

    assert_eq!(decoded_size(&layout.docs_social_path()), (WIDTH, HEIGHT));
    let decoded = image::open(layout.social_path()).expect("decode").to_rgb8();
    assert_eq!(decoded, *canvas.as_image());
}

#[test]
fn last_run_owns_root_preview() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = OutputLayout::new(dir.path());
    let mut text = TextRenderer::headless();

    let banner = Artwork::Banner.render(&mut text).expect("render banner");
    Artwork::Banner.publish(&banner, &layout).expect("publish banner");
    let social = Artwork::SocialPreview.render(&mut text).expect("render social");
    Artwork::SocialPreview
        .publish(&social, &layout)
        .expect("publish social");

    let root = image::open(layout.social_path()).expect("decode").to_rgb8();
    assert_eq!(root, *social.as_image());
    let docs_banner = image::open(layout.banner_path()).expect("decode").to_rgb8();
    assert_eq!(docs_banner, *banner.as_image());
}

#[test]
fn text_lands_on_both_artworks_when_a_font_exists() {
    let face = match FontRegistry::with_default_search_paths().load_font("HelveticaNeue") {
        Ok(face) => face,
        Err(e) => {
            eprintln!("No usable font on this machine ({}); skipping.", e);
            return;
        }
    };
    let mut text = TextRenderer::new(face);

    for artwork in Artwork::ALL {
        let plain = artwork.render(&mut TextRenderer::headless()).expect("render");
        let lettered = artwork.render(&mut text).expect("render");
        assert_ne!(
            plain.as_image(),
            lettered.as_image(),
            "{} should differ once text is drawn",
            artwork
        );
    }
}

#[test]
fn report_is_written_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = OutputLayout::new(dir.path());
    let canvas = Artwork::Banner
        .render(&mut TextRenderer::headless())
        .expect("render");

    let mut report = cognify_art::AssetReport::default();
    report.push(cognify_art::ArtworkReport {
        artwork: Artwork::Banner,
        width: canvas.width(),
        height: canvas.height(),
        font: None,
        assets: Artwork::Banner.publish(&canvas, &layout).expect("publish"),
    });

    let path = dir.path().join("reports").join("run.json");
    report.write_to_path(&path).expect("write report");
    let parsed: cognify_art::AssetReport =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
    assert_eq!(parsed, report);
}
