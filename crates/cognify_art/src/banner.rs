//! Docs banner
//!
//! A dark, centred composition: wordmark, title and subtitle over a faint
//! vertical gradient, framed by scan lines and corner brackets, with a row
//! of stat cards and the supported-platform list underneath.

use cognify_paint::{Canvas, Color, Gradient, Point, Rect, RoundedRect, Stroke};
use cognify_text::{TextExtent, TextRenderer};

use crate::layout::{center_offset, row_origins};
use crate::{Result, HEIGHT, WIDTH};

const W: i32 = WIDTH as i32;
const H: i32 = HEIGHT as i32;

const BACKGROUND: Color = Color::rgb(12, 12, 16);
const BACKGROUND_BOTTOM: Color = Color::rgb(20, 20, 28);
const SCAN_LINE: Color = Color::rgb(28, 28, 36);
const BRACKET: Color = Color::rgb(50, 50, 62);
const DIVIDER: Color = Color::rgb(50, 50, 58);
const MUTED: Color = Color::rgb(70, 70, 78);

const BRAND_BLUE: Color = Color::rgb(0, 122, 255);
const BRAND_PURPLE: Color = Color::rgb(88, 86, 214);

const WORDMARK: &str = "C  O  G  N  I  F  Y";
const TITLE: &str = "Custom Skill Developer";
const SUBTITLE: &str = "The Comprehensive Guide to Building Agent Skills";
const STANDARD_LINE: &str = "Built to the agentskills.io open standard";
const META_LINE: &str = "Daniel Yarmoluk  |  Cognify  |  2026  |  Apache 2.0";

/// Platforms listed under the stat cards
pub const PLATFORMS: [&str; 7] = [
    "agentskills.io",
    "Claude Code",
    "Claude.ai",
    "VS Code",
    "Cursor",
    "Codex",
    "Gemini CLI",
];

/// One stat card: a big accent-coloured number over a small label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: Color,
}

pub const STAT_CARDS: [StatCard; 5] = [
    StatCard {
        value: "17",
        label: "Chapters",
        accent: BRAND_BLUE,
    },
    StatCard {
        value: "82K",
        label: "Words",
        accent: BRAND_PURPLE,
    },
    StatCard {
        value: "200",
        label: "Concepts",
        accent: Color::rgb(52, 199, 89),
    },
    StatCard {
        value: "20+",
        label: "Skills Built",
        accent: Color::rgb(255, 159, 10),
    },
    StatCard {
        value: "7",
        label: "Dimensions",
        accent: Color::WHITE,
    },
];

// Card geometry
const CARD_WIDTH: i32 = 130;
const CARD_HEIGHT: i32 = 70;
const CARD_GAP: i32 = 20;
const CARD_Y: i32 = 370;
const CARD_RADIUS: f32 = 8.0;
const CARD_FILL: Color = Color::rgb(25, 25, 32);
const CARD_OUTLINE: Color = Color::rgb(40, 40, 50);
const CARD_LABEL: Color = Color::rgb(120, 120, 125);

// Accent bar geometry
pub const ACCENT_BAR_WIDTH: i32 = 220;
pub const ACCENT_BAR_TOP: i32 = 175;
pub const ACCENT_BAR_BOTTOM: i32 = 178;

/// Render the docs banner
pub fn render_banner(text: &mut TextRenderer) -> Result<Canvas> {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);

    draw_background(&mut canvas);
    draw_scan_lines(&mut canvas);
    draw_corner_brackets(&mut canvas);
    draw_accent_bar(&mut canvas);

    draw_centered(&mut canvas, text, 130, WORDMARK, 22.0, BRAND_BLUE)?;
    draw_centered(&mut canvas, text, 195, TITLE, 52.0, Color::WHITE)?;
    draw_centered(&mut canvas, text, 268, SUBTITLE, 20.0, Color::rgb(174, 174, 178))?;
    draw_centered(&mut canvas, text, 300, STANDARD_LINE, 15.0, Color::rgb(99, 99, 102))?;

    canvas.draw_line(
        Point::new((W / 2 - 80) as f32, 340.0),
        Point::new((W / 2 + 80) as f32, 340.0),
        DIVIDER,
        1,
    );

    draw_stat_cards(&mut canvas, text)?;

    let platforms = PLATFORMS.join("  |  ");
    draw_centered(&mut canvas, text, 475, &platforms, 13.0, MUTED)?;
    draw_centered(&mut canvas, text, H - 50, META_LINE, 13.0, MUTED)?;

    Ok(canvas)
}

fn draw_background(canvas: &mut Canvas) {
    let gradient = Gradient::linear_simple(
        Point::ZERO,
        Point::new(0.0, H as f32),
        BACKGROUND,
        BACKGROUND_BOTTOM,
    );
    canvas.fill_gradient(Rect::new(0.0, 0.0, W as f32, H as f32), &gradient);
}

/// Rows of the two scan-line bands, top then bottom
pub fn scan_line_rows() -> impl Iterator<Item = i32> {
    (40..120).step_by(12).chain((H - 120..H - 40).step_by(12))
}

fn draw_scan_lines(canvas: &mut Canvas) {
    for y in scan_line_rows() {
        canvas.draw_line(
            Point::new(80.0, y as f32),
            Point::new((W - 80) as f32, y as f32),
            SCAN_LINE,
            1,
        );
    }
}

fn draw_corner_brackets(canvas: &mut Canvas) {
    const INSET_X: i32 = 60;
    const INSET_Y: i32 = 35;
    const ARM: i32 = 40;

    for (x, dx) in [(INSET_X, 1), (W - INSET_X, -1)] {
        for (y, dy) in [(INSET_Y, 1), (H - INSET_Y, -1)] {
            let corner = Point::new(x as f32, y as f32);
            canvas.draw_line(corner, Point::new(x as f32, (y + dy * ARM) as f32), BRACKET, 2);
            canvas.draw_line(corner, Point::new((x + dx * ARM) as f32, y as f32), BRACKET, 2);
        }
    }
}

fn draw_accent_bar(canvas: &mut Canvas) {
    let x = center_offset(W, ACCENT_BAR_WIDTH);
    let gradient = Gradient::linear_simple(
        Point::new(x as f32, 0.0),
        Point::new((x + ACCENT_BAR_WIDTH) as f32, 0.0),
        BRAND_BLUE,
        BRAND_PURPLE,
    );
    let bar = Rect::from_corners_inclusive(
        x,
        ACCENT_BAR_TOP,
        x + ACCENT_BAR_WIDTH - 1,
        ACCENT_BAR_BOTTOM,
    );
    canvas.fill_gradient(bar, &gradient);
}

fn draw_stat_cards(canvas: &mut Canvas, text: &mut TextRenderer) -> Result<()> {
    let origins = row_origins(STAT_CARDS.len(), CARD_WIDTH, CARD_GAP, W);

    for (card, x) in STAT_CARDS.iter().zip(origins) {
        let shape = RoundedRect::new(
            Rect::from_corners_inclusive(x, CARD_Y, x + CARD_WIDTH, CARD_Y + CARD_HEIGHT),
            CARD_RADIUS,
        );
        canvas.fill_rounded_rect(&shape, CARD_FILL, Some(Stroke::new(CARD_OUTLINE, 1.0)));

        let value = text.measure(card.value, 34.0)?;
        text.draw(
            canvas,
            x + center_offset(CARD_WIDTH, value.width()),
            CARD_Y + 8,
            card.value,
            34.0,
            card.accent,
        )?;

        let label = text.measure(card.label, 11.0)?;
        text.draw(
            canvas,
            x + center_offset(CARD_WIDTH, label.width()),
            CARD_Y + 48,
            card.label,
            11.0,
            CARD_LABEL,
        )?;
    }
    Ok(())
}

fn draw_centered(
    canvas: &mut Canvas,
    text: &mut TextRenderer,
    y: i32,
    content: &str,
    size: f32,
    color: Color,
) -> Result<TextExtent> {
    let extent = text.measure(content, size)?;
    let x = center_offset(W, extent.width());
    Ok(text.draw(canvas, x, y, content, size, color)?)
}
