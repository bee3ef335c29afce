//! Social preview
//!
//! Left-aligned card for link unfurls: a standard badge with a rule, the
//! two-tone title, a subtitle and a row of topic pills.

use cognify_paint::{Canvas, Color, Gradient, Point, Rect, RoundedRect, Size, Stroke};
use cognify_text::TextRenderer;

use crate::layout::{PillRow, PillSlot};
use crate::{Result, HEIGHT, WIDTH};

const W: i32 = WIDTH as i32;
const H: i32 = HEIGHT as i32;

const BACKGROUND: Color = Color::rgb(14, 17, 23);
const MARGIN: i32 = 70;

/// Width of the horizontal blocks the background gradient is painted in
pub const GRADIENT_STEP: u32 = 4;

const BADGE: &str = "AGENT SKILLS OPEN STANDARD";
const BADGE_Y: i32 = 160;
const TITLE_Y: i32 = 220;
const TITLE_SIZE: f32 = 72.0;

/// Topic labels shown as pills under the subtitle
pub const TOPICS: [&str; 6] = [
    "17 Chapters",
    "82K Words",
    "4 MicroSims",
    "Quality Scoring",
    "Meta-Skill Routing",
    "Pipeline Orchestration",
];

/// Background gradient: darkens toward the bottom right, clamped per channel
pub fn background_gradient() -> Gradient {
    Gradient::Weighted {
        extent: Size::new(W as f32, H as f32),
        x_weight: 0.6,
        y_weight: 0.8,
        from: Color::rgb(18, 22, 32),
        to: Color::rgb(10, 13, 20),
        floor: Color::rgb(10, 12, 18),
        ceil: Color::rgb(25, 28, 38),
    }
}

/// Render the social preview
pub fn render_social_preview(text: &mut TextRenderer) -> Result<Canvas> {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
    canvas.fill_gradient_coarse(
        Rect::new(0.0, 0.0, W as f32, H as f32),
        &background_gradient(),
        GRADIENT_STEP,
    );

    draw_badge(&mut canvas, text)?;

    let blue = text.draw(
        &mut canvas,
        MARGIN,
        TITLE_Y,
        "Cognify",
        TITLE_SIZE,
        Color::rgb(60, 150, 255),
    )?;
    text.draw(
        &mut canvas,
        MARGIN + blue.width(),
        TITLE_Y,
        " Skill Developer",
        TITLE_SIZE,
        Color::WHITE,
    )?;

    text.draw(
        &mut canvas,
        MARGIN,
        TITLE_Y + 90,
        "The comprehensive guide to building Agent Skills",
        24.0,
        Color::rgb(140, 150, 165),
    )?;

    draw_topic_pills(&mut canvas, text)?;

    Ok(canvas)
}

fn draw_badge(canvas: &mut Canvas, text: &mut TextRenderer) -> Result<()> {
    const SIZE: f32 = 16.0;
    let extent = text.measure(BADGE, SIZE)?;

    let rule_y = (BADGE_Y + extent.height().div_euclid(2) + 12) as f32;
    canvas.draw_line(
        Point::new(MARGIN as f32, rule_y),
        Point::new((W - MARGIN) as f32, rule_y),
        Color::rgb(35, 45, 60),
        1,
    );

    // A single-label pill row, placed so the label lands on (MARGIN, BADGE_Y)
    let row = PillRow {
        x: MARGIN - 12,
        y: BADGE_Y - 6,
        pad_x: 12,
        pad_y: 6,
        gap: 0,
    };
    for slot in row.layout(&[extent]) {
        draw_pill(canvas, &slot, 4.0, Color::rgb(20, 30, 45), Color::rgb(40, 55, 75));
        text.draw(canvas, slot.text_x, slot.text_y, BADGE, SIZE, Color::rgb(120, 160, 200))?;
    }
    Ok(())
}

fn draw_topic_pills(canvas: &mut Canvas, text: &mut TextRenderer) -> Result<()> {
    const SIZE: f32 = 17.0;
    let extents = TOPICS
        .iter()
        .map(|label| text.measure(label, SIZE))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let row = PillRow {
        x: MARGIN,
        y: TITLE_Y + 155,
        pad_x: 16,
        pad_y: 8,
        gap: 12,
    };
    for (slot, label) in row.layout(&extents).iter().zip(TOPICS) {
        draw_pill(canvas, slot, 6.0, Color::rgb(22, 28, 38), Color::rgb(40, 50, 65));
        text.draw(canvas, slot.text_x, slot.text_y, label, SIZE, Color::rgb(180, 190, 205))?;
    }
    Ok(())
}

fn draw_pill(canvas: &mut Canvas, slot: &PillSlot, radius: f32, fill: Color, outline: Color) {
    canvas.fill_rounded_rect(
        &RoundedRect::new(slot.outer, radius),
        fill,
        Some(Stroke::new(outline, 1.0)),
    );
}
