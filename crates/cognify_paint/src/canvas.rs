//! Raster canvas - the immediate-mode drawing surface
//!
//! Every call paints straight into an opaque RGB buffer. Integer coordinates
//! address pixels; fractional geometry is only used by the anti-aliased
//! rounded-rectangle fill.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::color::Color;
use crate::gradient::Gradient;
use crate::primitives::{Point, Rect, RoundedRect};
use crate::Result;

/// Outline drawn inside the bounds of a shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// An opaque RGB raster
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background.to_rgb8())),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    // === Pixel access ===

    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }

    fn blend(&mut self, x: i64, y: i64, color: Color, coverage: u8) {
        if !self.in_bounds(x, y) {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        pixel.0 = color.blend_over(pixel.0, coverage);
    }

    /// Column/row span of `rect`, clipped to the canvas
    fn span(&self, rect: Rect) -> (std::ops::Range<i64>, std::ops::Range<i64>) {
        let x0 = (rect.x.floor() as i64).max(0);
        let y0 = (rect.y.floor() as i64).max(0);
        let x1 = (rect.right().ceil() as i64).min(self.width() as i64);
        let y1 = (rect.bottom().ceil() as i64).min(self.height() as i64);
        (x0..x1.max(x0), y0..y1.max(y0))
    }

    // === Fills ===

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (xs, ys) = self.span(rect);
        for y in ys {
            for x in xs.clone() {
                self.blend(x, y, color, 255);
            }
        }
    }

    /// Fill `rect` by sampling `gradient` at every pixel
    pub fn fill_gradient(&mut self, rect: Rect, gradient: &Gradient) {
        let (xs, ys) = self.span(rect);
        for y in ys {
            for x in xs.clone() {
                let color = gradient.sample(x as f64, y as f64);
                self.blend(x, y, color, 255);
            }
        }
    }

    /// Fill `rect` in horizontal blocks `step` pixels wide.
    ///
    /// Each block takes the gradient color at its leftmost pixel, so the
    /// result is constant within a block.
    pub fn fill_gradient_coarse(&mut self, rect: Rect, gradient: &Gradient, step: u32) {
        let step = step.max(1) as usize;
        let (xs, ys) = self.span(rect);
        for y in ys {
            for block in xs.clone().step_by(step) {
                let color = gradient.sample(block as f64, y as f64);
                let end = (block + step as i64).min(xs.end);
                for x in block..end {
                    self.blend(x, y, color, 255);
                }
            }
        }
    }

    // === Lines ===

    /// Draw a line with inclusive endpoints.
    ///
    /// Wide axis-aligned lines grow perpendicular to their direction by
    /// `(width - 1) / 2` pixels per side. For even widths the extra pixel
    /// lands below a rightward line and right of a downward one, and on the
    /// opposite side for leftward or upward lines. Wide diagonal lines stamp
    /// a `width x width` square at every step.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color, width: u32) {
        let (x0, y0) = (from.x.round() as i64, from.y.round() as i64);
        let (x1, y1) = (to.x.round() as i64, to.y.round() as i64);
        let width = width.max(1) as i64;
        let before = width / 2;

        if x0 == x1 && y0 == y1 {
            self.blend(x0, y0, color, 255);
            return;
        }
        if y0 == y1 {
            let (lo, hi) = wide_band(width, x1 > x0);
            for x in x0.min(x1)..=x0.max(x1) {
                for offset in lo..=hi {
                    self.blend(x, y0 + offset, color, 255);
                }
            }
            return;
        }
        if x0 == x1 {
            let (lo, hi) = wide_band(width, y1 > y0);
            for y in y0.min(y1)..=y0.max(y1) {
                for offset in lo..=hi {
                    self.blend(x0 + offset, y, color, 255);
                }
            }
            return;
        }

        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            for oy in 0..width {
                for ox in 0..width {
                    self.blend(x - before + ox, y - before + oy, color, 255);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    // === Shapes ===

    /// Fill a rounded rectangle with SDF anti-aliasing.
    ///
    /// The optional stroke is a band of `stroke.width` pixels along the inside
    /// of the shape edge. Pass `Color::TRANSPARENT` as `fill` for an outline only.
    pub fn fill_rounded_rect(&mut self, shape: &RoundedRect, fill: Color, stroke: Option<Stroke>) {
        let rect = shape.rect;
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let center = rect.center();
        let half = Point::new(rect.width / 2.0, rect.height / 2.0);
        let stroke = stroke.filter(|s| s.width > 0.0);

        let (xs, ys) = self.span(rect);
        for y in ys {
            for x in xs.clone() {
                let p = Point::new(x as f32 + 0.5 - center.x, y as f32 + 0.5 - center.y);
                let radius = shape
                    .corner_radius
                    .for_quadrant(p)
                    .min(half.x)
                    .min(half.y)
                    .max(0.0);
                let d = sd_rounded_box(p, half, radius);
                let outer = coverage(d);
                if outer <= 0.0 {
                    continue;
                }

                let dst = self.image.get_pixel(x as u32, y as u32).0;
                let rgb = match stroke {
                    Some(stroke) => {
                        let inner = coverage(d + stroke.width).min(outer);
                        composite(dst, fill, inner, stroke.color, outer - inner)
                    }
                    None => composite(dst, fill, outer, Color::TRANSPARENT, 0.0),
                };
                self.image.put_pixel(x as u32, y as u32, Rgb(rgb));
            }
        }
    }

    // === Masks ===

    /// Composite an 8-bit coverage mask (row-major, `width x height`) with its
    /// top-left corner at `(left, top)`. Parts outside the canvas are clipped.
    pub fn blend_mask(
        &mut self,
        left: i32,
        top: i32,
        width: u32,
        height: u32,
        mask: &[u8],
        color: Color,
    ) {
        let width = width as usize;
        if width == 0 {
            return;
        }
        for (row, line) in mask.chunks_exact(width).take(height as usize).enumerate() {
            for (col, &cov) in line.iter().enumerate() {
                if cov == 0 {
                    continue;
                }
                self.blend(left as i64 + col as i64, top as i64 + row as i64, color, cov);
            }
        }
    }

    // === Output ===

    /// Encode the canvas as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Write the canvas to `path` as PNG and return the file size in bytes
    pub fn save_png(&self, path: &Path) -> Result<u64> {
        let bytes = self.encode_png()?;
        std::fs::write(path, &bytes)?;
        tracing::debug!(
            "Encoded {}x{} PNG ({} bytes) to {}",
            self.width(),
            self.height(),
            bytes.len(),
            path.display()
        );
        Ok(bytes.len() as u64)
    }
}

/// Perpendicular offsets `(lo, hi)` covered by a wide axis-aligned line.
///
/// `forward` is true for lines drawn toward +x or +y.
fn wide_band(width: i64, forward: bool) -> (i64, i64) {
    let half = (width - 1) as f64 / 2.0;
    let up = (half + 0.5).floor() as i64;
    let down = (half - 0.5).ceil() as i64;
    if forward {
        (-down, up)
    } else {
        (-up, down)
    }
}

/// Signed distance from `p` (relative to the center) to a rounded box with
/// half extents `half`. Negative inside.
fn sd_rounded_box(p: Point, half: Point, radius: f32) -> f32 {
    let qx = p.x.abs() - half.x + radius;
    let qy = p.y.abs() - half.y + radius;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - radius
}

/// Pixel coverage for a signed distance sampled at the pixel center
fn coverage(d: f32) -> f32 {
    (0.5 - d).clamp(0.0, 1.0)
}

fn composite(dst: [u8; 3], fill: Color, fill_cov: f32, stroke: Color, stroke_cov: f32) -> [u8; 3] {
    let wf = fill_cov * fill.a as f32 / 255.0;
    let ws = stroke_cov * stroke.a as f32 / 255.0;
    let wb = (1.0 - wf - ws).max(0.0);
    let mix = |d: u8, f: u8, s: u8| -> u8 {
        (d as f32 * wb + f as f32 * wf + s as f32 * ws)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    [
        mix(dst[0], fill.r, stroke.r),
        mix(dst[1], fill.g, stroke.g),
        mix(dst[2], fill.b, stroke.b),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::rgb(10, 10, 10);
    const INK: Color = Color::rgb(200, 100, 50);

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(8, 4, BG);
        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 4);
        assert_eq!(canvas.pixel(7, 3), Some([10, 10, 10]));
        assert_eq!(canvas.pixel(8, 0), None);
    }

    #[test]
    fn test_horizontal_line_is_inclusive() {
        let mut canvas = Canvas::new(20, 5, BG);
        canvas.draw_line(Point::new(2.0, 1.0), Point::new(6.0, 1.0), INK, 1);
        assert_eq!(canvas.pixel(1, 1), Some(BG.to_rgb8()));
        assert_eq!(canvas.pixel(2, 1), Some(INK.to_rgb8()));
        assert_eq!(canvas.pixel(6, 1), Some(INK.to_rgb8()));
        assert_eq!(canvas.pixel(7, 1), Some(BG.to_rgb8()));
        assert_eq!(canvas.pixel(4, 0), Some(BG.to_rgb8()));
        assert_eq!(canvas.pixel(4, 2), Some(BG.to_rgb8()));
    }

    #[test]
    fn test_wide_vertical_line() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.draw_line(Point::new(5.0, 2.0), Point::new(5.0, 6.0), INK, 2);
        for y in 2..=6 {
            assert_eq!(canvas.pixel(4, y), Some(BG.to_rgb8()));
            assert_eq!(canvas.pixel(5, y), Some(INK.to_rgb8()));
            assert_eq!(canvas.pixel(6, y), Some(INK.to_rgb8()));
        }
        assert_eq!(canvas.pixel(5, 1), Some(BG.to_rgb8()));
        assert_eq!(canvas.pixel(5, 7), Some(BG.to_rgb8()));
    }

    #[test]
    fn test_wide_line_side_follows_direction() {
        let mut canvas = Canvas::new(12, 12, BG);
        // Upward: the extra column goes left
        canvas.draw_line(Point::new(5.0, 9.0), Point::new(5.0, 3.0), INK, 2);
        assert_eq!(canvas.pixel(4, 6), Some(INK.to_rgb8()));
        assert_eq!(canvas.pixel(5, 6), Some(INK.to_rgb8()));
        assert_eq!(canvas.pixel(6, 6), Some(BG.to_rgb8()));

        let mut canvas = Canvas::new(12, 12, BG);
        // Rightward: the extra row goes below
        canvas.draw_line(Point::new(2.0, 5.0), Point::new(9.0, 5.0), INK, 2);
        assert_eq!(canvas.pixel(6, 4), Some(BG.to_rgb8()));
        assert_eq!(canvas.pixel(6, 5), Some(INK.to_rgb8()));
        assert_eq!(canvas.pixel(6, 6), Some(INK.to_rgb8()));

        let mut canvas = Canvas::new(12, 12, BG);
        // Leftward: the extra row goes above
        canvas.draw_line(Point::new(9.0, 5.0), Point::new(2.0, 5.0), INK, 2);
        assert_eq!(canvas.pixel(6, 4), Some(INK.to_rgb8()));
        assert_eq!(canvas.pixel(6, 5), Some(INK.to_rgb8()));
        assert_eq!(canvas.pixel(6, 6), Some(BG.to_rgb8()));
    }

    #[test]
    fn test_odd_width_is_centered() {
        assert_eq!(wide_band(1, true), (0, 0));
        assert_eq!(wide_band(3, true), (-1, 1));
        assert_eq!(wide_band(3, false), (-1, 1));
        assert_eq!(wide_band(4, true), (-1, 2));
        assert_eq!(wide_band(4, false), (-2, 1));
    }

    #[test]
    fn test_diagonal_line_hits_both_ends() {
        let mut canvas = Canvas::new(10, 10, BG);
        canvas.draw_line(Point::new(1.0, 1.0), Point::new(8.0, 5.0), INK, 1);
        assert_eq!(canvas.pixel(1, 1), Some(INK.to_rgb8()));
        assert_eq!(canvas.pixel(8, 5), Some(INK.to_rgb8()));
    }

    #[test]
    fn test_line_clips_silently() {
        let mut canvas = Canvas::new(4, 4, BG);
        canvas.draw_line(Point::new(-10.0, 2.0), Point::new(10.0, 2.0), INK, 1);
        for x in 0..4 {
            assert_eq!(canvas.pixel(x, 2), Some(INK.to_rgb8()));
        }
    }

    #[test]
    fn test_coarse_gradient_is_blocky() {
        let mut canvas = Canvas::new(16, 2, BG);
        let gradient = Gradient::linear_simple(
            Point::new(0.0, 0.0),
            Point::new(16.0, 0.0),
            Color::BLACK,
            Color::rgb(160, 160, 160),
        );
        canvas.fill_gradient_coarse(Rect::new(0.0, 0.0, 16.0, 2.0), &gradient, 4);
        for block in (0..16).step_by(4) {
            let first = canvas.pixel(block, 0);
            for x in block..block + 4 {
                assert_eq!(canvas.pixel(x, 0), first);
            }
        }
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(4, 0), Some([40, 40, 40]));
        assert_eq!(canvas.pixel(15, 1), Some([120, 120, 120]));
    }

    #[test]
    fn test_rounded_rect_with_outline() {
        let mut canvas = Canvas::new(40, 30, BG);
        let fill = Color::rgb(25, 25, 32);
        let outline = Color::rgb(40, 40, 50);
        let shape = RoundedRect::new(Rect::from_corners_inclusive(5, 5, 34, 24), 6.0);
        canvas.fill_rounded_rect(&shape, fill, Some(Stroke::new(outline, 1.0)));

        // Straight edges are crisp: outline on the boundary, fill just inside
        assert_eq!(canvas.pixel(20, 5), Some(outline.to_rgb8()));
        assert_eq!(canvas.pixel(20, 24), Some(outline.to_rgb8()));
        assert_eq!(canvas.pixel(5, 15), Some(outline.to_rgb8()));
        assert_eq!(canvas.pixel(34, 15), Some(outline.to_rgb8()));
        assert_eq!(canvas.pixel(20, 6), Some(fill.to_rgb8()));
        assert_eq!(canvas.pixel(20, 15), Some(fill.to_rgb8()));
        // Outside untouched, including the cut-off corner
        assert_eq!(canvas.pixel(20, 4), Some(BG.to_rgb8()));
        assert_eq!(canvas.pixel(35, 15), Some(BG.to_rgb8()));
        assert_eq!(canvas.pixel(5, 5), Some(BG.to_rgb8()));
    }

    #[test]
    fn test_blend_mask_clips() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        let mask = [255u8, 0, 128, 255];
        canvas.blend_mask(3, 3, 2, 2, &mask, Color::WHITE);
        assert_eq!(canvas.pixel(3, 3), Some([255, 255, 255]));
        canvas.blend_mask(0, 0, 2, 2, &mask, Color::WHITE);
        assert_eq!(canvas.pixel(1, 0), Some([0, 0, 0]));
        assert_eq!(canvas.pixel(0, 1), Some([128, 128, 128]));
    }

    #[test]
    fn test_encode_png_signature() {
        let canvas = Canvas::new(3, 2, INK);
        let bytes = canvas.encode_png().expect("encode");
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
