//! Gradient fills

use crate::color::Color;
use crate::primitives::{Point, Size};

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64, // 0.0 to 1.0
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Gradient type
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    /// Interpolates along `start -> end`; points beyond either end take the
    /// end color.
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// `t = x / extent.width * x_weight + y / extent.height * y_weight`.
    ///
    /// `t` is left unclamped and may run past `to`; every channel is then
    /// truncated and clamped into `[floor, ceil]`.
    Weighted {
        extent: Size,
        x_weight: f64,
        y_weight: f64,
        from: Color,
        to: Color,
        floor: Color,
        ceil: Color,
    },
}

impl Gradient {
    /// Create a simple linear gradient between two colors
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Color at pixel `(x, y)`
    pub fn sample(&self, x: f64, y: f64) -> Color {
        match self {
            Gradient::Linear { start, end, stops } => {
                let dx = end.x as f64 - start.x as f64;
                let dy = end.y as f64 - start.y as f64;
                let len_sq = dx * dx + dy * dy;
                let t = if len_sq == 0.0 {
                    0.0
                } else {
                    ((x - start.x as f64) * dx + (y - start.y as f64) * dy) / len_sq
                };
                sample_stops(stops, t.clamp(0.0, 1.0))
            }
            Gradient::Weighted {
                extent,
                x_weight,
                y_weight,
                from,
                to,
                floor,
                ceil,
            } => {
                let t = (x / extent.width as f64) * x_weight + (y / extent.height as f64) * y_weight;
                Color::lerp_truncated(*from, *to, t).clamp(*floor, *ceil)
            }
        }
    }
}

fn sample_stops(stops: &[GradientStop], t: f64) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= 0.0 {
                return b.color;
            }
            // Keep the two-stop case as `from + (to - from) * t` exactly
            let local = if a.offset == 0.0 && b.offset == 1.0 {
                t
            } else {
                (t - a.offset) / span
            };
            return Color::lerp_truncated(a.color, b.color, local);
        }
    }
    last.color
}
