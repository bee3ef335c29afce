//! Color types and utilities

/// RGBA color with u8 components (0-255)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b], dropping alpha
    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Interpolate each channel as `from + (to - from) * t`, truncating toward zero.
    ///
    /// `t` is not clamped, so values outside `0..=1` extrapolate. The result
    /// saturates at the u8 range.
    pub fn lerp_truncated(from: Color, to: Color, t: f64) -> Color {
        let channel = |a: u8, b: u8| -> u8 {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.trunc().clamp(0.0, 255.0) as u8
        };
        Color {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
            a: channel(from.a, to.a),
        }
    }

    /// Clamp each channel into `[floor, ceil]`.
    ///
    /// A channel whose floor exceeds its ceiling resolves to the ceiling.
    pub fn clamp(self, floor: Color, ceil: Color) -> Color {
        let channel = |v: u8, lo: u8, hi: u8| v.max(lo).min(hi);
        Color {
            r: channel(self.r, floor.r, ceil.r),
            g: channel(self.g, floor.g, ceil.g),
            b: channel(self.b, floor.b, ceil.b),
            a: channel(self.a, floor.a, ceil.a),
        }
    }

    /// Composite this color over an opaque destination pixel.
    ///
    /// `coverage` scales the color's own alpha; 255 with an opaque color
    /// replaces the destination.
    pub fn blend_over(self, dst: [u8; 3], coverage: u8) -> [u8; 3] {
        let alpha = (coverage as u32 * self.a as u32 + 127) / 255;
        if alpha == 0 {
            return dst;
        }
        if alpha >= 255 {
            return self.to_rgb8();
        }
        let mix = |d: u8, s: u8| -> u8 {
            ((s as u32 * alpha + d as u32 * (255 - alpha) + 127) / 255) as u8
        };
        [mix(dst[0], self.r), mix(dst[1], self.g), mix(dst[2], self.b)]
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color::rgb(rgb[0], rgb[1], rgb[2])
    }
}
