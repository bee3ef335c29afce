//! Geometric primitives

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering the inclusive pixel box `(x0, y0)..=(x1, y1)`.
    ///
    /// Corners may be given in any order.
    pub fn from_corners_inclusive(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        Self {
            x: left as f32,
            y: top as f32,
            width: (right - left + 1) as f32,
            height: (bottom - top + 1) as f32,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// A rounded rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub corner_radius: CornerRadius,
}

impl RoundedRect {
    pub const fn new(rect: Rect, radius: f32) -> Self {
        Self {
            rect,
            corner_radius: CornerRadius::uniform(radius),
        }
    }
}

/// Corner radius for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Radius of the corner nearest to `offset` (relative to the rect center)
    pub fn for_quadrant(&self, offset: Point) -> f32 {
        match (offset.x >= 0.0, offset.y >= 0.0) {
            (false, false) => self.top_left,
            (true, false) => self.top_right,
            (true, true) => self.bottom_right,
            (false, true) => self.bottom_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_corners() {
        let r = Rect::from_corners_inclusive(275, 370, 405, 440);
        assert_eq!(r, Rect::new(275.0, 370.0, 131.0, 71.0));
        assert_eq!(Rect::from_corners_inclusive(405, 440, 275, 370), r);
    }

    #[test]
    fn test_quadrant_radius() {
        let radius = CornerRadius {
            top_left: 1.0,
            top_right: 2.0,
            bottom_right: 3.0,
            bottom_left: 4.0,
        };
        assert_eq!(radius.for_quadrant(Point::new(-1.0, -1.0)), 1.0);
        assert_eq!(radius.for_quadrant(Point::new(1.0, -1.0)), 2.0);
        assert_eq!(radius.for_quadrant(Point::new(1.0, 1.0)), 3.0);
        assert_eq!(radius.for_quadrant(Point::new(-1.0, 1.0)), 4.0);
    }
}
