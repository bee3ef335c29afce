//! Layout helpers shared by the artworks
//!
//! Coordinates are integer pixels. Centering floors like integer division
//! on the pixel grid, so an odd leftover pixel goes to the right side.

use cognify_paint::Rect;
use cognify_text::TextExtent;

/// Offset that centers `item` inside `container`, rounded toward negative
/// infinity (an oversized item gets a negative offset).
pub fn center_offset(container: i32, item: i32) -> i32 {
    (container - item).div_euclid(2)
}

/// Left edges of `count` equal-width items separated by `gap`, centered as
/// a group inside `container`.
pub fn row_origins(count: usize, item_width: i32, gap: i32, container: i32) -> Vec<i32> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as i32;
    let total = n * item_width + (n - 1) * gap;
    let start = center_offset(container, total);
    (0..n).map(|i| start + i * (item_width + gap)).collect()
}

/// A pill placed by [`PillRow`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillSlot {
    /// Outer box of the pill, inclusive of its far edge pixel
    pub outer: Rect,
    /// Draw origin for the label
    pub text_x: i32,
    pub text_y: i32,
}

/// Left-to-right row of pills sized to their labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillRow {
    pub x: i32,
    pub y: i32,
    pub pad_x: i32,
    pub pad_y: i32,
    pub gap: i32,
}

impl PillRow {
    /// Place one pill per measured label.
    ///
    /// A pill spans `(x, y)` to `(x + w + 2 * pad_x, y + h + 2 * pad_y)`
    /// inclusive, where `w x h` is the label extent; the next pill starts
    /// `gap` pixels after `x + w + 2 * pad_x`.
    pub fn layout(&self, labels: &[TextExtent]) -> Vec<PillSlot> {
        let mut x = self.x;
        labels
            .iter()
            .map(|extent| {
                let inner_w = extent.width() + self.pad_x * 2;
                let inner_h = extent.height() + self.pad_y * 2;
                let slot = PillSlot {
                    outer: Rect::from_corners_inclusive(x, self.y, x + inner_w, self.y + inner_h),
                    text_x: x + self.pad_x,
                    text_y: self.y + self.pad_y,
                };
                x += inner_w + self.gap;
                slot
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extent(width: i32, height: i32) -> TextExtent {
        TextExtent {
            left: 0,
            top: 3,
            right: width,
            bottom: 3 + height,
        }
    }

    #[test]
    fn test_center_offset_floors() {
        assert_eq!(center_offset(1280, 220), 530);
        assert_eq!(center_offset(1280, 221), 529);
        assert_eq!(center_offset(10, 13), -2);
    }

    #[test]
    fn test_stat_card_row() {
        assert_eq!(
            row_origins(5, 130, 20, 1280),
            vec![275, 425, 575, 725, 875]
        );
        assert!(row_origins(0, 130, 20, 1280).is_empty());
    }

    #[test]
    fn test_pills_flow_left_to_right() {
        let row = PillRow {
            x: 70,
            y: 375,
            pad_x: 16,
            pad_y: 8,
            gap: 12,
        };
        let slots = row.layout(&[extent(90, 13), extent(50, 17)]);
        assert_eq!(slots.len(), 2);

        assert_eq!(slots[0].outer, Rect::from_corners_inclusive(70, 375, 192, 404));
        assert_eq!((slots[0].text_x, slots[0].text_y), (86, 383));

        // 70 + 90 + 32 + 12
        assert_eq!(slots[1].outer.x, 204.0);
        assert_eq!(slots[1].outer, Rect::from_corners_inclusive(204, 375, 286, 408));
        assert_eq!(slots[1].text_x, 220);
    }
}
