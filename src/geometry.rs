// MIT/Apache2 License

use lyon_geom::Size;
use std::{cmp, convert::TryFrom};

/// Where the top-left corner of the mask sits, in the primary image's pixel coordinates.
///
/// Placements are not clamped. They may be negative or lie beyond the primary image entirely.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel coordinates, anchored at its top-left corner.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    #[inline]
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle at the origin covering an image of the given size.
    #[inline]
    pub fn from_size(size: Size<u32>) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Does this rectangle cover no pixels at all?
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the rightmost column.
    #[inline]
    pub fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// One past the bottom row.
    #[inline]
    pub fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// The overlap between two rectangles, or `None` if they share no pixels.
    pub fn intersection(self, other: Rectangle) -> Option<Rectangle> {
        let x1 = cmp::max(self.x, other.x);
        let y1 = cmp::max(self.y, other.y);
        let x2 = cmp::min(self.right(), other.right());
        let y2 = cmp::min(self.bottom(), other.bottom());

        if x2 <= i64::from(x1) || y2 <= i64::from(y1) {
            return None;
        }

        Some(Rectangle {
            x: x1,
            y: y1,
            width: u32::try_from(x2 - i64::from(x1)).ok()?,
            height: u32::try_from(y2 - i64::from(y1)).ok()?,
        })
    }
}
