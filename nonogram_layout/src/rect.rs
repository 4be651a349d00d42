// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

/// An axis-aligned rectangle in whole device pixels.
///
/// Layout happens on the integer pixel grid so that borders and separators
/// land on exact pixels. Convert with [`PixelRect::to_kurbo`] (or
/// [`PixelRect::to_kurbo_at`] to apply a fractional pan offset) when handing
/// geometry to a renderer.
///
/// `width` and `height` are never negative for rectangles produced by this
/// crate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl PixelRect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a rectangle from its origin and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right-most pixel column.
    #[must_use]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom-most pixel row.
    #[must_use]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns `true` if pixel `(x, y)` lies inside (right and bottom edges excluded).
    #[must_use]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Smallest rectangle covering both `self` and `other`.
    ///
    /// Empty rectangles do not contribute.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// Moves the rectangle by `(dx, dy)`.
    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrinks every side by `amount` pixels, never below zero size.
    #[must_use]
    pub fn inset(self, amount: i32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2 * amount).max(0),
            (self.height - 2 * amount).max(0),
        )
    }

    /// Applies a caller-supplied `(dx, dy, dw, dh)` adjustment.
    #[must_use]
    pub const fn adjust(self, by: RectAdjust) -> Self {
        Self::new(
            self.x + by.dx,
            self.y + by.dy,
            self.width + by.dw,
            self.height + by.dh,
        )
    }

    /// Origin as a vector, for composing with pan offsets.
    #[must_use]
    pub fn origin_vec(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Center point in (possibly fractional) pixel coordinates.
    #[must_use]
    pub fn center(self) -> Point {
        self.to_kurbo().center()
    }

    /// Converts to a Kurbo rectangle.
    #[must_use]
    pub fn to_kurbo(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.right()),
            f64::from(self.bottom()),
        )
    }

    /// Converts to a Kurbo rectangle shifted by `offset`.
    #[must_use]
    pub fn to_kurbo_at(self, offset: Vec2) -> Rect {
        self.to_kurbo() + offset
    }
}

/// A `(dx, dy, dw, dh)` adjustment applied to a cell rectangle.
///
/// Typical uses are skipping a panel's outer border (`dx = dy = outer`) or
/// padding a symbol inside its cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RectAdjust {
    /// Added to `x`.
    pub dx: i32,
    /// Added to `y`.
    pub dy: i32,
    /// Added to `width`.
    pub dw: i32,
    /// Added to `height`.
    pub dh: i32,
}

impl RectAdjust {
    /// No adjustment.
    pub const NONE: Self = Self::new(0, 0, 0, 0);

    /// Creates an adjustment from its four components.
    #[must_use]
    pub const fn new(dx: i32, dy: i32, dw: i32, dh: i32) -> Self {
        Self { dx, dy, dw, dh }
    }

    /// Moves the rectangle without resizing it.
    #[must_use]
    pub const fn offset(dx: i32, dy: i32) -> Self {
        Self::new(dx, dy, 0, 0)
    }

    /// Shrinks every side by `amount` pixels.
    #[must_use]
    pub const fn pad(amount: i32) -> Self {
        Self::new(amount, amount, -2 * amount, -2 * amount)
    }
}

/// A width and height in whole device pixels, such as a viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelSize {
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl PixelSize {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The rectangle of this size anchored at the origin.
    #[must_use]
    pub const fn to_rect(self) -> PixelRect {
        PixelRect::new(0, 0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Vec2};

    use super::{PixelRect, RectAdjust};

    #[test]
    fn union_ignores_empty_rects() {
        let a = PixelRect::new(10, 10, 5, 5);
        let empty = PixelRect::new(0, 0, 0, 7);
        assert_eq!(a.union(empty), a);
        assert_eq!(empty.union(a), a);
        assert_eq!(
            a.union(PixelRect::new(0, 12, 3, 10)),
            PixelRect::new(0, 10, 15, 12)
        );
    }

    #[test]
    fn contains_excludes_far_edges() {
        let r = PixelRect::new(2, 3, 4, 5);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 7));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 8));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn inset_and_adjust() {
        let r = PixelRect::new(0, 0, 10, 6);
        assert_eq!(r.inset(2), PixelRect::new(2, 2, 6, 2));
        assert_eq!(r.inset(4), PixelRect::new(4, 4, 2, 0));
        assert_eq!(r.adjust(RectAdjust::pad(1)), PixelRect::new(1, 1, 8, 4));
        assert_eq!(
            r.adjust(RectAdjust::offset(3, -1)),
            PixelRect::new(3, -1, 10, 6)
        );
    }

    #[test]
    fn kurbo_conversion_applies_offset() {
        let r = PixelRect::new(1, 2, 3, 4);
        assert_eq!(r.to_kurbo(), Rect::new(1.0, 2.0, 4.0, 6.0));
        assert_eq!(
            r.to_kurbo_at(Vec2::new(0.5, -2.0)),
            Rect::new(1.5, 0.0, 4.5, 4.0)
        );
    }
}
