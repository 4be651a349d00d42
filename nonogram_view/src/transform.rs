// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use nonogram_layout::{MINIMUM_CELL_SIZE, PixelRect};

/// Zoom and pan state of an interactive nonogram view.
///
/// Zoom is an integer offset added to the layout's optimal cell size; it is
/// always moved in even steps so that the resolved cell size stays even.
/// Pan is a free translation in screen pixels applied on top of the
/// centered parent rectangle. Pan is never clamped: the puzzle may be
/// dragged fully off-screen.
#[derive(Clone, Debug)]
pub struct ViewTransform {
    zoom_offset: i32,
    min_cell_size: i32,
    pan: Vec2,
    pan_drag: Option<PanDrag>,
}

// Pointer and pan recorded when a pan gesture starts.
#[derive(Copy, Clone, Debug, PartialEq)]
struct PanDrag {
    start_pos: Point,
    pan_at_start: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(MINIMUM_CELL_SIZE)
    }
}

impl ViewTransform {
    /// Creates an unzoomed, unpanned view.
    ///
    /// `min_cell_size` is raised to [`MINIMUM_CELL_SIZE`] if smaller.
    #[must_use]
    pub fn new(min_cell_size: i32) -> Self {
        Self {
            zoom_offset: 0,
            min_cell_size: min_cell_size.max(MINIMUM_CELL_SIZE),
            pan: Vec2::ZERO,
            pan_drag: None,
        }
    }

    /// Rounds a zoom delta toward negative infinity onto an even number.
    ///
    /// `3` becomes `2`, `-3` becomes `-4` and `-1` becomes `-2`.
    #[must_use]
    pub const fn even_zoom_step(delta: i32) -> i32 {
        delta - delta.rem_euclid(2)
    }

    /// Current zoom offset in pixels per cell.
    #[must_use]
    pub fn zoom_offset(&self) -> i32 {
        self.zoom_offset
    }

    /// Smallest cell size zooming out may reach.
    #[must_use]
    pub fn min_cell_size(&self) -> i32 {
        self.min_cell_size
    }

    /// Adds an even-rounded `delta` to the zoom offset and returns the step applied.
    ///
    /// The offset is only clamped by [`ViewTransform::resolve_cell_size`],
    /// which callers run as part of every relayout.
    pub fn zoom(&mut self, delta: i32) -> i32 {
        let step = Self::even_zoom_step(delta);
        self.zoom_offset = self.zoom_offset.saturating_add(step);
        step
    }

    /// Resolves the cell size to draw with, given the layout's optimal size.
    ///
    /// The zoom offset is first clamped so that the cell size cannot fall
    /// below the minimum; an odd result is then decremented. The returned
    /// size is always even and at least [`MINIMUM_CELL_SIZE`].
    pub fn resolve_cell_size(&mut self, optimal: i32) -> i32 {
        let min_offset = self.min_cell_size - optimal;
        self.zoom_offset = self.zoom_offset.max(min_offset);
        let cell = optimal.saturating_add(self.zoom_offset);
        if cell % 2 != 0 { cell - 1 } else { cell }
    }

    /// Resets zoom and pan, ending any pan gesture.
    pub fn reset(&mut self) {
        self.zoom_offset = 0;
        self.pan = Vec2::ZERO;
        self.pan_drag = None;
    }

    /// Current pan offset in screen pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Replaces the pan offset.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Starts a pan gesture at pointer position `pos`.
    pub fn start_pan(&mut self, pos: Point) {
        self.pan_drag = Some(PanDrag {
            start_pos: pos,
            pan_at_start: self.pan,
        });
    }

    /// Moves the pan with the pointer.
    ///
    /// The new pan is the pan at gesture start plus the total pointer
    /// movement since then. Returns `true` if the pan changed. Outside a pan
    /// gesture this does nothing.
    pub fn update_pan(&mut self, pos: Point) -> bool {
        let Some(drag) = self.pan_drag else {
            return false;
        };
        let pan = drag.pan_at_start + (pos - drag.start_pos);
        if pan == self.pan {
            return false;
        }
        self.pan = pan;
        true
    }

    /// Ends the pan gesture, keeping the current pan.
    pub fn end_pan(&mut self) {
        self.pan_drag = None;
    }

    /// Returns `true` while a pan gesture is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_drag.is_some()
    }

    /// Screen position of the parent rectangle's top-left corner.
    #[must_use]
    pub fn parent_origin(&self, parent: PixelRect) -> Vec2 {
        parent.origin_vec() + self.pan
    }

    /// Maps a parent-relative rectangle to screen space.
    #[must_use]
    pub fn to_screen_rect(&self, parent: PixelRect, rect: PixelRect) -> Rect {
        rect.to_kurbo_at(self.parent_origin(parent))
    }

    /// Maps a screen position to parent-relative coordinates.
    #[must_use]
    pub fn to_parent_point(&self, parent: PixelRect, screen: Point) -> Point {
        screen - self.parent_origin(parent)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewTransformDebugInfo {
        ViewTransformDebugInfo {
            zoom_offset: self.zoom_offset,
            min_cell_size: self.min_cell_size,
            pan: self.pan,
            panning: self.is_panning(),
            pan_start: self.pan_drag.map(|d| d.start_pos),
        }
    }
}

/// Debug snapshot of a [`ViewTransform`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransformDebugInfo {
    /// Current zoom offset.
    pub zoom_offset: i32,
    /// Minimum cell size.
    pub min_cell_size: i32,
    /// Current pan offset in screen pixels.
    pub pan: Vec2,
    /// Whether a pan gesture is active.
    pub panning: bool,
    /// Pointer position at which the active pan gesture started.
    pub pan_start: Option<Point>,
}
