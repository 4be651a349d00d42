// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::RefCell;

use hashbrown::HashMap;
use nonogram_grid::CellIdx;
use nonogram_layout::{PixelRect, RectAdjust};

use crate::CellGeometry;

/// Memoized cell rectangles for one geometry.
///
/// Renderers ask for the same rectangles on every frame, so they are
/// computed once per `(row, col)` and kept until the geometry changes.
/// Lookups take `&self`; entries live behind a [`RefCell`], which keeps the
/// cache single-threaded.
///
/// The cache never outlives its geometry: [`CellRectCache::set_geometry`]
/// clears it when the geometry differs, and [`CellRectCache::invalidate`]
/// clears it unconditionally.
#[derive(Debug, Default)]
pub struct CellRectCache {
    geometry: CellGeometry,
    rects: RefCell<HashMap<CellIdx, PixelRect>>,
}

impl CellRectCache {
    /// Creates an empty cache for `geometry`.
    #[must_use]
    pub fn new(geometry: CellGeometry) -> Self {
        Self {
            geometry,
            rects: RefCell::new(HashMap::new()),
        }
    }

    /// Geometry the cached rectangles were computed from.
    #[must_use]
    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    /// Switches to a new geometry, dropping every cached rectangle if it changed.
    pub fn set_geometry(&mut self, geometry: CellGeometry) {
        if self.geometry == geometry {
            return;
        }
        self.geometry = geometry;
        self.invalidate();
    }

    /// Drops every cached rectangle.
    pub fn invalidate(&mut self) {
        self.rects.get_mut().clear();
    }

    /// Rectangle of cell `idx`, relative to the panel interior.
    ///
    /// Indices are not bounds checked; callers usually only ask for cells
    /// they are about to draw.
    #[must_use]
    pub fn cell_rect(&self, idx: CellIdx) -> PixelRect {
        if let Some(rect) = self.rects.borrow().get(&idx) {
            return *rect;
        }
        let rect = self.geometry.cell_rect(idx);
        self.rects.borrow_mut().insert(idx, rect);
        rect
    }

    /// Rectangle of cell `idx` with a caller-supplied adjustment applied.
    #[must_use]
    pub fn cell_rect_with(&self, idx: CellIdx, adjust: RectAdjust) -> PixelRect {
        self.cell_rect(idx).adjust(adjust)
    }

    /// Number of cached rectangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.borrow().len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.borrow().is_empty()
    }
}
