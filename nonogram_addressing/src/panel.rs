// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use nonogram_grid::CellIdx;
use nonogram_layout::{Layout, Panel, PixelRect, RectAdjust};

use crate::{CellGeometry, CellRectCache, screen_to_cell_index};

/// Addressing for one panel of a laid-out puzzle.
///
/// Combines the panel's cell geometry, the position of its cell area inside
/// the parent rectangle, and a [`CellRectCache`]. Rebuild it with
/// [`PanelAddressing::relayout`] whenever the [`Layout`] is recomputed.
///
/// Coordinates come in three flavours:
/// - *interior*: relative to the panel's cell area (outer frame stripped),
/// - *parent*: relative to the parent rectangle's top-left corner,
/// - *screen*: handled by the view transform, which maps screen positions to
///   parent positions before they reach this type.
#[derive(Debug)]
pub struct PanelAddressing {
    panel: Panel,
    interior: PixelRect,
    cache: CellRectCache,
}

impl PanelAddressing {
    /// Creates addressing for `panel` of `layout`.
    #[must_use]
    pub fn new(layout: &Layout, panel: Panel) -> Self {
        Self {
            panel,
            interior: layout.panel_interior(panel),
            cache: CellRectCache::new(CellGeometry::for_panel(layout, panel)),
        }
    }

    /// Picks up a recomputed layout and drops every cached rectangle.
    pub fn relayout(&mut self, layout: &Layout) {
        self.interior = layout.panel_interior(self.panel);
        self.cache.set_geometry(CellGeometry::for_panel(layout, self.panel));
        self.cache.invalidate();
    }

    /// The panel this addresses.
    #[must_use]
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Parent-relative rectangle of the panel's cell area.
    #[must_use]
    pub fn interior(&self) -> PixelRect {
        self.interior
    }

    /// Current cell geometry.
    #[must_use]
    pub fn geometry(&self) -> CellGeometry {
        self.cache.geometry()
    }

    /// The rectangle cache.
    #[must_use]
    pub fn cache(&self) -> &CellRectCache {
        &self.cache
    }

    /// Interior-relative rectangle of cell `idx`.
    #[must_use]
    pub fn cell_rect(&self, idx: CellIdx) -> PixelRect {
        self.cache.cell_rect(idx)
    }

    /// Interior-relative rectangle of cell `idx`, adjusted.
    #[must_use]
    pub fn cell_rect_with(&self, idx: CellIdx, adjust: RectAdjust) -> PixelRect {
        self.cache.cell_rect_with(idx, adjust)
    }

    /// Parent-relative rectangle of cell `idx`.
    #[must_use]
    pub fn cell_rect_in_parent(&self, idx: CellIdx) -> PixelRect {
        self.cell_rect(idx).translate(self.interior.x, self.interior.y)
    }

    /// Cell under a parent-relative point. Not bounds checked.
    #[must_use]
    pub fn index_at(&self, parent_point: Point) -> CellIdx {
        let origin = Point::new(f64::from(self.interior.x), f64::from(self.interior.y));
        screen_to_cell_index(parent_point, origin, &self.cache.geometry())
    }
}
