// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use nonogram_grid::{CellIdx, ClueGrid, Grid};
use nonogram_layout::{Borders, Layout, Panel, PixelRect, SEPARATOR_PERIOD};

/// Pixel pitch along one axis of a panel.
///
/// Cells are `cell_size` wide and separated by `cell_border` pixels, except
/// after every [`SEPARATOR_PERIOD`]th cell where the line is
/// `separator_extra` pixels thicker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AxisGeometry {
    /// Edge length of one cell.
    pub cell_size: i32,
    /// Thickness of a regular line between cells.
    pub cell_border: i32,
    /// Extra thickness of a separator line; zero when the axis is not grouped.
    pub separator_extra: i32,
}

impl AxisGeometry {
    /// Creates an axis description.
    #[must_use]
    pub const fn new(cell_size: i32, cell_border: i32, separator_extra: i32) -> Self {
        Self {
            cell_size,
            cell_border,
            separator_extra,
        }
    }

    /// Axis geometry for `cell_size` and `borders`, with or without separators.
    #[must_use]
    pub const fn from_borders(cell_size: i32, borders: Borders, separators: bool) -> Self {
        let extra = if separators {
            borders.separator_extra()
        } else {
            0
        };
        Self::new(cell_size, borders.cell(), extra)
    }

    /// Distance between the leading edges of two neighbouring cells in one group.
    #[must_use]
    pub const fn pitch(self) -> i32 {
        self.cell_size + self.cell_border
    }

    /// Width of one full group of cells, including its trailing separator.
    #[must_use]
    pub const fn group_width(self) -> i32 {
        SEPARATOR_PERIOD * self.pitch() + self.separator_extra
    }

    /// Leading edge of cell `index`, relative to the panel interior.
    #[must_use]
    pub const fn offset_of(self, index: i32) -> i32 {
        index * self.pitch() + index.div_euclid(SEPARATOR_PERIOD) * self.separator_extra
    }

    /// Index of the cell covering pixel `offset`, relative to the panel interior.
    ///
    /// Negative offsets map to negative indices (floor division, so one pixel
    /// before the first cell is `-1`). Pixels inside a separator snap to the
    /// last cell of the group they close. Results are not bounds checked.
    #[must_use]
    pub fn index_at(self, offset: i32) -> i32 {
        let pitch = self.pitch().max(1);
        let group = self.group_width().max(1);
        let group_index = offset.div_euclid(group);
        let local = offset - group_index * group;
        let within = (local / pitch).min(SEPARATOR_PERIOD - 1);
        group_index * SEPARATOR_PERIOD + within
    }
}

/// Two-axis cell geometry of one panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellGeometry {
    /// Vertical axis (rows).
    pub rows: AxisGeometry,
    /// Horizontal axis (columns).
    pub cols: AxisGeometry,
}

impl CellGeometry {
    /// Creates a geometry from its two axes.
    #[must_use]
    pub const fn new(rows: AxisGeometry, cols: AxisGeometry) -> Self {
        Self { rows, cols }
    }

    /// Geometry of `panel` in `layout`.
    ///
    /// The board is grouped along both axes; each clue panel only along the
    /// axis it shares with the board.
    #[must_use]
    pub fn for_panel(layout: &Layout, panel: Panel) -> Self {
        let shape = layout.panel_shape(panel);
        let cs = layout.cell_size();
        let borders = layout.borders();
        Self::new(
            AxisGeometry::from_borders(cs, borders, shape.row_separators),
            AxisGeometry::from_borders(cs, borders, shape.col_separators),
        )
    }

    /// Rectangle of cell `idx`, relative to the panel interior.
    #[must_use]
    pub fn cell_rect(&self, idx: CellIdx) -> PixelRect {
        PixelRect::new(
            self.cols.offset_of(idx.col),
            self.rows.offset_of(idx.row),
            self.cols.cell_size,
            self.rows.cell_size,
        )
    }

    /// Cell covering interior-relative pixel `(x, y)`.
    #[must_use]
    pub fn index_at(&self, x: i32, y: i32) -> CellIdx {
        CellIdx::new(self.rows.index_at(y), self.cols.index_at(x))
    }
}

/// Maps a pointer position to the cell under it.
///
/// `interior_origin` is the top-left corner of the panel's cell area (outer
/// border already stripped) in the same space as `point`, pan included. The
/// position is floored to whole pixels first, so fractional positions left
/// of or above the panel still land on negative indices.
///
/// Out-of-range results are expected near the panel edges; check them with
/// [`is_valid_cell_index`] or [`is_valid_clue_index`].
#[must_use]
pub fn screen_to_cell_index(
    point: Point,
    interior_origin: Point,
    geometry: &CellGeometry,
) -> CellIdx {
    let local = (point - interior_origin.to_vec2()).floor();
    geometry.index_at(saturate(local.x), saturate(local.y))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float to int casts saturate; values are already floored"
)]
fn saturate(v: f64) -> i32 {
    v as i32
}

/// Returns `true` if `idx` addresses a board cell of `grid`.
#[must_use]
pub fn is_valid_cell_index(idx: CellIdx, grid: &Grid) -> bool {
    grid.contains(idx)
}

/// Returns `true` if `idx` addresses a slot of the clue panel `clues`.
///
/// Padding slots count as valid; use [`ClueGrid::has_clue`] to ask whether
/// a slot holds a number.
#[must_use]
pub fn is_valid_clue_index(idx: CellIdx, clues: &ClueGrid) -> bool {
    clues.contains(idx)
}
