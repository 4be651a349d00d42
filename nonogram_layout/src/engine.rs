// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use nonogram_grid::Grid;

use crate::{Borders, MINIMUM_OPTIMAL_CELL_SIZE, Margins, PixelRect, PixelSize, SEPARATOR_PERIOD};

/// Cell counts that drive the layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDims {
    /// Board rows.
    pub rows: usize,
    /// Board columns.
    pub cols: usize,
    /// Slot rows in the top (column clue) panel.
    pub clue_rows_top: usize,
    /// Slot columns in the left (row clue) panel.
    pub clue_cols_left: usize,
}

impl GridDims {
    /// Creates a set of dimensions.
    #[must_use]
    pub const fn new(rows: usize, cols: usize, clue_rows_top: usize, clue_cols_left: usize) -> Self {
        Self {
            rows,
            cols,
            clue_rows_top,
            clue_cols_left,
        }
    }

    /// Reads the dimensions of a puzzle.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self::new(
            grid.rows(),
            grid.cols(),
            grid.max_col_clues(),
            grid.max_row_clues(),
        )
    }
}

/// One of the three structural regions of the puzzle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    /// The playing board.
    Board,
    /// Column clues, above the board.
    TopClues,
    /// Row clues, left of the board.
    LeftClues,
}

impl Panel {
    /// All panels, in the order a renderer usually paints them.
    pub const ALL: [Self; 3] = [Self::Board, Self::TopClues, Self::LeftClues];
}

/// The cell matrix of a panel and which of its axes carry separators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PanelShape {
    /// Number of cell rows.
    pub rows: usize,
    /// Number of cell columns.
    pub cols: usize,
    /// Whether rows are grouped by separator lines (vertical axis).
    pub row_separators: bool,
    /// Whether columns are grouped by separator lines (horizontal axis).
    pub col_separators: bool,
}

/// Number of separator lines drawn between `cells` cells.
///
/// Separators only sit between groups; the line after the last cell is the
/// outer frame, so a 15-cell axis has two separators, not three.
#[must_use]
pub const fn separator_count(cells: i32) -> i32 {
    if cells <= 1 {
        0
    } else {
        (cells - 1) / SEPARATOR_PERIOD
    }
}

/// Total border pixels along one axis of a standalone panel with `cells`
/// cells: interior lines, separator extras, and the outer frame on both ends.
///
/// A panel without cells has no border at all.
#[must_use]
pub const fn border_total(cells: i32, borders: Borders, separators: bool) -> i32 {
    if cells <= 0 {
        return 0;
    }
    let mut total = (cells - 1) * borders.cell() + 2 * borders.outer();
    if separators {
        total += separator_count(cells) * borders.separator_extra();
    }
    total
}

/// Pixel extent along one axis of a panel with `cells` cells of `cell_size`.
#[must_use]
pub const fn panel_extent(cells: i32, cell_size: i32, borders: Borders, separators: bool) -> i32 {
    if cells <= 0 {
        return 0;
    }
    cells * cell_size + border_total(cells, borders, separators)
}

// A clue panel shares one outer edge with the board.
const fn shared_clue_border(cells: i32, borders: Borders) -> i32 {
    if cells <= 0 {
        0
    } else {
        (cells - 1) * borders.cell() + borders.outer()
    }
}

const fn shared_edge(extent: i32, borders: Borders) -> i32 {
    if extent > 0 { borders.outer() } else { 0 }
}

pub(crate) fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Computes the largest uniform cell size at which the board plus both clue
/// panels fit the viewport minus its margins.
///
/// The result is at least [`MINIMUM_OPTIMAL_CELL_SIZE`] and is not forced to
/// be even; callers apply zoom and evenness afterwards.
#[must_use]
pub fn compute_optimal_cell_size(
    dims: GridDims,
    borders: Borders,
    viewport: PixelSize,
    margins: Margins,
) -> i32 {
    let rows = to_i32(dims.rows);
    let cols = to_i32(dims.cols);
    let clue_rows = to_i32(dims.clue_rows_top);
    let clue_cols = to_i32(dims.clue_cols_left);

    let border_h = border_total(cols, borders, true) + shared_clue_border(clue_cols, borders);
    let border_v = border_total(rows, borders, true) + shared_clue_border(clue_rows, borders);

    let usable_w = viewport.width - margins.horizontal();
    let usable_h = viewport.height - margins.vertical();

    let cell_w = (usable_w - border_h).div_euclid((cols + clue_cols).max(1));
    let cell_h = (usable_h - border_v).div_euclid((rows + clue_rows).max(1));

    cell_w.min(cell_h).max(MINIMUM_OPTIMAL_CELL_SIZE)
}

/// Rectangles of the three panels and their common parent.
///
/// `board`, `top_clues` and `left_clues` are relative to the parent's
/// top-left corner. `parent` itself is in viewport coordinates, centered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PanelRects {
    /// The playing board.
    pub board: PixelRect,
    /// Column clues, directly above the board.
    pub top_clues: PixelRect,
    /// Row clues, directly left of the board.
    pub left_clues: PixelRect,
    /// Bounding box of the three panels.
    pub parent: PixelRect,
}

impl PanelRects {
    /// Parent-relative rectangle of a panel.
    #[must_use]
    pub fn panel(&self, panel: Panel) -> PixelRect {
        match panel {
            Panel::Board => self.board,
            Panel::TopClues => self.top_clues,
            Panel::LeftClues => self.left_clues,
        }
    }
}

/// Computes the panel rectangles for a given cell size.
///
/// The board is anchored to the bottom-right of the parent. The top clue
/// panel spans the board's columns at `y = 0`; the left clue panel spans the
/// board's rows at `x = 0`. Each clue panel overlaps the board by one outer
/// border (the edge they share). A panel without clue slots has zero extent
/// and no shared edge.
#[must_use]
pub fn compute_rects(
    cell_size: i32,
    borders: Borders,
    dims: GridDims,
    viewport: PixelSize,
) -> PanelRects {
    let board_w = panel_extent(to_i32(dims.cols), cell_size, borders, true);
    let board_h = panel_extent(to_i32(dims.rows), cell_size, borders, true);
    let left_w = panel_extent(to_i32(dims.clue_cols_left), cell_size, borders, false);
    let top_h = panel_extent(to_i32(dims.clue_rows_top), cell_size, borders, false);

    let parent_w = board_w + left_w - shared_edge(left_w, borders);
    let parent_h = board_h + top_h - shared_edge(top_h, borders);
    let parent = PixelRect::new(
        (viewport.width - parent_w).div_euclid(2),
        (viewport.height - parent_h).div_euclid(2),
        parent_w,
        parent_h,
    );

    let board = PixelRect::new(parent_w - board_w, parent_h - board_h, board_w, board_h);
    let top_clues = PixelRect::new(board.x, 0, board_w, top_h);
    let left_clues = PixelRect::new(0, board.y, left_w, board_h);

    PanelRects {
        board,
        top_clues,
        left_clues,
        parent,
    }
}

/// A resolved layout: cell size, borders and panel rectangles.
///
/// This is the value the rendering side and the addressing side both read.
/// It is cheap to recompute and should be rebuilt whenever the grid, the
/// viewport or the zoom level changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    cell_size: i32,
    borders: Borders,
    dims: GridDims,
    rects: PanelRects,
}

impl Layout {
    /// Lays out a puzzle of `dims` with the given cell size, centered in `viewport`.
    #[must_use]
    pub fn new(cell_size: i32, borders: Borders, dims: GridDims, viewport: PixelSize) -> Self {
        Self {
            cell_size,
            borders,
            dims,
            rects: compute_rects(cell_size, borders, dims, viewport),
        }
    }

    /// Edge length of one cell.
    #[must_use]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Border thicknesses.
    #[must_use]
    pub fn borders(&self) -> Borders {
        self.borders
    }

    /// Cell counts.
    #[must_use]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// All panel rectangles.
    #[must_use]
    pub fn rects(&self) -> &PanelRects {
        &self.rects
    }

    /// Parent rectangle in viewport coordinates (before panning).
    #[must_use]
    pub fn parent_rect(&self) -> PixelRect {
        self.rects.parent
    }

    /// Parent-relative rectangle of a panel, outer frame included.
    #[must_use]
    pub fn panel_rect(&self, panel: Panel) -> PixelRect {
        self.rects.panel(panel)
    }

    /// Parent-relative rectangle of a panel's cell area (outer frame removed).
    #[must_use]
    pub fn panel_interior(&self, panel: Panel) -> PixelRect {
        self.panel_rect(panel).inset(self.borders.outer())
    }

    /// Cell matrix of a panel and which axes carry separators.
    ///
    /// Clue panels share the board's axis (and its separators) along their
    /// long side; along their short side they are never grouped.
    #[must_use]
    pub fn panel_shape(&self, panel: Panel) -> PanelShape {
        let d = self.dims;
        match panel {
            Panel::Board => PanelShape {
                rows: d.rows,
                cols: d.cols,
                row_separators: true,
                col_separators: true,
            },
            Panel::TopClues => PanelShape {
                rows: d.clue_rows_top,
                cols: d.cols,
                row_separators: false,
                col_separators: true,
            },
            Panel::LeftClues => PanelShape {
                rows: d.rows,
                cols: d.clue_cols_left,
                row_separators: true,
                col_separators: false,
            },
        }
    }
}
