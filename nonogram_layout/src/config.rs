// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Cells are grouped in runs of this many; a thicker separator line is drawn
/// between groups.
pub const SEPARATOR_PERIOD: i32 = 5;

/// Smallest cell edge length, in pixels, that zooming out may reach.
pub const MINIMUM_CELL_SIZE: i32 = 4;

/// Smallest cell edge length the optimal-size computation ever returns.
pub const MINIMUM_OPTIMAL_CELL_SIZE: i32 = 2;

/// Border thicknesses, in pixels.
///
/// - `cell`: the line between two neighbouring cells.
/// - `outer`: the frame around each panel.
/// - `separator`: the line after every [`SEPARATOR_PERIOD`]th cell, which
///   replaces a regular cell line.
///
/// The separator is never thinner than the cell line; see [`Borders::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Borders {
    cell: i32,
    outer: i32,
    separator: i32,
}

impl Borders {
    /// Creates a border configuration.
    ///
    /// Negative thicknesses are treated as zero. A separator thinner than the
    /// cell line is logged and widened to the cell line, which renders it as
    /// a regular line.
    #[must_use]
    pub fn new(cell: i32, outer: i32, separator: i32) -> Self {
        let cell = cell.max(0);
        let outer = outer.max(0);
        let mut separator = separator.max(0);
        if separator < cell {
            tracing::warn!(
                separator,
                cell,
                "separator border is thinner than the cell border; drawing it as a cell border"
            );
            separator = cell;
        }
        Self {
            cell,
            outer,
            separator,
        }
    }

    /// Thickness of the line between neighbouring cells.
    #[must_use]
    pub const fn cell(self) -> i32 {
        self.cell
    }

    /// Thickness of the frame around each panel.
    #[must_use]
    pub const fn outer(self) -> i32 {
        self.outer
    }

    /// Thickness of the line after every fifth cell.
    #[must_use]
    pub const fn separator(self) -> i32 {
        self.separator
    }

    /// Extra pixels a separator adds over a regular cell line.
    #[must_use]
    pub const fn separator_extra(self) -> i32 {
        self.separator - self.cell
    }
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            cell: 1,
            outer: 2,
            separator: 2,
        }
    }
}

/// Space, in pixels, kept free around the puzzle when choosing a cell size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Margins {
    /// Left margin.
    pub left: i32,
    /// Right margin.
    pub right: i32,
    /// Top margin.
    pub top: i32,
    /// Bottom margin.
    pub bottom: i32,
}

impl Margins {
    /// The same margin on all four sides.
    #[must_use]
    pub const fn uniform(margin: i32) -> Self {
        Self {
            left: margin,
            right: margin,
            top: margin,
            bottom: margin,
        }
    }

    /// Sum of the left and right margins.
    #[must_use]
    pub const fn horizontal(self) -> i32 {
        self.left + self.right
    }

    /// Sum of the top and bottom margins.
    #[must_use]
    pub const fn vertical(self) -> i32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(40)
    }
}

/// Everything the layout engine needs besides the grid and the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutConfig {
    /// Border thicknesses.
    pub borders: Borders,
    /// Free space around the puzzle.
    pub margins: Margins,
    /// Smallest cell size zooming out may reach.
    pub min_cell_size: i32,
}

impl LayoutConfig {
    /// Replaces the border thicknesses.
    #[must_use]
    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    /// Replaces the margins.
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Replaces the minimum cell size.
    ///
    /// Values below [`MINIMUM_CELL_SIZE`] are raised to it.
    #[must_use]
    pub fn with_min_cell_size(mut self, min_cell_size: i32) -> Self {
        self.min_cell_size = min_cell_size.max(MINIMUM_CELL_SIZE);
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            borders: Borders::default(),
            margins: Margins::default(),
            min_cell_size: MINIMUM_CELL_SIZE,
        }
    }
}
