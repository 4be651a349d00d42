// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use nonogram_grid::{CellIdx, Symbol};
use nonogram_layout::{Panel, RectAdjust};

use crate::{ClueDisplay, Editor, clue_panel, panel_axis};

/// Inset, in pixels, between a cell's edge and the symbol drawn in it.
#[must_use]
pub const fn symbol_padding(cell_size: i32) -> i32 {
    if cell_size <= 6 {
        0
    } else if cell_size < 18 {
        1
    } else if cell_size < 28 {
        2
    } else if cell_size < 50 {
        3
    } else {
        cell_size * 6 / 100
    }
}

/// What a cell shows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CellContent {
    /// A board cell.
    Symbol {
        /// Symbol to draw, draft preview applied.
        symbol: Symbol,
        /// The cell is part of the active draft.
        drafted: bool,
        /// Where the symbol goes: the cell rect minus [`symbol_padding`].
        symbol_rect: Rect,
    },
    /// A clue slot holding a number.
    Clue(ClueDisplay),
}

/// Drawing backend for [`Renderer`].
///
/// Rectangles are in screen pixels. Panels arrive before their cells, and
/// only cells that overlap the viewport are passed on.
pub trait RenderTarget {
    /// Draws the frame and background of a panel.
    fn panel(&mut self, panel: Panel, rect: Rect);

    /// Draws one cell.
    fn cell(&mut self, panel: Panel, idx: CellIdx, rect: Rect, content: CellContent);
}

/// Counts from one [`Renderer::render`] pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Panels handed to the target.
    pub panels: usize,
    /// Cells handed to the target.
    pub cells: usize,
    /// Cells skipped because they are outside the viewport.
    pub culled: usize,
}

/// Walks an [`Editor`]'s read-only state and feeds a [`RenderTarget`].
#[derive(Debug)]
pub struct Renderer<T> {
    target: T,
}

impl<T: RenderTarget> Renderer<T> {
    /// Creates a renderer drawing into `target`.
    #[must_use]
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// The render target.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The render target, mutably.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Gives the render target back.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Draws every panel and every visible cell of `editor`.
    pub fn render(&mut self, editor: &Editor) -> RenderStats {
        let visible = editor.viewport().to_rect().to_kurbo();
        let padding = RectAdjust::pad(symbol_padding(editor.cell_size()));
        let mut stats = RenderStats::default();

        for panel in Panel::ALL {
            let panel_rect = editor.panel_screen_rect(panel);
            if panel_rect.area() <= 0.0 {
                continue;
            }
            self.target.panel(panel, panel_rect);
            stats.panels += 1;

            let shape = editor.layout().panel_shape(panel);
            for row in 0..shape.rows {
                for col in 0..shape.cols {
                    let idx = CellIdx::new(to_i32(row), to_i32(col));
                    let rect = editor.cell_screen_rect(panel, idx);
                    if rect.intersect(visible).area() <= 0.0 {
                        stats.culled += 1;
                        continue;
                    }
                    let content = match panel_axis(panel) {
                        None => editor.cell_display(idx).map(|d| CellContent::Symbol {
                            symbol: d.symbol,
                            drafted: d.drafted,
                            symbol_rect: editor.cell_screen_rect_with(panel, idx, padding),
                        }),
                        Some(axis) => {
                            debug_assert_eq!(clue_panel(axis), panel, "panel and axis disagree");
                            editor.clue_display(axis, idx).map(CellContent::Clue)
                        }
                    };
                    // Padding slots have nothing to draw.
                    if let Some(content) = content {
                        self.target.cell(panel, idx, rect, content);
                        stats.cells += 1;
                    }
                }
            }
        }
        stats
    }
}

fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
