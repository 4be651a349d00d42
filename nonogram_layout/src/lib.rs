// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nonogram Layout: sizing and placing a nonogram on screen.
//!
//! A nonogram is drawn as three panels: the board, the column clues above it
//! and the row clues to its left. This crate answers two questions:
//!
//! - How large can a square cell be so that the whole composite fits a
//!   viewport? See [`compute_optimal_cell_size`].
//! - Given a cell size, where does each panel go? See [`compute_rects`] and
//!   the bundled [`Layout`].
//!
//! All arithmetic happens on whole pixels. Borders come in three weights
//! ([`Borders`]): thin lines between cells, a frame around each panel, and a
//! thicker separator after every [`SEPARATOR_PERIOD`] cells so that players
//! can count at a glance. Separators make the pixel pitch irregular, which is
//! why mapping pixels back to cells lives in its own crate
//! (`nonogram_addressing`).
//!
//! The crate does not render anything and does not know about zoom or pan;
//! callers feed it the cell size they want and translate the resulting
//! rectangles themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use nonogram_layout::{
//!     Borders, GridDims, Layout, Margins, Panel, PixelSize, compute_optimal_cell_size,
//! };
//!
//! let dims = GridDims::new(15, 15, 4, 4);
//! let viewport = PixelSize::new(1200, 800);
//! let borders = Borders::new(1, 2, 2);
//!
//! let cell = compute_optimal_cell_size(dims, borders, viewport, Margins::uniform(40));
//! assert_eq!(cell, 36);
//!
//! let layout = Layout::new(cell, borders, dims, viewport);
//! let parent = layout.parent_rect();
//! let board = layout.panel_rect(Panel::Board);
//!
//! // The board sits in the bottom-right corner of the parent.
//! assert_eq!(board.right(), parent.width);
//! assert_eq!(board.bottom(), parent.height);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod engine;
mod rect;

pub use config::{
    Borders, LayoutConfig, MINIMUM_CELL_SIZE, MINIMUM_OPTIMAL_CELL_SIZE, Margins,
    SEPARATOR_PERIOD,
};
pub use engine::{
    GridDims, Layout, Panel, PanelRects, PanelShape, border_total, compute_optimal_cell_size,
    compute_rects, panel_extent, separator_count,
};
pub use rect::{PixelRect, PixelSize, RectAdjust};
