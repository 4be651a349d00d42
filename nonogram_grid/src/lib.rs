// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nonogram Grid: the puzzle model behind a nonogram editor.
//!
//! This crate holds plain data plus validation. It knows nothing about pixels,
//! panels on screen or pointer input; those live in the layout, addressing and
//! interaction crates built on top of it.
//!
//! The model consists of:
//! - A `rows × cols` board of [`Symbol`]s (blank, filled or crossed out).
//! - Row and column clue sequences (nonogram run lengths).
//! - Two [`ClueGrid`] panels that lay those sequences out as rectangular
//!   matrices, each slot carrying a "ticked" flag the player can toggle.
//!
//! Indices are expressed as [`CellIdx`], a signed `(row, col)` pair. Signed
//! indices are deliberate: inverse pixel mapping routinely produces indices
//! just outside the board (for example `-1` while dragging past the left
//! edge), and every accessor treats those as a normal "nothing there" answer.
//!
//! ## Minimal example
//!
//! ```rust
//! use nonogram_grid::{CellIdx, Grid, Symbol};
//!
//! let mut grid = Grid::new(
//!     2,
//!     3,
//!     vec![vec![3], vec![1, 1]],
//!     vec![vec![1], vec![2], vec![1]],
//! )
//! .unwrap();
//!
//! assert_eq!(grid.max_row_clues(), 2);
//! assert_eq!(grid.max_col_clues(), 1);
//!
//! assert!(grid.set_symbol(CellIdx::new(0, 1), Symbol::Filled));
//! assert!(grid.is_filled(CellIdx::new(0, 1)));
//!
//! // Out of bounds is not an error, just "no".
//! assert!(!grid.is_filled(CellIdx::new(-1, 0)));
//! assert_eq!(grid.symbol(CellIdx::new(5, 5)), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clues;
mod error;
mod grid;
mod index;
mod symbol;

pub use clues::{ClueAxis, ClueGrid};
pub use error::GridError;
pub use grid::Grid;
pub use index::CellIdx;
pub use symbol::Symbol;
