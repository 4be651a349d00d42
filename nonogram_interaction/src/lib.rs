// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nonogram Interaction: gesture state machines for editing a puzzle.
//!
//! Two gestures share one shape, idle → active → idle:
//!
//! - [`DraftGesture`] paints a straight run of board cells. The symbol is
//!   picked when the gesture starts (the successor of the clicked cell's
//!   symbol in the blank → filled → crossed cycle) and written into every
//!   cell of the run on release.
//! - [`ClueTickGesture`] ticks clues off. The flag is picked when the
//!   gesture starts (the opposite of the clicked clue's flag) and applied
//!   to every clue in the run on release.
//!
//! Both lock the run onto a single row or column with [`Run::project`]:
//! whichever axis the pointer moved further along wins, and ties go to the
//! horizontal axis. Either gesture can be cancelled, which discards it
//! without touching the grid.
//!
//! The gestures work on cell indices. Turning pointer positions into
//! indices is the job of `nonogram_addressing`; wiring both together with
//! pointer events happens in `nonogram_editor`.
//!
//! ## Minimal example
//!
//! ```rust
//! use nonogram_grid::{CellIdx, Grid, Symbol};
//! use nonogram_interaction::DraftGesture;
//!
//! let mut grid = Grid::sample();
//! let mut draft = DraftGesture::default();
//!
//! assert!(draft.start(CellIdx::new(3, 3), &grid));
//! assert_eq!(draft.symbol(), Symbol::Filled);
//!
//! // Diagonal drags lock onto the row on a tie.
//! draft.update(CellIdx::new(5, 5), &grid);
//! assert_eq!(draft.end_cell(), Some(CellIdx::new(3, 5)));
//!
//! let written = draft.commit(&mut grid);
//! assert_eq!(written.len(), 3);
//! assert!(grid.is_filled(CellIdx::new(3, 4)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod draft;
mod run;
mod tick;

pub use draft::DraftGesture;
pub use run::{Run, RunCells};
pub use tick::ClueTickGesture;
