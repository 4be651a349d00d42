// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use nonogram_grid::{CellIdx, Grid, Symbol};

use crate::Run;

/// Paint gesture: drag a straight run of board cells and commit one symbol
/// into all of them on release.
///
/// The gesture is either idle or active. While active it holds the run
/// (locked to a row or a column with [`Run::project`]) and the symbol to
/// paint, chosen once at the start as the successor of the clicked cell's
/// committed symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftGesture {
    run: Option<Run>,
    symbol: Symbol,
}

impl DraftGesture {
    /// Starts a draft on board cell `idx`.
    ///
    /// Does nothing and returns `false` if `idx` is not a board cell. An
    /// active draft is replaced.
    pub fn start(&mut self, idx: CellIdx, grid: &Grid) -> bool {
        let Some(current) = grid.symbol(idx) else {
            return false;
        };
        self.run = Some(Run::single(idx));
        self.symbol = current.next();
        true
    }

    /// Moves the end of the draft toward the cell under the pointer.
    ///
    /// The pointer cell is projected onto the dominant axis first. The
    /// update is ignored if the projected end falls outside the board.
    /// Returns `true` if the run changed.
    pub fn update(&mut self, pointer: CellIdx, grid: &Grid) -> bool {
        let Some(run) = self.run else {
            return false;
        };
        let projected = Run::project(run.start, pointer);
        if projected == run || !grid.contains(projected.end) {
            return false;
        }
        self.run = Some(projected);
        true
    }

    /// Writes the draft symbol into every cell of the run and ends the gesture.
    ///
    /// Returns the cells written, in run order. Committing while idle is
    /// logged and writes nothing.
    pub fn commit(&mut self, grid: &mut Grid) -> Vec<CellIdx> {
        let Some(run) = self.run.take() else {
            tracing::warn!("draft committed without an active run");
            return Vec::new();
        };
        let symbol = core::mem::take(&mut self.symbol);
        run.cells()
            .filter(|&idx| grid.set_symbol(idx, symbol))
            .collect()
    }

    /// Ends the gesture without writing anything.
    pub fn cancel(&mut self) {
        self.run = None;
        self.symbol = Symbol::Blank;
    }

    /// Returns `true` while a draft is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.run.is_some()
    }

    /// The run being drafted.
    #[must_use]
    pub fn run(&self) -> Option<Run> {
        self.run
    }

    /// Cell the draft started on.
    #[must_use]
    pub fn start_cell(&self) -> Option<CellIdx> {
        self.run.map(|r| r.start)
    }

    /// Cell the draft currently ends on.
    #[must_use]
    pub fn end_cell(&self) -> Option<CellIdx> {
        self.run.map(|r| r.end)
    }

    /// Symbol that will be painted; [`Symbol::Blank`] while idle.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns `true` if `idx` is part of the active draft.
    #[must_use]
    pub fn covers(&self, idx: CellIdx) -> bool {
        self.run.is_some_and(|r| r.contains(idx))
    }

    /// Symbol to show for `idx` whose committed symbol is `committed`.
    ///
    /// Cells in the active run show the draft symbol, except that an erasing
    /// (blank) draft keeps showing what is committed until release.
    #[must_use]
    pub fn preview_symbol(&self, idx: CellIdx, committed: Symbol) -> Symbol {
        if self.covers(idx) && self.symbol != Symbol::Blank {
            self.symbol
        } else {
            committed
        }
    }
}
