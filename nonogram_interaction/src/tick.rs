// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use nonogram_grid::{CellIdx, ClueAxis, Grid};

use crate::Run;

/// Clue tick gesture: drag across clue slots of one panel and set their tick
/// flags to one value on release.
///
/// The value is decided when the gesture starts: the opposite of the
/// clicked slot's current flag. Every slot the run covers gets that same
/// value; flags are not toggled one by one. Padding slots are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClueTickGesture {
    active: Option<(ClueAxis, Run)>,
    flag: bool,
}

impl ClueTickGesture {
    /// Starts a gesture on slot `idx` of the `axis` clue panel.
    ///
    /// Only slots that hold a clue start a gesture; returns `false` and does
    /// nothing otherwise.
    pub fn start(&mut self, axis: ClueAxis, idx: CellIdx, grid: &Grid) -> bool {
        let clues = grid.clues(axis);
        if !clues.has_clue(idx) {
            return false;
        }
        self.active = Some((axis, Run::single(idx)));
        self.flag = !clues.is_ticked(idx);
        true
    }

    /// Moves the end of the run toward the slot under the pointer.
    ///
    /// The pointer slot is projected onto the dominant axis first; the
    /// update is ignored if the projected end is outside the panel. Returns
    /// `true` if the run changed.
    pub fn update(&mut self, pointer: CellIdx, grid: &Grid) -> bool {
        let Some((axis, run)) = self.active else {
            return false;
        };
        let projected = Run::project(run.start, pointer);
        if projected == run || !grid.clues(axis).contains(projected.end) {
            return false;
        }
        self.active = Some((axis, projected));
        true
    }

    /// Applies the flag to every clue slot of the run and ends the gesture.
    ///
    /// Returns the slots written. Committing while idle is logged and writes
    /// nothing.
    pub fn commit(&mut self, grid: &mut Grid) -> Vec<CellIdx> {
        let Some((axis, run)) = self.active.take() else {
            tracing::warn!("clue tick committed without an active run");
            return Vec::new();
        };
        let flag = core::mem::take(&mut self.flag);
        let clues = grid.clues_mut(axis);
        run.cells()
            .filter(|&idx| clues.set_ticked(idx, flag))
            .collect()
    }

    /// Ends the gesture without writing anything.
    pub fn cancel(&mut self) {
        self.active = None;
        self.flag = false;
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Panel the active gesture targets.
    #[must_use]
    pub fn axis(&self) -> Option<ClueAxis> {
        self.active.map(|(axis, _)| axis)
    }

    /// The run being dragged.
    #[must_use]
    pub fn run(&self) -> Option<Run> {
        self.active.map(|(_, run)| run)
    }

    /// Flag that will be applied; `false` while idle.
    #[must_use]
    pub fn flag(&self) -> bool {
        self.flag
    }

    /// Returns `true` if slot `idx` of the `axis` panel is part of the active run.
    #[must_use]
    pub fn covers(&self, axis: ClueAxis, idx: CellIdx) -> bool {
        self.active
            .is_some_and(|(a, run)| a == axis && run.contains(idx))
    }

    /// Tick state to show for slot `idx` of the `axis` panel whose committed
    /// flag is `committed`.
    #[must_use]
    pub fn preview_ticked(&self, axis: ClueAxis, idx: CellIdx, committed: bool) -> bool {
        if self.covers(axis, idx) {
            self.flag
        } else {
            committed
        }
    }
}
