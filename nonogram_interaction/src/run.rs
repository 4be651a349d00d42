// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;

use nonogram_grid::CellIdx;

/// A straight run of cells from `start` to `end`, both inclusive.
///
/// Runs built with [`Run::project`] always share a row or a column. Fields
/// are public, so a run can be built misaligned by hand; such a run covers
/// no cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Run {
    /// Cell where the gesture started.
    pub start: CellIdx,
    /// Cell the gesture currently ends on.
    pub end: CellIdx,
}

impl Run {
    /// Creates a run between two cells.
    #[must_use]
    pub const fn new(start: CellIdx, end: CellIdx) -> Self {
        Self { start, end }
    }

    /// A run covering one cell.
    #[must_use]
    pub const fn single(idx: CellIdx) -> Self {
        Self::new(idx, idx)
    }

    /// Locks a run from `start` toward `current` onto its dominant axis.
    ///
    /// If the pointer moved at least as many columns as rows the run is
    /// horizontal (`end = (start.row, current.col)`); otherwise it is
    /// vertical (`end = (current.row, start.col)`). Ties are horizontal.
    #[must_use]
    pub fn project(start: CellIdx, current: CellIdx) -> Self {
        let vertical = start.row.abs_diff(current.row);
        let horizontal = start.col.abs_diff(current.col);
        let end = if horizontal >= vertical {
            CellIdx::new(start.row, current.col)
        } else {
            CellIdx::new(current.row, start.col)
        };
        Self::new(start, end)
    }

    /// Returns `true` if both ends share a row or a column.
    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.start.row == self.end.row || self.start.col == self.end.col
    }

    /// Returns `true` if the run covers `idx`.
    #[must_use]
    pub fn contains(&self, idx: CellIdx) -> bool {
        if !self.is_aligned() {
            return false;
        }
        let (r0, r1) = ordered(self.start.row, self.end.row);
        let (c0, c1) = ordered(self.start.col, self.end.col);
        (r0..=r1).contains(&idx.row) && (c0..=c1).contains(&idx.col)
    }

    /// Number of cells covered.
    #[must_use]
    pub fn len(&self) -> usize {
        if !self.is_aligned() {
            return 0;
        }
        let span = self
            .start
            .row
            .abs_diff(self.end.row)
            .max(self.start.col.abs_diff(self.end.col));
        usize::try_from(span).map_or(usize::MAX, |s| s.saturating_add(1))
    }

    /// Returns `true` if the run covers no cells, which only happens when it
    /// is misaligned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_aligned()
    }

    /// Cells covered, from the top-left end to the bottom-right end.
    ///
    /// A misaligned run is logged and yields nothing.
    pub fn cells(&self) -> RunCells {
        if !self.is_aligned() {
            tracing::warn!(
                start = ?self.start,
                end = ?self.end,
                "run endpoints share neither a row nor a column; ignoring it"
            );
            return RunCells {
                next: self.start,
                step: (0, 0),
                remaining: 0,
            };
        }
        let (r0, r1) = ordered(self.start.row, self.end.row);
        let (c0, c1) = ordered(self.start.col, self.end.col);
        let step = if r0 == r1 { (0, 1) } else { (1, 0) };
        RunCells {
            next: CellIdx::new(r0, c0),
            step,
            remaining: u64::from(r1.abs_diff(r0).max(c1.abs_diff(c0))) + 1,
        }
    }
}

impl From<CellIdx> for Run {
    fn from(idx: CellIdx) -> Self {
        Self::single(idx)
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Iterator over the cells of a [`Run`]. See [`Run::cells`].
#[derive(Clone, Debug)]
pub struct RunCells {
    next: CellIdx,
    step: (i32, i32),
    remaining: u64,
}

impl Iterator for RunCells {
    type Item = CellIdx;

    fn next(&mut self) -> Option<CellIdx> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = CellIdx::new(current.row + self.step.0, current.col + self.step.1);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, usize::try_from(self.remaining).ok())
    }
}

impl FusedIterator for RunCells {}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use nonogram_grid::CellIdx;

    use super::Run;

    fn idx(row: i32, col: i32) -> CellIdx {
        CellIdx::new(row, col)
    }

    #[test]
    fn ties_lock_horizontally() {
        assert_eq!(Run::project(idx(5, 5), idx(7, 7)).end, idx(5, 7));
        assert_eq!(Run::project(idx(5, 5), idx(3, 3)).end, idx(5, 3));
        assert_eq!(Run::project(idx(5, 5), idx(5, 5)).end, idx(5, 5));
    }

    #[test]
    fn dominant_axis_wins() {
        assert_eq!(Run::project(idx(0, 0), idx(4, 1)).end, idx(4, 0));
        assert_eq!(Run::project(idx(0, 0), idx(1, 4)).end, idx(0, 4));
        assert_eq!(Run::project(idx(2, 2), idx(-3, 1)).end, idx(-3, 2));
    }

    #[test]
    fn cells_are_ordered_and_inclusive() {
        let cells: Vec<_> = Run::new(idx(3, 6), idx(3, 3)).cells().collect();
        assert_eq!(cells, [idx(3, 3), idx(3, 4), idx(3, 5), idx(3, 6)]);
        let cells: Vec<_> = Run::new(idx(4, 1), idx(2, 1)).cells().collect();
        assert_eq!(cells, [idx(2, 1), idx(3, 1), idx(4, 1)]);
        assert_eq!(Run::single(idx(1, 1)).cells().count(), 1);
        assert_eq!(Run::new(idx(3, 6), idx(3, 3)).len(), 4);
    }

    #[test]
    fn misaligned_run_is_empty() {
        let run = Run::new(idx(0, 0), idx(2, 3));
        assert!(!run.is_aligned());
        assert!(run.is_empty());
        assert_eq!(run.len(), 0);
        assert_eq!(run.cells().count(), 0);
        assert!(!run.contains(idx(0, 0)));
    }

    #[test]
    fn contains_checks_the_span() {
        let run = Run::new(idx(2, 5), idx(2, 1));
        assert!(run.contains(idx(2, 1)));
        assert!(run.contains(idx(2, 3)));
        assert!(!run.contains(idx(2, 6)));
        assert!(!run.contains(idx(1, 3)));
    }
}
