// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::{CellIdx, GridError};

/// Which family of clues a sequence or panel belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClueAxis {
    /// Row clues, shown in the panel to the left of the board.
    Row,
    /// Column clues, shown in the panel above the board.
    Column,
}

impl fmt::Display for ClueAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::Column => "column",
        })
    }
}

/// A clue panel: clue sequences laid out as a rectangular matrix.
///
/// Column clues form a `depth × cols` matrix where every column's sequence is
/// bottom-aligned (the last run sits right above the board). Row clues form a
/// `rows × depth` matrix where every row's sequence is right-aligned. `depth`
/// is the length of the longest sequence; shorter sequences leave padding
/// slots that hold no clue.
///
/// Every slot carries a tick flag. Players tick a clue off once the matching
/// run is placed. Padding slots can never be ticked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueGrid {
    axis: ClueAxis,
    rows: usize,
    cols: usize,
    // 0 marks a padding slot; real run lengths are always positive.
    numbers: Vec<u32>,
    ticks: Vec<bool>,
}

impl ClueGrid {
    pub(crate) fn from_sequences(axis: ClueAxis, sequences: &[Vec<u32>]) -> Self {
        let lines = sequences.len();
        let depth = sequences.iter().map(Vec::len).max().unwrap_or(0);
        let (rows, cols) = match axis {
            ClueAxis::Column => (depth, lines),
            ClueAxis::Row => (lines, depth),
        };

        let mut numbers = vec![0; rows * cols];
        for (line, seq) in sequences.iter().enumerate() {
            let pad = depth - seq.len();
            for (k, &run) in seq.iter().enumerate() {
                let offset = match axis {
                    ClueAxis::Column => (pad + k) * cols + line,
                    ClueAxis::Row => line * cols + pad + k,
                };
                numbers[offset] = run;
            }
        }

        Self {
            axis,
            rows,
            cols,
            numbers,
            ticks: vec![false; rows * cols],
        }
    }

    pub(crate) fn set_ticks(&mut self, ticks: &[Vec<bool>]) -> Result<(), GridError> {
        if ticks.len() != self.rows {
            return Err(GridError::TickRowCount {
                axis: self.axis,
                expected: self.rows,
                found: ticks.len(),
            });
        }
        if let Some((row, found)) = ticks
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != self.cols)
        {
            return Err(GridError::RaggedTicks {
                axis: self.axis,
                row,
                expected: self.cols,
                found,
            });
        }

        for (offset, flag) in ticks.iter().flatten().copied().enumerate() {
            self.ticks[offset] = flag && self.numbers[offset] != 0;
        }
        Ok(())
    }

    /// Returns which clue family this panel shows.
    #[must_use]
    pub fn axis(&self) -> ClueAxis {
        self.axis
    }

    /// Number of slot rows in the panel.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of slot columns in the panel.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest clue sequence (the panel's short axis).
    #[must_use]
    pub fn depth(&self) -> usize {
        match self.axis {
            ClueAxis::Column => self.rows,
            ClueAxis::Row => self.cols,
        }
    }

    /// Returns `true` if `idx` addresses a slot of this panel.
    #[must_use]
    pub fn contains(&self, idx: CellIdx) -> bool {
        idx.is_within(self.rows, self.cols)
    }

    /// Returns the run length shown at `idx`, or `None` for padding and
    /// out-of-range slots.
    #[must_use]
    pub fn clue(&self, idx: CellIdx) -> Option<u32> {
        let offset = idx.to_offset(self.rows, self.cols)?;
        let number = self.numbers[offset];
        (number != 0).then_some(number)
    }

    /// Returns `true` if a clue is shown at `idx`.
    #[must_use]
    pub fn has_clue(&self, idx: CellIdx) -> bool {
        self.clue(idx).is_some()
    }

    /// Returns the tick flag at `idx`; `false` for padding and out-of-range slots.
    #[must_use]
    pub fn is_ticked(&self, idx: CellIdx) -> bool {
        idx.to_offset(self.rows, self.cols)
            .is_some_and(|offset| self.ticks[offset])
    }

    /// Sets the tick flag at `idx`.
    ///
    /// Returns `false` (and changes nothing) when `idx` is out of range or
    /// addresses a padding slot.
    pub fn set_ticked(&mut self, idx: CellIdx, ticked: bool) -> bool {
        match idx.to_offset(self.rows, self.cols) {
            Some(offset) if self.numbers[offset] != 0 => {
                self.ticks[offset] = ticked;
                true
            }
            _ => false,
        }
    }

    /// Clears every tick flag.
    pub fn clear_ticks(&mut self) {
        self.ticks.fill(false);
    }

    /// Iterates over the slots that hold a clue, yielding
    /// `(index, run length, ticked)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIdx, u32, bool)> + '_ {
        self.numbers
            .iter()
            .zip(&self.ticks)
            .enumerate()
            .filter(|&(_, (&number, _))| number != 0)
            .map(|(offset, (&number, &ticked))| {
                (CellIdx::from_offset(offset, self.cols), number, ticked)
            })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{ClueAxis, ClueGrid};
    use crate::{CellIdx, GridError};

    fn column_panel() -> ClueGrid {
        ClueGrid::from_sequences(ClueAxis::Column, &[vec![1, 2], vec![3], vec![]])
    }

    #[test]
    fn column_clues_are_bottom_aligned() {
        let panel = column_panel();
        assert_eq!((panel.rows(), panel.cols()), (2, 3));
        assert_eq!(panel.depth(), 2);

        assert_eq!(panel.clue(CellIdx::new(0, 0)), Some(1));
        assert_eq!(panel.clue(CellIdx::new(1, 0)), Some(2));
        assert_eq!(panel.clue(CellIdx::new(0, 1)), None);
        assert_eq!(panel.clue(CellIdx::new(1, 1)), Some(3));
        assert_eq!(panel.clue(CellIdx::new(0, 2)), None);
        assert_eq!(panel.clue(CellIdx::new(1, 2)), None);
    }

    #[test]
    fn row_clues_are_right_aligned() {
        let panel = ClueGrid::from_sequences(ClueAxis::Row, &[vec![4], vec![1, 1, 1]]);
        assert_eq!((panel.rows(), panel.cols()), (2, 3));
        assert_eq!(panel.clue(CellIdx::new(0, 0)), None);
        assert_eq!(panel.clue(CellIdx::new(0, 2)), Some(4));
        assert_eq!(panel.clue(CellIdx::new(1, 0)), Some(1));
    }

    #[test]
    fn empty_sequences_give_zero_depth() {
        let panel = ClueGrid::from_sequences(ClueAxis::Row, &[vec![], vec![]]);
        assert_eq!((panel.rows(), panel.cols()), (2, 0));
        assert_eq!(panel.iter().count(), 0);
        assert!(!panel.contains(CellIdx::new(0, 0)));
    }

    #[test]
    fn padding_slots_cannot_be_ticked() {
        let mut panel = column_panel();
        assert!(!panel.set_ticked(CellIdx::new(0, 1), true));
        assert!(!panel.set_ticked(CellIdx::new(9, 9), true));
        assert!(panel.set_ticked(CellIdx::new(1, 1), true));
        assert!(panel.is_ticked(CellIdx::new(1, 1)));
        assert!(!panel.is_ticked(CellIdx::new(0, 1)));

        panel.clear_ticks();
        assert!(!panel.is_ticked(CellIdx::new(1, 1)));
    }

    #[test]
    fn set_ticks_rejects_wrong_shapes() {
        let mut panel = column_panel();
        assert_eq!(
            panel.set_ticks(&[vec![false; 3]]),
            Err(GridError::TickRowCount {
                axis: ClueAxis::Column,
                expected: 2,
                found: 1,
            })
        );
        assert_eq!(
            panel.set_ticks(&[vec![false; 3], vec![false; 2]]),
            Err(GridError::RaggedTicks {
                axis: ClueAxis::Column,
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn set_ticks_masks_padding() {
        let mut panel = column_panel();
        panel
            .set_ticks(&[vec![true, true, true], vec![false, true, true]])
            .unwrap();
        let ticked: Vec<_> = panel
            .iter()
            .filter(|&(_, _, ticked)| ticked)
            .map(|(idx, _, _)| idx)
            .collect();
        assert_eq!(ticked, vec![CellIdx::new(0, 0), CellIdx::new(1, 1)]);
    }
}
