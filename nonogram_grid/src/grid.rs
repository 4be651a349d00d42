// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::{CellIdx, ClueAxis, ClueGrid, GridError, Symbol};

/// A nonogram puzzle: board symbols plus row and column clues.
///
/// Dimensions and clues are fixed at construction. Board symbols and clue
/// tick flags are the only mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Symbol>,
    row_clues: Vec<Vec<u32>>,
    col_clues: Vec<Vec<u32>>,
    top_clues: ClueGrid,
    left_clues: ClueGrid,
}

impl Grid {
    /// Builds a blank puzzle after validating its dimensions and clues.
    ///
    /// `row_clues` must hold one sequence per row and `col_clues` one per
    /// column. Every run length must be positive and each sequence must fit
    /// in its line (runs plus one blank cell between consecutive runs). An
    /// empty sequence describes an empty line.
    pub fn new(
        rows: usize,
        cols: usize,
        row_clues: Vec<Vec<u32>>,
        col_clues: Vec<Vec<u32>>,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }
        validate_clues(ClueAxis::Row, &row_clues, rows, cols)?;
        validate_clues(ClueAxis::Column, &col_clues, cols, rows)?;
        Ok(Self::from_parts(rows, cols, row_clues, col_clues))
    }

    /// Replaces the clue tick flags, validating their shapes.
    ///
    /// `top_ticks` must match the top (column clue) panel and `left_ticks`
    /// the left (row clue) panel exactly. Ticks on padding slots are dropped.
    pub fn with_ticks(
        mut self,
        top_ticks: &[Vec<bool>],
        left_ticks: &[Vec<bool>],
    ) -> Result<Self, GridError> {
        self.top_clues.set_ticks(top_ticks)?;
        self.left_clues.set_ticks(left_ticks)?;
        Ok(self)
    }

    /// A 15×15 sample puzzle, handy for demos and tests.
    #[must_use]
    pub fn sample() -> Self {
        let row_clues = vec![
            vec![1, 1, 1],
            vec![4, 2],
            vec![5, 1, 1, 3],
            vec![4, 2],
            vec![5, 1, 3],
            vec![5, 1, 3],
            vec![4, 4],
            vec![1, 6, 3],
            vec![1, 4, 2],
            vec![3, 5],
            vec![3, 5, 1],
            vec![3, 4, 1],
            vec![4, 5],
            vec![11],
            vec![7],
        ];
        let col_clues = vec![
            vec![1, 5],
            vec![2, 7],
            vec![2, 7],
            vec![4, 1, 2],
            vec![6, 1],
            vec![6, 1, 1],
            vec![2, 5, 2],
            vec![2, 4, 1],
            vec![2, 4, 1],
            vec![2, 4, 2],
            vec![3, 8],
            vec![3, 1, 6],
            vec![5, 5],
            vec![4, 4],
            vec![2, 1, 1],
        ];
        Self::from_parts(15, 15, row_clues, col_clues)
    }

    fn from_parts(
        rows: usize,
        cols: usize,
        row_clues: Vec<Vec<u32>>,
        col_clues: Vec<Vec<u32>>,
    ) -> Self {
        let top_clues = ClueGrid::from_sequences(ClueAxis::Column, &col_clues);
        let left_clues = ClueGrid::from_sequences(ClueAxis::Row, &row_clues);
        Self {
            rows,
            cols,
            cells: vec![Symbol::Blank; rows * cols],
            row_clues,
            col_clues,
            top_clues,
            left_clues,
        }
    }

    /// Number of board rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of board columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the longest row clue sequence (width of the left panel).
    #[must_use]
    pub fn max_row_clues(&self) -> usize {
        self.left_clues.depth()
    }

    /// Length of the longest column clue sequence (height of the top panel).
    #[must_use]
    pub fn max_col_clues(&self) -> usize {
        self.top_clues.depth()
    }

    /// Clue sequences, one per row.
    #[must_use]
    pub fn row_clues(&self) -> &[Vec<u32>] {
        &self.row_clues
    }

    /// Clue sequences, one per column.
    #[must_use]
    pub fn col_clues(&self) -> &[Vec<u32>] {
        &self.col_clues
    }

    /// The panel above the board (column clues).
    #[must_use]
    pub fn top_clues(&self) -> &ClueGrid {
        &self.top_clues
    }

    /// The panel left of the board (row clues).
    #[must_use]
    pub fn left_clues(&self) -> &ClueGrid {
        &self.left_clues
    }

    /// The clue panel showing the given family.
    #[must_use]
    pub fn clues(&self, axis: ClueAxis) -> &ClueGrid {
        match axis {
            ClueAxis::Row => &self.left_clues,
            ClueAxis::Column => &self.top_clues,
        }
    }

    /// Mutable access to the clue panel showing the given family.
    pub fn clues_mut(&mut self, axis: ClueAxis) -> &mut ClueGrid {
        match axis {
            ClueAxis::Row => &mut self.left_clues,
            ClueAxis::Column => &mut self.top_clues,
        }
    }

    /// Returns `true` if `idx` addresses a board cell.
    #[must_use]
    pub fn contains(&self, idx: CellIdx) -> bool {
        idx.is_within(self.rows, self.cols)
    }

    /// Returns the symbol at `idx`, or `None` if it is off the board.
    #[must_use]
    pub fn symbol(&self, idx: CellIdx) -> Option<Symbol> {
        idx.to_offset(self.rows, self.cols)
            .map(|offset| self.cells[offset])
    }

    /// Returns `true` if `idx` is on the board and filled.
    #[must_use]
    pub fn is_filled(&self, idx: CellIdx) -> bool {
        self.symbol(idx) == Some(Symbol::Filled)
    }

    /// Returns `true` if `idx` is on the board and crossed out.
    #[must_use]
    pub fn is_crossed(&self, idx: CellIdx) -> bool {
        self.symbol(idx) == Some(Symbol::Crossed)
    }

    /// Returns `true` if `idx` is on the board and blank.
    ///
    /// Off-board indices are not blank; they are not cells at all.
    #[must_use]
    pub fn is_blank(&self, idx: CellIdx) -> bool {
        self.symbol(idx) == Some(Symbol::Blank)
    }

    /// Writes `symbol` at `idx`.
    ///
    /// Returns `false` (and changes nothing) if `idx` is off the board.
    pub fn set_symbol(&mut self, idx: CellIdx, symbol: Symbol) -> bool {
        match idx.to_offset(self.rows, self.cols) {
            Some(offset) => {
                self.cells[offset] = symbol;
                true
            }
            None => false,
        }
    }

    /// Resets every board cell to [`Symbol::Blank`] and clears all ticks.
    pub fn clear(&mut self) {
        self.cells.fill(Symbol::Blank);
        self.top_clues.clear_ticks();
        self.left_clues.clear_ticks();
    }

    /// Iterates over every board cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellIdx, Symbol)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(offset, &symbol)| (CellIdx::from_offset(offset, self.cols), symbol))
    }
}

impl fmt::Display for Grid {
    /// Writes the board one row per line, using [`Symbol::as_char`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for symbol in row {
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

fn validate_clues(
    axis: ClueAxis,
    sequences: &[Vec<u32>],
    lines: usize,
    line_len: usize,
) -> Result<(), GridError> {
    if sequences.len() != lines {
        return Err(GridError::ClueCountMismatch {
            axis,
            expected: lines,
            found: sequences.len(),
        });
    }
    for (line, seq) in sequences.iter().enumerate() {
        if seq.contains(&0) {
            return Err(GridError::NonPositiveClue { axis, line });
        }
        let runs: usize = seq.iter().map(|&run| run as usize).sum();
        let required = runs + seq.len().saturating_sub(1);
        if required > line_len {
            return Err(GridError::ClueOverflow {
                axis,
                line,
                required,
                available: line_len,
            });
        }
    }
    Ok(())
}
