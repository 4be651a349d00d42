// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::ClueAxis;

/// Reasons a [`crate::Grid`] refuses to be built.
///
/// These are configuration errors: the puzzle handed to the model is
/// malformed. They are reported once, at construction, and never during
/// interaction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The board has no rows or no columns.
    #[error("a puzzle needs at least one row and one column, got {rows}x{cols}")]
    EmptyDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// The number of clue sequences does not match the number of lines.
    #[error("expected {expected} {axis} clue sequences, got {found}")]
    ClueCountMismatch {
        /// Which clue family is wrong.
        axis: ClueAxis,
        /// Number of rows (or columns) on the board.
        expected: usize,
        /// Number of sequences supplied.
        found: usize,
    },
    /// A clue sequence contains a run of length zero.
    #[error("{axis} {line} has a clue of zero; run lengths must be positive")]
    NonPositiveClue {
        /// Which clue family is wrong.
        axis: ClueAxis,
        /// Index of the offending row or column.
        line: usize,
    },
    /// The runs of a clue sequence (plus one gap between each) cannot fit.
    #[error("{axis} {line} clues need {required} cells but the line only has {available}")]
    ClueOverflow {
        /// Which clue family is wrong.
        axis: ClueAxis,
        /// Index of the offending row or column.
        line: usize,
        /// Minimum number of cells needed to place the runs.
        required: usize,
        /// Length of the line.
        available: usize,
    },
    /// A tick matrix has the wrong number of rows.
    #[error("{axis} clue ticks must have {expected} rows, got {found}")]
    TickRowCount {
        /// Which clue panel is wrong.
        axis: ClueAxis,
        /// Row count of the clue panel.
        expected: usize,
        /// Row count supplied.
        found: usize,
    },
    /// A row of a tick matrix has the wrong length.
    #[error("{axis} clue ticks row {row} must have {expected} entries, got {found}")]
    RaggedTicks {
        /// Which clue panel is wrong.
        axis: ClueAxis,
        /// Offending tick row.
        row: usize,
        /// Column count of the clue panel.
        expected: usize,
        /// Entries supplied in that row.
        found: usize,
    },
}
