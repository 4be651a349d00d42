// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A `(row, col)` index into a board or clue panel.
///
/// Components are signed so that the result of mapping a pointer position that
/// lies outside a panel can still be represented. Use [`CellIdx::is_within`]
/// (or the bounds-checked accessors on [`crate::Grid`] and
/// [`crate::ClueGrid`]) before treating an index as a real cell.
///
/// Ordering is row-major: first by `row`, then by `col`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIdx {
    /// Row index, counted from the top.
    pub row: i32,
    /// Column index, counted from the left.
    pub col: i32,
}

impl CellIdx {
    /// Creates an index from a row and a column.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns `true` if `0 <= row < rows` and `0 <= col < cols`.
    #[must_use]
    pub fn is_within(self, rows: usize, cols: usize) -> bool {
        self.to_offset(rows, cols).is_some()
    }

    /// Returns the row-major offset of this index inside a `rows × cols`
    /// matrix, or `None` when it falls outside.
    #[must_use]
    pub fn to_offset(self, rows: usize, cols: usize) -> Option<usize> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < rows && col < cols).then(|| row * cols + col)
    }

    /// Inverse of [`CellIdx::to_offset`] for a matrix with `cols` columns.
    pub(crate) fn from_offset(offset: usize, cols: usize) -> Self {
        let row = offset / cols;
        let col = offset % cols;
        Self::new(
            i32::try_from(row).unwrap_or(i32::MAX),
            i32::try_from(col).unwrap_or(i32::MAX),
        )
    }
}

impl From<(i32, i32)> for CellIdx {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
