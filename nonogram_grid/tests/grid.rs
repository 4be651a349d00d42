// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `nonogram_grid` crate.
//!
//! These cover construction-time validation, bounds-checked access and the
//! clue panel shapes that the layout engine sizes itself from.

use nonogram_grid::{CellIdx, ClueAxis, Grid, GridError, Symbol};

fn small() -> Grid {
    Grid::new(
        3,
        4,
        vec![vec![4], vec![1, 1], vec![]],
        vec![vec![1], vec![2], vec![1], vec![1, 1]],
    )
    .unwrap()
}

#[test]
fn zero_dimensions_are_rejected() {
    assert_eq!(
        Grid::new(0, 3, vec![], vec![vec![], vec![], vec![]]),
        Err(GridError::EmptyDimensions { rows: 0, cols: 3 })
    );
    assert_eq!(
        Grid::new(2, 0, vec![vec![], vec![]], vec![]),
        Err(GridError::EmptyDimensions { rows: 2, cols: 0 })
    );
}

#[test]
fn clue_count_must_match_lines() {
    let err = Grid::new(2, 2, vec![vec![1]], vec![vec![1], vec![1]]).unwrap_err();
    assert_eq!(
        err,
        GridError::ClueCountMismatch {
            axis: ClueAxis::Row,
            expected: 2,
            found: 1,
        }
    );
    assert_eq!(err.to_string(), "expected 2 row clue sequences, got 1");
}

#[test]
fn zero_runs_and_overflowing_clues_are_rejected() {
    assert_eq!(
        Grid::new(1, 3, vec![vec![0]], vec![vec![], vec![], vec![]]),
        Err(GridError::NonPositiveClue {
            axis: ClueAxis::Row,
            line: 0,
        })
    );
    assert_eq!(
        Grid::new(1, 3, vec![vec![2, 1]], vec![vec![1], vec![], vec![1]]),
        Err(GridError::ClueOverflow {
            axis: ClueAxis::Row,
            line: 0,
            required: 4,
            available: 3,
        })
    );
    assert_eq!(
        Grid::new(2, 1, vec![vec![], vec![]], vec![vec![3]]),
        Err(GridError::ClueOverflow {
            axis: ClueAxis::Column,
            line: 0,
            required: 3,
            available: 2,
        })
    );
}

#[test]
fn sample_puzzle_passes_validation() {
    let sample = Grid::sample();
    let rebuilt = Grid::new(
        sample.rows(),
        sample.cols(),
        sample.row_clues().to_vec(),
        sample.col_clues().to_vec(),
    )
    .unwrap();
    assert_eq!(rebuilt, sample);
    assert_eq!(sample.max_row_clues(), 4);
    assert_eq!(sample.max_col_clues(), 3);
}

#[test]
fn clue_panels_follow_the_longest_sequences() {
    let grid = small();
    assert_eq!(grid.max_row_clues(), 2);
    assert_eq!(grid.max_col_clues(), 2);

    let top = grid.top_clues();
    assert_eq!((top.rows(), top.cols()), (2, 4));
    assert_eq!(top.axis(), ClueAxis::Column);

    let left = grid.left_clues();
    assert_eq!((left.rows(), left.cols()), (3, 2));
    assert_eq!(left.clue(CellIdx::new(0, 1)), Some(4));
    assert_eq!(left.clue(CellIdx::new(0, 0)), None);
    assert_eq!(left.clue(CellIdx::new(2, 1)), None);
    assert_eq!(grid.clues(ClueAxis::Row), left);
}

#[test]
fn board_access_is_bounds_checked() {
    let mut grid = small();
    let inside = CellIdx::new(2, 3);
    let outside = [
        CellIdx::new(-1, 0),
        CellIdx::new(0, -1),
        CellIdx::new(3, 0),
        CellIdx::new(0, 4),
    ];

    assert!(grid.is_blank(inside));
    assert!(grid.set_symbol(inside, Symbol::Crossed));
    assert!(grid.is_crossed(inside));
    assert!(!grid.is_filled(inside));

    for idx in outside {
        assert!(!grid.contains(idx));
        assert_eq!(grid.symbol(idx), None);
        assert!(!grid.is_blank(idx));
        assert!(!grid.set_symbol(idx, Symbol::Filled));
    }
}

#[test]
fn with_ticks_validates_both_panels() {
    let grid = small()
        .with_ticks(
            &[vec![false; 4], vec![true, false, false, false]],
            &[vec![false, true], vec![false; 2], vec![false; 2]],
        )
        .unwrap();
    assert!(grid.top_clues().is_ticked(CellIdx::new(1, 0)));
    assert!(grid.left_clues().is_ticked(CellIdx::new(0, 1)));

    let err = small()
        .with_ticks(&[vec![false; 4], vec![false; 4]], &[vec![false; 2]])
        .unwrap_err();
    assert_eq!(
        err,
        GridError::TickRowCount {
            axis: ClueAxis::Row,
            expected: 3,
            found: 1,
        }
    );
}

#[test]
fn display_and_clear() {
    let mut grid = small();
    grid.set_symbol(CellIdx::new(0, 0), Symbol::Filled);
    grid.set_symbol(CellIdx::new(1, 3), Symbol::Crossed);
    grid.clues_mut(ClueAxis::Column)
        .set_ticked(CellIdx::new(1, 1), true);
    assert_eq!(grid.to_string(), ".   \n   x\n    ");

    grid.clear();
    assert!(grid.cells().all(|(_, symbol)| symbol == Symbol::Blank));
    assert!(!grid.top_clues().is_ticked(CellIdx::new(1, 1)));
}
