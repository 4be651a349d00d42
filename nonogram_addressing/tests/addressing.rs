// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for pixel ⇄ cell mapping across panels and border configurations.

use kurbo::Point;
use nonogram_addressing::{
    AxisGeometry, CellGeometry, PanelAddressing, is_valid_cell_index, is_valid_clue_index,
    screen_to_cell_index,
};
use nonogram_grid::{CellIdx, Grid};
use nonogram_layout::{Borders, GridDims, Layout, Panel, PixelSize};
use proptest::prelude::*;

const CELL_SIZES: [i32; 4] = [4, 6, 20, 41];

fn borders() -> impl Strategy<Value = Borders> {
    prop_oneof![
        Just(Borders::new(1, 2, 2)),
        Just(Borders::new(1, 2, 3)),
        Just(Borders::new(0, 1, 0)),
        Just(Borders::new(2, 3, 5)),
        (0_i32..=3, 0_i32..=4, 0_i32..=4).prop_map(|(c, o, e)| Borders::new(c, o, c + e)),
    ]
}

proptest! {
    #[test]
    fn cell_center_maps_back_to_its_index(
        size_pick in 0_usize..CELL_SIZES.len(),
        borders in borders(),
        row in 0_i32..60,
        col in 0_i32..60,
        origin_x in -500_i32..500,
        origin_y in -500_i32..500,
    ) {
        let cs = CELL_SIZES[size_pick];
        let axis = AxisGeometry::from_borders(cs, borders, true);
        let geometry = CellGeometry::new(axis, axis);
        let idx = CellIdx::new(row, col);
        let origin = Point::new(f64::from(origin_x), f64::from(origin_y));

        let center = geometry.cell_rect(idx).center() + origin.to_vec2();
        prop_assert_eq!(screen_to_cell_index(center, origin, &geometry), idx);
    }

    #[test]
    fn every_pixel_of_a_cell_maps_to_it(
        size_pick in 0_usize..CELL_SIZES.len(),
        borders in borders(),
        index in 0_i32..40,
    ) {
        let axis = AxisGeometry::from_borders(CELL_SIZES[size_pick], borders, true);
        let start = axis.offset_of(index);
        for px in start..start + axis.cell_size {
            prop_assert_eq!(axis.index_at(px), index);
        }
    }

    #[test]
    fn inverse_mapping_is_monotonic(
        borders in borders(),
        a in -2000_i32..2000,
        b in -2000_i32..2000,
    ) {
        let axis = AxisGeometry::from_borders(6, borders, true);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(axis.index_at(lo) <= axis.index_at(hi));
    }
}

#[test]
fn separator_gap_resolves_to_index_four() {
    for cs in CELL_SIZES {
        let borders = Borders::new(1, 2, 4);
        let axis = AxisGeometry::from_borders(cs, borders, true);
        let gap_start = axis.offset_of(4) + cs;
        let gap_end = axis.offset_of(5);
        assert_eq!(gap_end - gap_start, borders.separator());
        for px in gap_start..gap_end {
            assert_eq!(axis.index_at(px), 4, "cell size {cs}, pixel {px}");
        }
        // Same in the second group.
        assert_eq!(axis.index_at(axis.offset_of(9) + cs), 9);
    }
}

#[test]
fn one_pixel_left_of_the_board_is_column_minus_one() {
    let layout = Layout::new(
        20,
        Borders::default(),
        GridDims::new(10, 10, 2, 2),
        PixelSize::new(800, 600),
    );
    let board = PanelAddressing::new(&layout, Panel::Board);
    let interior = board.interior();
    let y = f64::from(interior.y) + 5.0;

    let left = board.index_at(Point::new(f64::from(interior.x) - 1.0, y));
    assert_eq!(left, CellIdx::new(0, -1));
    let inside = board.index_at(Point::new(f64::from(interior.x), y));
    assert_eq!(inside, CellIdx::new(0, 0));
}

#[test]
fn sample_puzzle_round_trips_every_panel() {
    let grid = Grid::sample();
    let dims = GridDims::from_grid(&grid);
    let layout = Layout::new(24, Borders::default(), dims, PixelSize::new(1024, 768));

    for panel in Panel::ALL {
        let addr = PanelAddressing::new(&layout, panel);
        let shape = layout.panel_shape(panel);
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                let idx = CellIdx::new(i32::try_from(row).unwrap(), i32::try_from(col).unwrap());
                let rect = addr.cell_rect_in_parent(idx);
                assert_eq!(addr.index_at(rect.center()), idx, "{panel:?} {idx:?}");
            }
        }
        assert_eq!(addr.cache().len(), shape.rows * shape.cols);
    }
}

#[test]
fn validity_predicates_follow_the_grid() {
    let grid = Grid::sample();
    assert!(is_valid_cell_index(CellIdx::new(0, 0), &grid));
    assert!(is_valid_cell_index(CellIdx::new(14, 14), &grid));
    assert!(!is_valid_cell_index(CellIdx::new(15, 0), &grid));
    assert!(!is_valid_cell_index(CellIdx::new(0, -1), &grid));

    let top = grid.top_clues();
    assert!(is_valid_clue_index(CellIdx::new(0, 0), top));
    assert!(!is_valid_clue_index(CellIdx::new(i32::try_from(top.rows()).unwrap(), 0), top));
    let left = grid.left_clues();
    assert!(is_valid_clue_index(CellIdx::new(14, 3), left));
    assert!(!is_valid_clue_index(CellIdx::new(14, 4), left));
}
