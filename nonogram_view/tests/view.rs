// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for zoom evenness and unbounded pan.

use kurbo::{Point, Vec2};
use nonogram_layout::{MINIMUM_CELL_SIZE, PixelRect};
use nonogram_view::ViewTransform;
use proptest::prelude::*;

proptest! {
    #[test]
    fn cell_size_is_always_even_and_above_minimum(
        optimal in 2_i32..200,
        deltas in prop::collection::vec(-50_i32..50, 0..40),
    ) {
        let mut view = ViewTransform::default();
        for delta in deltas {
            view.zoom(delta);
            let cell = view.resolve_cell_size(optimal);
            prop_assert_eq!(cell % 2, 0);
            prop_assert!(cell >= MINIMUM_CELL_SIZE);
        }
    }

    #[test]
    fn zoom_offset_only_moves_in_even_steps(delta in -1000_i32..1000) {
        let mut view = ViewTransform::default();
        let step = view.zoom(delta);
        prop_assert_eq!(step % 2, 0);
        prop_assert!(step <= delta && delta - step < 2);
        prop_assert_eq!(view.zoom_offset(), step);
    }

    #[test]
    fn pan_is_start_snapshot_plus_pointer_travel(
        start in (-1e4_f64..1e4, -1e4_f64..1e4),
        moves in prop::collection::vec((-1e5_f64..1e5, -1e5_f64..1e5), 1..10),
    ) {
        let mut view = ViewTransform::default();
        view.set_pan(Vec2::new(3.0, -4.0));
        let start = Point::new(start.0, start.1);
        view.start_pan(start);
        for (x, y) in moves {
            let pos = Point::new(x, y);
            view.update_pan(pos);
            prop_assert_eq!(view.pan(), Vec2::new(3.0, -4.0) + (pos - start));
        }
    }

    #[test]
    fn parent_point_inverts_screen_rect(
        px in -2000_i32..2000,
        py in -2000_i32..2000,
        rx in 0_i32..500,
        ry in 0_i32..500,
        pan in (-3000_i32..3000, -3000_i32..3000),
    ) {
        let mut view = ViewTransform::default();
        view.set_pan(Vec2::new(f64::from(pan.0), f64::from(pan.1)));
        let parent = PixelRect::new(px, py, 800, 600);
        let rect = PixelRect::new(rx, ry, 10, 10);
        let screen = view.to_screen_rect(parent, rect);
        let back = view.to_parent_point(parent, screen.origin());
        prop_assert_eq!(back, Point::new(f64::from(rx), f64::from(ry)));
    }
}

#[test]
fn zooming_out_past_the_floor_and_back() {
    let mut view = ViewTransform::default();
    for _ in 0..50 {
        view.zoom(-6);
    }
    assert_eq!(view.resolve_cell_size(36), MINIMUM_CELL_SIZE);
    view.zoom(6);
    assert_eq!(view.resolve_cell_size(36), 10);
}

#[test]
fn reset_restores_defaults() {
    let mut view = ViewTransform::default();
    view.zoom(8);
    view.start_pan(Point::ZERO);
    view.update_pan(Point::new(4.0, 4.0));
    view.reset();
    assert_eq!(view.zoom_offset(), 0);
    assert_eq!(view.pan(), Vec2::ZERO);
    assert!(!view.is_panning());
}
