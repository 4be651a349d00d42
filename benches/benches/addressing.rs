// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use nonogram_addressing::{CellGeometry, CellRectCache, screen_to_cell_index};
use nonogram_grid::CellIdx;
use nonogram_layout::{Borders, GridDims, Layout, Panel, PixelSize};

fn board_geometry(n: usize, viewport: PixelSize) -> CellGeometry {
    let dims = GridDims::new(n, n, n / 3, n / 3);
    let layout = Layout::new(12, Borders::default(), dims, viewport);
    CellGeometry::for_panel(&layout, Panel::Board)
}

fn bench_addressing(c: &mut Criterion) {
    let mut group = c.benchmark_group("nonogram_addressing");

    for &n in &[15_usize, 50, 100] {
        let geometry = board_geometry(n, PixelSize::new(1920, 1080));
        let span = geometry.cell_rect(CellIdx::new(n as i32 - 1, n as i32 - 1));
        let (w, h) = (span.right(), span.bottom());

        group.bench_function(format!("screen_to_cell_index(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0_i32;
                for k in 0..256 {
                    let p = Point::new(f64::from(k * 7 % w), f64::from(k * 13 % h));
                    let idx = screen_to_cell_index(black_box(p), Point::ZERO, &geometry);
                    acc = acc.wrapping_add(idx.row ^ idx.col);
                }
                black_box(acc)
            });
        });

        group.bench_function(format!("cell_rect_uncached(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0_i32;
                for row in 0..n as i32 {
                    for col in 0..n as i32 {
                        acc = acc.wrapping_add(geometry.cell_rect(CellIdx::new(row, col)).x);
                    }
                }
                black_box(acc)
            });
        });

        let cache = CellRectCache::new(geometry);
        group.bench_function(format!("cell_rect_cached(n={n})"), |b| {
            b.iter(|| {
                let mut acc = 0_i32;
                for row in 0..n as i32 {
                    for col in 0..n as i32 {
                        acc = acc.wrapping_add(cache.cell_rect(CellIdx::new(row, col)).x);
                    }
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_addressing);
criterion_main!(benches);
