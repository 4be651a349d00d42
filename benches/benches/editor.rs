// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use nonogram_editor::{
    Buttons, CellContent, Editor, EditorConfig, PointerButton, PointerEvent, RenderTarget,
    Renderer,
};
use nonogram_grid::{CellIdx, Grid};
use nonogram_layout::{Panel, PixelSize};

fn square_grid(n: usize) -> Grid {
    let lines = vec![vec![1_u32]; n];
    Grid::new(n, n, lines.clone(), lines).expect("one-cell clues fit any line")
}

fn editor(n: usize) -> Editor {
    Editor::new(square_grid(n), EditorConfig::default(), PixelSize::new(1920, 1080))
}

struct Counter(usize);

impl RenderTarget for Counter {
    fn panel(&mut self, _: Panel, _: Rect) {
        self.0 += 1;
    }

    fn cell(&mut self, _: Panel, _: CellIdx, _: Rect, _: CellContent) {
        self.0 += 1;
    }
}

fn bench_editor(c: &mut Criterion) {
    let mut group = c.benchmark_group("nonogram_editor");

    for &n in &[15_usize, 50, 100] {
        let ed = editor(n);
        let parent = ed.parent_screen_rect();
        group.bench_function(format!("hit_test(n={n})"), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for k in 0..256_u32 {
                    let p = Point::new(
                        parent.x0 + f64::from(k * 37 % 997) / 997.0 * parent.width(),
                        parent.y0 + f64::from(k * 61 % 991) / 991.0 * parent.height(),
                    );
                    hits += usize::from(ed.hit_test(black_box(p)).is_some());
                }
                black_box(hits)
            });
        });

        group.bench_function(format!("render(n={n})"), |b| {
            let mut renderer = Renderer::new(Counter(0));
            b.iter(|| black_box(renderer.render(&ed)));
        });

        group.bench_function(format!("drag_row(n={n})"), |b| {
            b.iter_batched(
                || editor(n),
                |mut ed| {
                    let last = n as i32 - 1;
                    let from = ed.cell_screen_rect(Panel::Board, CellIdx::new(0, 0)).center();
                    ed.handle(PointerEvent::down(from, PointerButton::Primary));
                    for col in 1..=last {
                        let to = ed.cell_screen_rect(Panel::Board, CellIdx::new(0, col)).center();
                        ed.handle(PointerEvent::moved(to, Buttons::PRIMARY));
                    }
                    black_box(ed.handle(PointerEvent::up(from, PointerButton::Primary)))
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("relayout(n={n})"), |b| {
            let mut ed = editor(n);
            b.iter(|| {
                ed.relayout();
                black_box(ed.cell_size())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_editor);
criterion_main!(benches);
