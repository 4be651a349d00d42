// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use nonogram_addressing::PanelAddressing;
use nonogram_grid::{CellIdx, ClueAxis, Grid, Symbol};
use nonogram_interaction::{ClueTickGesture, DraftGesture};
use nonogram_layout::{GridDims, Layout, Panel, PixelSize, RectAdjust, compute_optimal_cell_size};
use nonogram_view::ViewTransform;

use crate::{Buttons, EditorConfig, EventOutcome, Modifiers, PointerButton, PointerEvent};

/// What lies under a screen position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hit {
    /// A board cell.
    Board(CellIdx),
    /// A slot of a clue panel, clue or padding.
    Clue(ClueAxis, CellIdx),
}

/// Clue panel of a clue axis.
#[must_use]
pub fn clue_panel(axis: ClueAxis) -> Panel {
    match axis {
        ClueAxis::Column => Panel::TopClues,
        ClueAxis::Row => Panel::LeftClues,
    }
}

/// Clue axis of a panel, or `None` for the board.
#[must_use]
pub fn panel_axis(panel: Panel) -> Option<ClueAxis> {
    match panel {
        Panel::Board => None,
        Panel::TopClues => Some(ClueAxis::Column),
        Panel::LeftClues => Some(ClueAxis::Row),
    }
}

/// Display state of a board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellDisplay {
    /// Symbol to draw, draft preview applied.
    pub symbol: Symbol,
    /// The cell is part of the active draft.
    pub drafted: bool,
}

/// Display state of a clue slot that holds a clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClueDisplay {
    /// Run length.
    pub number: u32,
    /// Tick flag to draw, pending gesture applied.
    pub ticked: bool,
    /// The slot is part of the active tick gesture.
    pub pending: bool,
}

/// A headless editing session over one puzzle.
///
/// The editor owns the [`Grid`], the view state and both gestures, and
/// keeps the [`Layout`] and per-panel addressing in sync with them. Hosts
/// feed it [`PointerEvent`]s and viewport sizes and read geometry back for
/// drawing; nothing here touches a window or a renderer.
///
/// Event handling follows one path: screen position → parent-relative
/// position (undo centering and pan) → cell index → gesture → grid on
/// release.
#[derive(Debug)]
pub struct Editor {
    grid: Grid,
    config: EditorConfig,
    viewport: PixelSize,
    view: ViewTransform,
    optimal_cell_size: i32,
    layout: Layout,
    board: PanelAddressing,
    top_clues: PanelAddressing,
    left_clues: PanelAddressing,
    draft: DraftGesture,
    tick: ClueTickGesture,
}

impl Editor {
    /// Opens `grid` in a viewport of `viewport` pixels.
    #[must_use]
    pub fn new(grid: Grid, config: EditorConfig, viewport: PixelSize) -> Self {
        let view = ViewTransform::new(config.layout.min_cell_size);
        let dims = GridDims::from_grid(&grid);
        let borders = config.layout.borders;
        let layout = Layout::new(config.layout.min_cell_size, borders, dims, viewport);
        let mut editor = Self {
            board: PanelAddressing::new(&layout, Panel::Board),
            top_clues: PanelAddressing::new(&layout, Panel::TopClues),
            left_clues: PanelAddressing::new(&layout, Panel::LeftClues),
            grid,
            config,
            viewport,
            view,
            optimal_cell_size: 0,
            layout,
            draft: DraftGesture::default(),
            tick: ClueTickGesture::default(),
        };
        editor.log_loaded();
        editor.relayout();
        editor
    }

    /// Replaces the puzzle, resetting zoom, pan and gestures.
    pub fn load(&mut self, grid: Grid) {
        self.grid = grid;
        self.view.reset();
        self.draft.cancel();
        self.tick.cancel();
        self.log_loaded();
        self.relayout();
    }

    fn log_loaded(&self) {
        tracing::info!(
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            row_clue_depth = self.grid.max_row_clues(),
            col_clue_depth = self.grid.max_col_clues(),
            "puzzle loaded"
        );
    }

    /// Recomputes the cell size and every panel rectangle, and drops all
    /// cached cell rectangles.
    ///
    /// Runs automatically on load, resize and zoom.
    pub fn relayout(&mut self) {
        let dims = GridDims::from_grid(&self.grid);
        let cfg = self.config.layout;
        self.optimal_cell_size =
            compute_optimal_cell_size(dims, cfg.borders, self.viewport, cfg.margins);
        let cell_size = self.view.resolve_cell_size(self.optimal_cell_size);
        self.layout = Layout::new(cell_size, cfg.borders, dims, self.viewport);
        self.board.relayout(&self.layout);
        self.top_clues.relayout(&self.layout);
        self.left_clues.relayout(&self.layout);
        tracing::debug!(
            optimal = self.optimal_cell_size,
            cell_size,
            zoom_offset = self.view.zoom_offset(),
            viewport_width = self.viewport.width,
            viewport_height = self.viewport.height,
            "relayout"
        );
    }

    /// Resizes the viewport. Returns `true` (after relaying out) if the size changed.
    pub fn set_viewport(&mut self, viewport: PixelSize) -> bool {
        if self.viewport == viewport {
            return false;
        }
        self.viewport = viewport;
        self.relayout();
        true
    }

    /// Zooms by `delta` pixels per cell (rounded to an even step) and relays out.
    ///
    /// Returns `true` if the cell size changed.
    pub fn zoom(&mut self, delta: i32) -> bool {
        let before = self.layout.cell_size();
        self.view.zoom(delta);
        self.relayout();
        self.layout.cell_size() != before
    }

    /// Handles one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> EventOutcome {
        match event {
            PointerEvent::Down {
                pos,
                button,
                buttons,
                ..
            } => self.pointer_down(pos, button, buttons),
            PointerEvent::Move { pos, .. } => self.pointer_move(pos),
            PointerEvent::Up { button, .. } => self.pointer_up(button),
            PointerEvent::Wheel {
                delta, modifiers, ..
            } => self.wheel(delta, modifiers),
        }
    }

    fn pointer_down(&mut self, pos: Point, button: PointerButton, buttons: Buttons) -> EventOutcome {
        if buttons.contains(Buttons::PRIMARY | Buttons::SECONDARY) {
            let active = self.draft.is_active() || self.tick.is_active();
            self.draft.cancel();
            self.tick.cancel();
            return EventOutcome::redraw_if(active);
        }
        match button {
            PointerButton::Primary => {
                let started = match self.hit_test(pos) {
                    Some(Hit::Board(idx)) => self.draft.start(idx, &self.grid),
                    Some(Hit::Clue(axis, idx)) => self.tick.start(axis, idx, &self.grid),
                    None => false,
                };
                EventOutcome::redraw_if(started)
            }
            PointerButton::Middle => {
                self.view.start_pan(pos);
                EventOutcome::IGNORED
            }
            PointerButton::Secondary => EventOutcome::IGNORED,
        }
    }

    fn pointer_move(&mut self, pos: Point) -> EventOutcome {
        let mut changed = false;
        if self.view.is_panning() {
            changed |= self.view.update_pan(pos);
        }
        if self.draft.is_active() {
            let idx = self.cell_at(Panel::Board, pos);
            changed |= self.draft.update(idx, &self.grid);
        }
        if let Some(axis) = self.tick.axis() {
            let idx = self.cell_at(clue_panel(axis), pos);
            changed |= self.tick.update(idx, &self.grid);
        }
        EventOutcome::redraw_if(changed)
    }

    fn pointer_up(&mut self, button: PointerButton) -> EventOutcome {
        match button {
            PointerButton::Primary => {
                let mut outcome = EventOutcome::IGNORED;
                if self.draft.is_active() {
                    outcome.cells_committed = self.draft.commit(&mut self.grid).len();
                    outcome.redraw = true;
                }
                if self.tick.is_active() {
                    outcome.ticks_committed = self.tick.commit(&mut self.grid).len();
                    outcome.redraw = true;
                }
                outcome
            }
            PointerButton::Middle => {
                self.view.end_pan();
                EventOutcome::IGNORED
            }
            PointerButton::Secondary => EventOutcome::IGNORED,
        }
    }

    fn wheel(&mut self, delta: i32, modifiers: Modifiers) -> EventOutcome {
        if delta == 0 {
            return EventOutcome::IGNORED;
        }
        let step = if modifiers.contains(Modifiers::CTRL) {
            self.config.fast_zoom_step
        } else {
            self.config.zoom_step
        };
        let changed = self.zoom(delta.saturating_mul(step));
        EventOutcome {
            redraw: changed,
            relayout: changed,
            ..EventOutcome::IGNORED
        }
    }

    /// Unchecked cell index of `panel` under a screen position.
    #[must_use]
    pub fn cell_at(&self, panel: Panel, screen: Point) -> CellIdx {
        let local = self.view.to_parent_point(self.layout.parent_rect(), screen);
        self.addressing(panel).index_at(local)
    }

    /// The board cell or clue slot under a screen position, if any.
    #[must_use]
    pub fn hit_test(&self, screen: Point) -> Option<Hit> {
        let idx = self.cell_at(Panel::Board, screen);
        if self.grid.contains(idx) {
            return Some(Hit::Board(idx));
        }
        [ClueAxis::Column, ClueAxis::Row].into_iter().find_map(|axis| {
            let idx = self.cell_at(clue_panel(axis), screen);
            self.grid.clues(axis).contains(idx).then_some(Hit::Clue(axis, idx))
        })
    }

    /// Screen rectangle of a whole panel, outer frame included.
    #[must_use]
    pub fn panel_screen_rect(&self, panel: Panel) -> Rect {
        self.view
            .to_screen_rect(self.layout.parent_rect(), self.layout.panel_rect(panel))
    }

    /// Screen rectangle of the parent rectangle.
    #[must_use]
    pub fn parent_screen_rect(&self) -> Rect {
        let parent = self.layout.parent_rect();
        self.view
            .to_screen_rect(parent, PixelSize::new(parent.width, parent.height).to_rect())
    }

    /// Screen rectangle of cell `idx` in `panel`. Not bounds checked.
    #[must_use]
    pub fn cell_screen_rect(&self, panel: Panel, idx: CellIdx) -> Rect {
        self.cell_screen_rect_with(panel, idx, RectAdjust::NONE)
    }

    /// Screen rectangle of cell `idx` in `panel` with an adjustment applied.
    #[must_use]
    pub fn cell_screen_rect_with(&self, panel: Panel, idx: CellIdx, adjust: RectAdjust) -> Rect {
        let addr = self.addressing(panel);
        let interior = addr.interior();
        let rect = addr
            .cell_rect_with(idx, adjust)
            .translate(interior.x, interior.y);
        self.view.to_screen_rect(self.layout.parent_rect(), rect)
    }

    /// What to draw for board cell `idx`, or `None` off the board.
    #[must_use]
    pub fn cell_display(&self, idx: CellIdx) -> Option<CellDisplay> {
        let committed = self.grid.symbol(idx)?;
        Some(CellDisplay {
            symbol: self.draft.preview_symbol(idx, committed),
            drafted: self.draft.covers(idx),
        })
    }

    /// What to draw for slot `idx` of the `axis` clue panel, or `None` for
    /// padding and out-of-range slots.
    #[must_use]
    pub fn clue_display(&self, axis: ClueAxis, idx: CellIdx) -> Option<ClueDisplay> {
        let clues = self.grid.clues(axis);
        let number = clues.clue(idx)?;
        Some(ClueDisplay {
            number,
            ticked: self.tick.preview_ticked(axis, idx, clues.is_ticked(idx)),
            pending: self.tick.covers(axis, idx),
        })
    }

    /// Addressing for one panel.
    #[must_use]
    pub fn addressing(&self, panel: Panel) -> &PanelAddressing {
        match panel {
            Panel::Board => &self.board,
            Panel::TopClues => &self.top_clues,
            Panel::LeftClues => &self.left_clues,
        }
    }

    /// The puzzle.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Settings.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Viewport size.
    #[must_use]
    pub fn viewport(&self) -> PixelSize {
        self.viewport
    }

    /// Zoom and pan state.
    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Current layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Cell size in use, zoom applied.
    #[must_use]
    pub fn cell_size(&self) -> i32 {
        self.layout.cell_size()
    }

    /// Cell size that fits the viewport without zoom.
    #[must_use]
    pub fn optimal_cell_size(&self) -> i32 {
        self.optimal_cell_size
    }

    /// The paint gesture.
    #[must_use]
    pub fn draft(&self) -> &DraftGesture {
        &self.draft
    }

    /// The clue tick gesture.
    #[must_use]
    pub fn tick(&self) -> &ClueTickGesture {
        &self.tick
    }
}
