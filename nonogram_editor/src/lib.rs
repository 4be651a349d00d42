// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nonogram Editor: a headless editing session for nonogram puzzles.
//!
//! [`Editor`] ties the lower crates together:
//!
//! - `nonogram_grid` holds the puzzle,
//! - `nonogram_layout` sizes and places the board and clue panels,
//! - `nonogram_addressing` maps pixels to cells and back,
//! - `nonogram_view` applies zoom and pan,
//! - `nonogram_interaction` runs the paint and clue tick gestures.
//!
//! Hosts forward pointer events and viewport sizes, then redraw when the
//! returned [`EventOutcome`] asks for it. Drawing goes through the
//! [`RenderTarget`] trait: a [`Renderer`] owns its target and walks the
//! editor's state, so the whole editor runs without a window.
//!
//! ## Pointer bindings
//!
//! - Primary press on a board cell starts a paint draft; drag to extend it
//!   along a row or column; release to commit.
//! - Primary press on a clue starts a tick gesture; release to commit.
//! - Pressing secondary while primary is held cancels either gesture.
//! - Middle drag pans.
//! - The wheel zooms by [`EditorConfig::zoom_step`] per notch, or by
//!   [`EditorConfig::fast_zoom_step`] with Ctrl held.
//!
//! ## Minimal example
//!
//! ```rust
//! use nonogram_editor::{Editor, EditorConfig, PointerButton, PointerEvent};
//! use nonogram_grid::{CellIdx, Grid};
//! use nonogram_layout::{Panel, PixelSize};
//!
//! let mut editor = Editor::new(Grid::sample(), EditorConfig::default(), PixelSize::new(1200, 800));
//!
//! let from = editor.cell_screen_rect(Panel::Board, CellIdx::new(3, 3)).center();
//! let to = editor.cell_screen_rect(Panel::Board, CellIdx::new(3, 6)).center();
//!
//! editor.handle(PointerEvent::down(from, PointerButton::Primary));
//! editor.handle(PointerEvent::moved(to, nonogram_editor::Buttons::PRIMARY));
//! let outcome = editor.handle(PointerEvent::up(to, PointerButton::Primary));
//!
//! assert_eq!(outcome.cells_committed, 4);
//! assert!(editor.grid().is_filled(CellIdx::new(3, 5)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod editor;
mod input;
mod render;

pub use config::EditorConfig;
pub use editor::{CellDisplay, ClueDisplay, Editor, Hit, clue_panel, panel_axis};
pub use input::{Buttons, EventOutcome, Modifiers, PointerButton, PointerEvent};
pub use render::{CellContent, RenderStats, RenderTarget, Renderer, symbol_padding};
