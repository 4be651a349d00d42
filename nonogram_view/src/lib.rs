// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nonogram View: zoom and pan on top of a nonogram layout.
//!
//! The layout engine centers the puzzle in the viewport at its optimal cell
//! size. [`ViewTransform`] adds the two things a user controls:
//!
//! - **Zoom**, an integer offset on the cell size. Steps are rounded to even
//!   numbers and the resolved cell size is forced even and clamped to
//!   [`MINIMUM_CELL_SIZE`](nonogram_layout::MINIMUM_CELL_SIZE), so symbols
//!   can always be centered on a whole pixel.
//! - **Pan**, a free 2D translation driven by a drag gesture. The pan is
//!   computed from the gesture's start snapshot rather than accumulated
//!   per event, and it is never clamped.
//!
//! It also maps rectangles from parent-relative layout coordinates to the
//! screen, and pointer positions back.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use nonogram_layout::PixelRect;
//! use nonogram_view::ViewTransform;
//!
//! let mut view = ViewTransform::default();
//!
//! // Wheel up by three notches: only even steps are applied.
//! assert_eq!(view.zoom(3), 2);
//! assert_eq!(view.resolve_cell_size(35), 36);
//!
//! // Drag the puzzle around.
//! view.start_pan(Point::new(10.0, 10.0));
//! view.update_pan(Point::new(25.0, 5.0));
//! view.end_pan();
//! assert_eq!(view.pan(), Vec2::new(15.0, -5.0));
//!
//! // A screen position, relative to the parent rectangle.
//! let parent = PixelRect::new(100, 50, 400, 300);
//! let local = view.to_parent_point(parent, Point::new(115.0, 45.0));
//! assert_eq!(local, Point::new(0.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod transform;

pub use transform::{ViewTransform, ViewTransformDebugInfo};
