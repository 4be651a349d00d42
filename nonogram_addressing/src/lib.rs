// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nonogram Addressing: from cells to pixels and back.
//!
//! Every fifth line of a nonogram panel is a thicker separator, so the pixel
//! pitch of a panel is periodic rather than uniform. This crate owns both
//! directions of that mapping:
//!
//! - Forward, [`AxisGeometry::offset_of`] and [`CellGeometry::cell_rect`]:
//!   `offset(i) = i * (cell + border) + floor(i / 5) * (separator - border)`.
//! - Inverse, [`screen_to_cell_index`]: floor division by the width of a
//!   five-cell group, then by the cell pitch inside the group. Pixels that
//!   fall in a separator snap to the last cell of their group.
//!
//! The inverse mapping uses true floor division throughout, so positions
//! left of or above a panel yield negative indices instead of collapsing onto
//! row or column zero. Results are never bounds checked; use
//! [`is_valid_cell_index`] and [`is_valid_clue_index`] before touching the
//! grid.
//!
//! Forward lookups are memoized in a [`CellRectCache`], and
//! [`PanelAddressing`] bundles geometry, cache and panel position for each
//! of the three panels of a [`Layout`](nonogram_layout::Layout).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use nonogram_addressing::{AxisGeometry, CellGeometry, screen_to_cell_index};
//! use nonogram_grid::CellIdx;
//!
//! // 10px cells, 1px lines, 2px separators.
//! let axis = AxisGeometry::new(10, 1, 1);
//! let geometry = CellGeometry::new(axis, axis);
//!
//! let rect = geometry.cell_rect(CellIdx::new(2, 7));
//! assert_eq!(rect.x, 7 * 11 + 1);
//!
//! let origin = Point::new(100.0, 100.0);
//! let center = rect.center() + origin.to_vec2();
//! assert_eq!(screen_to_cell_index(center, origin, &geometry), CellIdx::new(2, 7));
//!
//! // One pixel left of the panel.
//! let outside = Point::new(99.0, 100.0);
//! assert_eq!(screen_to_cell_index(outside, origin, &geometry).col, -1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod cache;
mod geometry;
mod panel;

pub use cache::CellRectCache;
pub use geometry::{
    AxisGeometry, CellGeometry, is_valid_cell_index, is_valid_clue_index, screen_to_cell_index,
};
pub use panel::PanelAddressing;
