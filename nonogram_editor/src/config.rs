// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use nonogram_layout::LayoutConfig;

/// Editor settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EditorConfig {
    /// Borders, margins and minimum cell size.
    pub layout: LayoutConfig,
    /// Cell size change per wheel notch.
    pub zoom_step: i32,
    /// Cell size change per wheel notch with Ctrl held.
    pub fast_zoom_step: i32,
}

impl EditorConfig {
    /// Replaces the layout settings.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces the per-notch zoom step.
    #[must_use]
    pub fn with_zoom_step(mut self, step: i32) -> Self {
        self.zoom_step = step;
        self
    }

    /// Replaces the per-notch zoom step used with Ctrl.
    #[must_use]
    pub fn with_fast_zoom_step(mut self, step: i32) -> Self {
        self.fast_zoom_step = step;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            zoom_step: 2,
            fast_zoom_step: 6,
        }
    }
}
