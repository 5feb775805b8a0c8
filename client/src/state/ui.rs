//! Local UI chrome state for the navigation shell.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (sidebar open/closed, viewport
//! class) out of the session store so the shell can evolve independently of
//! authentication data. The shell owns one instance; nothing else reads it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Viewports narrower than this (CSS px) get an overlay sidebar that starts
/// collapsed.
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 1024.0;

/// Sidebar state for the navigation shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub narrow_viewport: bool,
}

impl Default for UiState {
    /// Layout used before the viewport is known (server render): narrow and
    /// collapsed.
    fn default() -> Self {
        Self { sidebar_open: false, narrow_viewport: true }
    }
}

impl UiState {
    /// Initial state for a viewport of `width` CSS pixels.
    pub fn for_viewport(width: Option<f64>) -> Self {
        let narrow_viewport = width.map_or(true, |w| w < NARROW_VIEWPORT_MAX_WIDTH);
        Self { sidebar_open: !narrow_viewport, narrow_viewport }
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// A menu item was followed. The overlay sidebar gets out of the way on
    /// narrow viewports; the docked one stays put.
    pub fn on_navigate(&mut self) {
        if self.narrow_viewport {
            self.sidebar_open = false;
        }
    }

    pub fn on_backdrop_click(&mut self) {
        self.sidebar_open = false;
    }

    /// The dimming backdrop only exists behind an open overlay sidebar.
    pub fn backdrop_visible(&self) -> bool {
        self.narrow_viewport && self.sidebar_open
    }
}
