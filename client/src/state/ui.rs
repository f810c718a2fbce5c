//! Local UI chrome state (theme, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and page state so the
//! header can evolve independently of data loading.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the header and the page shell.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
