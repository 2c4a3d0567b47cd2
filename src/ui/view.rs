//! The window surface the display controller draws on.
//!
//! `slint::Weak<AppWindow>` is the real implementation; every call is a no-op
//! once the window is gone.

use crate::state::ViewMode;
use crate::ui::state_helpers;

pub trait GridView {
    /// Current width of the grid area, or `None` when there is no window.
    fn grid_width(&self) -> Option<f32>;

    fn show_view_labels(&self, mode: ViewMode);

    fn show_loading(&self);

    fn show_grid(
        &self,
        tiles: Vec<crate::VideoTile>,
        row_count: usize,
        column_count: usize,
        empty_message: &str,
    );

    fn show_folders(&self, visible: bool, folders: &[String]);

    fn show_error(&self, prefix: &str, error: String);

    fn clear_status(&self);
}

impl GridView for slint::Weak<crate::AppWindow> {
    fn grid_width(&self) -> Option<f32> {
        self.upgrade().map(|ui| ui.get_grid_width())
    }

    fn show_view_labels(&self, mode: ViewMode) {
        if let Some(ui) = self.upgrade() {
            state_helpers::set_view_labels(&ui, mode);
        }
    }

    fn show_loading(&self) {
        if let Some(ui) = self.upgrade() {
            state_helpers::show_loading(&ui);
        }
    }

    fn show_grid(
        &self,
        tiles: Vec<crate::VideoTile>,
        row_count: usize,
        column_count: usize,
        empty_message: &str,
    ) {
        if let Some(ui) = self.upgrade() {
            state_helpers::set_grid(&ui, tiles, row_count, column_count, empty_message);
        }
    }

    fn show_folders(&self, visible: bool, folders: &[String]) {
        if let Some(ui) = self.upgrade() {
            state_helpers::set_folder_panel(&ui, visible, folders);
        }
    }

    fn show_error(&self, prefix: &str, error: String) {
        if let Some(ui) = self.upgrade() {
            state_helpers::set_error_with_prefix(&ui, prefix, error);
        }
    }

    fn clear_status(&self) {
        if let Some(ui) = self.upgrade() {
            state_helpers::clear_status(&ui);
        }
    }
}
