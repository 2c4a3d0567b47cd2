//! Helper functions to set related ViewState properties together.

use crate::state::ViewMode;
use log::error;
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

/// Sets the title and toggle button text for `mode`.
pub fn set_view_labels(ui: &crate::AppWindow, mode: ViewMode) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_title(mode.title().into());
    view_state.set_toggle_label(mode.toggle_label().into());
}

/// Clears the grid and shows the loading placeholder.
pub fn show_loading(ui: &crate::AppWindow) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_tiles(ModelRc::new(VecModel::from(Vec::<crate::VideoTile>::new())));
    view_state.set_row_count(0);
    view_state.set_empty_message(SharedString::new());
    view_state.set_loading(true);
}

/// Replaces the grid contents.
///
/// Groups: tiles, row-count, column-count, empty-message, loading
pub fn set_grid(
    ui: &crate::AppWindow,
    tiles: Vec<crate::VideoTile>,
    row_count: usize,
    column_count: usize,
    empty_message: &str,
) {
    let view_state = ui.global::<crate::ViewState>();
    let message = if tiles.is_empty() { empty_message } else { "" };
    view_state.set_tiles(ModelRc::new(VecModel::from(tiles)));
    view_state.set_row_count(row_count as i32);
    view_state.set_column_count(column_count as i32);
    view_state.set_empty_message(message.into());
    view_state.set_loading(false);
}

/// Sets the fixed tile geometry.
pub fn set_grid_metrics(ui: &crate::AppWindow, column_width: f32, row_height: f32) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_column_width(column_width);
    view_state.set_row_height(row_height);
}

/// Sets the folder panel visibility and its folder list.
pub fn set_folder_panel(ui: &crate::AppWindow, visible: bool, folders: &[String]) {
    let view_state = ui.global::<crate::ViewState>();
    let folders: Vec<SharedString> = folders.iter().map(|f| f.as_str().into()).collect();
    view_state.set_folders(ModelRc::new(VecModel::from(folders)));
    view_state.set_folder_panel_visible(visible);
}

/// Logs an error and shows it in the status line with a prefix.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_status_message(error_message.into());
}

pub fn clear_status(ui: &crate::AppWindow) {
    ui.global::<crate::ViewState>()
        .set_status_message(SharedString::new());
}
