//! Event handlers for UI callbacks.
//!
//! Registers all Logic callbacks. Everything runs on the event loop thread;
//! the folder picker uses `slint::spawn_local` because it must stay there.

use crate::file_utils::PathExt;
use crate::ui::controller::{self, SharedController};
use log::{debug, warn};
use rfd::AsyncFileDialog;
use slint::{ComponentHandle, SharedString};

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, controller: &SharedController) {
    let logic = ui.global::<crate::Logic>();

    logic.on_toggle_view({
        let controller = controller.clone();
        move || controller::toggle_view(&controller)
    });

    logic.on_toggle_folder_panel({
        let controller = controller.clone();
        move || controller.borrow_mut().toggle_folder_panel()
    });

    // AsyncFileDialog has to run on the main thread.
    logic.on_add_folder({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            let spawned = slint::spawn_local(async move {
                let Some(folder) = AsyncFileDialog::new()
                    .set_title("Select a folder with videos")
                    .pick_folder()
                    .await
                else {
                    debug!("Folder selection cancelled");
                    return;
                };

                // The folder list is JSON text, so it can only hold UTF-8 paths.
                let Some(path) = folder.path().to_str() else {
                    warn!(
                        "Skipping folder with non-UTF-8 path {}",
                        folder.path().format_for_log()
                    );
                    return;
                };
                controller::add_folder(&controller, path);
            });
            if let Err(e) = spawned {
                warn!("Failed to open folder picker: {}", e);
            }
        }
    });

    logic.on_remove_folder({
        let controller = controller.clone();
        move |path: SharedString| controller::remove_folder(&controller, path.as_str())
    });

    logic.on_open_video({
        let controller = controller.clone();
        move |index: i32| controller.borrow().open_video(index)
    });

    logic.on_reveal_video({
        let controller = controller.clone();
        move |index: i32| controller.borrow().reveal_video(index)
    });

    logic.on_grid_resized({
        let controller = controller.clone();
        move |width: f32| controller::handle_resize(&controller, width)
    });
}
