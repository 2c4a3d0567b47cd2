use crate::config::{REFRESH_DELAY, Settings};
use crate::file_utils::PathExt;
use crate::ui::controller::{self, SharedController};
use log::info;

/// Self-heals the stored folder list and schedules the first refresh.
///
/// The refresh is deferred so the window has been laid out and the grid
/// width can be measured.
pub fn configure_startup(controller: &SharedController, settings: &Settings) {
    info!(
        "Folder list: {}, extensions: {:?}, decoder: {}",
        settings.paths_file.format_for_log(),
        settings.video_extensions,
        settings.ffmpeg_program
    );

    {
        let mut this = controller.borrow_mut();
        this.prune_missing_folders();
        this.publish_view();
    }

    controller::schedule_refresh(controller, REFRESH_DELAY);
}
