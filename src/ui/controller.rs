//! Display controller: runs selection, layout and rendering on refresh,
//! view toggle, folder changes and resize.
//!
//! Everything runs on the Slint event loop thread. Deferred work goes through
//! a [`RefreshScheduler`] (`slint::Timer` in the app), so a placeholder can be
//! drawn before a blocking scan.

use crate::config::{
    COLUMN_WIDTH, REFRESH_DELAY, RESIZE_DEBOUNCE, ROW_HEIGHT, Settings, VIEW_TOGGLE_DELAY,
};
use crate::error::LaunchError;
use crate::file_utils::{FsCreationTime, PathExt};
use crate::frame_decoder::FfmpegDecoder;
use crate::path_store::PathStore;
use crate::services::{Flashback, FlashbackSelector, ShellLauncher, platform_launcher};
use crate::state::DisplayState;
use crate::thumbnail_cache::ThumbnailCache;
use crate::ui::grid_layout::{GridLayoutPlanner, ResizePoll};
use crate::ui::view::GridView;
use crate::ui::{state_helpers, tiles};
use chrono::Local;
use log::{debug, info, warn};
use slint::{ComponentHandle, Timer, TimerMode};
use std::cell::RefCell;
use std::path::Path;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Controller shared between Slint callbacks.
pub type SharedController = Rc<RefCell<DisplayController>>;

/// Runs a task on a later turn of the event loop.
pub trait RefreshScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Schedules through `slint::Timer::single_shot`.
pub struct TimerScheduler;

impl RefreshScheduler for TimerScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timer::single_shot(delay, task);
    }
}

pub struct DisplayController {
    view: Box<dyn GridView>,
    scheduler: Rc<dyn RefreshScheduler>,
    state: DisplayState,
    store: PathStore,
    cache: ThumbnailCache,
    selector: FlashbackSelector,
    planner: GridLayoutPlanner,
    launcher: Box<dyn ShellLauncher>,
    /// Videos behind the tiles currently on screen, in tile index order.
    flashbacks: Vec<Flashback>,
    resize_timer: Timer,
}

impl DisplayController {
    pub fn new(ui: &crate::AppWindow, settings: &Settings) -> SharedController {
        let planner = GridLayoutPlanner::new(COLUMN_WIDTH, RESIZE_DEBOUNCE);
        state_helpers::set_grid_metrics(ui, planner.column_width(), ROW_HEIGHT);

        Self::with_parts(
            Box::new(ui.as_weak()),
            Rc::new(TimerScheduler),
            PathStore::new(settings.paths_file.clone()),
            ThumbnailCache::new(Box::new(FfmpegDecoder::new(
                settings.ffmpeg_program.clone(),
            ))),
            FlashbackSelector::new(settings.video_extensions.clone(), Box::new(FsCreationTime)),
            planner,
            platform_launcher(),
        )
    }

    fn with_parts(
        view: Box<dyn GridView>,
        scheduler: Rc<dyn RefreshScheduler>,
        store: PathStore,
        cache: ThumbnailCache,
        selector: FlashbackSelector,
        planner: GridLayoutPlanner,
        launcher: Box<dyn ShellLauncher>,
    ) -> SharedController {
        Rc::new(RefCell::new(Self {
            view,
            scheduler,
            state: DisplayState::new(),
            store,
            cache,
            selector,
            planner,
            launcher,
            flashbacks: Vec::new(),
            resize_timer: Timer::default(),
        }))
    }

    /// Drops watched folders that no longer exist.
    pub fn prune_missing_folders(&mut self) {
        let (folders, pruned) = self.store.prune_missing();
        if pruned {
            info!(
                "Watched folders in {} after pruning: {:?}",
                self.store.file().format_for_log(),
                folders
            );
        }
        self.publish_folders(&folders);
    }

    /// Pushes the mode labels and folder panel to the window.
    pub fn publish_view(&self) {
        self.view.show_view_labels(self.state.mode());
        self.publish_folders(&self.store.load());
    }

    fn publish_folders(&self, folders: &[String]) {
        self.view
            .show_folders(self.state.folder_panel_visible(), folders);
    }

    /// Full rescan and relayout at the grid's current width.
    pub fn refresh(&mut self) {
        let Some(width) = self.view.grid_width() else {
            return;
        };

        let mode = self.state.mode();
        let folders = self.store.load();
        let flashbacks = self
            .selector
            .select(mode, &folders, Local::now(), &mut self.cache);

        let placement = self.planner.plan(width, flashbacks.len());
        let tiles = tiles::build_tiles(&flashbacks, &placement);

        debug!(
            "Refresh: {} tile(s), {} column(s), {} cached thumbnail(s)",
            tiles.len(),
            placement.column_count,
            self.cache.len()
        );
        self.flashbacks = flashbacks;
        self.view.show_grid(
            tiles,
            placement.row_count(),
            placement.column_count,
            mode.empty_message(),
        );
    }

    /// Flips the view mode and shows the loading placeholder.
    fn begin_view_toggle(&mut self) {
        let mode = self.state.toggle_mode();
        info!("Switched to {:?} view", mode);
        self.flashbacks.clear();
        self.view.show_view_labels(mode);
        self.view.show_loading();
    }

    pub fn toggle_folder_panel(&mut self) {
        let visible = self.state.toggle_folder_panel();
        debug!("Folder panel visible: {}", visible);
        self.publish_folders(&self.store.load());
    }

    fn add_folder(&mut self, path: &str) {
        self.store.add(path);
        self.publish_folders(&self.store.load());
    }

    fn remove_folder(&mut self, path: &str) {
        self.store.remove(path);
        self.publish_folders(&self.store.load());
    }

    /// Opens the video behind tile `index` in the default player.
    pub fn open_video(&self, index: i32) {
        if let Some(path) = self.video_at(index) {
            let result = self.launcher.open_video(path);
            self.report_launch(result, "Error opening video");
        }
    }

    /// Shows the video behind tile `index` in the file browser.
    pub fn reveal_video(&self, index: i32) {
        if let Some(path) = self.video_at(index) {
            let result = self.launcher.reveal_in_browser(path);
            self.report_launch(result, "Error showing video in folder");
        }
    }

    fn video_at(&self, index: i32) -> Option<&Path> {
        let flashback = usize::try_from(index)
            .ok()
            .and_then(|index| self.flashbacks.get(index));
        if flashback.is_none() {
            warn!("No video behind tile {}", index);
        }
        flashback.map(|flashback| flashback.path.as_path())
    }

    fn report_launch(&self, result: Result<(), LaunchError>, prefix: &str) {
        match result {
            Ok(()) => self.view.clear_status(),
            Err(e) => self.view.show_error(prefix, e.to_string()),
        }
    }
}

/// Runs a refresh on a later turn of the event loop.
pub fn schedule_refresh(controller: &SharedController, delay: Duration) {
    let scheduler = Rc::clone(&controller.borrow().scheduler);
    let weak = Rc::downgrade(controller);
    scheduler.schedule(
        delay,
        Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                controller.borrow_mut().refresh();
            }
        }),
    );
}

/// Switches between day and week view.
///
/// The placeholder is drawn first; the scan runs after `VIEW_TOGGLE_DELAY`.
pub fn toggle_view(controller: &SharedController) {
    controller.borrow_mut().begin_view_toggle();
    schedule_refresh(controller, VIEW_TOGGLE_DELAY);
}

pub fn add_folder(controller: &SharedController, path: &str) {
    controller.borrow_mut().add_folder(path);
    schedule_refresh(controller, REFRESH_DELAY);
}

pub fn remove_folder(controller: &SharedController, path: &str) {
    controller.borrow_mut().remove_folder(path);
    schedule_refresh(controller, REFRESH_DELAY);
}

/// Feeds a grid width change into the debounce and (re)arms its timer.
///
/// Restarting the timer withdraws the previously scheduled check.
pub fn handle_resize(controller: &SharedController, width: f32) {
    let weak = Rc::downgrade(controller);
    let Ok(mut this) = controller.try_borrow_mut() else {
        // A refresh is running and will measure the current width itself.
        debug!("Resize to {} arrived during refresh", width);
        return;
    };
    let wait = this.planner.notify_resize(width, Instant::now());
    arm_resize_timer(&this.resize_timer, weak, wait);
}

fn arm_resize_timer(timer: &Timer, weak: Weak<RefCell<DisplayController>>, wait: Duration) {
    timer.start(TimerMode::SingleShot, wait, move || {
        on_resize_timer(&weak);
    });
}

fn on_resize_timer(weak: &Weak<RefCell<DisplayController>>) {
    let Some(controller) = weak.upgrade() else {
        return;
    };
    let mut this = controller.borrow_mut();
    match this.planner.poll_resize(Instant::now()) {
        ResizePoll::Waiting(remaining) => {
            arm_resize_timer(&this.resize_timer, weak.clone(), remaining);
        }
        ResizePoll::Reflow(width) => {
            debug!("Reflowing grid for width {}", width);
            this.refresh();
        }
        ResizePoll::Unchanged | ResizePoll::Idle => {}
    }
}
