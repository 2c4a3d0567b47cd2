//! Flashback selection: walks watched folders and keeps the videos recorded
//! on today's date (or in today's week) in earlier years.

use crate::error::ScanError;
use crate::file_utils::{self, CreationTimeSource, PathExt};
use crate::state::ViewMode;
use crate::thumbnail_cache::{Thumbnail, ThumbnailCache};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A matching video with its thumbnail.
#[derive(Debug, Clone)]
pub struct Flashback {
    pub years_ago: i32,
    pub path: PathBuf,
    pub thumbnail: Rc<Thumbnail>,
}

impl Flashback {
    pub fn label(&self) -> String {
        format!("{} year(s) ago", self.years_ago)
    }
}

/// Applies the date rule for `mode`.
///
/// Returns the year difference when `created` is a flashback for `today`.
/// Week mode compares ISO week numbers only; the ISO week-numbering year is
/// not taken into account.
pub fn years_ago_if_match(mode: ViewMode, created: NaiveDate, today: NaiveDate) -> Option<i32> {
    if created.year() >= today.year() {
        return None;
    }

    let matches = match mode {
        ViewMode::Day => created.month() == today.month() && created.day() == today.day(),
        ViewMode::Week => created.iso_week().week() == today.iso_week().week(),
    };

    matches.then(|| today.year() - created.year())
}

pub struct FlashbackSelector {
    extensions: Vec<String>,
    timestamps: Box<dyn CreationTimeSource>,
}

impl FlashbackSelector {
    pub fn new(extensions: Vec<String>, timestamps: Box<dyn CreationTimeSource>) -> Self {
        Self {
            extensions,
            timestamps,
        }
    }

    /// Scans `folders` and returns matching videos sorted by `years_ago`.
    ///
    /// Videos tied on `years_ago` keep their discovery order. Unreadable
    /// entries and videos without a thumbnail are logged and left out.
    pub fn select(
        &self,
        mode: ViewMode,
        folders: &[String],
        now: DateTime<Local>,
        cache: &mut ThumbnailCache,
    ) -> Vec<Flashback> {
        let start = std::time::Instant::now();
        let today = now.date_naive();
        let mut flashbacks = Vec::new();

        for folder in folders {
            let folder_path = Path::new(folder);
            if !folder_path.exists() {
                debug!("Skipping missing folder {}", folder_path.format_for_log());
                continue;
            }
            self.scan_folder(folder_path, mode, today, cache, &mut flashbacks);
        }

        flashbacks.sort_by_key(|flashback| flashback.years_ago);

        info!(
            "Found {} flashback video(s) for {:?} mode in {:?}",
            flashbacks.len(),
            mode,
            start.elapsed()
        );
        flashbacks
    }

    fn scan_folder(
        &self,
        folder: &Path,
        mode: ViewMode,
        today: NaiveDate,
        cache: &mut ThumbnailCache,
        flashbacks: &mut Vec<Flashback>,
    ) {
        for candidate in file_utils::walk_videos(folder, &self.extensions) {
            let path = match candidate {
                Ok(path) => path,
                Err(e) => {
                    warn!("Error processing folder {}: {}", folder.format_for_log(), e);
                    continue;
                }
            };

            let created = match self.timestamps.created(&path) {
                Ok(created) => created,
                Err(e) => {
                    warn!("{}", ScanError::Metadata(path, e));
                    continue;
                }
            };

            let Some(years_ago) = years_ago_if_match(mode, created.date_naive(), today) else {
                continue;
            };

            match cache.get_or_create(&path) {
                Some(thumbnail) => flashbacks.push(Flashback {
                    years_ago,
                    path,
                    thumbnail,
                }),
                None => debug!("Leaving out {} without thumbnail", path.format_for_log()),
            }
        }
    }
}
