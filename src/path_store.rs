//! Durable list of watched folders.
//!
//! Stored as a JSON array of path strings. A missing or unreadable file is the
//! same as an empty list.

use crate::error::PathStoreError;
use crate::file_utils::PathExt;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub struct PathStore {
    file: PathBuf,
}

impl PathStore {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Loads the stored folders, degrading to an empty list on any failure.
    pub fn load(&self) -> Vec<String> {
        match self.try_load() {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Error loading paths from {}: {}", self.file.format_for_log(), e);
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<String>, PathStoreError> {
        if !self.file.exists() {
            debug!("No folder list at {}", self.file.format_for_log());
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.file)?;
        let paths: Vec<String> = serde_json::from_str(&text)?;
        Ok(dedup_preserving_order(paths))
    }

    /// Writes the folder list. Failures are logged and reported as `false`.
    pub fn save(&self, paths: &[String]) -> bool {
        match self.try_save(paths) {
            Ok(()) => true,
            Err(e) => {
                warn!("Error saving paths to {}: {}", self.file.format_for_log(), e);
                false
            }
        }
    }

    fn try_save(&self, paths: &[String]) -> Result<(), PathStoreError> {
        let text = serde_json::to_string(paths)?;
        fs::write(&self.file, text)?;
        Ok(())
    }

    /// Drops folders that no longer exist and persists the result if anything
    /// was removed.
    pub fn prune_missing(&self) -> (Vec<String>, bool) {
        let paths = self.load();
        let before = paths.len();
        let valid: Vec<String> = paths
            .into_iter()
            .filter(|path| Path::new(path).exists())
            .collect();

        let pruned = valid.len() != before;
        if pruned {
            info!("Pruned {} missing folder(s)", before - valid.len());
            self.save(&valid);
        }
        (valid, pruned)
    }

    /// Appends a folder unless it is already watched. Returns whether the
    /// list on disk changed.
    pub fn add(&self, path: &str) -> bool {
        let mut paths = self.load();
        if paths.iter().any(|p| p == path) {
            debug!("Folder already watched: {}", path);
            return false;
        }
        paths.push(path.to_string());
        let saved = self.save(&paths);
        if saved {
            info!("Added folder {}", path);
        }
        saved
    }

    /// Removes a watched folder if present. Returns whether the list on disk
    /// changed.
    pub fn remove(&self, path: &str) -> bool {
        let mut paths = self.load();
        let before = paths.len();
        paths.retain(|p| p != path);
        if paths.len() == before {
            return false;
        }
        let saved = self.save(&paths);
        if saved {
            info!("Removed folder {}", path);
        }
        saved
    }
}

fn dedup_preserving_order(paths: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(paths.len());
    for path in paths {
        if !unique.contains(&path) {
            unique.push(path);
        }
    }
    unique
}
