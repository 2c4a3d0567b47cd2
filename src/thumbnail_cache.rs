//! Process-lifetime cache of decoded video thumbnails.
//!
//! Entries are keyed by the exact path and never evicted. Failed decodes are
//! not remembered, so the next request for the same path decodes again.

use crate::file_utils::PathExt;
use crate::frame_decoder::FrameDecoder;
use image::RgbImage;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A decoded still frame for one video.
#[derive(Debug)]
pub struct Thumbnail {
    pub path: PathBuf,
    pub frame: RgbImage,
}

impl Thumbnail {
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    pub fn height(&self) -> u32 {
        self.frame.height()
    }
}

pub struct ThumbnailCache {
    decoder: Box<dyn FrameDecoder>,
    entries: HashMap<PathBuf, Rc<Thumbnail>>,
}

impl ThumbnailCache {
    pub fn new(decoder: Box<dyn FrameDecoder>) -> Self {
        Self {
            decoder,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached thumbnail, decoding it on first use.
    ///
    /// `None` means the video could not be decoded this time.
    pub fn get_or_create(&mut self, path: &Path) -> Option<Rc<Thumbnail>> {
        if let Some(thumbnail) = self.entries.get(path) {
            debug!("Cache HIT: {}", path.format_for_log());
            return Some(Rc::clone(thumbnail));
        }

        debug!("Cache MISS: {}", path.format_for_log());
        match self.decoder.decode_first_frame(path) {
            Ok(frame) => {
                let thumbnail = Rc::new(Thumbnail {
                    path: path.to_path_buf(),
                    frame,
                });
                debug!(
                    "Cache PUT: {} ({}x{})",
                    thumbnail.path.format_for_log(),
                    thumbnail.width(),
                    thumbnail.height()
                );
                self.entries
                    .insert(thumbnail.path.clone(), Rc::clone(&thumbnail));
                Some(thumbnail)
            }
            Err(e) => {
                warn!(
                    "Error generating thumbnail for {}: {}",
                    path.format_for_log(),
                    e
                );
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
