//! Application configuration constants and runtime settings.

use std::path::PathBuf;
use std::time::Duration;

/// Video file extensions picked up when scanning watched folders.
pub const DEFAULT_VIDEO_EXTENSIONS: [&str; 1] = ["mp4"];

/// File holding the watched folder list, relative to the working directory.
pub const DEFAULT_PATHS_FILE: &str = "video_paths.json";

/// Program used to pull the first frame out of a video.
pub const DEFAULT_FFMPEG_PROGRAM: &str = "ffmpeg";

pub const THUMBNAIL_WIDTH: u32 = 150;
pub const THUMBNAIL_HEIGHT: u32 = 84;

/// Horizontal space reserved for one grid column, in logical pixels.
pub const COLUMN_WIDTH: f32 = 210.0;
/// Vertical space reserved for one grid row, in logical pixels.
pub const ROW_HEIGHT: f32 = 150.0;

/// Quiet period after the last resize notification before the grid reflows.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);
/// Delay between showing the loading placeholder and running the scan.
pub const VIEW_TOGGLE_DELAY: Duration = Duration::from_millis(100);
/// Delay before a scheduled refresh measures the grid and rescans.
pub const REFRESH_DELAY: Duration = Duration::from_millis(100);

const PATHS_FILE_VAR: &str = "FLASHBACK_PATHS_FILE";
const VIDEO_EXTENSIONS_VAR: &str = "FLASHBACK_VIDEO_EXTENSIONS";
const FFMPEG_VAR: &str = "FLASHBACK_FFMPEG";

/// Settings resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub paths_file: PathBuf,
    /// Lowercase extensions without the leading dot.
    pub video_extensions: Vec<String>,
    pub ffmpeg_program: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paths_file: PathBuf::from(DEFAULT_PATHS_FILE),
            video_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            ffmpeg_program: DEFAULT_FFMPEG_PROGRAM.to_string(),
        }
    }
}

impl Settings {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    ///
    /// Missing or blank values keep the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut settings = Self::default();

        if let Some(path) = non_blank(PATHS_FILE_VAR) {
            settings.paths_file = PathBuf::from(path);
        }

        if let Some(list) = non_blank(VIDEO_EXTENSIONS_VAR) {
            let extensions: Vec<String> = list
                .split(',')
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect();
            if !extensions.is_empty() {
                settings.video_extensions = extensions;
            }
        }

        if let Some(program) = non_blank(FFMPEG_VAR) {
            settings.ffmpeg_program = program;
        }

        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.video_extensions, vec!["mp4".to_string()]);
        assert_eq!(settings.paths_file, PathBuf::from("video_paths.json"));
    }

    #[test]
    fn extension_list_is_normalized() {
        let settings = Settings::from_lookup(lookup_from(&[(
            VIDEO_EXTENSIONS_VAR,
            " .MP4, mov,,MKV ",
        )]));
        assert_eq!(settings.video_extensions, vec!["mp4", "mov", "mkv"]);
    }

    #[test]
    fn blank_values_are_ignored() {
        let settings = Settings::from_lookup(lookup_from(&[
            (PATHS_FILE_VAR, "   "),
            (VIDEO_EXTENSIONS_VAR, " , "),
            (FFMPEG_VAR, "/opt/ffmpeg/bin/ffmpeg"),
        ]));
        assert_eq!(settings.paths_file, PathBuf::from(DEFAULT_PATHS_FILE));
        assert_eq!(settings.video_extensions, vec!["mp4"]);
        assert_eq!(settings.ffmpeg_program, "/opt/ffmpeg/bin/ffmpeg");
    }
}
