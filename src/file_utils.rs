use crate::error::ScanError;
use chrono::{DateTime, Local};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use walkdir::WalkDir;

/// Returns true when the path has one of the given extensions (case-insensitive).
pub fn is_supported_video(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| {
            let ext_str = ext_str.to_lowercase();
            extensions.iter().any(|ext| *ext == ext_str)
        })
        .unwrap_or(false)
}

/// Recursively yields video files below `folder` in file-name order.
///
/// Unreadable entries come through as errors so the caller can log and skip
/// them; the walk itself keeps going.
pub fn walk_videos<'a>(
    folder: &'a Path,
    extensions: &'a [String],
) -> impl Iterator<Item = Result<PathBuf, ScanError>> + 'a {
    WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                if entry.path().is_file() && is_supported_video(entry.path(), extensions) {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(err) => Some(Err(ScanError::from(err))),
        })
}

/// Source of a file's creation timestamp.
pub trait CreationTimeSource {
    fn created(&self, path: &Path) -> io::Result<DateTime<Local>>;
}

/// Reads the timestamp from filesystem metadata.
///
/// Uses the birth time where the platform reports one and the modification
/// time otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCreationTime;

impl CreationTimeSource for FsCreationTime {
    fn created(&self, path: &Path) -> io::Result<DateTime<Local>> {
        let metadata = fs::metadata(path)?;
        let time = match metadata.created() {
            Ok(time) => time,
            Err(err) if err.kind() == io::ErrorKind::Unsupported => {
                debug!(
                    "No birth time for {}, using modification time",
                    path.format_for_log()
                );
                metadata.modified()?
            }
            Err(err) => return Err(err),
        };
        to_local(time)
    }
}

/// Converts a filesystem timestamp, rejecting ones chrono cannot represent.
fn to_local(time: SystemTime) -> io::Result<DateTime<Local>> {
    let utc = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs())
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, after.subsec_nanos())),
        Err(before) => {
            let before = before.duration();
            i64::try_from(before.as_secs()).ok().and_then(|secs| {
                match before.subsec_nanos() {
                    0 => DateTime::from_timestamp(-secs, 0),
                    nanos => DateTime::from_timestamp(-secs - 1, 1_000_000_000 - nanos),
                }
            })
        }
    };
    utc.map(|utc| utc.with_timezone(&Local)).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("timestamp {:?} is out of range", time),
        )
    })
}

pub trait PathExt {
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn format_for_log(&self) -> String {
        format!("\"{}\"", self.display())
    }
}

impl PathExt for PathBuf {
    fn format_for_log(&self) -> String {
        self.as_path().format_for_log()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mp4_only() -> Vec<String> {
        vec!["mp4".to_string()]
    }

    #[test]
    fn extension_match_ignores_case() {
        let exts = mp4_only();
        assert!(is_supported_video(Path::new("/a/b/clip.mp4"), &exts));
        assert!(is_supported_video(Path::new("/a/b/CLIP.MP4"), &exts));
        assert!(!is_supported_video(Path::new("/a/b/clip.mov"), &exts));
        assert!(!is_supported_video(Path::new("/a/b/mp4"), &exts));
    }

    #[test]
    fn walk_finds_nested_videos_in_name_order() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("2021").join("march");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("b.mp4"), b"").unwrap();
        fs::write(dir.path().join("a.mp4"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(nested.join("c.mp4"), b"").unwrap();

        let exts = mp4_only();
        let found: Vec<PathBuf> = walk_videos(dir.path(), &exts)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            found,
            vec![
                nested.join("c.mp4"),
                dir.path().join("a.mp4"),
                dir.path().join("b.mp4"),
            ]
        );
    }

    #[test]
    fn walk_of_missing_folder_reports_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        let exts = mp4_only();
        let results: Vec<_> = walk_videos(&missing, &exts).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(ScanError::Walk(_))));
    }

    #[test]
    fn fs_creation_time_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("clip.mp4");
        fs::write(&file, b"").unwrap();
        let created = FsCreationTime.created(&file).unwrap();
        assert!(created <= Local::now());
        assert!(FsCreationTime.created(&dir.path().join("missing.mp4")).is_err());
    }

    #[test]
    fn timestamps_before_epoch_keep_sub_second_part() {
        let time = UNIX_EPOCH - std::time::Duration::from_millis(1500);
        assert_eq!(to_local(time).unwrap().timestamp_millis(), -1500);
    }

    #[test]
    fn timestamp_outside_calendar_range_is_an_error() {
        let far = UNIX_EPOCH
            .checked_add(std::time::Duration::from_secs(1 << 62))
            .unwrap();
        let err = to_local(far).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
