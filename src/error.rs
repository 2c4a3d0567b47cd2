//! Error types for the flashback viewer.
//!
//! None of these ever reach the event loop; each boundary logs them and
//! falls back to an empty or absent value.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure reading or writing the watched folder list.
#[derive(Debug)]
pub enum PathStoreError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for PathStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStoreError::Io(err) => write!(f, "folder list I/O error: {}", err),
            PathStoreError::Parse(err) => write!(f, "folder list is not valid JSON: {}", err),
        }
    }
}

impl std::error::Error for PathStoreError {}

impl From<io::Error> for PathStoreError {
    fn from(err: io::Error) -> Self {
        PathStoreError::Io(err)
    }
}

impl From<serde_json::Error> for PathStoreError {
    fn from(err: serde_json::Error) -> Self {
        PathStoreError::Parse(err)
    }
}

/// Failure while walking a watched folder.
#[derive(Debug)]
pub enum ScanError {
    /// Directory entry could not be read.
    Walk(walkdir::Error),
    /// Timestamp of a candidate file could not be read.
    Metadata(PathBuf, io::Error),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Walk(err) => write!(f, "directory walk error: {}", err),
            ScanError::Metadata(path, err) => {
                write!(f, "cannot read timestamp of {}: {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ScanError {}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        ScanError::Walk(err)
    }
}

/// Failure producing a thumbnail frame from a video.
#[derive(Debug)]
pub enum DecodeError {
    /// The decoder process could not be started.
    Spawn(io::Error),
    /// The decoder ran but reported failure.
    Failed(String),
    /// The decoder succeeded without producing a frame.
    EmptyOutput,
    /// The produced frame could not be decoded as an image.
    Image(image::ImageError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Spawn(err) => write!(f, "failed to start frame decoder: {}", err),
            DecodeError::Failed(msg) => write!(f, "frame decoder failed: {}", msg),
            DecodeError::EmptyOutput => write!(f, "frame decoder produced no frame"),
            DecodeError::Image(err) => write!(f, "invalid frame data: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        DecodeError::Image(err)
    }
}

/// Failure handing a path to the OS shell.
#[derive(Debug)]
pub enum LaunchError {
    Spawn(io::Error),
    /// A reveal was requested for a path without a parent directory.
    NoParent(PathBuf),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::Spawn(err) => write!(f, "failed to launch shell command: {}", err),
            LaunchError::NoParent(path) => {
                write!(f, "{} has no containing folder", path.display())
            }
        }
    }
}

impl std::error::Error for LaunchError {}

impl From<io::Error> for LaunchError {
    fn from(err: io::Error) -> Self {
        LaunchError::Spawn(err)
    }
}
