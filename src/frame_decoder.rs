//! First-frame extraction from video files.

use crate::error::DecodeError;
use image::RgbImage;
use std::path::Path;
use std::process::{Command, Stdio};

/// Produces a single still frame for a video.
pub trait FrameDecoder {
    /// Decodes the first decodable frame as packed RGB8.
    fn decode_first_frame(&self, path: &Path) -> Result<RgbImage, DecodeError>;
}

/// Decodes frames by piping one PNG frame out of the `ffmpeg` CLI.
pub struct FfmpegDecoder {
    program: String,
}

impl FfmpegDecoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(["-hide_banner", "-loglevel", "error", "-nostdin", "-i"])
            .arg(path)
            .args(["-map", "0:v:0", "-frames:v", "1"])
            .args(["-f", "image2pipe", "-vcodec", "png", "-"])
            .stdin(Stdio::null());
        command
    }
}

impl FrameDecoder for FfmpegDecoder {
    fn decode_first_frame(&self, path: &Path) -> Result<RgbImage, DecodeError> {
        let output = self.command(path).output().map_err(DecodeError::Spawn)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr.lines().last().unwrap_or("").trim();
            return Err(DecodeError::Failed(format!("{} ({})", output.status, message)));
        }
        if output.stdout.is_empty() {
            return Err(DecodeError::EmptyOutput);
        }

        frame_from_png(&output.stdout)
    }
}

/// Decodes an encoded frame and normalizes it to RGB channel order.
fn frame_from_png(bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    let frame = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
    Ok(frame.to_rgb8())
}
