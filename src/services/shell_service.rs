//! Hands videos to the operating system: default player and file browser.
//!
//! The platform variant is chosen once by [`platform_launcher`].

use crate::error::LaunchError;
use crate::file_utils::PathExt;
use log::info;
use std::path::Path;
use std::process::Command;

/// OS shell capability used by the video grid.
pub trait ShellLauncher {
    /// Opens the video in the default player.
    fn open_video(&self, path: &Path) -> Result<(), LaunchError> {
        let mut command = self.open_command(path)?;
        info!("Opening video {}", path.format_for_log());
        command.spawn()?;
        Ok(())
    }

    /// Shows the video in the native file browser.
    fn reveal_in_browser(&self, path: &Path) -> Result<(), LaunchError> {
        let mut command = self.reveal_command(path)?;
        info!("Revealing {} in file browser", path.format_for_log());
        command.spawn()?;
        Ok(())
    }

    fn open_command(&self, path: &Path) -> Result<Command, LaunchError>;

    fn reveal_command(&self, path: &Path) -> Result<Command, LaunchError>;
}

#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
pub struct WindowsShell;

impl ShellLauncher for WindowsShell {
    fn open_command(&self, path: &Path) -> Result<Command, LaunchError> {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        Ok(command)
    }

    fn reveal_command(&self, path: &Path) -> Result<Command, LaunchError> {
        let mut command = Command::new("explorer");
        command.arg(format!("/select,{}", path.display()));
        Ok(command)
    }
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub struct MacShell;

impl ShellLauncher for MacShell {
    fn open_command(&self, path: &Path) -> Result<Command, LaunchError> {
        let mut command = Command::new("open");
        command.arg(path);
        Ok(command)
    }

    fn reveal_command(&self, path: &Path) -> Result<Command, LaunchError> {
        let mut command = Command::new("open");
        command.arg("-R").arg(path);
        Ok(command)
    }
}

/// freedesktop `xdg-open`; file browsers cannot select a file, so reveal
/// opens the containing folder.
#[cfg_attr(any(target_os = "windows", target_os = "macos"), allow(dead_code))]
pub struct UnixShell;

impl ShellLauncher for UnixShell {
    fn open_command(&self, path: &Path) -> Result<Command, LaunchError> {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        Ok(command)
    }

    fn reveal_command(&self, path: &Path) -> Result<Command, LaunchError> {
        let parent = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .ok_or_else(|| LaunchError::NoParent(path.to_path_buf()))?;
        let mut command = Command::new("xdg-open");
        command.arg(parent);
        Ok(command)
    }
}

/// Returns the launcher for the platform this binary was built for.
pub fn platform_launcher() -> Box<dyn ShellLauncher> {
    #[cfg(target_os = "windows")]
    {
        Box::new(WindowsShell)
    }

    #[cfg(target_os = "macos")]
    {
        Box::new(MacShell)
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        Box::new(UnixShell)
    }
}
