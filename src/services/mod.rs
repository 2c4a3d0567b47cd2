//! Service layer for business logic.
//!
//! Keeps scanning and OS hand-off out of the UI handlers.

pub mod flashback_service;
pub mod shell_service;

pub use flashback_service::{Flashback, FlashbackSelector};
pub use shell_service::{ShellLauncher, platform_launcher};
