//! UI module: grid layout, display controller and Slint callback wiring.
//!
//! Threading model: single-threaded. Scans and decodes run on the Slint event
//! loop thread; `slint::Timer` defers them so placeholders render first.

pub mod controller;
pub mod grid_layout;
pub mod handlers;
mod state_helpers;
mod tiles;
mod view;

pub use controller::DisplayController;
pub use handlers::setup_handlers;
