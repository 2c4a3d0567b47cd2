// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod frame_decoder;
mod path_store;
mod services;
mod startup;
mod state;
mod thumbnail_cache;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let default_filter = if cfg!(debug_assertions) {
        "warn,flashback_videos=debug"
    } else {
        "warn,flashback_videos=info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let settings = config::Settings::from_env();
    let app = AppWindow::new()?;
    let controller = ui::DisplayController::new(&app, &settings);

    // Setup all UI event handlers
    ui::setup_handlers(&app, &controller);
    startup::configure_startup(&controller, &settings);

    app.run()?;

    Ok(())
}
