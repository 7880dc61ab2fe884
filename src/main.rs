mod app;
mod commands;
mod config;

use app::App;
use commands::Command;
use config::Config;

fn main() {
    // Initialize logging
    env_logger::init();

    // --- 1. LOAD CONFIG ---
    let config = Config::load_default().unwrap_or_else(|e| {
        log::warn!("Failed to load murmur.toml ({}), using defaults", e);
        Config::default()
    });

    // --- 2. CREATE COMMAND CHANNEL + APP ---
    let (sender, receiver) = commands::create_command_channel();
    let mut app = App::new(config, (1920, 1080), receiver);

    // --- 3. SCRIPTED DEMO ---
    // One message, plus an overlapping request that the admission gate drops.
    sender
        .send(Command::ShowMessage {
            message: "Hello from murmur!\nThis text appears one glyph at a time.".to_string(),
            velocity_ms: Some(50),
            width: None,
            height: None,
            position: Some("bottom".to_string()),
            hold_secs: Some(3.0),
        })
        .ok();
    sender
        .send(Command::ShowMessage {
            message: "This one arrives too early and is dropped.".to_string(),
            velocity_ms: None,
            width: None,
            height: None,
            position: None,
            hold_secs: None,
        })
        .ok();

    // Run the drive loop until the window has closed
    murmur_host::run(|delta| {
        app.process_commands();
        app.update(delta)
    });

    log::info!("demo finished");
}
