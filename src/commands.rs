//! Command front end for message windows

use std::sync::mpsc::{self, Receiver, Sender};

use murmur_core::{DisplayRequest, Position};

use crate::config::Config;

/// Commands delivered to the app, already parsed by the front end.
#[derive(Debug, Clone)]
pub enum Command {
    /// Show a message window. Unset fields fall back to configuration.
    ShowMessage {
        message: String,
        velocity_ms: Option<u64>,
        width: Option<u32>,
        height: Option<u32>,
        position: Option<String>,
        hold_secs: Option<f32>,
    },
}

/// Sender for commands - used by whatever front end produces them
pub type CommandSender = Sender<Command>;

/// Create a command channel
pub fn create_command_channel() -> (CommandSender, Receiver<Command>) {
    mpsc::channel()
}

/// Resolve a command against configuration defaults into a request the
/// core can consume.
pub fn resolve_request(command: Command, config: &Config) -> DisplayRequest {
    match command {
        Command::ShowMessage {
            message,
            velocity_ms,
            width,
            height,
            position,
            hold_secs,
        } => {
            let position = position
                .map(|p| Position::from_str(&p))
                .unwrap_or_else(|| Position::from_str(&config.window.position));

            DisplayRequest::new(message)
                .with_velocity_ms(velocity_ms.unwrap_or(config.reveal.velocity_ms))
                .with_size(
                    width.unwrap_or(config.window.width),
                    height.unwrap_or(config.window.height),
                )
                .with_position(position)
                .with_hold_secs(hold_secs.unwrap_or(config.reveal.hold_secs))
        }
    }
}
