//! Application state - wires the command front end to the message session

use std::sync::mpsc::Receiver;
use std::time::Duration;

use murmur_core::Session;
use murmur_host::{FontMetrics, HeadlessHost};

use crate::commands::{resolve_request, Command};
use crate::config::Config;

/// Main application state
pub struct App {
    config: Config,
    session: Session<HeadlessHost>,
    receiver: Receiver<Command>,
}

impl App {
    /// Create a new app from configuration and the host's screen size
    pub fn new(config: Config, screen: (u32, u32), receiver: Receiver<Command>) -> Self {
        let mut metrics = FontMetrics::new(config.font.size, config.font.line_height);
        if let Some(ref path) = config.font.path {
            if let Err(e) = metrics.load_font(path) {
                log::warn!("Failed to load font '{}': {}", path, e);
            }
        }

        let host = HeadlessHost::new(screen.0, screen.1, metrics);
        Self {
            config,
            session: Session::new(host),
            receiver,
        }
    }

    /// Drain pending commands into the session. Requests arriving while a
    /// window is active are dropped by the admission gate.
    pub fn process_commands(&mut self) {
        while let Ok(command) = self.receiver.try_recv() {
            let request = resolve_request(command, &self.config);
            self.session.show(request);
        }
    }

    /// Advance the active window. Returns true while one is open.
    pub fn update(&mut self, delta: Duration) -> bool {
        self.session.update(delta)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn session(&self) -> &Session<HeadlessHost> {
        &self.session
    }
}
