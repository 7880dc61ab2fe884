//! Request and position types for message windows

/// Default window width in pixels when a request does not specify one.
pub const DEFAULT_WIDTH: u32 = 600;

/// Default window height in pixels when a request does not specify one.
pub const DEFAULT_HEIGHT: u32 = 200;

/// Vertical placement of a message window on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Near the top edge of the screen
    Top,
    /// Vertically centered
    Center,
    /// Near the bottom edge of the screen
    Bottom,
}

impl Default for Position {
    fn default() -> Self {
        Self::Center
    }
}

impl Position {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "top" => Self::Top,
            "center" => Self::Center,
            "bottom" => Self::Bottom,
            _ => {
                log::warn!("Unknown position '{}', defaulting to center", s);
                Self::Center
            }
        }
    }
}

/// A single request to show a message window.
///
/// Immutable once accepted: the session consumes it and nothing is retained
/// after the window closes. Width and height of zero mean "use the default".
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRequest {
    /// Message text, possibly multiline
    pub message: String,
    /// Milliseconds between revealed glyphs (0 = reveal everything at once)
    pub velocity_ms: u64,
    /// Requested window width in pixels
    pub width: u32,
    /// Requested window height in pixels
    pub height: u32,
    /// Vertical placement on screen
    pub position: Position,
    /// Seconds the fully revealed window stays visible
    pub hold_secs: f32,
}

impl DisplayRequest {
    /// Create a request with default pacing, sizing, and placement.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            velocity_ms: 100,
            width: 0,
            height: 0,
            position: Position::default(),
            hold_secs: 20.0,
        }
    }

    /// Set the reveal pace in milliseconds per glyph
    pub fn with_velocity_ms(mut self, velocity_ms: u64) -> Self {
        self.velocity_ms = velocity_ms;
        self
    }

    /// Set the requested window size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the vertical placement
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the hold period in seconds
    pub fn with_hold_secs(mut self, hold_secs: f32) -> Self {
        self.hold_secs = hold_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_str() {
        assert_eq!(Position::from_str("top"), Position::Top);
        assert_eq!(Position::from_str("Center"), Position::Center);
        assert_eq!(Position::from_str("BOTTOM"), Position::Bottom);
    }

    #[test]
    fn test_position_from_str_falls_back_to_center() {
        assert_eq!(Position::from_str("left"), Position::Center);
        assert_eq!(Position::from_str(""), Position::Center);
    }

    #[test]
    fn test_request_defaults() {
        let request = DisplayRequest::new("hello");
        assert_eq!(request.width, 0);
        assert_eq!(request.height, 0);
        assert_eq!(request.position, Position::Center);
    }
}
