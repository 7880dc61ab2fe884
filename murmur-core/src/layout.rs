//! Window bounds and anchor position resolution

use crate::types::{DisplayRequest, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Vertical inset from the screen edge for top and bottom placement.
const EDGE_INSET: i32 = 10;

/// Resolved window bounds in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Compute window bounds for a request on the given screen.
///
/// Sizes fall back to the defaults when the request leaves them at zero.
/// The window is always centered horizontally; the position only picks the
/// vertical anchor. Pure function, recomputed per request.
pub fn resolve(request: &DisplayRequest, screen_width: u32, screen_height: u32) -> Layout {
    let width = if request.width > 0 {
        request.width
    } else {
        DEFAULT_WIDTH
    };
    let height = if request.height > 0 {
        request.height
    } else {
        DEFAULT_HEIGHT
    };

    let x = (screen_width as i32 - width as i32) / 2;
    let y = match request.position {
        Position::Top => EDGE_INSET,
        Position::Center => (screen_height as i32 - height as i32) / 2,
        Position::Bottom => screen_height as i32 - height as i32 - EDGE_INSET,
    };

    Layout {
        x,
        y,
        width,
        height,
    }
}
