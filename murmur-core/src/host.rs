//! Seams to the host rendering and scene system

use crate::layout::Layout;

/// A drawable text surface owned by one message window.
///
/// The host supplies glyph measurement alongside drawing, the same way a
/// rendering backend measures shaped text before placing it.
pub trait Surface {
    /// Clear all previously drawn content.
    fn clear(&mut self);

    /// Measured advance width of one glyph in pixels.
    fn glyph_width(&mut self, glyph: char) -> f32;

    /// Height of one text line in pixels.
    fn line_height(&self) -> f32;

    /// Draw a glyph at the given pen position within the surface.
    fn draw_glyph(&mut self, glyph: char, x: f32, y: f32);
}

/// The host scene system: screen queries plus surface attach and detach.
///
/// The scene keeps only a structural reference to an opened surface;
/// ownership stays with the message window until `close` hands the
/// surface back.
pub trait Host {
    type Surface: Surface;

    /// Current screen size in pixels as (width, height).
    fn screen_size(&self) -> (u32, u32);

    /// Create a surface with the given bounds and attach it to the scene.
    fn open(&mut self, layout: &Layout) -> Self::Surface;

    /// Detach the surface from the scene and release it.
    fn close(&mut self, surface: Self::Surface);
}
