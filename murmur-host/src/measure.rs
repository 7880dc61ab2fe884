//! Glyph measurement through cosmic-text

use std::path::Path;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Failed to read font file: {0}")]
    IoError(#[from] std::io::Error),
}

/// Font state shared by every surface of a host, used to measure single
/// glyph advances.
///
/// Wraps one cosmic-text `FontSystem` with a scratch `Buffer` that is
/// reused for each measurement.
pub struct FontMetrics {
    font_system: FontSystem,
    buffer: Buffer,
    line_height: f32,
}

impl FontMetrics {
    /// Create metrics for the given font size, using system fonts.
    ///
    /// `line_height_factor` scales the font size into the line height
    /// (1.2 is the usual value).
    pub fn new(font_size: f32, line_height_factor: f32) -> Self {
        let mut font_system = FontSystem::new();
        let line_height = font_size * line_height_factor;
        let metrics = Metrics::new(font_size, line_height);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        // One unwrapped line is enough for single-glyph measurement
        buffer.set_size(&mut font_system, f32::MAX, line_height);

        Self {
            font_system,
            buffer,
            line_height,
        }
    }

    /// Load additional font data from a file, e.g. to pin measurements to
    /// a bundled font instead of whatever the system provides.
    pub fn load_font(&mut self, path: impl AsRef<Path>) -> Result<(), FontError> {
        let bytes = std::fs::read(path)?;
        self.font_system.db_mut().load_font_data(bytes);
        Ok(())
    }

    /// Measured advance width of a single glyph in pixels.
    pub fn glyph_width(&mut self, glyph: char) -> f32 {
        let attrs = Attrs::new().family(Family::SansSerif);
        self.buffer.set_text(
            &mut self.font_system,
            &glyph.to_string(),
            attrs,
            Shaping::Advanced,
        );

        let mut width = 0.0;
        for run in self.buffer.layout_runs() {
            for layout_glyph in run.glyphs.iter() {
                width += layout_glyph.w;
            }
        }
        width
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_height_follows_factor() {
        let metrics = FontMetrics::new(18.0, 1.2);
        assert_eq!(metrics.line_height(), 18.0 * 1.2);
    }

    #[test]
    fn test_wide_glyph_measures_at_least_as_wide_as_space() {
        let mut metrics = FontMetrics::new(18.0, 1.2);
        let wide = metrics.glyph_width('W');
        let space = metrics.glyph_width(' ');
        assert!(wide >= space);
    }

    #[test]
    fn test_measurement_is_repeatable() {
        let mut metrics = FontMetrics::new(18.0, 1.2);
        assert_eq!(metrics.glyph_width('m'), metrics.glyph_width('m'));
    }
}
