//! # murmur-host
//!
//! A reference host for `murmur-core`: real glyph measurement through
//! cosmic-text, a headless scene with attach/detach bookkeeping, a text
//! surface that records drawn glyphs, and a small drive loop.
//!
//! A rendering integration replaces [`HeadlessHost`] with its own
//! implementation of the core's `Host` and `Surface` traits; the
//! measurement and scene pieces here are reusable as-is.

mod driver;
mod measure;
mod scene;

pub use driver::run;
pub use measure::{FontError, FontMetrics};
pub use scene::{DrawnGlyph, HeadlessHost, NodeId, Scene, TextSurface};
