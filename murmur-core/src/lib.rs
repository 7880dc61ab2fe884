//! # murmur-core
//!
//! Typewriter-reveal scheduling, line-wrapping layout, and single-window
//! admission for transient on-screen message windows.
//!
//! ## Features
//! - Glyph-by-glyph text reveal with a configurable pace
//! - Line wrapping against a fixed right margin
//! - Top/Center/Bottom window placement with horizontal centering
//! - At most one active window per session; overlapping requests are dropped
//! - Auto-dismissal after a configurable hold period
//!
//! The host rendering system stays behind the [`Host`] and [`Surface`]
//! traits: it supplies screen dimensions, glyph measurement, and scene
//! attach/detach. Everything here runs single-threaded, advanced by the
//! owner's update loop.
//!
//! ## Example
//!
//! ```
//! use murmur_core::{resolve, DisplayRequest, Position};
//!
//! let request = DisplayRequest::new("Hello!")
//!     .with_velocity_ms(50)
//!     .with_position(Position::Bottom)
//!     .with_hold_secs(5.0);
//!
//! let layout = resolve(&request, 1920, 1080);
//! assert_eq!(layout.width, 600);
//! assert_eq!(layout.y, 1080 - 200 - 10);
//! ```

mod gate;
mod host;
mod layout;
mod reveal;
mod types;
mod window;

pub use gate::AdmissionGate;
pub use host::{Host, Surface};
pub use layout::{resolve, Layout};
pub use reveal::{RevealPhase, TypewriterReveal};
pub use types::{DisplayRequest, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use window::Session;
