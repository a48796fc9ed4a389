//! # Constel - constellation particle background renderer
//!
//! A full-viewport animated backdrop: a field of twinkling stars joined by
//! proximity-faded lines that brighten near the pointer. Star count scales
//! with viewport area, the whole field regenerates on resize, and an
//! unavailable GPU degrades to a plain background instead of an error.
//!
//! ## Quick Start
//!
//! ```ignore
//! use constel::prelude::*;
//!
//! fn main() {
//!     constel::window::run(Theme::Blue).unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Stars
//!
//! [`StarField`] owns the particles. Each star has a fixed position and
//! radius plus a brightness that oscillates against wall-clock time, so the
//! twinkle stays smooth across dropped frames.
//!
//! ### Connections
//!
//! Rebuilt from scratch every frame by an O(n^2) pairwise pass: stars closer
//! than 150 px connect, with opacity fading linearly over distance and
//! boosted when the pointer is within 200 px of either endpoint. See
//! [`connections`].
//!
//! ### Themes
//!
//! A [`Theme`] is a small closed set of named palettes (plus a custom color
//! escape hatch) mapping to a (star, connection) color pair. Opacity is kept
//! numeric in [`Rgba`] until the draw call.
//!
//! ### Hosts
//!
//! The renderer is driven through the [`Host`] and [`Canvas`] capabilities:
//! winit/wgpu in production ([`window`]), hand-driven fakes in tests. One
//! frame is update -> rebuild -> draw -> reschedule, all synchronous.

pub mod background;
pub mod connections;
pub mod error;
pub mod field;
mod gpu;
pub mod theme;
pub mod time;
pub mod window;

pub use background::{Background, Canvas, FrameId, Host};
pub use connections::{Connection, MAX_DISTANCE, POINTER_RADIUS, VISIBILITY_FLOOR};
pub use error::GpuError;
pub use field::{Star, StarField, DENSITY_DIVISOR, MAX_BRIGHTNESS, MIN_BRIGHTNESS};
pub use glam::Vec2;
pub use theme::{Rgba, Theme, ThemeColors};
pub use time::Time;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::background::{Background, Canvas, FrameId, Host};
    pub use crate::connections::Connection;
    pub use crate::field::{Star, StarField};
    pub use crate::theme::{Rgba, Theme, ThemeColors};
    pub use crate::time::Time;
    pub use crate::Vec2;
}
