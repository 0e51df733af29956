//! Canvas projector for the Blueprints client core.
//!
//! Turns an arbitrary point sequence into draw commands against a
//! fixed-size surface: background, fixed-interval grid, connecting
//! polyline, and per-point markers, all auto-scaled and centered so any
//! native coordinate range fits the surface.
//!
//! The projector is pure: [`Projection::fit`] computes the data-space to
//! surface-space mapping, [`render`] issues draw calls through the
//! [`Surface`] trait, and identical input always produces identical
//! output. [`RecordingSurface`] captures calls for snapshot-style tests.

pub mod projection;
pub mod recording;
pub mod render;
pub mod surface;

pub use projection::{Projection, MIN_DRAW_SIZE, PADDING, SPAN_EPSILON};
pub use recording::{DrawCall, RecordingSurface};
pub use render::{render, GRID_STEP};
pub use surface::{Color, Surface};
