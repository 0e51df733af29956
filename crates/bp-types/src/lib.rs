//! Foundation types for the Blueprints client core.
//!
//! This crate provides the data model shared by every other blueprints
//! crate: the [`Point`] and [`Blueprint`] records and the lenient parsing
//! rules applied at the wire and form boundaries.
//!
//! # Key Types
//!
//! - [`Point`] — a 2D coordinate; deserializes from `{x, y}` objects or
//!   `[x, y]` pairs, with missing or non-numeric components coerced to `0`
//! - [`Blueprint`] — a named, author-owned point sequence; identity is the
//!   `(author, name)` pair
//! - [`parse_points`] — JSON point-sequence parsing for user input forms

pub mod blueprint;
pub mod error;
pub mod point;

pub use blueprint::Blueprint;
pub use error::TypeError;
pub use point::{parse_points, Point};
