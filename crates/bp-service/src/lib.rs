//! Data service contract and backends for the Blueprints client core.
//!
//! The store never talks to a backend directly; it goes through the
//! [`DataService`] trait, which has two interchangeable implementations:
//!
//! - [`MockDataService`] — in-memory backend for development and tests,
//!   seeded with the standard fixture data
//! - [`RemoteDataService`] — HTTP adapter for the real blueprints API
//!
//! Which one runs is decided once at startup by [`ServiceConfig`], never
//! branched on at call sites.
//!
//! # Error Taxonomy
//!
//! All backends report failures through [`ServiceError`]:
//! [`ServiceError::NotFound`] for identity lookup misses,
//! [`ServiceError::AlreadyExists`] for duplicate creates, and
//! transport/server/decode variants for everything else.

pub mod config;
pub mod error;
pub mod memory;
pub mod remote;
pub mod traits;

pub use config::{Backend, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use memory::MockDataService;
pub use remote::RemoteDataService;
pub use traits::{DataService, Deleted};
