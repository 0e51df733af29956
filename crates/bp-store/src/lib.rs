//! Asynchronous state container for the Blueprints client core.
//!
//! The [`BlueprintStore`] mediates every read and write of blueprint data
//! between a display shell and the data service. It owns the session state
//! (authors, per-author lists, the currently viewed blueprint) and tracks
//! loading and error status independently per operation, so a failed create
//! never disturbs a loaded list.
//!
//! # Operations
//!
//! Each of the six operations runs pending → fulfilled | rejected:
//! `list_authors`, `list_by_author`, `get_one`, `create`, `update`, and
//! `delete`. Delete is *optimistic*: the entry leaves local state the moment
//! the request is issued, and a captured snapshot restores it if the backend
//! refuses.
//!
//! # Reading state
//!
//! Display shells take owned [`StoreState`] snapshots and may subscribe to
//! [`StoreEvent`] transitions over a broadcast channel. The derived
//! [`top_by_points`](BlueprintStore::top_by_points) view is memoized and
//! recomputed only when a per-author list changes.

pub mod event;
pub mod projection;
pub mod state;
pub mod store;

pub use event::{Phase, StoreEvent};
pub use projection::{top_by_points, TOP_N};
pub use state::{Operation, StoreState};
pub use store::BlueprintStore;
