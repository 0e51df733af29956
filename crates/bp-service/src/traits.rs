use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bp_types::Blueprint;

use crate::error::ServiceResult;

/// Backend acknowledgement of a delete, mirroring the wire envelope
/// `{"success": .., "deleted": ..}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deleted {
    pub success: bool,
    pub deleted: Blueprint,
}

/// CRUD access to blueprints.
///
/// All implementations must satisfy these invariants:
/// - Returned blueprints are owned copies; callers may mutate them without
///   affecting backend state.
/// - `create` fails with [`AlreadyExists`] when the `(author, name)` pair is
///   taken; `get_by_author_and_name`, `update`, and `remove` fail with
///   [`NotFound`] when it is not.
/// - List operations return empty sequences, never errors, for unknown
///   authors.
/// - Any operation may additionally fail with a transport or server error.
///
/// [`AlreadyExists`]: crate::ServiceError::AlreadyExists
/// [`NotFound`]: crate::ServiceError::NotFound
#[async_trait]
pub trait DataService: Send + Sync {
    /// Fetch every blueprint the backend knows about.
    async fn get_all(&self) -> ServiceResult<Vec<Blueprint>>;

    /// Fetch all blueprints owned by `author`.
    async fn get_by_author(&self, author: &str) -> ServiceResult<Vec<Blueprint>>;

    /// Fetch a single blueprint by identity.
    async fn get_by_author_and_name(&self, author: &str, name: &str) -> ServiceResult<Blueprint>;

    /// Create a new blueprint and return the stored value.
    async fn create(&self, payload: Blueprint) -> ServiceResult<Blueprint>;

    /// Replace the blueprint at the *original* identity `(author, name)`.
    ///
    /// The payload may carry a different author or name; the backend re-keys
    /// the entry accordingly and returns the stored value.
    async fn update(
        &self,
        author: &str,
        name: &str,
        payload: Blueprint,
    ) -> ServiceResult<Blueprint>;

    /// Delete a blueprint by identity, returning the removed value.
    async fn remove(&self, author: &str, name: &str) -> ServiceResult<Deleted>;
}
