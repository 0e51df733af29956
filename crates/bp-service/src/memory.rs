use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use bp_types::{Blueprint, Point};

use crate::error::{ServiceError, ServiceResult};
use crate::traits::{DataService, Deleted};

/// In-memory, Vec-backed data service.
///
/// Intended for development sessions and tests. State lives behind a
/// `RwLock` and is cloned on every read so callers never observe internal
/// mutation. Insertion order is preserved, which makes author and listing
/// order deterministic.
pub struct MockDataService {
    blueprints: RwLock<Vec<Blueprint>>,
    fail_next_remove: AtomicBool,
}

impl MockDataService {
    /// Create an empty mock service.
    pub fn new() -> Self {
        Self {
            blueprints: RwLock::new(Vec::new()),
            fail_next_remove: AtomicBool::new(false),
        }
    }

    /// Create a mock service pre-loaded with the standard fixture data:
    /// alice's 4-point `house` square and bob's 3-point `tower`.
    pub fn seeded() -> Self {
        Self::with_blueprints(vec![
            Blueprint::new(
                "alice",
                "house",
                vec![
                    Point::new(0.0, 0.0),
                    Point::new(100.0, 0.0),
                    Point::new(100.0, 100.0),
                    Point::new(0.0, 100.0),
                ],
            ),
            Blueprint::new(
                "bob",
                "tower",
                vec![
                    Point::new(10.0, 10.0),
                    Point::new(20.0, 40.0),
                    Point::new(60.0, 80.0),
                ],
            ),
        ])
    }

    /// Create a mock service holding exactly the given blueprints.
    pub fn with_blueprints(blueprints: Vec<Blueprint>) -> Self {
        Self {
            blueprints: RwLock::new(blueprints),
            fail_next_remove: AtomicBool::new(false),
        }
    }

    /// Make the next `remove` call fail with a server error.
    ///
    /// Deterministic replacement for the original backend's simulated
    /// random delete failures; exercises the store's optimistic rollback.
    pub fn fail_next_remove(&self) {
        self.fail_next_remove.store(true, Ordering::SeqCst);
    }

    /// Number of blueprints currently stored.
    pub fn len(&self) -> usize {
        self.blueprints.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the service holds no blueprints.
    pub fn is_empty(&self) -> bool {
        self.blueprints.read().expect("lock poisoned").is_empty()
    }
}

impl Default for MockDataService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataService for MockDataService {
    async fn get_all(&self) -> ServiceResult<Vec<Blueprint>> {
        Ok(self.blueprints.read().expect("lock poisoned").clone())
    }

    async fn get_by_author(&self, author: &str) -> ServiceResult<Vec<Blueprint>> {
        let store = self.blueprints.read().expect("lock poisoned");
        Ok(store
            .iter()
            .filter(|bp| bp.author == author)
            .cloned()
            .collect())
    }

    async fn get_by_author_and_name(&self, author: &str, name: &str) -> ServiceResult<Blueprint> {
        let store = self.blueprints.read().expect("lock poisoned");
        store
            .iter()
            .find(|bp| bp.matches(author, name))
            .cloned()
            .ok_or_else(|| ServiceError::not_found(author, name))
    }

    async fn create(&self, payload: Blueprint) -> ServiceResult<Blueprint> {
        let mut store = self.blueprints.write().expect("lock poisoned");
        if store
            .iter()
            .any(|bp| bp.matches(&payload.author, &payload.name))
        {
            return Err(ServiceError::already_exists(&payload.author, &payload.name));
        }
        store.push(payload.clone());
        Ok(payload)
    }

    async fn update(
        &self,
        author: &str,
        name: &str,
        payload: Blueprint,
    ) -> ServiceResult<Blueprint> {
        let mut store = self.blueprints.write().expect("lock poisoned");
        let index = store
            .iter()
            .position(|bp| bp.matches(author, name))
            .ok_or_else(|| ServiceError::not_found(author, name))?;
        // Empty identity fields in the payload keep the original key.
        let updated = Blueprint {
            author: if payload.author.is_empty() {
                author.to_string()
            } else {
                payload.author
            },
            name: if payload.name.is_empty() {
                name.to_string()
            } else {
                payload.name
            },
            points: payload.points,
        };
        store[index] = updated.clone();
        Ok(updated)
    }

    async fn remove(&self, author: &str, name: &str) -> ServiceResult<Deleted> {
        let mut store = self.blueprints.write().expect("lock poisoned");
        let index = store
            .iter()
            .position(|bp| bp.matches(author, name))
            .ok_or_else(|| ServiceError::not_found(author, name))?;
        if self.fail_next_remove.swap(false, Ordering::SeqCst) {
            return Err(ServiceError::Server(
                "injected failure: could not delete blueprint".into(),
            ));
        }
        let deleted = store.remove(index);
        Ok(Deleted {
            success: true,
            deleted,
        })
    }
}

impl std::fmt::Debug for MockDataService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDataService")
            .field("blueprint_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(author: &str, name: &str, n: usize) -> Blueprint {
        Blueprint::new(author, name, vec![Point::default(); n])
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn seeded_fixture_contents() {
        let svc = MockDataService::seeded();
        let all = svc.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].matches("alice", "house"));
        assert_eq!(all[0].point_count(), 4);
        assert!(all[1].matches("bob", "tower"));
        assert_eq!(all[1].point_count(), 3);
    }

    #[tokio::test]
    async fn get_by_author_filters() {
        let svc = MockDataService::seeded();
        let alices = svc.get_by_author("alice").await.unwrap();
        assert_eq!(alices.len(), 1);
        assert_eq!(alices[0].name, "house");
        assert!(svc.get_by_author("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_one_hit_and_miss() {
        let svc = MockDataService::seeded();
        let found = svc.get_by_author_and_name("bob", "tower").await.unwrap();
        assert_eq!(found.point_count(), 3);

        let err = svc
            .get_by_author_and_name("bob", "castle")
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("bob", "castle"));
    }

    #[tokio::test]
    async fn reads_return_owned_copies() {
        let svc = MockDataService::seeded();
        let mut copy = svc.get_all().await.unwrap();
        copy[0].points.clear();
        assert_eq!(
            svc.get_by_author_and_name("alice", "house")
                .await
                .unwrap()
                .point_count(),
            4
        );
    }

    // -----------------------------------------------------------------------
    // Create
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn create_appends() {
        let svc = MockDataService::seeded();
        svc.create(bp("carol", "bridge", 2)).await.unwrap();
        assert_eq!(svc.len(), 3);
        assert_eq!(svc.get_by_author("carol").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected() {
        let svc = MockDataService::seeded();
        let err = svc.create(bp("alice", "house", 1)).await.unwrap_err();
        assert_eq!(err, ServiceError::already_exists("alice", "house"));
        assert_eq!(svc.len(), 2);
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn update_rekeys_in_place() {
        let svc = MockDataService::seeded();
        let updated = svc
            .update("alice", "house", bp("alice", "house2", 5))
            .await
            .unwrap();
        assert!(updated.matches("alice", "house2"));

        // Same slot, new identity
        let all = svc.get_all().await.unwrap();
        assert!(all[0].matches("alice", "house2"));
        assert_eq!(all[0].point_count(), 5);
    }

    #[tokio::test]
    async fn update_with_empty_identity_keeps_original_key() {
        let svc = MockDataService::seeded();
        let updated = svc
            .update("bob", "tower", Blueprint::new("", "", vec![Point::new(1.0, 1.0)]))
            .await
            .unwrap();
        assert!(updated.matches("bob", "tower"));
        assert_eq!(updated.point_count(), 1);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let svc = MockDataService::seeded();
        let err = svc
            .update("alice", "missing", bp("alice", "missing", 0))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found("alice", "missing"));
    }

    // -----------------------------------------------------------------------
    // Remove
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn remove_returns_deleted_value() {
        let svc = MockDataService::seeded();
        let outcome = svc.remove("bob", "tower").await.unwrap();
        assert!(outcome.success);
        assert!(outcome.deleted.matches("bob", "tower"));
        assert_eq!(svc.len(), 1);
    }

    #[tokio::test]
    async fn remove_missing_is_not_found() {
        let svc = MockDataService::seeded();
        let err = svc.remove("bob", "castle").await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("bob", "castle"));
    }

    #[tokio::test]
    async fn injected_failure_fires_once_and_keeps_entry() {
        let svc = MockDataService::seeded();
        svc.fail_next_remove();

        let err = svc.remove("bob", "tower").await.unwrap_err();
        assert!(matches!(err, ServiceError::Server(_)));
        assert_eq!(svc.len(), 2);

        // Next attempt succeeds
        assert!(svc.remove("bob", "tower").await.is_ok());
    }
}
