use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;
use tracing::{debug, warn};

use bp_service::{DataService, Deleted, ServiceResult};
use bp_types::Blueprint;

use crate::event::{Phase, StoreEvent};
use crate::projection::top_by_points;
use crate::state::{Operation, StoreState};

const EVENT_CAPACITY: usize = 64;

/// Asynchronous state container mediating between a display shell and the
/// data service. One instance per application session.
///
/// Each operation marks itself pending, awaits the service, and settles as
/// fulfilled or rejected; the state lock is never held across an await.
/// Operations on different keys are independent and may overlap. Two calls
/// racing on the *same* key settle last-writer-wins — superseded requests
/// are not cancelled, which is an accepted limitation, not a
/// latest-intent-wins guarantee.
///
/// Service failures are recorded in the state's per-operation error slot
/// *and* returned to the caller; nothing panics past this boundary.
pub struct BlueprintStore {
    service: Arc<dyn DataService>,
    inner: RwLock<Inner>,
    events: broadcast::Sender<StoreEvent>,
}

#[derive(Default)]
struct Inner {
    state: StoreState,
    /// Authors in the order their `by_author` slot was first created; keeps
    /// the derived projection's encounter order stable.
    author_order: Vec<String>,
    /// Bumped on every `by_author` mutation; versions the projection cache.
    by_author_rev: u64,
    top_cache: Option<(u64, Vec<Blueprint>)>,
}

impl Inner {
    fn touch_author(&mut self, author: &str) {
        if !self.author_order.iter().any(|a| a == author) {
            self.author_order.push(author.to_string());
        }
        self.by_author_rev += 1;
    }

    fn compute_top(&self) -> Vec<Blueprint> {
        top_by_points(
            self.author_order
                .iter()
                .filter_map(|author| self.state.by_author.get(author))
                .map(Vec::as_slice),
        )
    }
}

/// Snapshot captured at optimistic-removal time so a rejected delete can
/// put everything back.
struct PendingRemoval {
    slot: Option<(usize, Blueprint)>,
    cleared_current: Option<Blueprint>,
}

impl BlueprintStore {
    /// Create a store backed by the given data service.
    pub fn new(service: Arc<dyn DataService>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            service,
            inner: RwLock::new(Inner::default()),
            events,
        }
    }

    /// Owned copy of the current session state.
    pub fn snapshot(&self) -> StoreState {
        self.inner.read().expect("lock poisoned").state.clone()
    }

    /// Subscribe to operation transitions.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // ---- Operations ----

    /// Fetch all blueprints and derive the distinct author list,
    /// first-seen order.
    pub async fn list_authors(&self) -> ServiceResult<Vec<String>> {
        self.begin(Operation::Authors);
        match self.service.get_all().await {
            Ok(all) => {
                let mut authors: Vec<String> = Vec::new();
                for bp in &all {
                    if !authors.contains(&bp.author) {
                        authors.push(bp.author.clone());
                    }
                }
                self.fulfill(Operation::Authors, |inner| {
                    inner.state.authors = authors.clone();
                });
                Ok(authors)
            }
            Err(err) => {
                self.reject(Operation::Authors, &err, |_| {});
                Err(err)
            }
        }
    }

    /// Fetch an author's blueprints, replacing that author's slot wholesale.
    pub async fn list_by_author(&self, author: &str) -> ServiceResult<Vec<Blueprint>> {
        self.begin(Operation::ByAuthor);
        match self.service.get_by_author(author).await {
            Ok(items) => {
                self.fulfill(Operation::ByAuthor, |inner| {
                    inner.state.by_author.insert(author.to_string(), items.clone());
                    inner.touch_author(author);
                });
                Ok(items)
            }
            Err(err) => {
                self.reject(Operation::ByAuthor, &err, |_| {});
                Err(err)
            }
        }
    }

    /// Fetch a single blueprint and make it current. A miss leaves the
    /// previous current blueprint in place.
    pub async fn get_one(&self, author: &str, name: &str) -> ServiceResult<Blueprint> {
        self.begin(Operation::Current);
        match self.service.get_by_author_and_name(author, name).await {
            Ok(blueprint) => {
                self.fulfill(Operation::Current, |inner| {
                    inner.state.current = Some(blueprint.clone());
                });
                Ok(blueprint)
            }
            Err(err) => {
                self.reject(Operation::Current, &err, |_| {});
                Err(err)
            }
        }
    }

    /// Submit a new blueprint. On success the created value is appended to
    /// its author's slot, but only if that slot is already loaded.
    pub async fn create(&self, blueprint: Blueprint) -> ServiceResult<Blueprint> {
        self.begin(Operation::Create);
        match self.service.create(blueprint).await {
            Ok(created) => {
                self.fulfill(Operation::Create, |inner| {
                    if let Some(list) = inner.state.by_author.get_mut(&created.author) {
                        list.push(created.clone());
                        inner.touch_author(&created.author);
                    }
                });
                Ok(created)
            }
            Err(err) => {
                self.reject(Operation::Create, &err, |_| {});
                Err(err)
            }
        }
    }

    /// Replace the blueprint at the original `(author, name)` identity.
    ///
    /// On success the matching entry in the original author's slot is
    /// replaced in place (order preserved), and `current` is replaced if it
    /// was showing the original identity.
    pub async fn update(
        &self,
        original_author: &str,
        original_name: &str,
        payload: Blueprint,
    ) -> ServiceResult<Blueprint> {
        self.begin(Operation::Update);
        match self
            .service
            .update(original_author, original_name, payload)
            .await
        {
            Ok(updated) => {
                self.fulfill(Operation::Update, |inner| {
                    if let Some(list) = inner.state.by_author.get_mut(original_author) {
                        if let Some(slot) =
                            list.iter_mut().find(|bp| bp.name == original_name)
                        {
                            *slot = updated.clone();
                            inner.touch_author(original_author);
                        }
                    }
                    let showing_original = inner
                        .state
                        .current
                        .as_ref()
                        .is_some_and(|c| c.matches(original_author, original_name));
                    if showing_original {
                        inner.state.current = Some(updated.clone());
                    }
                });
                Ok(updated)
            }
            Err(err) => {
                self.reject(Operation::Update, &err, |_| {});
                Err(err)
            }
        }
    }

    /// Delete a blueprint, optimistically.
    ///
    /// The entry leaves the author's slot (and `current`, if it matches)
    /// before the request resolves. The removed values are captured as a
    /// pending-removal snapshot; a rejected delete reinserts the entry at
    /// its original index and restores `current`.
    pub async fn delete(&self, author: &str, name: &str) -> ServiceResult<Deleted> {
        let removal = {
            let mut inner = self.inner.write().expect("lock poisoned");
            inner.state.mark_pending(Operation::Delete);
            let slot = inner.state.by_author.get_mut(author).and_then(|list| {
                let index = list.iter().position(|bp| bp.name == name)?;
                Some((index, list.remove(index)))
            });
            if slot.is_some() {
                inner.touch_author(author);
            }
            let cleared_current = match &inner.state.current {
                Some(current) if current.matches(author, name) => inner.state.current.take(),
                _ => None,
            };
            PendingRemoval {
                slot,
                cleared_current,
            }
        };
        self.publish(Operation::Delete, Phase::Pending);
        debug!(author, name, "delete pending (optimistic removal applied)");

        match self.service.remove(author, name).await {
            Ok(outcome) => {
                // State already reflects the deletion.
                self.fulfill(Operation::Delete, |_| {});
                Ok(outcome)
            }
            Err(err) => {
                self.reject(Operation::Delete, &err, |inner| {
                    if let Some((index, blueprint)) = removal.slot {
                        let list = inner.state.by_author.entry(author.to_string()).or_default();
                        let index = index.min(list.len());
                        list.insert(index, blueprint);
                        inner.touch_author(author);
                    }
                    if removal.cleared_current.is_some() {
                        inner.state.current = removal.cleared_current;
                    }
                });
                Err(err)
            }
        }
    }

    /// Derived view: top blueprints by point count across all loaded
    /// per-author lists.
    ///
    /// Memoized against the `by_author` revision; repeated calls without an
    /// intervening list mutation return the cached result.
    pub fn top_by_points(&self) -> Vec<Blueprint> {
        {
            let inner = self.inner.read().expect("lock poisoned");
            if let Some((rev, cached)) = &inner.top_cache {
                if *rev == inner.by_author_rev {
                    return cached.clone();
                }
            }
        }
        let mut inner = self.inner.write().expect("lock poisoned");
        if let Some((rev, cached)) = &inner.top_cache {
            if *rev == inner.by_author_rev {
                return cached.clone();
            }
        }
        let top = inner.compute_top();
        inner.top_cache = Some((inner.by_author_rev, top.clone()));
        top
    }

    // ---- Transition plumbing ----

    fn begin(&self, operation: Operation) {
        self.inner
            .write()
            .expect("lock poisoned")
            .state
            .mark_pending(operation);
        self.publish(operation, Phase::Pending);
        debug!(%operation, "operation pending");
    }

    fn fulfill(&self, operation: Operation, apply: impl FnOnce(&mut Inner)) {
        {
            let mut inner = self.inner.write().expect("lock poisoned");
            apply(&mut inner);
            inner.state.settle_ok(operation);
        }
        self.publish(operation, Phase::Fulfilled);
        debug!(%operation, "operation fulfilled");
    }

    fn reject(
        &self,
        operation: Operation,
        err: &bp_service::ServiceError,
        rollback: impl FnOnce(&mut Inner),
    ) {
        {
            let mut inner = self.inner.write().expect("lock poisoned");
            rollback(&mut inner);
            inner.state.settle_err(operation, err.to_string());
        }
        self.publish(operation, Phase::Rejected);
        warn!(%operation, error = %err, "operation rejected");
    }

    fn publish(&self, operation: Operation, phase: Phase) {
        // No receivers is fine; events are advisory.
        let _ = self.events.send(StoreEvent { operation, phase });
    }
}

impl std::fmt::Debug for BlueprintStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().expect("lock poisoned");
        f.debug_struct("BlueprintStore")
            .field("authors", &inner.state.authors.len())
            .field("loaded_lists", &inner.state.by_author.len())
            .field("current", &inner.state.current.as_ref().map(ToString::to_string))
            .finish()
    }
}
