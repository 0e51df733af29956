use std::collections::{BTreeMap, HashMap};

use bp_types::Blueprint;

/// The six asynchronous store operations.
///
/// Loading and error status is tracked per operation key, never globally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    /// `list_authors`
    Authors,
    /// `list_by_author`
    ByAuthor,
    /// `get_one`
    Current,
    /// `create`
    Create,
    /// `update`
    Update,
    /// `delete`
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Authors => "authors",
            Operation::ByAuthor => "by_author",
            Operation::Current => "current",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Session state owned by the store.
///
/// Display shells receive owned clones of this; all mutation goes through
/// the store's operations.
#[derive(Clone, Debug, Default)]
pub struct StoreState {
    /// Distinct author names, in first-seen order.
    pub authors: Vec<String>,
    /// Last-known blueprint list per author.
    pub by_author: HashMap<String, Vec<Blueprint>>,
    /// Last-opened single blueprint.
    pub current: Option<Blueprint>,
    /// Per-operation in-flight flags.
    pub loading: BTreeMap<Operation, bool>,
    /// Per-operation error messages from the most recent rejection.
    pub errors: BTreeMap<Operation, String>,
}

impl StoreState {
    /// Is the given operation currently in flight?
    pub fn is_loading(&self, operation: Operation) -> bool {
        self.loading.get(&operation).copied().unwrap_or(false)
    }

    /// Error message from the operation's most recent rejection, if any.
    pub fn error(&self, operation: Operation) -> Option<&str> {
        self.errors.get(&operation).map(String::as_str)
    }

    /// The loaded list for an author, empty if never fetched.
    pub fn blueprints_of(&self, author: &str) -> &[Blueprint] {
        self.by_author.get(author).map_or(&[], Vec::as_slice)
    }

    /// Mark an operation in flight. An in-flight operation shows no stale
    /// error, so the error slot is cleared here.
    pub(crate) fn mark_pending(&mut self, operation: Operation) {
        self.loading.insert(operation, true);
        self.errors.remove(&operation);
    }

    /// Mark an operation settled successfully.
    pub(crate) fn settle_ok(&mut self, operation: Operation) {
        self.loading.insert(operation, false);
    }

    /// Mark an operation settled with a failure.
    pub(crate) fn settle_err(&mut self, operation: Operation, message: String) {
        self.loading.insert(operation, false);
        self.errors.insert(operation, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_clears_stale_error() {
        let mut state = StoreState::default();
        state.settle_err(Operation::Create, "boom".into());
        assert_eq!(state.error(Operation::Create), Some("boom"));

        state.mark_pending(Operation::Create);
        assert!(state.is_loading(Operation::Create));
        assert_eq!(state.error(Operation::Create), None);
    }

    #[test]
    fn operations_are_tracked_independently_and_default_idle() {
        let mut state = StoreState::default();
        assert!(!state.is_loading(Operation::Delete));

        state.mark_pending(Operation::Authors);
        state.settle_err(Operation::Delete, "nope".into());
        assert!(state.is_loading(Operation::Authors));
        assert!(!state.is_loading(Operation::Delete));
        assert_eq!(state.error(Operation::Authors), None);
        assert_eq!(state.error(Operation::Delete), Some("nope"));
    }

    #[test]
    fn blueprints_of_unknown_author_is_empty() {
        let state = StoreState::default();
        assert!(state.blueprints_of("nobody").is_empty());
    }
}
