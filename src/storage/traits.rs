//! Abstract storage trait for kinship.
//!
//! The trait is the seam between the command dispatcher and the tree owner.
//! The in-memory backend is the only implementation shipped; a caller that
//! needs a different owner (for example one shared across processes) only has
//! to provide these operations.

use crate::error::StorageError;
use crate::message::ResultMessage;
use crate::person::{Gender, Person};

/// Storage trait for the family tree.
///
/// # Concurrency
/// - `add_child` is the only mutation and must be serialized by the backend
/// - read operations may run concurrently with each other
pub trait FamilyStore: Send + Sync {
    /// Find a member by name or partner alias, returned with its descendants.
    fn find_member(&self, name: &str) -> Result<Option<Person>, StorageError>;

    /// Insert a child under the record owning `mother_name`'s children.
    ///
    /// Returns `ChildAdded`, `PersonNotFound` or `ChildAdditionFailed`. The
    /// tree is unchanged unless the result is `ChildAdded`.
    fn add_child(
        &self,
        mother_name: &str,
        child_name: &str,
        gender: Gender,
    ) -> Result<ResultMessage, StorageError>;

    /// Resolve a relationship token for `name`.
    fn resolve(&self, name: &str, relationship: &str) -> Result<ResultMessage, StorageError>;

    /// Number of members with a record in the tree.
    fn member_count(&self) -> Result<usize, StorageError>;

    /// Export the whole tree as nested records.
    fn snapshot(&self) -> Result<Vec<Person>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test: ensure the trait is object-safe
    fn _assert_family_store_object_safe(_: &dyn FamilyStore) {}

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::BackendError("poisoned lock: tree.read".to_string());
        assert!(err.to_string().contains("poisoned lock"));
    }
}
