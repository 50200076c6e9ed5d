//! In-memory storage backend.
//!
//! The tree lives behind a `RwLock`: child insertion takes the write lock,
//! lookups and relationship queries share the read lock.

use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::StorageError;
use crate::message::ResultMessage;
use crate::person::{Gender, Person};
use crate::resolver::RelationshipResolver;
use crate::storage::traits::FamilyStore;
use crate::tree::FamilyTree;

fn lock_err(context: &'static str) -> StorageError {
    StorageError::BackendError(format!("poisoned lock: {context}"))
}

/// Thread-safe in-memory family store.
#[derive(Debug, Default)]
pub struct InMemoryFamilyStore {
    tree: RwLock<FamilyTree>,
}

impl InMemoryFamilyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store owning `tree`.
    #[must_use]
    pub fn with_tree(tree: FamilyTree) -> Self {
        Self {
            tree: RwLock::new(tree),
        }
    }

    /// Create a store from root records.
    #[must_use]
    pub fn from_people(roots: Vec<Person>) -> Self {
        Self::with_tree(FamilyTree::from_people(roots))
    }

    /// Run `f` against the tree under the read lock.
    pub fn read<T>(&self, f: impl FnOnce(&FamilyTree) -> T) -> Result<T, StorageError> {
        let tree = self.tree.read().map_err(|_| lock_err("tree.read"))?;
        Ok(f(&tree))
    }
}

impl From<FamilyTree> for InMemoryFamilyStore {
    fn from(tree: FamilyTree) -> Self {
        Self::with_tree(tree)
    }
}

impl FamilyStore for InMemoryFamilyStore {
    fn find_member(&self, name: &str) -> Result<Option<Person>, StorageError> {
        let tree = self.tree.read().map_err(|_| lock_err("tree.find_member"))?;
        Ok(tree.find_member(name).and_then(|member| tree.to_person(member.id)))
    }

    fn add_child(
        &self,
        mother_name: &str,
        child_name: &str,
        gender: Gender,
    ) -> Result<ResultMessage, StorageError> {
        let mut tree = self.tree.write().map_err(|_| lock_err("tree.add_child"))?;

        let host = match RelationshipResolver::new(&tree).find_mother(mother_name) {
            Ok(host) => host.id,
            Err(message) => {
                debug!(%mother_name, %child_name, %message, "child addition rejected");
                return Ok(message);
            }
        };

        let child = Person::new(child_name, gender).with_mother(mother_name);

        if tree.insert_child(host, child).is_none() {
            return Ok(ResultMessage::ChildAdditionFailed);
        }
        info!(%mother_name, %child_name, %gender, members = tree.len(), "child added");
        Ok(ResultMessage::ChildAdded)
    }

    fn resolve(&self, name: &str, relationship: &str) -> Result<ResultMessage, StorageError> {
        self.read(|tree| RelationshipResolver::new(tree).resolve_token(name, relationship))
    }

    fn member_count(&self) -> Result<usize, StorageError> {
        self.read(FamilyTree::len)
    }

    fn snapshot(&self) -> Result<Vec<Person>, StorageError> {
        self.read(FamilyTree::to_people)
    }
}
