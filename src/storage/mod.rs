//! Storage for kinship.
//!
//! The [`FamilyStore`] trait defines the store contract; [`InMemoryFamilyStore`]
//! implements it over a lock-guarded [`FamilyTree`](crate::tree::FamilyTree).

mod memory;
mod traits;

pub use memory::InMemoryFamilyStore;
pub use traits::FamilyStore;
