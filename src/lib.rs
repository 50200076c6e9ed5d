//! # kinship - family tree relationships
//!
//! kinship keeps a family tree in memory and answers relationship queries
//! against it: siblings, sons and daughters, paternal and maternal uncles and
//! aunts, sisters- and brothers-in-law. New children can be added under a
//! mother at any time.
//!
//! ## Core Concepts
//!
//! - **Person**: a nested member record; parent and partner links are names
//! - **FamilyTree**: the arena the records are flattened into, with a name index
//! - **RelationshipResolver**: the graph-walk rules for each relationship
//! - **FamilyStore**: the lock-guarded owner of the tree
//! - **FamilyEngine**: the command dispatcher writing results to an output sink
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use kinship::{FamilyEngine, Gender, InMemoryFamilyStore, Person, ResultMessage};
//!
//! let store = InMemoryFamilyStore::from_people(vec![
//!     Person::new("Margaret", Gender::Female)
//!         .with_husband("Arthur")
//!         .with_child(Person::new("Jane", Gender::Female).with_mother("Margaret"))
//!         .with_child(Person::new("Christopher", Gender::Male).with_mother("Margaret")),
//! ]);
//! let engine = FamilyEngine::new(Arc::new(store));
//!
//! let added = engine.submit_add_child("Margaret", "Sam", Gender::Male)?;
//! assert_eq!(added, ResultMessage::ChildAdded);
//!
//! let siblings = engine.submit_get_relationship("Sam", "Siblings")?;
//! assert_eq!(siblings.to_string(), "Jane Christopher");
//! # Ok::<(), kinship::KinError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Data model
pub mod error;
pub mod message;
pub mod person;
pub mod relationship;
pub mod tree;

// Resolution, storage and dispatch
pub mod command;
pub mod engine;
pub mod resolver;
pub mod sink;
pub mod storage;

// Re-export primary types at crate root for convenience
pub use command::Command;
pub use engine::FamilyEngine;
pub use error::{KinError, KinResult, ParseError, StorageError};
pub use message::ResultMessage;
pub use person::{Gender, Person, PersonId};
pub use relationship::{Parent, Relationship};
pub use resolver::RelationshipResolver;
pub use sink::{MemorySink, OutputSink, WriterSink};
pub use storage::{FamilyStore, InMemoryFamilyStore};
pub use tree::{FamilyTree, MatchKey, Member, MemberMatch};
