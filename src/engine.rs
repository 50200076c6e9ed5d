//! Command dispatcher.
//!
//! [`FamilyEngine`] is the collaborator that turns commands into calls on a
//! [`FamilyStore`] and results into output lines. It holds no tree state of
//! its own.

use std::io::BufRead;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::command::Command;
use crate::error::{KinError, KinResult, StorageError};
use crate::message::ResultMessage;
use crate::person::Gender;
use crate::sink::OutputSink;
use crate::storage::FamilyStore;

/// Executes family commands against a store.
#[derive(Clone)]
pub struct FamilyEngine {
    store: Arc<dyn FamilyStore>,
}

impl std::fmt::Debug for FamilyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FamilyEngine").finish_non_exhaustive()
    }
}

impl FamilyEngine {
    /// Create a new engine using the given store.
    #[must_use]
    pub fn new(store: Arc<dyn FamilyStore>) -> Self {
        Self { store }
    }

    /// The store this engine writes to.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn FamilyStore> {
        &self.store
    }

    fn storage_err(err: StorageError) -> KinError {
        KinError::Storage(err)
    }

    /// Add a child under `mother_name`.
    ///
    /// Returns `CHILD_ADDED`, `PERSON_NOT_FOUND` or `CHILD_ADDITION_FAILED`.
    pub fn submit_add_child(
        &self,
        mother_name: &str,
        child_name: &str,
        gender: Gender,
    ) -> KinResult<ResultMessage> {
        self.store
            .add_child(mother_name, child_name, gender)
            .map_err(Self::storage_err)
    }

    /// Resolve `relationship` (a command-stream token) for `person_name`.
    ///
    /// Returns the relatives, `NONE`, `PERSON_NOT_FOUND` or
    /// `RELATIONSHIP_NOT_HANDLED`.
    pub fn submit_get_relationship(
        &self,
        person_name: &str,
        relationship: &str,
    ) -> KinResult<ResultMessage> {
        self.store
            .resolve(person_name, relationship)
            .map_err(Self::storage_err)
    }

    /// Execute a parsed command.
    pub fn execute(&self, command: &Command) -> KinResult<ResultMessage> {
        match command {
            Command::AddChild {
                mother,
                child,
                gender,
            } => self.submit_add_child(mother, child, *gender),
            Command::GetRelationship {
                person,
                relationship,
            } => self.submit_get_relationship(person, relationship),
        }
    }

    /// Parse and execute one line. Blank lines yield `None`.
    ///
    /// A line that does not parse yields [`ResultMessage::InvalidCommand`];
    /// only storage failures are errors.
    pub fn execute_line(&self, line: &str) -> KinResult<Option<ResultMessage>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        match line.parse::<Command>() {
            Ok(command) => {
                debug!(?command, "executing");
                self.execute(&command).map(Some)
            }
            Err(err) => {
                warn!(%line, %err, "invalid command");
                Ok(Some(ResultMessage::InvalidCommand))
            }
        }
    }

    /// Run every line of `input`, writing one result per command to `sink`.
    ///
    /// Returns the number of commands executed.
    pub fn run<R: BufRead, S: OutputSink>(&self, input: R, mut sink: S) -> KinResult<usize> {
        let mut executed = 0;
        let mut failed = 0;
        for line in input.lines() {
            let line = line.map_err(KinError::Output)?;
            if let Some(message) = self.execute_line(&line)? {
                if message.is_failure() {
                    failed += 1;
                }
                sink.emit(&message.to_string())?;
                executed += 1;
            }
        }
        debug!(executed, failed, "command stream finished");
        Ok(executed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::person::Person;
    use crate::sink::MemorySink;
    use crate::storage::InMemoryFamilyStore;

    fn engine() -> FamilyEngine {
        let store = InMemoryFamilyStore::from_people(vec![Person::new("Margaret", Gender::Female)
            .with_husband("Arthur")
            .with_child(
                Person::new("Jane", Gender::Female)
                    .with_mother("Margaret")
                    .with_spouse("Michael"),
            )
            .with_child(Person::new("Christopher", Gender::Male).with_mother("Margaret"))]);
        FamilyEngine::new(Arc::new(store))
    }

    #[test]
    fn test_submit_operations() {
        let engine = engine();
        assert_eq!(
            engine.submit_add_child("Margaret", "Sam", Gender::Male).unwrap(),
            ResultMessage::ChildAdded
        );
        assert_eq!(
            engine.submit_get_relationship("Sam", "Siblings").unwrap().to_string(),
            "Jane Christopher"
        );
        assert_eq!(
            engine.submit_get_relationship("Margaret", "Cousin").unwrap(),
            ResultMessage::RelationshipNotHandled
        );
    }

    #[test]
    fn test_execute_line_blank_and_invalid() {
        let engine = engine();
        assert_eq!(engine.execute_line("   ").unwrap(), None);
        assert_eq!(
            engine.execute_line("INVALID_COMMAND").unwrap(),
            Some(ResultMessage::InvalidCommand)
        );
        assert_eq!(
            engine.execute_line("ADD_CHILD Margaret Sam Robot").unwrap(),
            Some(ResultMessage::InvalidCommand)
        );
    }

    #[test]
    fn test_run_writes_one_line_per_command() {
        let engine = engine();
        let input = "ADD_CHILD Margaret Sam Male\n\
                     GET_RELATIONSHIP Sam Siblings\n\
                     \n\
                     GET_RELATIONSHIP Christopher Son\n\
                     GET_RELATIONSHIP Nobody Siblings\n\
                     ADD_CHILD Christopher Tom Male\n";
        let mut sink = MemorySink::new();

        let executed = engine.run(input.as_bytes(), &mut sink).unwrap();

        assert_eq!(executed, 5);
        assert_eq!(
            sink.lines(),
            [
                "CHILD_ADDED",
                "Jane Christopher",
                "NONE",
                "PERSON_NOT_FOUND",
                "CHILD_ADDITION_FAILED",
            ]
        );
    }
}
