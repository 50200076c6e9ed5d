//! Result messages returned to the command dispatcher.

use std::fmt;

/// Outcome of a single command.
///
/// Failures that callers must tell apart ("unknown person" vs "no relatives")
/// are distinct variants rather than errors. `Display` renders the exact
/// output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultMessage {
    /// A child was inserted.
    ChildAdded,
    /// The named person is not in the tree.
    PersonNotFound,
    /// The relationship token has no algorithm.
    RelationshipNotHandled,
    /// The mother was found but cannot take a child.
    ChildAdditionFailed,
    /// The relationship resolved to an empty set.
    None,
    /// The command line could not be parsed.
    InvalidCommand,
    /// Names of the matching relatives, never empty.
    Relatives(Vec<String>),
}

impl ResultMessage {
    /// Builds a message from a resolved name list, mapping `[]` to [`ResultMessage::None`].
    #[must_use]
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            Self::None
        } else {
            Self::Relatives(names)
        }
    }

    /// Returns the relative names, or an empty slice for every other variant.
    #[must_use]
    pub fn names(&self) -> &[String] {
        match self {
            Self::Relatives(names) => names,
            _ => &[],
        }
    }

    /// Returns true for the failure variants.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::PersonNotFound
                | Self::RelationshipNotHandled
                | Self::ChildAdditionFailed
                | Self::InvalidCommand
        )
    }
}

impl fmt::Display for ResultMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildAdded => f.write_str("CHILD_ADDED"),
            Self::PersonNotFound => f.write_str("PERSON_NOT_FOUND"),
            Self::RelationshipNotHandled => f.write_str("RELATIONSHIP_NOT_HANDLED"),
            Self::ChildAdditionFailed => f.write_str("CHILD_ADDITION_FAILED"),
            Self::None => f.write_str("NONE"),
            Self::InvalidCommand => f.write_str("INVALID_COMMAND"),
            Self::Relatives(names) => f.write_str(&names.join(" ")),
        }
    }
}
