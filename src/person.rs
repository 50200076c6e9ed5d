//! Person records and gender.
//!
//! A [`Person`] is the nested, external representation of a family member:
//! each record owns its children. Parent and partner links are plain names
//! that are resolved against the tree when a relationship is computed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseError;

/// Gender of a family member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male member
    Male,
    /// Female member
    Female,
}

impl Gender {
    /// Returns the other gender.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            other => Err(ParseError::UnknownGender {
                token: other.to_string(),
            }),
        }
    }
}

/// Stable index of a member inside a [`FamilyTree`](crate::tree::FamilyTree).
///
/// Ids are assigned in registration order and never reused; the tree is
/// append-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(usize);

impl PersonId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A family member in nested record form.
///
/// Females carry their partner in `husband`, males in `spouse`. A married-in
/// partner does not need a record of their own.
///
/// # Examples
///
/// ```
/// use kinship::{Gender, Person};
///
/// let margaret = Person::new("Margaret", Gender::Female)
///     .with_husband("Arthur")
///     .with_child(Person::new("Bill", Gender::Male).with_mother("Margaret"));
/// assert_eq!(margaret.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,

    pub gender: Gender,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub mother: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub father: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub spouse: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub husband: Option<String>,

    #[serde(default)]
    pub children: Vec<Person>,
}

/// Treats `""` and `null` the same as a missing field.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Person {
    /// Creates a person with no links and no children.
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            mother: None,
            father: None,
            spouse: None,
            husband: None,
            children: Vec::new(),
        }
    }

    /// Sets the mother's name.
    #[must_use]
    pub fn with_mother(mut self, mother: impl Into<String>) -> Self {
        self.mother = Some(mother.into());
        self
    }

    /// Sets the father's name.
    #[must_use]
    pub fn with_father(mut self, father: impl Into<String>) -> Self {
        self.father = Some(father.into());
        self
    }

    /// Sets the wife's name (held by a male member).
    #[must_use]
    pub fn with_spouse(mut self, spouse: impl Into<String>) -> Self {
        self.spouse = Some(spouse.into());
        self
    }

    /// Sets the husband's name (held by a female member).
    #[must_use]
    pub fn with_husband(mut self, husband: impl Into<String>) -> Self {
        self.husband = Some(husband.into());
        self
    }

    /// Appends a child record.
    #[must_use]
    pub fn with_child(mut self, child: Person) -> Self {
        self.children.push(child);
        self
    }

    /// Counts this record and all nested descendants.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Person::count).sum::<usize>()
    }
}
