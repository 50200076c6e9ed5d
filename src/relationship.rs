//! Relationship kinds understood by the resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::person::Gender;

/// Which parent link an uncle/aunt lookup follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parent {
    /// Maternal side
    Mother,
    /// Paternal side
    Father,
}

/// A supported relationship.
///
/// The textual tokens are the ones used on the command stream, e.g.
/// `Paternal-Uncle` or `Sister-In-Law`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    #[serde(rename = "Paternal-Uncle")]
    PaternalUncle,
    #[serde(rename = "Maternal-Uncle")]
    MaternalUncle,
    #[serde(rename = "Paternal-Aunt")]
    PaternalAunt,
    #[serde(rename = "Maternal-Aunt")]
    MaternalAunt,
    #[serde(rename = "Sister-In-Law")]
    SisterInLaw,
    #[serde(rename = "Brother-In-Law")]
    BrotherInLaw,
    Siblings,
    Son,
    Daughter,
}

impl Relationship {
    /// Every supported relationship, in token-table order.
    pub const ALL: [Self; 9] = [
        Self::PaternalUncle,
        Self::MaternalUncle,
        Self::PaternalAunt,
        Self::MaternalAunt,
        Self::SisterInLaw,
        Self::BrotherInLaw,
        Self::Siblings,
        Self::Son,
        Self::Daughter,
    ];

    /// The command-stream token for this relationship.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::PaternalUncle => "Paternal-Uncle",
            Self::MaternalUncle => "Maternal-Uncle",
            Self::PaternalAunt => "Paternal-Aunt",
            Self::MaternalAunt => "Maternal-Aunt",
            Self::SisterInLaw => "Sister-In-Law",
            Self::BrotherInLaw => "Brother-In-Law",
            Self::Siblings => "Siblings",
            Self::Son => "Son",
            Self::Daughter => "Daughter",
        }
    }

    /// The gender every result of this relationship must have, if fixed.
    ///
    /// `Siblings` is the only kind that mixes genders.
    #[must_use]
    pub const fn target_gender(self) -> Option<Gender> {
        match self {
            Self::PaternalUncle | Self::MaternalUncle | Self::BrotherInLaw | Self::Son => {
                Some(Gender::Male)
            }
            Self::PaternalAunt | Self::MaternalAunt | Self::SisterInLaw | Self::Daughter => {
                Some(Gender::Female)
            }
            Self::Siblings => None,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Relationship {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| ParseError::UnknownRelationship {
                token: s.to_string(),
            })
    }
}
