//! Command-stream parsing.
//!
//! One command per line, whitespace separated:
//!
//! ```text
//! ADD_CHILD <mother> <child> <Male|Female>
//! GET_RELATIONSHIP <person> <relationship>
//! ```
//!
//! Each verb takes exactly the arguments shown. A line with missing or extra
//! tokens is rejected as a whole and reported as `INVALID_COMMAND`, rather
//! than having trailing tokens ignored.

use std::str::FromStr;

use crate::error::ParseError;
use crate::person::Gender;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a child under a mother.
    AddChild {
        mother: String,
        child: String,
        gender: Gender,
    },
    /// Resolve a relationship.
    ///
    /// The relationship stays a raw token: an unsupported token is a query
    /// result (`RELATIONSHIP_NOT_HANDLED`), not a parse failure.
    GetRelationship {
        person: String,
        relationship: String,
    },
}

impl Command {
    /// Verb for child insertion.
    pub const ADD_CHILD: &'static str = "ADD_CHILD";
    /// Verb for relationship queries.
    pub const GET_RELATIONSHIP: &'static str = "GET_RELATIONSHIP";
}

fn expect_args(verb: &str, args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ParseError::WrongArity {
            verb: verb.to_string(),
            expected,
            actual: args.len(),
        })
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(ParseError::EmptyCommand)?;
        let args: Vec<&str> = tokens.collect();

        match verb {
            Self::ADD_CHILD => {
                expect_args(verb, &args, 3)?;
                Ok(Self::AddChild {
                    mother: args[0].to_string(),
                    child: args[1].to_string(),
                    gender: args[2].parse()?,
                })
            }
            Self::GET_RELATIONSHIP => {
                expect_args(verb, &args, 2)?;
                Ok(Self::GetRelationship {
                    person: args[0].to_string(),
                    relationship: args[1].to_string(),
                })
            }
            other => Err(ParseError::UnknownCommand {
                verb: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_child() {
        let cmd: Command = "ADD_CHILD Flora Minerva Female".parse().unwrap();
        assert_eq!(
            cmd,
            Command::AddChild {
                mother: "Flora".to_string(),
                child: "Minerva".to_string(),
                gender: Gender::Female,
            }
        );
    }

    #[test]
    fn test_parse_get_relationship_tolerates_spacing() {
        let cmd: Command = "  GET_RELATIONSHIP   Remus  Maternal-Aunt \r".parse().unwrap();
        assert_eq!(
            cmd,
            Command::GetRelationship {
                person: "Remus".to_string(),
                relationship: "Maternal-Aunt".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_relationship_token_is_not_a_parse_error() {
        assert!("GET_RELATIONSHIP Remus Cousin".parse::<Command>().is_ok());
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!("".parse::<Command>(), Err(ParseError::EmptyCommand));
        assert!(matches!(
            "REMOVE_CHILD Flora".parse::<Command>(),
            Err(ParseError::UnknownCommand { .. })
        ));
        assert!(matches!(
            "ADD_CHILD Flora Minerva".parse::<Command>(),
            Err(ParseError::WrongArity { expected: 3, actual: 2, .. })
        ));
        assert!(matches!(
            "GET_RELATIONSHIP Remus".parse::<Command>(),
            Err(ParseError::WrongArity { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            "ADD_CHILD Flora Minerva Unknown".parse::<Command>(),
            Err(ParseError::UnknownGender { .. })
        ));
    }

    #[test]
    fn test_trailing_tokens_reject_the_line() {
        assert!(matches!(
            "GET_RELATIONSHIP Remus Siblings now".parse::<Command>(),
            Err(ParseError::WrongArity { expected: 2, actual: 3, .. })
        ));
        assert!(matches!(
            "ADD_CHILD Flora Minerva Female twin".parse::<Command>(),
            Err(ParseError::WrongArity { expected: 3, actual: 4, .. })
        ));
    }
}
