//! Command parsing
//!
//! A command line is a keyword followed by exactly as many integer arguments
//! as the keyword takes, separated by whitespace:
//!
//! | keyword  | arguments        |
//! |----------|------------------|
//! | learn    | `clone` `fact`   |
//! | rollback | `clone`          |
//! | relearn  | `clone`          |
//! | clone    | `clone`          |
//! | check    | `clone`          |

use crate::error::CommandError;
use clones_forest::CloneId;
use clones_history::Fact;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Command keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Learn,
    Rollback,
    Relearn,
    Clone,
    Check,
}

impl Keyword {
    pub const ALL: [Self; 5] = [
        Self::Learn,
        Self::Rollback,
        Self::Relearn,
        Self::Clone,
        Self::Check,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Learn => "learn",
            Self::Rollback => "rollback",
            Self::Relearn => "relearn",
            Self::Clone => "clone",
            Self::Check => "check",
        }
    }

    /// Number of integer arguments the keyword takes
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Learn => 2,
            _ => 1,
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CommandError::UnrecognizedCommand(s.to_string()))
    }
}

/// A parsed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Learn { clone: CloneId, fact: Fact },
    Rollback { clone: CloneId },
    Relearn { clone: CloneId },
    Clone { clone: CloneId },
    Check { clone: CloneId },
}

impl Command {
    /// Parse one command line
    ///
    /// # Errors
    /// - [`CommandError::UnrecognizedCommand`] for an unknown or empty keyword
    /// - [`CommandError::InvalidArgument`] for a wrong argument count or a
    ///   non-integer argument
    /// - [`CommandError::ContractViolation`] for a clone id below 1
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let keyword: Keyword = tokens.next().unwrap_or_default().parse()?;

        let args = tokens
            .map(|token| token.parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| CommandError::InvalidArgument { keyword })?;

        if args.len() != keyword.arity() {
            return Err(CommandError::InvalidArgument { keyword });
        }

        let clone = CloneId::try_from(args[0])?;
        Ok(match keyword {
            Keyword::Learn => Self::Learn {
                clone,
                fact: args[1],
            },
            Keyword::Rollback => Self::Rollback { clone },
            Keyword::Relearn => Self::Relearn { clone },
            Keyword::Clone => Self::Clone { clone },
            Keyword::Check => Self::Check { clone },
        })
    }

    #[must_use]
    pub const fn keyword(&self) -> Keyword {
        match self {
            Self::Learn { .. } => Keyword::Learn,
            Self::Rollback { .. } => Keyword::Rollback,
            Self::Relearn { .. } => Keyword::Relearn,
            Self::Clone { .. } => Keyword::Clone,
            Self::Check { .. } => Keyword::Check,
        }
    }

    /// Clone the command addresses
    #[must_use]
    pub const fn clone_id(&self) -> CloneId {
        match *self {
            Self::Learn { clone, .. }
            | Self::Rollback { clone }
            | Self::Relearn { clone }
            | Self::Clone { clone }
            | Self::Check { clone } => clone,
        }
    }

    /// True for every command except `check`
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Check { .. })
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Learn { clone, fact } => write!(f, "learn {clone} {fact}"),
            other => write!(f, "{} {}", other.keyword(), other.clone_id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clones_forest::ForestError;

    fn id(n: usize) -> CloneId {
        CloneId::new(n).unwrap()
    }

    #[test]
    fn parses_every_keyword() {
        assert_eq!(
            Command::parse("learn 1 5").unwrap(),
            Command::Learn { clone: id(1), fact: 5 }
        );
        assert_eq!(Command::parse("rollback 2").unwrap(), Command::Rollback { clone: id(2) });
        assert_eq!(Command::parse("relearn 3").unwrap(), Command::Relearn { clone: id(3) });
        assert_eq!(Command::parse("clone 4").unwrap(), Command::Clone { clone: id(4) });
        assert_eq!(Command::parse("check 5").unwrap(), Command::Check { clone: id(5) });
    }

    #[test]
    fn tolerates_extra_whitespace() {
        assert_eq!(
            Command::parse("  learn\t1   -7 ").unwrap(),
            Command::Learn { clone: id(1), fact: -7 }
        );
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            Command::parse("forget 1"),
            Err(CommandError::UnrecognizedCommand("forget".to_string()))
        );
        assert_eq!(
            Command::parse("LEARN 1 1"),
            Err(CommandError::UnrecognizedCommand("LEARN".to_string()))
        );
    }

    #[test]
    fn blank_line_is_unrecognized() {
        assert_eq!(
            Command::parse("   "),
            Err(CommandError::UnrecognizedCommand(String::new()))
        );
    }

    #[test]
    fn non_integer_argument_names_keyword() {
        let err = Command::parse("learn 1 x").unwrap_err();
        assert_eq!(err, CommandError::InvalidArgument { keyword: Keyword::Learn });
        assert_eq!(err.to_string(), "invalid argument for learn");

        assert!(matches!(
            Command::parse("check 99999999999"),
            Err(CommandError::InvalidArgument { keyword: Keyword::Check })
        ));
    }

    #[test]
    fn wrong_arity_is_invalid_argument() {
        assert!(matches!(
            Command::parse("learn 1"),
            Err(CommandError::InvalidArgument { keyword: Keyword::Learn })
        ));
        assert!(matches!(
            Command::parse("clone"),
            Err(CommandError::InvalidArgument { keyword: Keyword::Clone })
        ));
        assert!(matches!(
            Command::parse("rollback 1 2"),
            Err(CommandError::InvalidArgument { keyword: Keyword::Rollback })
        ));
    }

    #[test]
    fn non_positive_clone_id_is_contract_violation() {
        assert_eq!(
            Command::parse("check 0"),
            Err(CommandError::ContractViolation(ForestError::InvalidCloneId(0)))
        );
    }

    #[test]
    fn display_round_trips() {
        for line in ["learn 2 -3", "rollback 1", "relearn 4", "clone 1", "check 7"] {
            assert_eq!(Command::parse(line).unwrap().to_string(), line);
        }
    }

    #[test]
    fn only_check_is_read_only() {
        assert!(!Command::parse("check 1").unwrap().is_mutating());
        assert!(Command::parse("clone 1").unwrap().is_mutating());
    }
}
