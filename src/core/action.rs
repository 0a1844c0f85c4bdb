//! Command and response grammar.
//!
//! The engine reads agent output as short text commands, the same strings a
//! human would type into its console. The literal forms are fixed:
//!
//! | Value | Text |
//! |---|---|
//! | `Command::Pass` | `""` |
//! | `Command::Play(i)` | `"p i"` |
//! | `Command::Activate { permanent: i, ability: None }` | `"a i"` |
//! | `Command::Activate { permanent: i, ability: Some(j) }` | `"a i_j"` |
//! | `Command::SkipTo(step)` | `"s step"` |
//! | `TargetRef::Own(i)` | `"b i"` |
//! | `TargetRef::Opposing(i)` | `"ob i"` |
//! | `TargetRef::OpponentPlayer` | `"p 1"` (`"op"` accepted on parse) |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Index list for attacker/blocker declarations.
/// SmallVec keeps typical board sizes off the heap.
pub type IndexList = SmallVec<[usize; 8]>;

/// Failure to parse command or target text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("unknown command verb `{0}`")]
    UnknownVerb(String),

    #[error("command `{0}` is missing an argument")]
    MissingArgument(String),

    #[error("invalid index `{0}`")]
    InvalidIndex(String),

    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}

/// Main-phase action command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Do nothing and pass priority.
    Pass,
    /// Play the hand card at this index.
    Play(usize),
    /// Activate an ability of the permanent at this battlefield index.
    Activate {
        permanent: usize,
        ability: Option<usize>,
    },
    /// Skip to a named step. Harness-only; the policies never emit it.
    SkipTo(String),
}

impl Command {
    /// Check if this is a pass.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Command::Pass)
    }

    /// Hand index for a play command.
    #[must_use]
    pub fn played_index(&self) -> Option<usize> {
        match self {
            Command::Play(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pass => Ok(()),
            Command::Play(i) => write!(f, "p {i}"),
            Command::Activate {
                permanent,
                ability: None,
            } => write!(f, "a {permanent}"),
            Command::Activate {
                permanent,
                ability: Some(j),
            } => write!(f, "a {permanent}_{j}"),
            Command::SkipTo(step) => write!(f, "s {step}"),
        }
    }
}

fn parse_index(text: &str) -> Result<usize, CommandParseError> {
    text.parse()
        .map_err(|_| CommandParseError::InvalidIndex(text.to_string()))
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(verb) = parts.next() else {
            return Ok(Command::Pass);
        };
        let arg = parts
            .next()
            .ok_or_else(|| CommandParseError::MissingArgument(verb.to_string()))?;
        if let Some(extra) = parts.next() {
            return Err(CommandParseError::TrailingInput(extra.to_string()));
        }

        match verb {
            "p" => Ok(Command::Play(parse_index(arg)?)),
            "a" => match arg.split_once('_') {
                Some((i, j)) => Ok(Command::Activate {
                    permanent: parse_index(i)?,
                    ability: Some(parse_index(j)?),
                }),
                None => Ok(Command::Activate {
                    permanent: parse_index(arg)?,
                    ability: None,
                }),
            },
            "s" => Ok(Command::SkipTo(arg.to_string())),
            other => Err(CommandParseError::UnknownVerb(other.to_string())),
        }
    }
}

/// Target of a spell or ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetRef {
    /// Creature on our own battlefield.
    Own(usize),
    /// Creature on the opponent's battlefield.
    Opposing(usize),
    /// The opponent themself.
    OpponentPlayer,
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetRef::Own(i) => write!(f, "b {i}"),
            TargetRef::Opposing(i) => write!(f, "ob {i}"),
            TargetRef::OpponentPlayer => f.write_str("p 1"),
        }
    }
}

impl FromStr for TargetRef {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| CommandParseError::MissingArgument(String::new()))?;
        if verb == "op" {
            return match parts.next() {
                None => Ok(TargetRef::OpponentPlayer),
                Some(extra) => Err(CommandParseError::TrailingInput(extra.to_string())),
            };
        }

        let arg = parts
            .next()
            .ok_or_else(|| CommandParseError::MissingArgument(verb.to_string()))?;
        if let Some(extra) = parts.next() {
            return Err(CommandParseError::TrailingInput(extra.to_string()));
        }

        match verb {
            "b" => Ok(TargetRef::Own(parse_index(arg)?)),
            "ob" => Ok(TargetRef::Opposing(parse_index(arg)?)),
            "p" if arg == "1" => Ok(TargetRef::OpponentPlayer),
            "p" => Err(CommandParseError::InvalidIndex(arg.to_string())),
            other => Err(CommandParseError::UnknownVerb(other.to_string())),
        }
    }
}

/// Answer to a free-text prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// No choice (empty line).
    Empty,
    /// Space-separated indices (attackers, blockers).
    Indices(IndexList),
    /// A single index (discard, "which creature").
    Index(usize),
    /// A spell target.
    Target(TargetRef),
}

impl Response {
    /// Build an index-list response; an empty list answers `Empty`.
    #[must_use]
    pub fn from_indices(indices: IndexList) -> Self {
        if indices.is_empty() {
            Response::Empty
        } else {
            Response::Indices(indices)
        }
    }

    /// Check if this answers with no choice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Response::Empty)
    }

    /// Indices of an index-list response; `Empty` yields an empty slice.
    #[must_use]
    pub fn indices(&self) -> Option<&[usize]> {
        match self {
            Response::Empty => Some(&[][..]),
            Response::Indices(list) => Some(list.as_slice()),
            _ => None,
        }
    }

    /// Target of a target response.
    #[must_use]
    pub fn target(&self) -> Option<TargetRef> {
        match self {
            Response::Target(target) => Some(*target),
            _ => None,
        }
    }
}

impl From<TargetRef> for Response {
    fn from(target: TargetRef) -> Self {
        Response::Target(target)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Empty => Ok(()),
            Response::Indices(list) => {
                for (n, i) in list.iter().enumerate() {
                    if n > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{i}")?;
                }
                Ok(())
            }
            Response::Index(i) => write!(f, "{i}"),
            Response::Target(target) => write!(f, "{target}"),
        }
    }
}
