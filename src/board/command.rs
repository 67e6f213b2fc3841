//! User actions and their text form.
//!
//! Commands are what the controls of a host emit: pick a label, add a border,
//! peel the last border off. Each one reads as a single line:
//!
//! ```text
//! select 2
//! add dots
//! remove
//! deselect
//! ```

use super::state::Board;
use crate::label::{DecoratorKind, UnknownKind};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single user action against a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the slot at this 0-based index
    Select(usize),
    /// Clear the selection
    Deselect,
    /// Wrap the selected slot in a new border
    Add(DecoratorKind),
    /// Peel the outermost border off the selected slot
    RemoveLast,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (expected select, deselect, add or remove)")]
    UnknownVerb(String),

    #[error("'{verb}' expects {expected}")]
    MissingArgument {
        verb: &'static str,
        expected: &'static str,
    },

    #[error("unexpected argument '{extra}' for '{verb}'")]
    UnexpectedArgument { verb: &'static str, extra: String },

    #[error("invalid slot index '{0}'")]
    InvalidIndex(String),

    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),

    #[error("line {line}: {error}")]
    AtLine {
        line: usize,
        error: Box<CommandError>,
    },
}

impl Command {
    /// Applies this command to `board`.
    ///
    /// Returns `true` if the board changed. Commands that make no sense in the
    /// current state are no-ops.
    pub fn apply(self, board: &mut Board) -> bool {
        match self {
            Command::Select(index) => {
                let before = board.selected();
                board.select(index) && before != Some(index)
            }
            Command::Deselect => {
                let changed = board.selected().is_some();
                board.deselect();
                changed
            }
            Command::Add(kind) => board.add_decorator(kind),
            Command::RemoveLast => board.remove_last_decorator().is_some(),
        }
    }

    /// Parses a script with one command per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Errors carry the
    /// 1-based line number.
    pub fn parse_script(script: &str) -> Result<Vec<Command>, CommandError> {
        script
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(number, line)| {
                line.parse().map_err(|err| CommandError::AtLine {
                    line: number + 1,
                    error: Box::new(err),
                })
            })
            .collect()
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(CommandError::UnexpectedArgument {
                verb: canonical_verb(verb),
                extra: extra.to_string(),
            });
        }

        match verb.to_lowercase().as_str() {
            "select" => {
                let raw = argument.ok_or(CommandError::MissingArgument {
                    verb: "select",
                    expected: "a slot index",
                })?;
                raw.parse()
                    .map(Command::Select)
                    .map_err(|_| CommandError::InvalidIndex(raw.to_string()))
            }
            "add" => {
                let raw = argument.ok_or(CommandError::MissingArgument {
                    verb: "add",
                    expected: "a border kind",
                })?;
                Ok(Command::Add(raw.parse()?))
            }
            "deselect" | "remove" => match argument {
                Some(extra) => Err(CommandError::UnexpectedArgument {
                    verb: canonical_verb(verb),
                    extra: extra.to_string(),
                }),
                None if verb.eq_ignore_ascii_case("remove") => Ok(Command::RemoveLast),
                None => Ok(Command::Deselect),
            },
            _ => Err(CommandError::UnknownVerb(verb.to_string())),
        }
    }
}

fn canonical_verb(verb: &str) -> &'static str {
    match verb.to_lowercase().as_str() {
        "select" => "select",
        "add" => "add",
        "remove" => "remove",
        "deselect" => "deselect",
        _ => "command",
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Select(index) => write!(f, "select {index}"),
            Command::Deselect => f.write_str("deselect"),
            Command::Add(kind) => write!(f, "add {kind}"),
            Command::RemoveLast => f.write_str("remove"),
        }
    }
}
