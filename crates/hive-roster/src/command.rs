//! Line-oriented commands driving a roster store.
//!
//! ```text
//! add <level> <role> <name...>
//! update <id> [name=<name...>] [level=<n>] [role=<role>]
//! remove <id>
//! show
//! help
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::member::{Member, MemberDraft, MemberId, MemberPatch};
use crate::store::RosterStore;
use crate::view::BoardView;

/// Usage text printed by `help`.
pub const USAGE: &str = "\
commands:
  add <level> <role> <name...>
  update <id> [name=<name...>] [level=<n>] [role=<role>]
  remove <id>
  show
  help";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(MemberDraft),
    Update(MemberId, MemberPatch),
    Remove(MemberId),
    Show,
    Help,
}

/// Errors parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("`{0}` is not a number")]
    Number(String),

    #[error("unknown field `{0}`, expected name, level or role")]
    Field(String),
}

fn number<T: FromStr>(token: &str) -> std::result::Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::Number(token.to_string()))
}

fn parse_patch(tokens: &[&str]) -> std::result::Result<MemberPatch, ParseError> {
    let mut patch = MemberPatch::default();
    for token in tokens {
        match token.split_once('=') {
            Some(("name", value)) => patch.name = Some(value.to_string()),
            Some(("level", value)) => patch.level = Some(number(value)?),
            Some(("role", value)) => patch.role = Some(value.to_string()),
            Some((key, _)) => return Err(ParseError::Field(key.to_string())),
            // Bare words continue a name with spaces in it
            None => match patch.name.as_mut() {
                Some(name) => {
                    name.push(' ');
                    name.push_str(token);
                }
                None => return Err(ParseError::Usage("update <id> [name=<name...>] [level=<n>] [role=<role>]")),
            },
        }
    }
    Ok(patch)
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (&verb, args) = tokens.split_first().ok_or(ParseError::Empty)?;

        match verb.to_ascii_lowercase().as_str() {
            "add" => match args {
                [level, role, name @ ..] => Ok(Command::Add(MemberDraft::new(
                    name.join(" "),
                    number(level)?,
                    *role,
                ))),
                _ => Err(ParseError::Usage("add <level> <role> <name...>")),
            },
            "update" => match args {
                [id, fields @ ..] if !fields.is_empty() => {
                    Ok(Command::Update(number(id)?, parse_patch(fields)?))
                }
                _ => Err(ParseError::Usage("update <id> [name=<name...>] [level=<n>] [role=<role>]")),
            },
            "remove" => match args {
                [id] => Ok(Command::Remove(number(id)?)),
                _ => Err(ParseError::Usage("remove <id>")),
            },
            "show" => Ok(Command::Show),
            "help" => Ok(Command::Help),
            _ => Err(ParseError::Unknown(verb.to_string())),
        }
    }
}

/// What a command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Member),
    Updated(Member),
    Removed(MemberId),
    View(BoardView),
    Help,
}

impl Outcome {
    /// Human-readable report; board views render as pretty JSON.
    pub fn render(&self) -> serde_json::Result<String> {
        Ok(match self {
            Outcome::Added(m) => format!("added #{} {} (level {}, {})", m.id, m.name, m.level, m.role),
            Outcome::Updated(m) => format!("updated #{} {} (level {}, {})", m.id, m.name, m.level, m.role),
            Outcome::Removed(id) => format!("removed #{id}"),
            Outcome::View(view) => view.to_json_pretty()?,
            Outcome::Help => USAGE.to_string(),
        })
    }
}

/// Run one command against `store`.
pub fn execute(store: &mut RosterStore, command: Command) -> Result<Outcome> {
    match command {
        Command::Add(draft) => store.add(&draft).map(Outcome::Added),
        Command::Update(id, patch) => store.update(id, &patch).map(Outcome::Updated),
        Command::Remove(id) => store.remove(id).map(|()| Outcome::Removed(id)),
        Command::Show => store.view().map(Outcome::View),
        Command::Help => Ok(Outcome::Help),
    }
}
