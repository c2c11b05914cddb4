//! Text commands typed at the prompt, translated to view actions.

use shared::{
    domain::{FilterAttribute, RecordId, SortKey, LOCATION_GROUP},
    error::ParseNameError,
    protocol::ViewAction,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Action(ViewAction),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' is not a record id")]
    InvalidId(String),
    #[error(transparent)]
    Name(#[from] ParseNameError),
}

pub const HELP: &str = "\
commands:
  make <value|All>            filter by make
  transmission <value|All>    filter by transmission
  filter <attribute> <value>  filter by make or transmission
  sort <key>                  sort by key; repeat to flip direction
  next | prev                 change page
  expand <id>                 show or hide a row's details
  location                    show or hide the country and city columns
  group <name>                show or hide a column group
  style                       switch between zebra and plain rows
  show | help | quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "make" => set_filter(FilterAttribute::Make, rest, "make")?,
        "transmission" => set_filter(FilterAttribute::Transmission, rest, "transmission")?,
        "filter" => {
            let (attribute, value) = rest.split_once(char::is_whitespace).ok_or(
                CommandError::MissingArgument {
                    command: "filter",
                    expected: "an attribute and a value",
                },
            )?;
            set_filter(attribute.parse()?, value.trim(), "filter")?
        }
        "sort" => {
            let key: SortKey = required(rest, "sort", "a key")?.parse()?;
            Command::Action(ViewAction::Sort { key })
        }
        "next" | "n" => Command::Action(ViewAction::NextPage),
        "prev" | "previous" | "p" => Command::Action(ViewAction::PreviousPage),
        "expand" | "collapse" | "toggle" => {
            let raw = required(rest, "expand", "a record id")?;
            let id = raw
                .parse::<i64>()
                .map_err(|_| CommandError::InvalidId(raw.to_string()))?;
            Command::Action(ViewAction::ToggleRow { id: RecordId(id) })
        }
        "location" => Command::Action(ViewAction::ToggleColumnGroup {
            name: LOCATION_GROUP.to_string(),
        }),
        "group" => Command::Action(ViewAction::ToggleColumnGroup {
            name: required(rest, "group", "a column group name")?.to_string(),
        }),
        "style" => Command::Action(ViewAction::ToggleStyle),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn set_filter(
    attribute: FilterAttribute,
    value: &str,
    command: &'static str,
) -> Result<Command, CommandError> {
    let value = required(value, command, "a value or All")?;
    Ok(Command::Action(ViewAction::SetFilter {
        attribute,
        value: value.to_string(),
    }))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
