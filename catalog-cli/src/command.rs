//! Command parsing.

use std::str::FromStr;

use catalog_lib::model::RecordId;
use thiserror::Error;

/// Parse error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a page number")]
    InvalidPage(String),
    #[error("'{0}' is not a record id")]
    InvalidId(String),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Go to a page.
    Page(u32),
    Next,
    Prev,
    /// The complete set of checked ids on the visible page.
    Check(Vec<RecordId>),
    SelectAll,
    DeselectAll,
    /// Set the "select first N" input.
    Count(String),
    /// Select first N, from the argument or the count input.
    First(Option<String>),
    Show,
    Selected,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  page N        go to page N
  next, prev    go to the next/previous page
  check IDS     set the checked rows of this page (comma separated, empty clears)
  all           select every row on this page
  none          deselect every row on this page
  count TEXT    set the \"select first N\" input
  first [N]     select exactly the first N rows of this page, dropping all
                other selections (N defaults to the count input)
  show          print the current page
  selected      list every selected id
  help          show this help
  quit          exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match name.to_ascii_lowercase().as_str() {
            "page" | "p" => {
                let arg = arg.ok_or(CommandError::MissingArgument("page"))?;
                arg.parse()
                    .map(Command::Page)
                    .map_err(|_| CommandError::InvalidPage(arg))
            }
            "next" | "n" => Ok(Command::Next),
            "prev" => Ok(Command::Prev),
            "check" | "c" => parse_ids(rest).map(Command::Check),
            "all" => Ok(Command::SelectAll),
            "none" => Ok(Command::DeselectAll),
            "count" => arg
                .map(Command::Count)
                .ok_or(CommandError::MissingArgument("count")),
            "first" => Ok(Command::First(arg)),
            "show" | "" => Ok(Command::Show),
            "selected" => Ok(Command::Selected),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_ids(text: &str) -> Result<Vec<RecordId>, CommandError> {
    text.split([',', ' '])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse()
                .map_err(|_| CommandError::InvalidId(part.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn test_navigation() {
        assert_eq!(parse("page 3"), Ok(Command::Page(3)));
        assert_eq!(parse("  NEXT "), Ok(Command::Next));
        assert_eq!(parse("prev"), Ok(Command::Prev));
        assert_eq!(parse("page"), Err(CommandError::MissingArgument("page")));
        assert_eq!(parse("page x"), Err(CommandError::InvalidPage("x".into())));
    }

    #[test]
    fn test_check() {
        assert_eq!(parse("check 1,2, 3"), Ok(Command::Check(vec![1, 2, 3])));
        assert_eq!(parse("check 4 5"), Ok(Command::Check(vec![4, 5])));
        assert_eq!(parse("check"), Ok(Command::Check(vec![])));
        assert_eq!(parse("check 1,a"), Err(CommandError::InvalidId("a".into())));
    }

    #[test]
    fn test_first_keeps_raw_text() {
        assert_eq!(parse("first"), Ok(Command::First(None)));
        assert_eq!(parse("first 5"), Ok(Command::First(Some("5".into()))));
        assert_eq!(parse("first -1"), Ok(Command::First(Some("-1".into()))));
        assert_eq!(parse("count abc"), Ok(Command::Count("abc".into())));
        assert_eq!(parse("count"), Err(CommandError::MissingArgument("count")));
    }

    #[test]
    fn test_misc() {
        assert_eq!(parse(""), Ok(Command::Show));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("frobnicate"), Err(CommandError::Unknown("frobnicate".into())));
    }
}
