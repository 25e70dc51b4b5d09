//! Command parsing and routing for the scribe.
//!
//! Parses a chat line into a structured command that can be dispatched to
//! handlers. Lines that do not start with the trigger are not commands.

use super::tokenizer::{tokenize, ParseError};
use crate::quotebook::{Quote, QuoteFilter};

const SEARCH_USAGE: &str = "-s <author> [date] <words...>";
const ADD_USAGE: &str = "-a <author> <date> <quote...>";

/// Arguments for the search command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    /// Author and optional date filter.
    pub filter: QuoteFilter,
    /// Free text to rank quotes against. May be empty.
    pub content: String,
}

/// Parsed command with arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send a random matching quote as a card.
    Random(QuoteFilter),
    /// Rank quotes against some text (`-s`).
    Search(SearchArgs),
    /// Draft a new quote for confirmation (`-a`).
    AddRequest(Quote),
    /// Commit the sender's draft (`-y`).
    Confirm,
    /// Discard the sender's draft (`-n`).
    Cancel,
    /// Show help (`-h`).
    Help,
    /// Malformed arguments.
    Invalid(ParseError),
}

/// Command router for parsing chat lines.
pub struct CommandRouter;

impl CommandRouter {
    /// Parses a chat line. Returns `None` unless the first token is `trigger`.
    pub fn parse(trigger: &str, input: &str) -> Option<Command> {
        let tokens = tokenize(input);
        let (first, args) = tokens.split_first()?;
        if first != trigger {
            return None;
        }
        Some(Self::parse_args(args))
    }

    /// Parses the arguments that follow the trigger.
    pub fn parse_args(args: &[String]) -> Command {
        let Some(first) = args.first() else {
            return Command::Random(QuoteFilter::any());
        };

        if !is_flag(first) {
            return Command::Random(QuoteFilter::new(args.first(), args.get(1)));
        }

        let rest = &args[1..];
        match first.as_str() {
            "-s" => Self::parse_search(rest),
            "-a" => Self::parse_add(rest),
            "-y" => Command::Confirm,
            "-n" => Command::Cancel,
            "-h" => Command::Help,
            other => Command::Invalid(
                ParseError::new(other, "Unknown option")
                    .with_hint("-s, -a, -y, -n, -h, or [author] [date]"),
            ),
        }
    }

    /// Parse `-s <author> [date] <words...>`.
    fn parse_search(args: &[String]) -> Command {
        let Some(author) = args.first() else {
            return Command::Invalid(
                ParseError::new("-s", "Missing required argument: author").with_hint(SEARCH_USAGE),
            );
        };

        let (date, words) = match args.get(1) {
            Some(candidate) if looks_like_date(candidate) => (Some(candidate.clone()), &args[2..]),
            _ => (None, &args[1..]),
        };

        Command::Search(SearchArgs {
            filter: QuoteFilter::new(Some(author.clone()), date),
            content: words.join(" "),
        })
    }

    /// Parse `-a <author> <date> <quote...>`.
    fn parse_add(args: &[String]) -> Command {
        let missing = match args.len() {
            0 => Some("author"),
            1 => Some("date"),
            2 => Some("quote"),
            _ => None,
        };
        if let Some(name) = missing {
            return Command::Invalid(
                ParseError::new("-a", format!("Missing required argument: {name}"))
                    .with_hint(ADD_USAGE),
            );
        }

        Command::AddRequest(Quote::new(args[2..].join(" "), &args[0], &args[1]))
    }
}

/// A flag is a dash followed by one ASCII letter.
fn is_flag(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('-'), Some(c), None) if c.is_ascii_alphabetic()
    )
}

/// Digits with `/`, `-` or `.` separators, e.g. `2021`, `3/14/22`, `2020-01-05`.
fn looks_like_date(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '/' | '-' | '.'))
}
