//! Tokenizer for command argument parsing.
//!
//! Splits a chat line into arguments with support for:
//! - Grouping with double quotes, single quotes and parentheses
//! - Backslash-escaped delimiters (`\"`, `\'`, `\(`, `\)`)
//!
//! Grouping works on whitespace-separated pieces: a piece that starts with an
//! opening delimiter opens a capture, and the capture swallows following
//! pieces until one ends with the matching, unescaped closing delimiter.

/// Opening delimiters paired with their closing counterpart.
const DELIMITERS: [(char, char); 3] = [('"', '"'), ('\'', '\''), ('(', ')')];

/// Returns the closing delimiter for an opening one.
fn closing_for(open: char) -> Option<char> {
    DELIMITERS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, close)| *close)
}

/// Tokenizes a chat line into its arguments.
///
/// - `a b  c` → `a`, `b`, `c`
/// - `"Jane Doe" 2021` → `Jane Doe`, `2021`
/// - `(two words)` → `two words`
/// - `\"hi\"` → `"hi"` (escaped, no capture)
///
/// A capture that is never closed takes the rest of the line. Tokens are
/// never empty.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut capture: Option<Capture> = None;

    for piece in input.split_whitespace() {
        if let Some(open) = capture.as_mut() {
            if let Some(body) = strip_closing(piece, open.close) {
                open.push(body);
                if let Some(done) = capture.take() {
                    push_token(&mut tokens, done.finish());
                }
            } else {
                open.push(piece);
            }
            continue;
        }

        let Some(first) = piece.chars().next() else {
            continue;
        };

        match closing_for(first) {
            Some(close) => {
                let rest = &piece[first.len_utf8()..];
                match strip_closing(rest, close) {
                    Some(body) => push_token(&mut tokens, unescape(body)),
                    None => {
                        let mut started = Capture::new(close);
                        started.push(rest);
                        capture = Some(started);
                    }
                }
            }
            None => push_token(&mut tokens, unescape(piece)),
        }
    }

    if let Some(unclosed) = capture {
        push_token(&mut tokens, unclosed.finish());
    }

    tokens
}

/// An open capture accumulating pieces.
struct Capture {
    close: char,
    parts: Vec<String>,
}

impl Capture {
    fn new(close: char) -> Self {
        Self {
            close,
            parts: Vec::new(),
        }
    }

    fn push(&mut self, part: &str) {
        if !part.is_empty() {
            self.parts.push(part.to_string());
        }
    }

    fn finish(self) -> String {
        unescape(&self.parts.join(" "))
    }
}

/// Strips an unescaped trailing `close` from `piece`.
///
/// Returns `None` when the piece does not end the capture.
fn strip_closing(piece: &str, close: char) -> Option<&str> {
    let body = piece.strip_suffix(close)?;
    if body.ends_with('\\') {
        return None;
    }
    Some(body)
}

fn push_token(tokens: &mut Vec<String>, token: String) {
    if !token.is_empty() {
        tokens.push(token);
    }
}

/// Replaces escaped delimiters with their literal character.
fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next @ ('"' | '\'' | '(' | ')')) = chars.peek() {
                chars.next();
                result.push(next);
                continue;
            }
        }
        result.push(c);
    }

    result
}

/// Parse error with context for helpful error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The command form that failed to parse.
    pub command: String,
    /// Error message describing what went wrong.
    pub message: String,
    /// Optional hint for how to fix the error.
    pub hint: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Adds a hint to the error.
    pub fn with_hint(self, hint: impl Into<String>) -> Self {
        Self {
            hint: Some(hint.into()),
            ..self
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.command, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\nUsage: {}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
