use crate::constant::*;
use crate::text::{quoted_segments, split, Segment, SplitOptions};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A command line token, remembering whether it was quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) text: String,
    pub(crate) quoted: bool,
}

impl Token {
    pub(crate) fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    fn quoted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quoted: true,
        }
    }

    /// The flag name introduced by this token, if it is a flag.
    ///
    /// A quoted token is always a value, even when it starts with a marker.
    pub(crate) fn flag_name(&self) -> Option<&str> {
        if self.quoted {
            None
        } else {
            flag_name(&self.text)
        }
    }
}

/// Break a command line into tokens.
///
/// Tokens are separated by whitespace, except that text enclosed in double quotes forms a single token (with the quotes stripped).
pub(crate) fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::default();

    for segment in quoted_segments(line, QUOTE) {
        match segment {
            Segment::Plain(text) => tokens.extend(
                split(text, &WHITESPACE, SplitOptions::RemoveEmptyEntries)
                    .into_iter()
                    .map(Token::plain),
            ),
            Segment::Quoted(text) => tokens.push(Token::quoted(text)),
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenized '{line}' into {tokens:?}.");
    }

    tokens
}

/// The flag name introduced by `token`, if it is a flag.
///
/// All leading markers are stripped: `-name` and `--name` both introduce `name`.
/// A token made only of markers (ex: `-`) is a plain value.
fn flag_name(token: &str) -> Option<&str> {
    let name = token.trim_start_matches(FLAG_MARKER);

    if name.len() < token.len() && !name.is_empty() {
        Some(name)
    } else {
        None
    }
}
