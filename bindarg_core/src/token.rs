use std::str::FromStr;
use thiserror::Error;

/// A single word token, such as a typeahead key (ex: `gb`).
///
/// The token must be present, non-empty, not only whitespace, and contain no interior whitespace.
/// Once accepted, the value is stored verbatim.
///
/// ### Example
/// ```
/// # use bindarg_core as bindarg;
/// use bindarg::{InvalidToken, TypeaheadToken};
///
/// assert_eq!(TypeaheadToken::new("gb").unwrap().token(), "gb");
/// assert_eq!(TypeaheadToken::new("great britain").unwrap_err(), InvalidToken::MultipleWords("great britain".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeaheadToken(String);

/// Why a value was rejected as a [`TypeaheadToken`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidToken {
    /// No value was supplied.
    #[error("token is missing")]
    Missing,
    /// The value is the empty string.
    #[error("token is empty")]
    Empty,
    /// The value is only whitespace.
    #[error("token is only whitespace")]
    Whitespace,
    /// The value contains more than one word.
    #[error("token '{0}' must be a single word")]
    MultipleWords(String),
}

impl TypeaheadToken {
    /// Create a token, validating that it is a single word.
    pub fn new(token: impl Into<String>) -> Result<Self, InvalidToken> {
        let token = token.into();
        Self::validate(&token)?;
        Ok(Self(token))
    }

    /// Check whether `token` would be accepted, without storing it.
    pub fn validate(token: &str) -> Result<(), InvalidToken> {
        if token.is_empty() {
            return Err(InvalidToken::Empty);
        }

        let trimmed = token.trim();

        if trimmed.is_empty() {
            Err(InvalidToken::Whitespace)
        } else if trimmed.contains(char::is_whitespace) {
            Err(InvalidToken::MultipleWords(token.to_string()))
        } else {
            Ok(())
        }
    }

    /// The token, as supplied.
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Option<&str>> for TypeaheadToken {
    type Error = InvalidToken;

    fn try_from(value: Option<&str>) -> Result<Self, Self::Error> {
        match value {
            Some(token) => Self::new(token),
            None => Err(InvalidToken::Missing),
        }
    }
}

impl FromStr for TypeaheadToken {
    type Err = InvalidToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TypeaheadToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeaheadToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TypeaheadToken> for String {
    fn from(value: TypeaheadToken) -> Self {
        value.0
    }
}
