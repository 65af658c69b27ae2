//! Card identifiers
//!
//! Cards carry their identifier as a raw string attribute. Numeric ids are
//! surfaced as integers, anything else passes through untouched.

use serde::{Deserialize, Serialize};

/// Identifier of a card, as read from its id attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    /// The raw attribute parsed as an integer
    Numeric(i64),
    /// The raw attribute, kept verbatim because it is not an integer
    Text(String),
}

impl CardId {
    /// Parse a raw id attribute
    ///
    /// The leading integer wins: after optional whitespace and a sign, the
    /// run of ASCII digits is the id, and anything after it is ignored
    /// (`"3.5"` is 3, `"42abc"` is 42). A value that does not start with a
    /// number, or overflows an `i64`, is kept exactly as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_dnd::core::models::CardId;
    ///
    /// assert_eq!(CardId::parse("42"), CardId::Numeric(42));
    /// assert_eq!(CardId::parse("3.5"), CardId::Numeric(3));
    /// assert_eq!(CardId::parse("card-a"), CardId::Text("card-a".to_string()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        leading_integer(raw).map_or_else(|| Self::Text(raw.to_string()), Self::Numeric)
    }

    /// Parse an attribute that may be absent
    ///
    /// A missing attribute becomes an empty text id.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        raw.map_or_else(|| Self::Text(String::new()), Self::parse)
    }

    /// Whether this id was parsed as an integer
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let end = trimmed[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(trimmed.len(), |i| sign_len + i);
    if end == sign_len {
        return None;
    }
    trimmed[..end].parse().ok()
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for CardId {
    fn from(n: i64) -> Self {
        Self::Numeric(n)
    }
}

impl From<&str> for CardId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
