use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a practice exam category (e.g. `cardiology-mcq`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExamId(String);

impl ExamId {
    /// Creates a new `ExamId` from a slug.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the slug is empty or contains characters other than
    /// lowercase ASCII letters, digits and `-`.
    pub fn new(slug: impl Into<String>) -> Result<Self, ParseIdError> {
        validate_slug(slug.into(), "ExamId").map(Self)
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a flashcard deck (e.g. `cardiology`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeckId(String);

impl DeckId {
    /// Creates a new `DeckId` from a slug.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the slug is not a valid identifier.
    pub fn new(slug: impl Into<String>) -> Result<Self, ParseIdError> {
        validate_slug(slug.into(), "DeckId").map(Self)
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of an anatomy system (e.g. `respiratory`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SystemId(String);

impl SystemId {
    /// Creates a new `SystemId` from a slug.
    ///
    /// # Errors
    ///
    /// Returns `ParseIdError` if the slug is not a valid identifier.
    pub fn new(slug: impl Into<String>) -> Result<Self, ParseIdError> {
        validate_slug(slug.into(), "SystemId").map(Self)
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_slug(raw: String, kind: &'static str) -> Result<String, ParseIdError> {
    let valid = !raw.is_empty()
        && !raw.starts_with('-')
        && !raw.ends_with('-')
        && raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(raw)
    } else {
        Err(ParseIdError { kind, raw })
    }
}

impl fmt::Debug for ExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExamId({})", self.0)
    }
}

impl fmt::Debug for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeckId({})", self.0)
    }
}

impl fmt::Debug for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SystemId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for ExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Conversions ───────────────────────────────────────────────────────────────

/// Error type for parsing an ID from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from {:?}", self.kind, self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ExamId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for DeckId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for SystemId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ExamId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for DeckId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for SystemId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExamId> for String {
    fn from(id: ExamId) -> Self {
        id.0
    }
}

impl From<DeckId> for String {
    fn from(id: DeckId) -> Self {
        id.0
    }
}

impl From<SystemId> for String {
    fn from(id: SystemId) -> Self {
        id.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_id_display() {
        let id = ExamId::new("cardiology-mcq").unwrap();
        assert_eq!(id.to_string(), "cardiology-mcq");
    }

    #[test]
    fn test_exam_id_from_str() {
        let id: ExamId = "anatomy-osce".parse().unwrap();
        assert_eq!(id.as_str(), "anatomy-osce");
    }

    #[test]
    fn test_id_rejects_uppercase_and_spaces() {
        assert!("Cardiology".parse::<ExamId>().is_err());
        assert!("human anatomy".parse::<DeckId>().is_err());
        assert!("".parse::<SystemId>().is_err());
        assert!("-nervous".parse::<SystemId>().is_err());
    }

    #[test]
    fn test_parse_error_names_kind() {
        let err = "Bad".parse::<DeckId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse DeckId from \"Bad\"");
    }

    #[test]
    fn test_id_string_roundtrip() {
        let original = SystemId::new("respiratory").unwrap();
        let raw: String = original.clone().into();
        assert_eq!(SystemId::try_from(raw).unwrap(), original);
    }
}
