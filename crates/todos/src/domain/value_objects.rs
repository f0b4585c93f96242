//! Domain Value Objects
//!
//! Validated task-field wrappers. Parsing collects rule failures as
//! [`FieldViolation`]s so a rejected payload reports every bad field.

use crate::error::FieldViolation;

/// Todo title - required, non-empty after trimming, bounded length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Parse a raw title. Leading/trailing whitespace is dropped.
    pub fn parse(raw: &str, max_chars: usize) -> Result<Self, FieldViolation> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FieldViolation::new("title", "title must not be empty"));
        }
        let len = trimmed.chars().count();
        if len > max_chars {
            return Err(FieldViolation::new(
                "title",
                format!("title must be at most {max_chars} characters, got {len}"),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Todo notes - optional free text, bounded length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoNotes(String);

impl TodoNotes {
    /// Parse raw notes. Whitespace is preserved, only the length is checked.
    pub fn parse(raw: &str, max_chars: usize) -> Result<Self, FieldViolation> {
        let len = raw.chars().count();
        if len > max_chars {
            return Err(FieldViolation::new(
                "notes",
                format!("notes must be at most {max_chars} characters, got {len}"),
            ));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trims_whitespace() {
        let title = TodoTitle::parse("  Buy milk  ", 200).unwrap();
        assert_eq!(title.as_str(), "Buy milk");
    }

    #[test]
    fn test_title_rejects_empty() {
        assert!(TodoTitle::parse("", 200).is_err());
        assert!(TodoTitle::parse("   \t ", 200).is_err());
    }

    #[test]
    fn test_title_rejects_over_limit() {
        let raw = "x".repeat(201);
        let err = TodoTitle::parse(&raw, 200).unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn test_title_counts_chars_not_bytes() {
        // 10 multibyte characters must pass a 10-char limit
        let raw = "あ".repeat(10);
        assert!(TodoTitle::parse(&raw, 10).is_ok());
    }

    #[test]
    fn test_notes_preserves_whitespace() {
        let notes = TodoNotes::parse("  two lines\nhere  ", 2000).unwrap();
        assert_eq!(notes.as_str(), "  two lines\nhere  ");
    }

    #[test]
    fn test_notes_rejects_over_limit() {
        let raw = "x".repeat(11);
        let err = TodoNotes::parse(&raw, 10).unwrap_err();
        assert_eq!(err.field, "notes");
    }
}
