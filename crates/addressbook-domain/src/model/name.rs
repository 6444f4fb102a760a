//! Name - A person's full name
//!
//! Name is a Value Object - two names with the same text are equal.
//! Names are also the identity used to detect duplicate contacts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use shared::ParseError;

/// Starts with a letter, then letters, spaces and `, . ' - /`
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{L}[\p{L} ,.'/\-]*$").expect("name pattern is a valid regex")
});

/// A validated full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Names should only contain letters, spaces \
        and the characters , . ' - /, should start with a letter, and should not be blank";

    /// Returns true if `value` is a well-formed name
    pub fn is_valid(value: &str) -> bool {
        NAME_PATTERN.is_match(value)
    }

    /// Build a Name, rejecting malformed input. Input is not trimmed.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::new(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn full_name(&self) -> &str {
        &self.0
    }

    /// True if any whitespace-separated word of the name equals `word`,
    /// ignoring case
    pub fn contains_word_ignore_case(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        !word.is_empty()
            && self
                .0
                .split_whitespace()
                .any(|part| part.to_lowercase() == word)
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(Name::is_valid("Rachel Walker"));
        assert!(Name::is_valid("Captain Kek"));
        assert!(Name::is_valid("Mary-Jane O'Neil"));
        assert!(Name::is_valid("Tan Ah Kow s/o Tan Ah Beng"));
        assert!(Name::is_valid("Zoë Ng"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" "));
        assert!(!Name::is_valid("R@chel"));
        assert!(!Name::is_valid("Agent 47"));
        assert!(!Name::is_valid("-Leading Dash"));
        assert!(!Name::is_valid(" Rachel"));
    }

    #[test]
    fn test_parse_round_trip() {
        let name = Name::parse("Rachel Walker").unwrap();
        assert_eq!(name.full_name(), "Rachel Walker");
        assert_eq!(name.to_string(), "Rachel Walker");
    }

    #[test]
    fn test_parse_error_carries_constraints() {
        let err = Name::parse("R@chel").unwrap_err();
        assert_eq!(err.message, Name::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_value_object_equality() {
        assert_eq!(Name::parse("Alex Yeoh").unwrap(), Name::parse("Alex Yeoh").unwrap());
        assert_ne!(Name::parse("Alex Yeoh").unwrap(), Name::parse("alex yeoh").unwrap());
    }

    #[test]
    fn test_contains_word_ignore_case() {
        let name = Name::parse("Bernice Yu").unwrap();
        assert!(name.contains_word_ignore_case("bernice"));
        assert!(name.contains_word_ignore_case("YU"));
        assert!(!name.contains_word_ignore_case("Bern"));
        assert!(!name.contains_word_ignore_case(""));
    }
}
