//! Phone - A contact number

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use shared::ParseError;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern is a valid regex"));

/// A validated phone number (digits only)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(value: &str) -> bool {
        PHONE_PATTERN.is_match(value)
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::new(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Phone {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phones() {
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("123456"));
        assert!(Phone::is_valid("124293842033123"));
    }

    #[test]
    fn test_invalid_phones() {
        assert!(!Phone::is_valid(""));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("+651234"));
        assert!(!Phone::is_valid("9011p041"));
        assert!(!Phone::is_valid("9312 1534"));
    }

    #[test]
    fn test_parse_round_trip() {
        assert_eq!(Phone::parse("123456").unwrap().as_str(), "123456");
        assert!(Phone::parse("phone").is_err());
    }
}
