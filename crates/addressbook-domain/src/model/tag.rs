//! Tag - A one-word label on a contact

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use shared::ParseError;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("tag pattern is a valid regex"));

/// A validated tag. Ordered by name so cards can list tags alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Tag names should be a single alphanumeric word without spaces or symbols";

    pub fn is_valid(value: &str) -> bool {
        TAG_PATTERN.is_match(value)
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::new(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_validity() {
        assert!(Tag::is_valid("friend"));
        assert!(Tag::is_valid("VIP2023"));

        assert!(!Tag::is_valid(""));
        assert!(!Tag::is_valid("#friend"));
        assert!(!Tag::is_valid("friend neighbour"));
        assert!(!Tag::is_valid("high-value"));
    }

    #[test]
    fn test_display_is_bracketed() {
        assert_eq!(Tag::parse("friend").unwrap().to_string(), "[friend]");
    }

    #[test]
    fn test_ordering_by_name() {
        let mut tags = vec![Tag::parse("colleague").unwrap(), Tag::parse("cousin").unwrap()];
        tags.sort();
        assert_eq!(tags[0].tag_name(), "colleague");
    }
}
