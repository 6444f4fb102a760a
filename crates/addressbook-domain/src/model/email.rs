//! Email - A contact email address

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use shared::ParseError;

/// `local-part@domain`. The local part is alphanumeric with single `+ _ . -`
/// separators between characters. The domain is dot-separated labels of
/// alphanumerics and inner hyphens; the last label has at least 2 characters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[[:alnum:]]([+_.\-]?[[:alnum:]])*",
        r"@([[:alnum:]]([[:alnum:]\-]*[[:alnum:]])?\.)*",
        r"[[:alnum:]][[:alnum:]\-]*[[:alnum:]]$",
    ))
    .expect("email pattern is a valid regex")
});

/// A validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain. \
        The local-part should only contain alphanumeric characters and the special characters +_.-, \
        and may not start or end with a special character. \
        The domain is made of labels separated by periods; each label starts and ends with an \
        alphanumeric character, may contain hyphens, and the last label is at least 2 characters long.";

    pub fn is_valid(value: &str) -> bool {
        EMAIL_PATTERN.is_match(value)
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

impl core::fmt::Display for Email {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
