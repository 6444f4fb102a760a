//! Address - A postal address

use serde::Serialize;
use shared::ParseError;

/// Any text whose first character is not whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    pub fn is_valid(value: &str) -> bool {
        value.chars().next().is_some_and(|c| !c.is_whitespace())
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

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
