//! FinancialPlan - A financial product a contact holds

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use shared::ParseError;

static PLAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("financial plan pattern is a valid regex")
});

/// A validated plan name, e.g. "Prudential PRUShield"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FinancialPlan(String);

impl FinancialPlan {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Financial plan names should only contain \
        alphanumeric characters and spaces, and should not start with a space";

    pub fn is_valid(value: &str) -> bool {
        PLAN_PATTERN.is_match(value)
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ParseError::new(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn financial_plan_name(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for FinancialPlan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
