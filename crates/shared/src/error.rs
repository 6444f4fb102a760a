//! Error types for the address book

use thiserror::Error;

/// Error raised when user input does not match a field's format.
///
/// There is a single kind of parse failure; the message tells the user
/// which constraint was violated so they can re-enter the value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error raised when a person with the same name already exists
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("This person already exists in the address book: {name}")]
pub struct DuplicatePersonError {
    pub name: String,
}

/// Error raised when an index points past the displayed list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The person index provided is invalid: {index} (list has {size} entries)")]
pub struct InvalidPersonIndexError {
    pub index: usize,
    pub size: usize,
}

/// General address book error type
#[derive(Debug, Error)]
pub enum AddressBookError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    DuplicatePerson(#[from] DuplicatePersonError),

    #[error(transparent)]
    InvalidPersonIndex(#[from] InvalidPersonIndexError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, AddressBookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_displays_message_only() {
        let err = ParseError::new("Phone numbers should only contain numbers");
        assert_eq!(err.to_string(), "Phone numbers should only contain numbers");
    }

    #[test]
    fn test_parse_error_is_transparent_in_address_book_error() {
        let err: AddressBookError = ParseError::new("bad tag").into();
        assert_eq!(err.to_string(), "bad tag");
        assert!(matches!(err, AddressBookError::Parse(_)));
    }

    #[test]
    fn test_duplicate_person_message() {
        let err: AddressBookError = DuplicatePersonError {
            name: "Alex Yeoh".to_string(),
        }
        .into();
        assert!(err.to_string().contains("Alex Yeoh"));
    }

    #[test]
    fn test_invalid_index_message() {
        let err = InvalidPersonIndexError { index: 7, size: 3 };
        assert_eq!(
            err.to_string(),
            "The person index provided is invalid: 7 (list has 3 entries)"
        );
    }
}
