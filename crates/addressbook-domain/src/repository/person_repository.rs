//! Person Repository - Abstract storage for contacts
//!
//! People are keyed by name, matching `Person::is_same_person`.

use crate::model::name::Name;
use crate::model::person::Person;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A person with the same name is already stored
    Duplicate { name: String },
    /// Person not found
    NotFound { name: String },
    /// Failed to persist
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::Duplicate { name } => {
                write!(f, "Person already exists: {}", name)
            }
            RepositoryError::NotFound { name } => {
                write!(f, "Person not found: {}", name)
            }
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Person Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// The domain defines what it needs; adapters provide implementations.
pub trait PersonRepository {
    /// Store a new person. Fails with `Duplicate` if the name is taken.
    fn add(&mut self, person: Person) -> Result<(), RepositoryError>;

    /// Remove and return the person with this name
    fn remove(&mut self, name: &Name) -> Result<Person, RepositoryError>;

    /// Replace the person stored under `target` with `edited`.
    ///
    /// The edited person may carry a new name as long as it does not
    /// collide with someone else.
    fn replace(&mut self, target: &Name, edited: Person) -> Result<(), RepositoryError>;

    /// Find a person by name
    fn find_by_name(&self, name: &Name) -> Result<Option<Person>, RepositoryError>;

    /// Check if a person with this name exists
    fn contains(&self, name: &Name) -> Result<bool, RepositoryError> {
        Ok(self.find_by_name(name)?.is_some())
    }

    /// List all stored people, in no particular order
    fn list_all(&self) -> Result<Vec<Person>, RepositoryError>;

    /// Remove everyone
    fn clear(&mut self) -> Result<(), RepositoryError>;

    /// Count stored people
    fn count(&self) -> Result<usize, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{address::Address, email::Email, phone::Phone};
    use std::collections::HashMap;

    struct VecPersonRepo {
        people: HashMap<Name, Person>,
    }

    impl PersonRepository for VecPersonRepo {
        fn add(&mut self, person: Person) -> Result<(), RepositoryError> {
            if self.people.contains_key(person.name()) {
                return Err(RepositoryError::Duplicate {
                    name: person.name().to_string(),
                });
            }
            self.people.insert(person.name().clone(), person);
            Ok(())
        }

        fn remove(&mut self, name: &Name) -> Result<Person, RepositoryError> {
            self.people.remove(name).ok_or(RepositoryError::NotFound {
                name: name.to_string(),
            })
        }

        fn replace(&mut self, target: &Name, edited: Person) -> Result<(), RepositoryError> {
            self.remove(target)?;
            self.add(edited)
        }

        fn find_by_name(&self, name: &Name) -> Result<Option<Person>, RepositoryError> {
            Ok(self.people.get(name).cloned())
        }

        fn list_all(&self) -> Result<Vec<Person>, RepositoryError> {
            Ok(self.people.values().cloned().collect())
        }

        fn clear(&mut self) -> Result<(), RepositoryError> {
            self.people.clear();
            Ok(())
        }

        fn count(&self) -> Result<usize, RepositoryError> {
            Ok(self.people.len())
        }
    }

    fn person(name: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse("12345678").unwrap(),
            Email::parse("someone@example.com").unwrap(),
            Address::parse("Somewhere").unwrap(),
            Name::parse("Kin").unwrap(),
            Phone::parse("87654321").unwrap(),
        )
    }

    #[test]
    fn test_contains_default_uses_find() {
        let mut repo = VecPersonRepo {
            people: HashMap::new(),
        };
        repo.add(person("Alex Yeoh")).unwrap();

        assert!(repo.contains(&Name::parse("Alex Yeoh").unwrap()).unwrap());
        assert!(!repo.contains(&Name::parse("Bernice Yu").unwrap()).unwrap());
    }

    #[test]
    fn test_error_display() {
        let err = RepositoryError::NotFound {
            name: "Alex Yeoh".to_string(),
        };
        assert_eq!(err.to_string(), "Person not found: Alex Yeoh");
    }
}
