//! In-Memory Repository Implementation
//!
//! Contacts live for the duration of the session only.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use addressbook_domain::model::name::Name;
use addressbook_domain::model::person::Person;
use addressbook_domain::repository::person_repository::{PersonRepository, RepositoryError};

/// In-memory Person Repository
///
/// Thread-safe implementation using RwLock. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    people: Arc<RwLock<HashMap<Name, Person>>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self {
            people: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Name, Person>>, RepositoryError> {
        self.people
            .read()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Name, Person>>, RepositoryError> {
        self.people
            .write()
            .map_err(|_| RepositoryError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            })
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn add(&mut self, person: Person) -> Result<(), RepositoryError> {
        let mut people = self.write()?;
        if people.contains_key(person.name()) {
            return Err(RepositoryError::Duplicate {
                name: person.name().to_string(),
            });
        }
        people.insert(person.name().clone(), person);
        Ok(())
    }

    fn remove(&mut self, name: &Name) -> Result<Person, RepositoryError> {
        let mut people = self.write()?;
        people.remove(name).ok_or_else(|| RepositoryError::NotFound {
            name: name.to_string(),
        })
    }

    fn replace(&mut self, target: &Name, edited: Person) -> Result<(), RepositoryError> {
        let mut people = self.write()?;
        if !people.contains_key(target) {
            return Err(RepositoryError::NotFound {
                name: target.to_string(),
            });
        }
        if edited.name() != target && people.contains_key(edited.name()) {
            return Err(RepositoryError::Duplicate {
                name: edited.name().to_string(),
            });
        }
        people.remove(target);
        people.insert(edited.name().clone(), edited);
        Ok(())
    }

    fn find_by_name(&self, name: &Name) -> Result<Option<Person>, RepositoryError> {
        Ok(self.read()?.get(name).cloned())
    }

    fn list_all(&self) -> Result<Vec<Person>, RepositoryError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn clear(&mut self) -> Result<(), RepositoryError> {
        self.write()?.clear();
        Ok(())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.len())
    }
}
