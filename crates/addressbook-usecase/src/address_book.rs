//! AddressBook - The operations a user performs on their contacts
//!
//! ```text
//! User action ──▶ AddressBook ──▶ PersonRepository (port)
//!                     │
//!                     └── displayed order: names sorted case-insensitively
//! ```
//!
//! Indices handed to this service always refer to the displayed order, so
//! "delete 2" removes the second card the user sees.

use addressbook_domain::{Person, PersonRepository, Remark, RepositoryError};
use shared::{AddressBookError, DuplicatePersonError, Index, InvalidPersonIndexError, Result};
use tracing::{debug, info, warn};

use crate::sample::sample_persons;

/// Contact list service over any PersonRepository
#[derive(Debug, Clone)]
pub struct AddressBook<R: PersonRepository> {
    repository: R,
}

impl<R: PersonRepository> AddressBook<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create an address book seeded with the sample contacts
    pub fn with_sample_data(repository: R) -> Result<Self> {
        let mut book = Self::new(repository);
        for person in sample_persons()? {
            book.add_person(person)?;
        }
        info!(count = book.count()?, "Loaded sample contacts");
        Ok(book)
    }

    /// Add a person. Rejects a second person with the same name.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        debug!(name = %person.name(), "Adding person");
        if self
            .repository
            .contains(person.name())
            .map_err(into_address_book_error)?
        {
            warn!(name = %person.name(), "Rejected duplicate person");
            return Err(DuplicatePersonError {
                name: person.name().to_string(),
            }
            .into());
        }
        self.repository.add(person).map_err(into_address_book_error)
    }

    /// Delete the person at `index` in the displayed list
    pub fn delete_person(&mut self, index: Index) -> Result<Person> {
        let target = self.person_at(index)?;
        let removed = self
            .repository
            .remove(target.name())
            .map_err(into_address_book_error)?;
        info!(name = %removed.name(), index = %index, "Deleted person");
        Ok(removed)
    }

    /// Replace the remark of the person at `index`; returns the edited person
    pub fn set_remark(&mut self, index: Index, remark: Remark) -> Result<Person> {
        let target = self.person_at(index)?;
        let edited = target.clone().with_remark(remark);
        self.repository
            .replace(target.name(), edited.clone())
            .map_err(into_address_book_error)?;
        debug!(name = %edited.name(), "Updated remark");
        Ok(edited)
    }

    /// People whose name contains any keyword as a whole word (case-insensitive),
    /// in displayed order
    pub fn find_by_keywords(&self, keywords: &[&str]) -> Result<Vec<Person>> {
        Ok(self
            .list_persons()?
            .into_iter()
            .filter(|p| keywords.iter().any(|k| p.name().contains_word_ignore_case(k)))
            .collect())
    }

    /// All people, sorted by name ignoring case
    pub fn list_persons(&self) -> Result<Vec<Person>> {
        let mut people = self
            .repository
            .list_all()
            .map_err(into_address_book_error)?;
        people.sort_by(|a, b| {
            a.name()
                .full_name()
                .to_lowercase()
                .cmp(&b.name().full_name().to_lowercase())
                .then_with(|| a.name().cmp(b.name()))
        });
        Ok(people)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.repository.clear().map_err(into_address_book_error)?;
        info!("Cleared address book");
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        self.repository.count().map_err(into_address_book_error)
    }

    fn person_at(&self, index: Index) -> Result<Person> {
        let people = self.list_persons()?;
        let size = people.len();
        people
            .into_iter()
            .nth(index.zero_based())
            .ok_or_else(|| {
                InvalidPersonIndexError {
                    index: index.one_based(),
                    size,
                }
                .into()
            })
    }
}

fn into_address_book_error(err: RepositoryError) -> AddressBookError {
    match err {
        RepositoryError::Duplicate { name } => DuplicatePersonError { name }.into(),
        other => AddressBookError::Repository(other.to_string()),
    }
}
