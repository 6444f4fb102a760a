//! # Address Book Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters.

pub mod address_book;
pub mod sample;

pub use addressbook_domain;
pub use address_book::AddressBook;
pub use sample::sample_persons;
