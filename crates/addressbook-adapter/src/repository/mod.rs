//! Storage Adapters - Repository implementations
//!
//! These implement the repository traits from addressbook-domain.

pub mod in_memory;

pub use in_memory::InMemoryPersonRepository;
