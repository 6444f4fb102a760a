//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait PersonRepo      │  InMemoryPersonRepository
//!   fn add()            │
//!   fn remove()         │
//! ```

pub mod person_repository;
