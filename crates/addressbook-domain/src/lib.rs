//! # Address Book Domain Layer
//!
//! Contact data as validated, immutable values.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Value Objects, Person, Appointment, YearMonth ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every value object is checked when it is built. Once a `Person` exists,
//! all of its fields are known to be well-formed.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    address::Address,
    appointment::Appointment,
    calendar::YearMonth,
    email::Email,
    financial_plan::FinancialPlan,
    name::Name,
    person::Person,
    phone::Phone,
    remark::Remark,
    tag::Tag,
};

pub use repository::person_repository::{PersonRepository, RepositoryError};
