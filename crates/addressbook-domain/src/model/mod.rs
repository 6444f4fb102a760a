//! Domain Models - The vocabulary of the address book
//!
//! Each field of a contact has its own type so an unchecked string can
//! never end up where a validated value is expected.

pub mod address;
pub mod appointment;
pub mod calendar;
pub mod email;
pub mod financial_plan;
pub mod name;
pub mod person;
pub mod phone;
pub mod remark;
pub mod tag;
