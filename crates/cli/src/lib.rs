//! # Address Book CLI
//!
//! Terminal front end: person cards, one-shot commands and an interactive
//! session over an in-memory address book.

pub mod card;
pub mod commands;
pub mod interactive;
