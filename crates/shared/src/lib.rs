//! # Address Book Shared
//!
//! Common types used across all address book crates.

pub mod config;
pub mod error;
pub mod index;

// Re-exports
pub use config::*;
pub use error::*;
pub use index::*;
