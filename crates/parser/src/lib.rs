//! # Address Book Parser
//!
//! String-to-domain conversion for every contact field.
//!
//! Each `parse_*` function trims its input, checks the field's format and
//! returns either the value object or a [`shared::ParseError`] whose message
//! explains the constraint. Nothing here retries; callers re-prompt.

pub mod parser_util;

pub use parser_util::*;
