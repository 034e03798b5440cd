//! Core domain types, builders, lookups, and the error taxonomy.
//!
//! The generation engine consumes a pre-fetched [`Sale`] — no persistence
//! or lookups happen during assembly.

mod builder;
mod error;
mod format;
mod states;
mod types;

pub use builder::*;
pub use error::*;
pub use format::format_value;
pub use states::uf_code;
pub use types::*;
