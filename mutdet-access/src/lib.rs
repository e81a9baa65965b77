//! Access-flag queries for JVM class-file metadata.
//!
//! Bytecode visitors hand out access flags as a raw integer per type, field
//! and method. [`AccessFlagQuery`] wraps such an integer and answers the
//! questions a mutability analysis asks of it (`is_private`, `is_final`,
//! `is_static`, …) without the caller spelling out bit tests.

pub mod element;
pub mod error;
pub mod modifiers;
pub mod parse;
pub mod query;

pub use element::ElementKind;
pub use error::{Error, Result};
pub use modifiers::AccessFlags;
pub use parse::parse_flags;
pub use query::{AccessFlagQuery, Describe};
