//! Core domain entities.
//!
//! The service has a single entity, [`Mapping`], plus the scheme rule that
//! every stored `original_url` satisfies.

pub mod mapping;

pub use mapping::{ALLOWED_SCHEMES, Mapping, has_allowed_scheme};
