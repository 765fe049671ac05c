//! Registry crate for the slashline builtin command catalog.
//!
//! This crate provides the lookup table the completion engine resolves
//! command names against, the builtin slash-command specifications, and a
//! JSON manifest loader for embedders shipping extra catalogs.

pub mod builtin;
pub mod models;

pub use builtin::{builtin, builtin_specs};
pub use models::{CommandRegistry, RegistryError};
