//! Repository boundary for aggregate CRUD access.
//!
//! This module defines an infrastructure-facing abstraction for storing and
//! loading aggregates by identity without making any storage assumptions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use r#trait::{Repository, RepositoryError};
