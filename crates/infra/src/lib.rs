//! Infrastructure layer: aggregate storage behind the repository boundary.

pub mod repository;

pub use repository::{InMemoryRepository, Repository, RepositoryError};
