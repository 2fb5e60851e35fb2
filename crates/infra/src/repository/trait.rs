use thiserror::Error;

use tavern_core::AggregateRoot;

/// Repository operation error.
///
/// These are **storage errors** (lookup, uniqueness, backend failures) as
/// opposed to domain errors (validation, invariants). Every failing branch
/// returns before the store is mutated, so a failed call never leaves a
/// partial write behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The referenced identifier is absent from the store.
    #[error("aggregate not found")]
    NotFound,

    /// An aggregate with the same identity is already present.
    #[error("aggregate already exists")]
    AlreadyExists,

    /// Backend failure (lock poisoning, connection loss for remote stores).
    #[error("storage error: {0}")]
    Storage(String),
}

/// Repository abstraction: CRUD access to aggregates of one type.
///
/// Generic over the aggregate type; the identifier type comes from
/// [`AggregateRoot::Id`]. Concrete stores (in-memory now, database-backed
/// later) are interchangeable behind this trait, so callers compose against
/// `dyn Repository<A>` and never see storage details.
///
/// Callers receive aggregates **by value**: mutating a returned aggregate
/// does not affect the stored state until it is written back via
/// [`Repository::update`].
pub trait Repository<A: AggregateRoot>: Send + Sync {
    /// Return all stored aggregates, in unspecified order.
    ///
    /// The in-memory store never fails here, but a database-backed
    /// implementation may.
    fn get_all(&self) -> Result<Vec<A>, RepositoryError>;

    /// Return the aggregate with the given identity.
    ///
    /// Fails with [`RepositoryError::NotFound`] if absent.
    fn get_by_id(&self, id: &A::Id) -> Result<A, RepositoryError>;

    /// Insert a new aggregate.
    ///
    /// Fails with [`RepositoryError::AlreadyExists`] if an aggregate with
    /// the same identity is present; the store is left unchanged on failure.
    /// Not idempotent: re-adding the same identity fails.
    fn add(&self, aggregate: A) -> Result<(), RepositoryError>;

    /// Replace the stored aggregate with the same identity **in full**.
    ///
    /// Old state is discarded, not merged. Fails with
    /// [`RepositoryError::NotFound`] if no such identity exists; the store
    /// is left unchanged on failure.
    fn update(&self, aggregate: A) -> Result<(), RepositoryError>;

    /// Remove the aggregate with the given identity.
    ///
    /// Fails with [`RepositoryError::NotFound`] if absent. Not idempotent:
    /// deleting an already-absent identity fails rather than succeeding
    /// silently.
    fn delete(&self, id: &A::Id) -> Result<(), RepositoryError>;
}
