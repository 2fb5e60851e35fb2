//! Aggregate root trait for the domain model.

/// Aggregate root marker + minimal interface.
///
/// This is intentionally small so domain modules can decide how they model
/// their internal entities and value objects without bringing in any
/// infrastructure concerns. The identifier is the root entity's identifier
/// and never changes over the aggregate's lifetime.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;
}
