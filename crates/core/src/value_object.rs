//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values do. To "modify" a
/// value object, create a new one with the new values.
///
/// - **Value Object**: no identity (two with the same values are equal),
///   e.g. a monetary transaction amount.
/// - **Entity**: has identity (two entities with the same ID are the same
///   entity), e.g. a customer's person record.
///
/// The bounds follow from value semantics: cheap to copy (`Clone`), compared
/// by attribute values (`PartialEq`), debuggable (`Debug`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
