//! Customers domain module.
//!
//! This crate contains the `Customer` aggregate, its `Person` root entity
//! and the `Transaction` value object, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::{Customer, CustomerId, Person, Transaction};
