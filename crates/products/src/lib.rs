//! Products domain module.
//!
//! This crate contains the `Product` aggregate and the `Item` entity it
//! wraps, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod product;

pub use product::{Item, Product, ProductId};
