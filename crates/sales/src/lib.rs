//! Sales service module.
//!
//! Composes the customer and product repositories into business workflows
//! (order creation). Repositories are injected behind the repository trait,
//! so any backend satisfying it can be swapped in.

pub mod order;

pub use order::{OrderError, OrderService, OrderServiceBuilder};
