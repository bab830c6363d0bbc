//! Products domain module.
//!
//! This crate contains the catalog's value objects, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::Product;
