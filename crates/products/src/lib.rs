//! Products domain module.
//!
//! This crate contains the product record, its wire/storage mapping and the
//! input validation rules, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod product;

pub use product::{AvailabilityFlag, NewProduct, Product, ProductChanges, Sku};
