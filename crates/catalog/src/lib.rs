//! Catalog domain module.
//!
//! This crate owns the product records the storefront browses. The cart core
//! references products by identifier only; it never calls back into the
//! catalog after a line is captured.

pub mod product;

pub use product::{
    CatalogProvider, Category, InMemoryCatalog, Product, CATEGORIES,
};
