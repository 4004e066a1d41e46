//! Cart domain module.
//!
//! This crate contains the business rules for the order cart: line merging,
//! the quantity floor, customer metadata, and persistence through the store
//! adapter. The rules themselves are pure deterministic logic on [`Cart`];
//! [`engine::CartEngine`] wraps them with read/persist/notify glue.
//!
//! By contract no operation here surfaces an error: storage failure and
//! malformed persisted data degrade to the empty/default value so the
//! shopping flow always has a renderable cart.

pub mod cart;
pub mod engine;

pub use cart::{Cart, CartLine, CartLineInput, CustomerInfo};
pub use engine::{CartEngine, DEFAULT_CART_KEY, DEFAULT_CUSTOMER_KEY};
