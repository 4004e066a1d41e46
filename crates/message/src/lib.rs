//! Order message compiler.
//!
//! Pure deterministic domain logic (no IO, no storage): turns a cart plus
//! customer metadata into the canonical order text a human reads on the
//! receiving end. The output shape is a contract — identical inputs must
//! always produce byte-identical output, because downstream the text is
//! forwarded verbatim to the messaging handoff.

pub mod compiler;
pub mod format;

pub use compiler::{compile, MessageStyle};
pub use format::group_thousands;
