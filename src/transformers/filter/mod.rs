//! Filter transformer module.
//!
//! Passes the values that satisfy a predicate and drops the rest.

/// The filter transformer implementation.
pub mod filter_transformer;
/// Transformer trait implementation for filter.
pub mod transformer;

pub use filter_transformer::FilterTransformer;
