//! Map transformer module.
//!
//! Applies an infallible function to every value.

/// The map transformer implementation.
pub mod map_transformer;
/// Transformer trait implementation for map.
pub mod transformer;

pub use map_transformer::MapTransformer;
