//! Try-map transformer module.
//!
//! Applies a fallible function to every value. What happens to a value whose
//! conversion fails is decided by the transformer's [`ErrorStrategy`]:
//! by default the first failure becomes the terminal failure of the stream.
//!
//! [`ErrorStrategy`]: crate::error::ErrorStrategy

/// Transformer trait implementation for try-map.
pub mod transformer;
/// The try-map transformer implementation.
pub mod try_map_transformer;

pub use try_map_transformer::TryMapTransformer;
