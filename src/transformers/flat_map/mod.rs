//! Flat-map transformer module.
//!
//! Turns every value into a producer and merges the streams of all those
//! producers into one.

/// The flat-map transformer implementation.
pub mod flat_map_transformer;
/// Transformer trait implementation for flat-map.
pub mod transformer;

pub use flat_map_transformer::FlatMapTransformer;
