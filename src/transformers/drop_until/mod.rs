//! Drop-until transformer module.
//!
//! Discards upstream values until a second producer, the trigger, emits its
//! first value. From then on everything passes.

/// The drop-until transformer implementation.
pub mod drop_until_transformer;
/// Transformer trait implementation for drop-until.
pub mod transformer;

pub use drop_until_transformer::DropUntilTransformer;
