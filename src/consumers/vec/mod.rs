//! Vec consumer module.
//!
//! Records every value and the terminal signal in storage shared between
//! clones, so a clone kept aside can inspect what a spawned consumer saw.

/// Consumer trait implementation for vec.
pub mod consumer;
/// The vec consumer implementation.
pub mod vec_consumer;

pub use vec_consumer::VecConsumer;
