//! Vec producer module.
//!
//! Emits the items of a vector, in order, then finishes.

/// Producer trait implementation for vec.
pub mod producer;
/// The vec producer implementation.
pub mod vec_producer;

pub use vec_producer::VecProducer;
