//! Range producer module.
//!
//! Emits every integer of an inclusive range, then finishes.

/// Producer trait implementation for range.
pub mod producer;
/// The range producer implementation.
pub mod range_producer;

pub use range_producer::RangeProducer;
