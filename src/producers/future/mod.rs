//! Future producer module.
//!
//! A single-shot asynchronous producer whose work starts as soon as it is
//! created and whose one result is replayed to every subscriber.

/// The future producer implementation.
pub mod future_producer;
/// Producer trait implementation for future.
pub mod producer;

pub use future_producer::FutureProducer;
