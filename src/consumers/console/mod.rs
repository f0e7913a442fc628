//! Console consumer module.
//!
//! Prints every value and the terminal signal, one line each, into a
//! [`Transcript`](crate::transcript::Transcript).

/// Consumer trait implementation for console.
pub mod consumer;
/// The console consumer implementation.
pub mod console_consumer;

pub use console_consumer::ConsoleConsumer;
