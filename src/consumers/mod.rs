//! # Consumers
//!
//! The ends of a pipeline.
//!
//! - [`SinkConsumer`]: hands values and the terminal signal to closures
//! - [`VecConsumer`]: records values and the terminal signal
//! - [`ConsoleConsumer`]: prints values and the terminal signal
//! - [`DemandConsumer`]: receives values only as far as its demand allows

/// Printing consumer.
pub mod console;
/// Demand-driven consumer.
pub mod demand;
/// Closure-driven consumer.
pub mod sink;
/// Recording consumer.
pub mod vec;

pub use console::ConsoleConsumer;
pub use demand::{DemandConsumer, DemandError, DemandHandle};
pub use sink::SinkConsumer;
pub use vec::VecConsumer;
