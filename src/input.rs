//! Input trait for components that consume streams.
//!
//! Implemented by transformers and consumers. The input stream yields
//! [`Emission`]s of `Self::Input`: values, then possibly one failure.
//!
//! ```rust
//! use streamweave_primer::completion::BoxedStream;
//! use streamweave_primer::input::Input;
//!
//! struct Printer;
//!
//! impl Input for Printer {
//!   type Input = i32;
//!   type InputStream = BoxedStream<i32>;
//! }
//! ```

use crate::completion::Emission;
use futures::Stream;

/// Trait for components that take a stream as input.
pub trait Input {
  /// The value type flowing in.
  type Input: Send + 'static;
  /// The stream type flowing in.
  type InputStream: Stream<Item = Emission<Self::Input>> + Send + 'static;
}
