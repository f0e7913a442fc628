//! Output trait for components that produce streams.
//!
//! Implemented by producers and transformers. Output types must line up with
//! the [`crate::input::Input`] types of whatever is attached downstream.

use crate::completion::Emission;
use futures::Stream;

/// Trait for components that yield a stream as output.
pub trait Output {
  /// The value type flowing out.
  type Output: Send + 'static;
  /// The stream type flowing out.
  type OutputStream: Stream<Item = Emission<Self::Output>> + Send + 'static;
}
