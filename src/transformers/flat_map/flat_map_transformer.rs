use crate::producer::Producer;
use crate::transformer::TransformerConfig;
use std::marker::PhantomData;

/// A transformer that maps each value to a producer and merges their output.
///
/// Inner streams are polled concurrently, so values from different inner
/// producers may interleave. `max_concurrent` bounds how many inner streams
/// are live at once; with a bound of one they run back to back in order.
#[derive(Clone)]
pub struct FlatMapTransformer<F, I, P>
where
  F: FnMut(I) -> P + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  /// Builds the inner producer for a value.
  pub function: F,
  /// How many inner streams may run at once. `None` means no bound.
  pub max_concurrent: Option<usize>,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(I) -> P>,
}

impl<F, I, P> FlatMapTransformer<F, I, P>
where
  F: FnMut(I) -> P + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  /// Creates a new `FlatMapTransformer` with no concurrency bound.
  pub fn new(function: F) -> Self {
    Self {
      function,
      max_concurrent: None,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }

  /// Bounds the number of inner streams polled at once. Zero means no bound.
  #[must_use]
  pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
    self.max_concurrent = Some(max_concurrent).filter(|n| *n > 0);
    self
  }
}
