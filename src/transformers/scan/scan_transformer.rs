use crate::transformer::TransformerConfig;
use std::marker::PhantomData;

/// A transformer that emits a running accumulation.
///
/// Every call to `transform` starts again from `initial`.
#[derive(Clone)]
pub struct ScanTransformer<F, T, A>
where
  F: FnMut(A, T) -> A + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  A: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The accumulator before the first value.
  pub initial: A,
  /// Combines the accumulator with the next value.
  pub function: F,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<F, T, A> ScanTransformer<F, T, A>
where
  F: FnMut(A, T) -> A + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  A: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `ScanTransformer` starting from `initial`.
  pub fn new(initial: A, function: F) -> Self {
    Self {
      initial,
      function,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}
