use crate::transformer::TransformerConfig;
use std::error::Error;
use std::marker::PhantomData;

/// A transformer that applies a fallible function to each value.
pub struct TryMapTransformer<F, I, O, E>
where
  F: FnMut(I) -> Result<O, E> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
  E: Error + Send + Sync + 'static,
{
  /// The conversion applied to each value.
  pub function: F,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(I) -> Result<O, E>>,
}

impl<F, I, O, E> TryMapTransformer<F, I, O, E>
where
  F: FnMut(I) -> Result<O, E> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
  E: Error + Send + Sync + 'static,
{
  /// Creates a new `TryMapTransformer` applying `function`.
  pub fn new(function: F) -> Self {
    Self {
      function,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<F, I, O, E> Clone for TryMapTransformer<F, I, O, E>
where
  F: FnMut(I) -> Result<O, E> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
  E: Error + Send + Sync + 'static,
{
  fn clone(&self) -> Self {
    Self {
      function: self.function.clone(),
      config: self.config.clone(),
      _phantom: PhantomData,
    }
  }
}
