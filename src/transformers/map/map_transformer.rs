use crate::transformer::TransformerConfig;
use std::marker::PhantomData;

/// A transformer that applies a function to each value.
#[derive(Clone)]
pub struct MapTransformer<F, I, O>
where
  F: FnMut(I) -> O + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The function applied to each value.
  pub function: F,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(I) -> O>,
}

impl<F, I, O> MapTransformer<F, I, O>
where
  F: FnMut(I) -> O + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `MapTransformer` applying `function`.
  pub fn new(function: F) -> Self {
    Self {
      function,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}
