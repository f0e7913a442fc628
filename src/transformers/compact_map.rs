//! Compact-map transformer.
//!
//! Applies a function that may produce nothing and forwards only the values it
//! does produce. Conversions that yield `None` vanish without a trace.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{StreamExt, future};
use std::marker::PhantomData;

/// A transformer that maps each value to an optional output and drops `None`.
#[derive(Clone)]
pub struct CompactMapTransformer<F, I, O>
where
  F: FnMut(I) -> Option<O> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The conversion applied to each value.
  pub function: F,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(I) -> Option<O>>,
}

impl<F, I, O> CompactMapTransformer<F, I, O>
where
  F: FnMut(I) -> Option<O> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `CompactMapTransformer` applying `function`.
  pub fn new(function: F) -> Self {
    Self {
      function,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<F, I, O> Input for CompactMapTransformer<F, I, O>
where
  F: FnMut(I) -> Option<O> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = I;
  type InputStream = BoxedStream<I>;
}

impl<F, I, O> Output for CompactMapTransformer<F, I, O>
where
  F: FnMut(I) -> Option<O> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = O;
  type OutputStream = BoxedStream<O>;
}

impl<F, I, O> Transformer for CompactMapTransformer<F, I, O>
where
  F: FnMut(I) -> Option<O> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut function = self.function.clone();
    until_failure(input.filter_map(move |emission| {
      future::ready(match emission {
        Ok(value) => function(value).map(Ok),
        Err(failure) => Some(Err(failure)),
      })
    }))
  }

  fn set_config_impl(&mut self, config: TransformerConfig) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig {
    &mut self.config
  }
}
