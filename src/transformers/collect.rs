//! Collect transformer.
//!
//! Buffers every value and passes them as one vector when upstream finishes.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::StreamExt;
use std::marker::PhantomData;

/// A transformer that emits all upstream values as a single `Vec`.
///
/// An empty upstream yields an empty vector. A failure discards the buffer.
#[derive(Debug, Clone)]
pub struct CollectTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T> CollectTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `CollectTransformer`.
  pub fn new() -> Self {
    Self {
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T> Default for CollectTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Input for CollectTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<T> Output for CollectTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = Vec<T>;
  type OutputStream = BoxedStream<Vec<T>>;
}

impl<T> Transformer for CollectTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    until_failure(async_stream::stream! {
      let mut input = input;
      let mut buffer = Vec::new();
      while let Some(emission) = input.next().await {
        match emission {
          Ok(value) => buffer.push(value),
          Err(failure) => {
            yield Err(failure);
            return;
          }
        }
      }
      yield Ok(buffer);
    })
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
