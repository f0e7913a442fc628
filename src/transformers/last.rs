//! Last transformer.
//!
//! Waits for upstream to finish and passes only its final value.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::StreamExt;
use std::marker::PhantomData;

/// A transformer that passes the last value once upstream finishes.
///
/// Nothing is passed if upstream fails or finishes empty.
#[derive(Debug, Clone)]
pub struct LastTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T> LastTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `LastTransformer`.
  pub fn new() -> Self {
    Self {
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T> Default for LastTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Input for LastTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<T> Output for LastTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Transformer for LastTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    until_failure(async_stream::stream! {
      let mut input = input;
      let mut last = None;
      while let Some(emission) = input.next().await {
        match emission {
          Ok(value) => last = Some(value),
          Err(failure) => {
            yield Err(failure);
            return;
          }
        }
      }
      if let Some(value) = last {
        yield Ok(value);
      }
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
