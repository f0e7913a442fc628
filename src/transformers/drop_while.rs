//! Drop-while transformer.
//!
//! Discards leading values while a predicate holds. The first value that
//! fails the predicate, and everything after it, passes.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{StreamExt, future};
use std::marker::PhantomData;

/// A transformer that drops values while `predicate` holds.
#[derive(Clone)]
pub struct DropWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Leading values are dropped while this returns `true`.
  pub predicate: F,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(&T)>,
}

impl<F, T> DropWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `DropWhileTransformer`.
  pub fn new(predicate: F) -> Self {
    Self {
      predicate,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<F, T> Input for DropWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<F, T> Output for DropWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<F, T> Transformer for DropWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut predicate = self.predicate.clone();
    let mut dropping = true;
    until_failure(input.filter(move |emission| {
      future::ready(match emission {
        Ok(value) if dropping => {
          dropping = predicate(value);
          !dropping
        }
        _ => true,
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
