//! Drop transformer.
//!
//! Discards a fixed number of leading values.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{StreamExt, future};
use std::marker::PhantomData;

/// A transformer that drops the first `count` values.
#[derive(Debug, Clone)]
pub struct DropTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// How many leading values to drop.
  pub count: usize,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T> DropTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `DropTransformer` dropping `count` values.
  pub fn new(count: usize) -> Self {
    Self {
      count,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T> Input for DropTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<T> Output for DropTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Transformer for DropTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    // a plain `skip` would count the failure as a dropped item
    let mut remaining = self.count;
    until_failure(input.filter(move |emission| {
      future::ready(match emission {
        Ok(_) if remaining > 0 => {
          remaining -= 1;
          false
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
