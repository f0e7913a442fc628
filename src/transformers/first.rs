//! First transformer.
//!
//! Passes the first value, or the first value matching a predicate, and then
//! finishes.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{StreamExt, future};
use std::marker::PhantomData;

fn any_value<T>(_: &T) -> bool {
  true
}

/// A transformer that passes one value and finishes.
#[derive(Clone)]
pub struct FirstTransformer<T, F = fn(&T) -> bool>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  F: FnMut(&T) -> bool + Send + Clone + 'static,
{
  /// The first value for which this returns `true` is passed.
  pub predicate: F,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(&T)>,
}

impl<T> FirstTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Passes the very first value.
  pub fn new() -> Self {
    Self::matching(any_value::<T> as fn(&T) -> bool)
  }
}

impl<T> Default for FirstTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, F> FirstTransformer<T, F>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  F: FnMut(&T) -> bool + Send + Clone + 'static,
{
  /// Passes the first value matching `predicate`.
  pub fn matching(predicate: F) -> Self {
    Self {
      predicate,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T, F> Input for FirstTransformer<T, F>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  F: FnMut(&T) -> bool + Send + Clone + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<T, F> Output for FirstTransformer<T, F>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  F: FnMut(&T) -> bool + Send + Clone + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T, F> Transformer for FirstTransformer<T, F>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  F: FnMut(&T) -> bool + Send + Clone + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut predicate = self.predicate.clone();
    let matches = input.filter(move |emission| {
      future::ready(match emission {
        Ok(value) => predicate(value),
        Err(_) => true,
      })
    });
    until_failure(matches.take(1))
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::completion::drain;
  use crate::producer::Producer;
  use crate::producers::{RangeProducer, VecProducer};

  #[tokio::test]
  async fn test_first_value() {
    let mut transformer = FirstTransformer::new();
    let mut seen = Vec::new();
    let completion = drain(
      transformer.transform(VecProducer::new(vec!["x", "y"]).produce()),
      |v| seen.push(v),
    )
    .await;
    assert!(completion.is_finished());
    assert_eq!(seen, vec!["x"]);
  }

  #[tokio::test]
  async fn test_first_matching() {
    let mut transformer = FirstTransformer::matching(|x: &u32| x % 4 == 0);
    let mut seen = Vec::new();
    drain(transformer.transform(RangeProducer::new(1, 10).produce()), |v| seen.push(v)).await;
    assert_eq!(seen, vec![4]);
  }

  #[tokio::test]
  async fn test_empty_upstream_finishes_empty() {
    let mut transformer = FirstTransformer::<i8>::new();
    let mut seen = Vec::new();
    let completion = drain(transformer.transform(VecProducer::new(vec![]).produce()), |v| seen.push(v)).await;
    assert!(completion.is_finished());
    assert!(seen.is_empty());
  }
}
