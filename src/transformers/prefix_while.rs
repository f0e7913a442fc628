//! Prefix-while transformer.
//!
//! Passes values while a predicate holds and finishes at the first value that
//! fails it.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{StreamExt, future};
use std::marker::PhantomData;

/// A transformer that passes values while `predicate` holds.
#[derive(Clone)]
pub struct PrefixWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The stream finishes at the first value for which this returns `false`.
  pub predicate: F,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(&T)>,
}

impl<F, T> PrefixWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `PrefixWhileTransformer`.
  pub fn new(predicate: F) -> Self {
    Self {
      predicate,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<F, T> Input for PrefixWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<F, T> Output for PrefixWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<F, T> Transformer for PrefixWhileTransformer<F, T>
where
  F: FnMut(&T) -> bool + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut predicate = self.predicate.clone();
    until_failure(input.take_while(move |emission| {
      future::ready(match emission {
        Ok(value) => predicate(value),
        Err(_) => true,
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::completion::drain;
  use crate::producer::Producer;
  use crate::producers::RangeProducer;

  #[tokio::test]
  async fn test_stops_at_first_mismatch() {
    let mut transformer = PrefixWhileTransformer::new(|x: &i64| *x < 3);
    let mut seen = Vec::new();
    let completion = drain(
      transformer.transform(RangeProducer::new(1, 10).produce()),
      |v| seen.push(v),
    )
    .await;
    assert!(completion.is_finished());
    assert_eq!(seen, vec![1, 2]);
  }
}
