//! Prefix transformer.
//!
//! Passes at most a fixed number of values, then finishes without waiting
//! for upstream.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::StreamExt;
use std::marker::PhantomData;

/// A transformer that passes the first `count` values and then finishes.
#[derive(Debug, Clone)]
pub struct PrefixTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The most values that will be passed.
  pub count: usize,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T> PrefixTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `PrefixTransformer` passing at most `count` values.
  pub fn new(count: usize) -> Self {
    Self {
      count,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T> Input for PrefixTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<T> Output for PrefixTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Transformer for PrefixTransformer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    until_failure(input.take(self.count))
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
  use crate::producers::{PassthroughSubject, VecProducer};
  use proptest::prelude::*;

  #[tokio::test]
  async fn test_finishes_without_upstream_finishing() {
    let mut subject = PassthroughSubject::new();
    let mut transformer = PrefixTransformer::new(2);
    let output = transformer.transform(subject.produce());
    for value in 1..=5 {
      subject.send(value).unwrap();
    }
    // the subject is still live
    let mut seen = Vec::new();
    assert!(drain(output, |v| seen.push(v)).await.is_finished());
    assert_eq!(seen, vec![1, 2]);
  }

  proptest! {
    #[test]
    fn test_never_more_than_bound(data in prop::collection::vec(any::<u16>(), 0..50), bound in 0usize..20) {
      let mut transformer = PrefixTransformer::new(bound);
      let stream = transformer.transform(VecProducer::new(data.clone()).produce());
      let mut delivered = Vec::new();
      let completion = tokio_test::block_on(drain(stream, |v| delivered.push(v)));
      prop_assert!(completion.is_finished());
      prop_assert_eq!(delivered.len(), data.len().min(bound));
      prop_assert_eq!(&delivered[..], &data[..delivered.len()]);
    }
  }
}
