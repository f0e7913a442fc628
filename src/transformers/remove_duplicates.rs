//! Remove-duplicates transformer.
//!
//! Drops a value when it equals the value delivered just before it.
//! Non-consecutive repeats pass.

use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{StreamExt, future};
use std::marker::PhantomData;

/// A transformer that suppresses consecutive duplicates.
#[derive(Debug, Clone)]
pub struct RemoveDuplicatesTransformer<T>
where
  T: std::fmt::Debug + Clone + PartialEq + Send + Sync + 'static,
{
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T> RemoveDuplicatesTransformer<T>
where
  T: std::fmt::Debug + Clone + PartialEq + Send + Sync + 'static,
{
  /// Creates a new `RemoveDuplicatesTransformer`.
  pub fn new() -> Self {
    Self {
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T> Default for RemoveDuplicatesTransformer<T>
where
  T: std::fmt::Debug + Clone + PartialEq + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Input for RemoveDuplicatesTransformer<T>
where
  T: std::fmt::Debug + Clone + PartialEq + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<T> Output for RemoveDuplicatesTransformer<T>
where
  T: std::fmt::Debug + Clone + PartialEq + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Transformer for RemoveDuplicatesTransformer<T>
where
  T: std::fmt::Debug + Clone + PartialEq + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut previous: Option<T> = None;
    until_failure(input.filter(move |emission| {
      future::ready(match emission {
        Ok(value) if previous.as_ref() == Some(value) => false,
        Ok(value) => {
          previous = Some(value.clone());
          true
        }
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
  use crate::producers::VecProducer;
  use proptest::prelude::*;

  #[tokio::test]
  async fn test_collapses_runs_only() {
    let words = "a a a b c c a b b".split(' ').collect::<Vec<_>>();
    let mut transformer = RemoveDuplicatesTransformer::new();
    let mut seen = Vec::new();
    drain(transformer.transform(VecProducer::new(words).produce()), |v| seen.push(v)).await;
    assert_eq!(seen, vec!["a", "b", "c", "a", "b"]);
  }

  proptest! {
    #[test]
    fn test_no_consecutive_duplicates(data in prop::collection::vec(0u8..4, 0..60)) {
      let mut expected = data.clone();
      expected.dedup();

      let mut transformer = RemoveDuplicatesTransformer::new();
      let stream = transformer.transform(VecProducer::new(data).produce());
      let mut delivered = Vec::new();
      tokio_test::block_on(drain(stream, |v| delivered.push(v)));
      prop_assert!(delivered.windows(2).all(|pair| pair[0] != pair[1]));
      prop_assert_eq!(delivered, expected);
    }
  }
}
