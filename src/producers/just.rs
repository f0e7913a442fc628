//! Producer of exactly one value.

use crate::completion::BoxedStream;
use crate::output::Output;
use crate::producer::{Producer, ProducerConfig};

/// Emits one value, then finishes.
#[derive(Debug, Clone)]
pub struct JustProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The value to emit.
  pub value: T,
  /// Configuration for the producer.
  pub config: ProducerConfig,
}

impl<T> JustProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `JustProducer` for `value`.
  pub fn new(value: T) -> Self {
    Self {
      value,
      config: ProducerConfig::default(),
    }
  }
}

impl<T> Output for JustProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Producer for JustProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn produce(&mut self) -> Self::OutputStream {
    Box::pin(futures::stream::iter(std::iter::once(Ok(self.value.clone()))))
  }

  fn set_config_impl(&mut self, config: ProducerConfig) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ProducerConfig {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ProducerConfig {
    &mut self.config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::StreamExt;

  #[tokio::test]
  async fn test_just_emits_once() {
    let mut producer = JustProducer::new("hello".to_string());
    let emissions: Vec<_> = producer.produce().collect().await;
    assert_eq!(emissions.len(), 1);
    assert_eq!(emissions[0].as_ref().unwrap(), "hello");
  }
}
