use super::vec_consumer::VecConsumer;
use crate::completion::{BoxedStream, Completion, drain};
use crate::consumer::{Consumer, ConsumerConfig};
use crate::input::Input;
use async_trait::async_trait;
use tracing::debug;

impl<T> Input for VecConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

#[async_trait]
impl<T> Consumer for VecConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  async fn consume(&mut self, stream: Self::InputStream) -> Completion {
    let record = self.clone();
    let completion = drain(stream, |value| record.lock().values.push(value)).await;
    debug!(
      consumer = %self.component_info().name,
      values = self.lock().values.len(),
      %completion,
      "completed"
    );
    self.lock().completion = Some(completion.clone());
    completion
  }

  fn set_config_impl(&mut self, config: ConsumerConfig) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ConsumerConfig {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ConsumerConfig {
    &mut self.config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::StringError;
  use crate::producer::Producer;
  use crate::producers::{FailProducer, VecProducer};
  use proptest::prelude::*;

  #[tokio::test]
  async fn test_records_values_and_completion() {
    let mut consumer = VecConsumer::new();
    assert!(consumer.completion().is_none());
    let completion = consumer.consume(VecProducer::new(vec!['a', 'b']).produce()).await;
    assert!(completion.is_finished());
    assert_eq!(consumer.values(), vec!['a', 'b']);
    assert!(consumer.completion().is_some_and(|c| c.is_finished()));
  }

  #[tokio::test]
  async fn test_clone_observes_the_same_record() {
    let consumer = VecConsumer::<u8>::new();
    let mut attached = consumer.clone();
    attached
      .consume(FailProducer::new(StringError("misdeal".to_string())).produce())
      .await;
    assert!(consumer.values().is_empty());
    assert_eq!(
      consumer.completion().map(|c| c.to_string()),
      Some("failure(misdeal)".to_string())
    );
    assert!(consumer.take_values().is_empty());
  }

  proptest! {
    #[test]
    fn test_receives_everything_in_order(data in prop::collection::vec(any::<i32>(), 0..50)) {
      let mut consumer = VecConsumer::with_capacity(data.len());
      tokio_test::block_on(consumer.consume(VecProducer::new(data.clone()).produce()));
      prop_assert_eq!(consumer.values(), data);
    }
  }
}
