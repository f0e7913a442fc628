use super::vec_producer::VecProducer;
use crate::completion::BoxedStream;
use crate::output::Output;
use crate::producer::{Producer, ProducerConfig};

impl<T> Output for VecProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Producer for VecProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn produce(&mut self) -> Self::OutputStream {
    Box::pin(futures::stream::iter(self.data.clone().into_iter().map(Ok)))
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
  use proptest::prelude::*;

  async fn collect(producer: &mut VecProducer<i32>) -> Vec<i32> {
    producer.produce().map(|e| e.unwrap()).collect().await
  }

  #[tokio::test]
  async fn test_vec_producer_empty() {
    let mut producer = VecProducer::<i32>::new(vec![]);
    assert!(collect(&mut producer).await.is_empty());
  }

  #[tokio::test]
  async fn test_vec_producer_replays_on_each_produce() {
    let mut producer: VecProducer<i32> = (1..=3).collect();
    assert_eq!(collect(&mut producer).await, vec![1, 2, 3]);
    assert_eq!(collect(&mut producer).await, vec![1, 2, 3]);
  }

  #[test]
  fn test_vec_producer_name() {
    let producer = VecProducer::new(vec![1]).with_name("letters".to_string());
    assert_eq!(producer.config().name(), Some("letters".to_string()));
  }

  proptest! {
    #[test]
    fn test_vec_producer_preserves_order(data in prop::collection::vec(any::<i32>(), 0..100)) {
      let mut producer = VecProducer::new(data.clone());
      let produced = tokio_test::block_on(collect(&mut producer));
      prop_assert_eq!(produced, data);
    }
  }
}
