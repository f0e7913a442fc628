//! Sink consumer.
//!
//! The general-purpose consumer: hands every value to one closure and the
//! terminal signal to another.

use crate::completion::{BoxedStream, Completion, drain};
use crate::consumer::{Consumer, ConsumerConfig};
use crate::input::Input;
use async_trait::async_trait;
use std::marker::PhantomData;
use tracing::debug;

/// A consumer built from two closures.
///
/// # Example
///
/// ```rust
/// use streamweave_primer::consumer::Consumer;
/// use streamweave_primer::consumers::SinkConsumer;
///
/// # async fn example() {
/// let mut consumer = SinkConsumer::new(
///   |value: i32| println!("value {}", value),
///   |completion| println!("done: {}", completion),
/// );
/// let input = Box::pin(futures::stream::iter(vec![Ok(1), Ok(2)]));
/// assert!(consumer.consume(input).await.is_finished());
/// # }
/// ```
pub struct SinkConsumer<T, V, C>
where
  T: Send + 'static,
  V: FnMut(T) + Send + 'static,
  C: FnMut(&Completion) + Send + 'static,
{
  receive_value: V,
  receive_completion: C,
  /// Configuration for the consumer.
  pub config: ConsumerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T, V, C> SinkConsumer<T, V, C>
where
  T: Send + 'static,
  V: FnMut(T) + Send + 'static,
  C: FnMut(&Completion) + Send + 'static,
{
  /// Creates a new `SinkConsumer`.
  pub fn new(receive_value: V, receive_completion: C) -> Self {
    Self {
      receive_value,
      receive_completion,
      config: ConsumerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T, V, C> Input for SinkConsumer<T, V, C>
where
  T: Send + 'static,
  V: FnMut(T) + Send + 'static,
  C: FnMut(&Completion) + Send + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

#[async_trait]
impl<T, V, C> Consumer for SinkConsumer<T, V, C>
where
  T: Send + 'static,
  V: FnMut(T) + Send + 'static,
  C: FnMut(&Completion) + Send + 'static,
{
  async fn consume(&mut self, stream: Self::InputStream) -> Completion {
    let completion = drain(stream, &mut self.receive_value).await;
    debug!(consumer = %self.component_info().name, %completion, "completed");
    (self.receive_completion)(&completion);
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
  use std::sync::{Arc, Mutex};

  #[tokio::test]
  async fn test_closures_see_values_then_completion() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let (on_value, on_completion) = (Arc::clone(&events), Arc::clone(&events));
    let mut consumer = SinkConsumer::new(
      move |v: i32| on_value.lock().unwrap().push(format!("value {}", v)),
      move |c: &Completion| on_completion.lock().unwrap().push(format!("completion {}", c)),
    );
    consumer.consume(VecProducer::new(vec![1, 2]).produce()).await;
    assert_eq!(
      *events.lock().unwrap(),
      vec!["value 1", "value 2", "completion finished"]
    );
  }

  #[tokio::test]
  async fn test_failure_reaches_completion_closure() {
    let failure = Arc::new(Mutex::new(None));
    let seen = Arc::clone(&failure);
    let mut consumer = SinkConsumer::new(
      |_: u8| panic!("no value expected"),
      move |c: &Completion| *seen.lock().unwrap() = c.error().map(|e| e.source.to_string()),
    );
    consumer
      .consume(FailProducer::new(StringError("bust".to_string())).produce())
      .await;
    assert_eq!(failure.lock().unwrap().as_deref(), Some("bust"));
  }
}
