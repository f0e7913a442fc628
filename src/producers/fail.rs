//! Producer that fails without emitting.

use crate::completion::BoxedStream;
use crate::error::StreamError;
use crate::output::Output;
use crate::producer::{Producer, ProducerConfig};
use std::error::Error;
use std::marker::PhantomData;
use std::sync::Arc;

/// Emits no value and terminates with a fixed failure.
pub struct FailProducer<T> {
  error: Arc<dyn Error + Send + Sync>,
  /// Configuration for the producer.
  pub config: ProducerConfig,
  _phantom: PhantomData<fn() -> T>,
}

impl<T> FailProducer<T> {
  /// Creates a new `FailProducer` that fails with `error`.
  pub fn new<E>(error: E) -> Self
  where
    E: Error + Send + Sync + 'static,
  {
    Self {
      error: Arc::new(error),
      config: ProducerConfig::default(),
      _phantom: PhantomData,
    }
  }
}

impl<T> Clone for FailProducer<T> {
  fn clone(&self) -> Self {
    Self {
      error: Arc::clone(&self.error),
      config: self.config.clone(),
      _phantom: PhantomData,
    }
  }
}

impl<T: Send + 'static> Output for FailProducer<T> {
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T: Send + 'static> Producer for FailProducer<T> {
  fn produce(&mut self) -> Self::OutputStream {
    let failure = StreamError::from_shared(
      Arc::clone(&self.error),
      self.create_error_context(None),
      self.component_info(),
    );
    Box::pin(futures::stream::iter(std::iter::once(Err::<T, StreamError>(failure))))
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
