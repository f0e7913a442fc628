//! # Consumer Trait
//!
//! Consumers are the end of a pipeline. A consumer pulls its input stream,
//! observes values and exactly one terminal signal, and reports how the
//! relationship ended as a [`Completion`].
//!
//! ## Example
//!
//! ```rust
//! use streamweave_primer::consumer::Consumer;
//! use streamweave_primer::consumers::VecConsumer;
//!
//! # async fn example() {
//! let mut consumer = VecConsumer::<i32>::new();
//! let input = Box::pin(futures::stream::iter(vec![Ok(1), Ok(2), Ok(3)]));
//! let completion = consumer.consume(input).await;
//! assert!(completion.is_finished());
//! assert_eq!(consumer.values(), &[1, 2, 3]);
//! # }
//! ```

use crate::completion::Completion;
use crate::error::{ComponentInfo, ErrorContext};
use crate::input::Input;
use async_trait::async_trait;

/// Configuration for a consumer component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumerConfig {
  /// The name of this consumer component.
  pub name: String,
}

impl ConsumerConfig {
  /// Sets the name for this consumer configuration.
  #[must_use]
  pub fn with_name(mut self, name: String) -> Self {
    self.name = name;
    self
  }

  /// Returns the current name.
  pub fn name(&self) -> &str {
    &self.name
  }
}

/// Trait for components that consume data streams.
#[async_trait]
pub trait Consumer: Input {
  /// Consumes `stream` until its terminal signal, or until the consumer
  /// decides to stop, and reports how it ended.
  async fn consume(&mut self, stream: Self::InputStream) -> Completion;

  /// Returns a copy of this consumer with `config` applied.
  #[must_use]
  fn with_config(&self, config: ConsumerConfig) -> Self
  where
    Self: Sized + Clone,
  {
    let mut this = self.clone();
    this.set_config(config);
    this
  }

  /// Sets the configuration for this consumer.
  fn set_config(&mut self, config: ConsumerConfig) {
    self.set_config_impl(config);
  }

  /// Returns the current configuration.
  fn config(&self) -> &ConsumerConfig {
    self.get_config_impl()
  }

  /// Returns the current configuration mutably.
  fn config_mut(&mut self) -> &mut ConsumerConfig {
    self.get_config_mut_impl()
  }

  /// Names this consumer.
  #[must_use]
  fn with_name(mut self, name: String) -> Self
  where
    Self: Sized,
  {
    self.config_mut().name = name;
    self
  }

  /// Builds the error context for a failure on `item`.
  fn create_error_context(&self, item: Option<String>) -> ErrorContext {
    let info = self.component_info();
    ErrorContext {
      timestamp: chrono::Utc::now(),
      item,
      component_name: info.name,
      component_type: info.type_name,
    }
  }

  /// Returns the name and type of this consumer.
  fn component_info(&self) -> ComponentInfo {
    let name = match self.config().name() {
      "" => "consumer".to_string(),
      name => name.to_string(),
    };
    ComponentInfo {
      name,
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }

  /// Stores `config`. Implementors own the storage.
  fn set_config_impl(&mut self, config: ConsumerConfig);

  /// Reads the stored configuration.
  fn get_config_impl(&self) -> &ConsumerConfig;

  /// Reads the stored configuration mutably.
  fn get_config_mut_impl(&mut self) -> &mut ConsumerConfig;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::completion::{BoxedStream, drain};
  use crate::error::{StreamError, StringError};
  use futures::stream;

  #[derive(Clone)]
  struct SumConsumer {
    total: i64,
    config: ConsumerConfig,
  }

  impl Input for SumConsumer {
    type Input = i64;
    type InputStream = BoxedStream<i64>;
  }

  #[async_trait]
  impl Consumer for SumConsumer {
    async fn consume(&mut self, stream: Self::InputStream) -> Completion {
      let total = &mut self.total;
      drain(stream, |v| *total += v).await
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

  fn sum() -> SumConsumer {
    SumConsumer {
      total: 0,
      config: ConsumerConfig::default(),
    }
  }

  #[tokio::test]
  async fn test_consume_to_finish() {
    let mut consumer = sum();
    let completion = consumer
      .consume(Box::pin(stream::iter(vec![Ok(1), Ok(2), Ok(3)])))
      .await;
    assert!(completion.is_finished());
    assert_eq!(consumer.total, 6);
  }

  #[tokio::test]
  async fn test_consume_to_failure() {
    let mut consumer = sum();
    let failure = StreamError::new(
      StringError("overflow".to_string()),
      ErrorContext::default(),
      ComponentInfo::default(),
    );
    let completion = consumer
      .consume(Box::pin(stream::iter(vec![Ok(5), Err(failure)])))
      .await;
    assert_eq!(completion.to_string(), "failure(overflow)");
    assert_eq!(consumer.total, 5);
  }

  #[test]
  fn test_component_info_falls_back_to_default_name() {
    assert_eq!(sum().component_info().name, "consumer");
    let named = sum().with_name("totals".to_string());
    assert_eq!(named.component_info().name, "totals");
    let configured = sum().with_config(ConsumerConfig::default().with_name("cfg".to_string()));
    assert_eq!(configured.config().name(), "cfg");
  }
}
