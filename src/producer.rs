//! # Producer Trait
//!
//! Producers are where a pipeline starts. A producer hands out a fresh stream
//! each time [`Producer::produce`] is called; what "fresh" means depends on
//! the producer. A [`VecProducer`](crate::producers::VecProducer) replays its
//! items, a subject only delivers what is sent after the call, and a
//! [`FutureProducer`](crate::producers::FutureProducer) replays its single
//! result.
//!
//! ## Example
//!
//! ```rust
//! use futures::StreamExt;
//! use streamweave_primer::producer::Producer;
//! use streamweave_primer::producers::VecProducer;
//!
//! # async fn example() {
//! let mut producer = VecProducer::new(vec![1, 2, 3]).with_name("numbers".to_string());
//! let values: Vec<i32> = producer.produce().map(|e| e.unwrap()).collect().await;
//! assert_eq!(values, vec![1, 2, 3]);
//! # }
//! ```

use crate::error::{ComponentInfo, ErrorContext};
use crate::output::Output;

/// Configuration for a producer component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProducerConfig {
  /// Optional name for identifying this producer in logs and errors.
  pub name: Option<String>,
}

impl ProducerConfig {
  /// Sets the name for this producer configuration.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Returns the current name, if set.
  pub fn name(&self) -> Option<String> {
    self.name.clone()
  }
}

/// Trait for components that produce data streams.
pub trait Producer: Output {
  /// Produces a stream of emissions.
  fn produce(&mut self) -> Self::OutputStream;

  /// Returns a copy of this producer with `config` applied.
  #[must_use]
  fn with_config(&self, config: ProducerConfig) -> Self
  where
    Self: Sized + Clone,
  {
    let mut this = self.clone();
    this.set_config(config);
    this
  }

  /// Sets the configuration for this producer.
  fn set_config(&mut self, config: ProducerConfig) {
    self.set_config_impl(config);
  }

  /// Returns the current configuration.
  fn config(&self) -> &ProducerConfig {
    self.get_config_impl()
  }

  /// Returns the current configuration mutably.
  fn config_mut(&mut self) -> &mut ProducerConfig {
    self.get_config_mut_impl()
  }

  /// Names this producer.
  #[must_use]
  fn with_name(mut self, name: String) -> Self
  where
    Self: Sized,
  {
    self.config_mut().name = Some(name);
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

  /// Returns the name and type of this producer.
  fn component_info(&self) -> ComponentInfo {
    ComponentInfo {
      name: self
        .config()
        .name()
        .unwrap_or_else(|| "producer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }

  /// Stores `config`. Implementors own the storage.
  fn set_config_impl(&mut self, config: ProducerConfig);

  /// Reads the stored configuration.
  fn get_config_impl(&self) -> &ProducerConfig;

  /// Reads the stored configuration mutably.
  fn get_config_mut_impl(&mut self) -> &mut ProducerConfig;
}
