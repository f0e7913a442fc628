//! # Transformer Trait
//!
//! Transformers sit between a producer and a consumer and turn one stream into
//! another: filtering, mapping, accumulating, flattening. Every built-in
//! transformer passes an upstream failure through unchanged and delivers
//! nothing after it.
//!
//! ## Example
//!
//! ```rust
//! use futures::StreamExt;
//! use streamweave_primer::transformer::Transformer;
//! use streamweave_primer::transformers::MapTransformer;
//!
//! # async fn example() {
//! let mut transformer = MapTransformer::new(|x: i32| x * 2);
//! let input = Box::pin(futures::stream::iter(vec![Ok(1), Ok(2), Ok(3)]));
//! let doubled: Vec<i32> = transformer.transform(input).map(|e| e.unwrap()).collect().await;
//! assert_eq!(doubled, vec![2, 4, 6]);
//! # }
//! ```

use crate::error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
use crate::{input::Input, output::Output};

/// Configuration for transformers, including error handling strategy and naming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformerConfig {
  /// The error handling strategy to use when errors occur.
  pub error_strategy: ErrorStrategy,
  /// Optional name for identifying this transformer in logs and errors.
  pub name: Option<String>,
}

impl TransformerConfig {
  /// Sets the error handling strategy for this transformer configuration.
  pub fn with_error_strategy(mut self, strategy: ErrorStrategy) -> Self {
    self.error_strategy = strategy;
    self
  }

  /// Sets the name for this transformer configuration.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Returns the current error handling strategy.
  pub fn error_strategy(&self) -> ErrorStrategy {
    self.error_strategy.clone()
  }

  /// Returns the current name, if set.
  pub fn name(&self) -> Option<String> {
    self.name.clone()
  }
}

/// Trait for components that transform data streams.
pub trait Transformer: Input + Output {
  /// Transforms `input` into the output stream.
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream;

  /// Returns a copy of this transformer with `config` applied.
  #[must_use]
  fn with_config(&self, config: TransformerConfig) -> Self
  where
    Self: Sized + Clone,
  {
    let mut this = self.clone();
    this.set_config(config);
    this
  }

  /// Sets the configuration for this transformer.
  fn set_config(&mut self, config: TransformerConfig) {
    self.set_config_impl(config);
  }

  /// Returns the current configuration.
  fn config(&self) -> &TransformerConfig {
    self.get_config_impl()
  }

  /// Returns the current configuration mutably.
  fn config_mut(&mut self) -> &mut TransformerConfig {
    self.get_config_mut_impl()
  }

  /// Names this transformer.
  #[must_use]
  fn with_name(mut self, name: String) -> Self
  where
    Self: Sized,
  {
    self.config_mut().name = Some(name);
    self
  }

  /// Sets the error strategy of this transformer.
  #[must_use]
  fn with_error_strategy(mut self, strategy: ErrorStrategy) -> Self
  where
    Self: Sized,
  {
    self.config_mut().error_strategy = strategy;
    self
  }

  /// Picks the action for `error` under the configured strategy.
  fn handle_error(&self, error: &StreamError) -> ErrorAction {
    self.config().error_strategy.decide(error)
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

  /// Returns the name and type of this transformer.
  fn component_info(&self) -> ComponentInfo {
    ComponentInfo {
      name: self
        .config()
        .name()
        .unwrap_or_else(|| "transformer".to_string()),
      type_name: std::any::type_name::<Self>().to_string(),
    }
  }

  /// Stores `config`. Implementors own the storage.
  fn set_config_impl(&mut self, config: TransformerConfig);

  /// Reads the stored configuration.
  fn get_config_impl(&self) -> &TransformerConfig;

  /// Reads the stored configuration mutably.
  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig;
}
