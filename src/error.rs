//! # Error Handling
//!
//! Errors in a pipeline travel as the terminal failure of a stream: every
//! emission is a `Result<T, StreamError>` and the first `Err` ends it.
//!
//! ## Core Types
//!
//! - **ErrorAction**: What a component does with one failure (Stop, Skip, Retry)
//! - **ErrorStrategy**: The configured policy that picks an action (Stop, Skip, Retry, Custom)
//! - **StreamError**: The failure itself, with the domain error as its source
//! - **ErrorContext**: When the failure happened and on which item
//! - **ComponentInfo**: Which component raised it
//!
//! ## Error Strategies
//!
//! - **Stop**: Deliver the failure downstream and end the stream (default)
//! - **Skip**: Drop the offending item and keep going
//! - **Retry(n)**: Re-run the operation up to n times before stopping
//! - **Custom**: A user-supplied handler decides per failure
//!
//! ## Example
//!
//! ```rust
//! use streamweave_primer::error::{ComponentInfo, ErrorContext, StreamError, StringError};
//!
//! let error = StreamError::new(
//!   StringError("hand exceeds point limit".to_string()),
//!   ErrorContext::default(),
//!   ComponentInfo::new("dealer".to_string(), "TryMapTransformer".to_string()),
//! );
//! assert!(error.downcast_ref::<StringError>().is_some());
//! ```

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Action to take when a component hits an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorAction {
  /// Deliver the error as the terminal failure.
  Stop,
  /// Drop the item that caused the error and continue.
  Skip,
  /// Run the failed operation again.
  Retry,
}

type CustomErrorHandler = Arc<dyn Fn(&StreamError) -> ErrorAction + Send + Sync>;

/// Strategy for handling errors in pipeline components.
///
/// # Example
///
/// ```rust
/// use streamweave_primer::error::{ErrorAction, ErrorStrategy};
///
/// let strategy = ErrorStrategy::new_custom(|error| {
///   if error.retries < 2 {
///     ErrorAction::Retry
///   } else {
///     ErrorAction::Skip
///   }
/// });
/// # let _ = strategy;
/// ```
pub enum ErrorStrategy {
  /// Stop on the first error. This is the default.
  Stop,
  /// Skip items that cause errors.
  Skip,
  /// Retry up to the given number of times, then stop.
  Retry(usize),
  /// Let a handler decide.
  Custom(CustomErrorHandler),
}

impl ErrorStrategy {
  /// Creates a custom error handling strategy with a user-defined handler function.
  pub fn new_custom<F>(f: F) -> Self
  where
    F: Fn(&StreamError) -> ErrorAction + Send + Sync + 'static,
  {
    Self::Custom(Arc::new(f))
  }

  /// Picks the action for `error` under this strategy.
  pub fn decide(&self, error: &StreamError) -> ErrorAction {
    match self {
      ErrorStrategy::Stop => ErrorAction::Stop,
      ErrorStrategy::Skip => ErrorAction::Skip,
      ErrorStrategy::Retry(n) if error.retries < *n => ErrorAction::Retry,
      ErrorStrategy::Retry(_) => ErrorAction::Stop,
      ErrorStrategy::Custom(handler) => handler(error),
    }
  }
}

impl Default for ErrorStrategy {
  fn default() -> Self {
    ErrorStrategy::Stop
  }
}

impl Clone for ErrorStrategy {
  fn clone(&self) -> Self {
    match self {
      ErrorStrategy::Stop => ErrorStrategy::Stop,
      ErrorStrategy::Skip => ErrorStrategy::Skip,
      ErrorStrategy::Retry(n) => ErrorStrategy::Retry(*n),
      ErrorStrategy::Custom(handler) => ErrorStrategy::Custom(Arc::clone(handler)),
    }
  }
}

impl fmt::Debug for ErrorStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ErrorStrategy::Stop => write!(f, "ErrorStrategy::Stop"),
      ErrorStrategy::Skip => write!(f, "ErrorStrategy::Skip"),
      ErrorStrategy::Retry(n) => write!(f, "ErrorStrategy::Retry({})", n),
      ErrorStrategy::Custom(_) => write!(f, "ErrorStrategy::Custom"),
    }
  }
}

impl PartialEq for ErrorStrategy {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (ErrorStrategy::Stop, ErrorStrategy::Stop) => true,
      (ErrorStrategy::Skip, ErrorStrategy::Skip) => true,
      (ErrorStrategy::Retry(n1), ErrorStrategy::Retry(n2)) => n1 == n2,
      (ErrorStrategy::Custom(_), ErrorStrategy::Custom(_)) => true,
      _ => false,
    }
  }
}

/// The terminal failure of a stream.
///
/// The domain error is kept behind an `Arc` so that one failure can be handed
/// to every subscriber of a subject or a future.
#[derive(Debug, Clone)]
pub struct StreamError {
  /// The original error that occurred.
  pub source: Arc<dyn Error + Send + Sync>,
  /// Context about when and where the error occurred.
  pub context: ErrorContext,
  /// Information about the component that encountered the error.
  pub component: ComponentInfo,
  /// Number of times the failed operation has been retried.
  pub retries: usize,
}

impl StreamError {
  /// Creates a new `StreamError` with `retries` set to 0.
  pub fn new<E>(source: E, context: ErrorContext, component: ComponentInfo) -> Self
  where
    E: Error + Send + Sync + 'static,
  {
    Self::from_shared(Arc::new(source), context, component)
  }

  /// Creates a `StreamError` around an already shared source error.
  pub fn from_shared(
    source: Arc<dyn Error + Send + Sync>,
    context: ErrorContext,
    component: ComponentInfo,
  ) -> Self {
    Self {
      source,
      context,
      component,
      retries: 0,
    }
  }

  /// Returns the source error as `E` if that is its concrete type.
  pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
    self.source.downcast_ref::<E>()
  }
}

impl fmt::Display for StreamError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Error in {} ({}): {}",
      self.component.name, self.component.type_name, self.source
    )
  }
}

impl Error for StreamError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    Some(self.source.as_ref())
  }
}

/// An error carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct StringError(pub String);

/// Context information about when and where an error occurred.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
  /// The timestamp when the error occurred.
  pub timestamp: chrono::DateTime<chrono::Utc>,
  /// Debug rendering of the item being processed, if any.
  pub item: Option<String>,
  /// The name of the component that encountered the error.
  pub component_name: String,
  /// The type of the component that encountered the error.
  pub component_type: String,
}

impl ErrorContext {
  /// Context for a failure raised while `component` processed `item`.
  pub fn for_item<T: fmt::Debug>(item: &T, component: &ComponentInfo) -> Self {
    Self {
      timestamp: chrono::Utc::now(),
      item: Some(format!("{:?}", item)),
      component_name: component.name.clone(),
      component_type: component.type_name.clone(),
    }
  }
}

impl Default for ErrorContext {
  fn default() -> Self {
    Self {
      timestamp: chrono::Utc::now(),
      item: None,
      component_name: "default".to_string(),
      component_type: "default".to_string(),
    }
  }
}

/// Name and type of a pipeline component, used in logs and errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentInfo {
  /// The name of the component.
  pub name: String,
  /// The type name of the component.
  pub type_name: String,
}

impl Default for ComponentInfo {
  fn default() -> Self {
    Self {
      name: "default".to_string(),
      type_name: "default".to_string(),
    }
  }
}

impl ComponentInfo {
  /// Creates a new `ComponentInfo` with the given name and type name.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}
