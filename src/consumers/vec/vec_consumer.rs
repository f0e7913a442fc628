use crate::completion::Completion;
use crate::consumer::ConsumerConfig;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
pub(crate) struct Recorded<T> {
  pub(crate) values: Vec<T>,
  pub(crate) completion: Option<Completion>,
}

/// A consumer that collects values into a vector.
#[derive(Debug, Clone)]
pub struct VecConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  pub(crate) record: Arc<Mutex<Recorded<T>>>,
  /// Configuration for the consumer.
  pub config: ConsumerConfig,
}

impl<T> VecConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new, empty `VecConsumer`.
  pub fn new() -> Self {
    Self::with_capacity(0)
  }

  /// Creates a new `VecConsumer` with room for `capacity` values.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      record: Arc::new(Mutex::new(Recorded {
        values: Vec::with_capacity(capacity),
        completion: None,
      })),
      config: ConsumerConfig::default(),
    }
  }

  pub(crate) fn lock(&self) -> MutexGuard<'_, Recorded<T>> {
    self.record.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// The values received so far.
  pub fn values(&self) -> Vec<T> {
    self.lock().values.clone()
  }

  /// Takes the values received so far, leaving the record empty.
  pub fn take_values(&self) -> Vec<T> {
    std::mem::take(&mut self.lock().values)
  }

  /// How the last consumed stream ended, once it has.
  pub fn completion(&self) -> Option<Completion> {
    self.lock().completion.clone()
  }
}

impl<T> Default for VecConsumer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
