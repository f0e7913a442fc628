use super::SubjectError;
use super::state::SubjectState;
use crate::completion::{BoxedStream, Completion};
use crate::error::StreamError;
use crate::output::Output;
use crate::producer::{Producer, ProducerConfig};
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// A subject that broadcasts whatever is sent to it.
///
/// Each call to `produce` registers a new subscriber that sees only what is
/// sent afterwards. Clones share the same subscribers.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use streamweave_primer::producer::Producer;
/// use streamweave_primer::producers::PassthroughSubject;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut subject = PassthroughSubject::new();
/// subject.send("ignored").unwrap();
/// let stream = subject.produce();
/// subject.send("hello").unwrap();
/// subject.finish().unwrap();
/// let seen: Vec<&str> = stream.map(|e| e.unwrap()).collect().await;
/// assert_eq!(seen, vec!["hello"]);
/// # }
/// ```
#[derive(Clone)]
pub struct PassthroughSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  state: Arc<Mutex<SubjectState<T>>>,
  /// Configuration for the producer.
  pub config: ProducerConfig,
}

impl<T> PassthroughSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// A live subject with no subscribers.
  pub fn new() -> Self {
    Self {
      state: Arc::new(Mutex::new(SubjectState::new())),
      config: ProducerConfig::default(),
    }
  }

  fn lock(&self) -> MutexGuard<'_, SubjectState<T>> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Delivers `value` to every current subscriber.
  pub fn send(&self, value: T) -> Result<(), SubjectError> {
    let delivered = self.lock().broadcast(&value)?;
    trace!(subject = %self.component_info().name, ?value, delivered, "send");
    Ok(())
  }

  /// Terminates every subscriber with success.
  pub fn finish(&self) -> Result<(), SubjectError> {
    self.lock().terminate(Completion::Finished)?;
    debug!(subject = %self.component_info().name, "finished");
    Ok(())
  }

  /// Terminates every subscriber with `error`.
  pub fn fail<E>(&self, error: E) -> Result<(), SubjectError>
  where
    E: Error + Send + Sync + 'static,
  {
    let failure = StreamError::new(error, self.create_error_context(None), self.component_info());
    let description = failure.to_string();
    self.lock().terminate(Completion::Failed(failure))?;
    debug!(subject = %self.component_info().name, error = %description, "failed");
    Ok(())
  }

  /// Number of subscribers still listening.
  pub fn subscriber_count(&self) -> usize {
    self.lock().subscriber_count()
  }

  /// Returns `true` once a terminal signal was sent.
  pub fn is_terminated(&self) -> bool {
    self.lock().is_terminated()
  }
}

impl<T> Default for PassthroughSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T> std::fmt::Debug for PassthroughSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PassthroughSubject")
      .field("subscribers", &self.subscriber_count())
      .field("terminated", &self.is_terminated())
      .field("config", &self.config)
      .finish()
  }
}

impl<T> Output for PassthroughSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Producer for PassthroughSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn produce(&mut self) -> Self::OutputStream {
    self.lock().subscribe(None)
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
