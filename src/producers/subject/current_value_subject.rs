use super::SubjectError;
use super::state::SubjectState;
use crate::completion::{BoxedStream, Completion};
use crate::error::StreamError;
use crate::output::Output;
use crate::producer::{Producer, ProducerConfig};
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

struct Current<T> {
  subscribers: SubjectState<T>,
  value: T,
}

/// A subject that remembers the latest value.
///
/// New subscribers immediately receive the current value, then everything
/// sent afterwards. Sending replaces the current value. Clones share both the
/// value and the subscribers.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use streamweave_primer::producer::Producer;
/// use streamweave_primer::producers::CurrentValueSubject;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut subject = CurrentValueSubject::new("ready");
/// subject.send("set").unwrap();
/// let stream = subject.produce();
/// subject.send("go").unwrap();
/// subject.finish().unwrap();
/// let seen: Vec<&str> = stream.map(|e| e.unwrap()).collect().await;
/// assert_eq!(seen, vec!["set", "go"]);
/// # }
/// ```
#[derive(Clone)]
pub struct CurrentValueSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  current: Arc<Mutex<Current<T>>>,
  /// Configuration for the producer.
  pub config: ProducerConfig,
}

impl<T> CurrentValueSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// A live subject holding `initial`.
  pub fn new(initial: T) -> Self {
    Self {
      current: Arc::new(Mutex::new(Current {
        subscribers: SubjectState::new(),
        value: initial,
      })),
      config: ProducerConfig::default(),
    }
  }

  fn lock(&self) -> MutexGuard<'_, Current<T>> {
    self.current.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// The current value.
  pub fn value(&self) -> T {
    self.lock().value.clone()
  }

  /// Replaces the current value and delivers it to every subscriber.
  pub fn send(&self, value: T) -> Result<(), SubjectError> {
    let mut current = self.lock();
    let delivered = current.subscribers.broadcast(&value)?;
    trace!(subject = %self.component_info().name, ?value, delivered, "send");
    current.value = value;
    Ok(())
  }

  /// Terminates every subscriber with success.
  pub fn finish(&self) -> Result<(), SubjectError> {
    self.lock().subscribers.terminate(Completion::Finished)?;
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
    self.lock().subscribers.terminate(Completion::Failed(failure))?;
    debug!(subject = %self.component_info().name, error = %description, "failed");
    Ok(())
  }

  /// Number of subscribers still listening.
  pub fn subscriber_count(&self) -> usize {
    self.lock().subscribers.subscriber_count()
  }

  /// Returns `true` once a terminal signal was sent.
  pub fn is_terminated(&self) -> bool {
    self.lock().subscribers.is_terminated()
  }
}

impl<T> std::fmt::Debug for CurrentValueSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CurrentValueSubject")
      .field("value", &self.value())
      .field("subscribers", &self.subscriber_count())
      .field("config", &self.config)
      .finish()
  }
}

impl<T> Output for CurrentValueSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Producer for CurrentValueSubject<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn produce(&mut self) -> Self::OutputStream {
    let mut current = self.lock();
    let Current { subscribers, value } = &mut *current;
    subscribers.subscribe(Some(value))
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
  use crate::completion::drain;
  use crate::error::StringError;

  #[tokio::test]
  async fn test_new_subscriber_gets_current_value_first() {
    let mut subject = CurrentValueSubject::new(0);
    let early = subject.produce();
    subject.send(1).unwrap();
    let late = subject.produce();
    subject.send(2).unwrap();
    subject.finish().unwrap();

    let (mut a, mut b) = (Vec::new(), Vec::new());
    drain(early, |v| a.push(v)).await;
    drain(late, |v| b.push(v)).await;
    assert_eq!(a, vec![0, 1, 2]);
    assert_eq!(b, vec![1, 2]);
    assert_eq!(subject.value(), 2);
  }

  #[tokio::test]
  async fn test_value_survives_termination() {
    let mut subject = CurrentValueSubject::new("idle");
    subject.send("dealing").unwrap();
    subject.fail(StringError("table closed".to_string())).unwrap();

    assert_eq!(subject.send("again"), Err(SubjectError::Terminated));
    assert_eq!(subject.value(), "dealing");

    // late subscribers only get the terminal signal
    let mut seen = Vec::new();
    let completion = drain(subject.produce(), |v| seen.push(v)).await;
    assert!(seen.is_empty());
    assert_eq!(completion.to_string(), "failure(table closed)");
  }

  #[tokio::test]
  async fn test_fail_after_finish_is_rejected() {
    let mut subject = CurrentValueSubject::new(1);
    subject.finish().unwrap();
    assert_eq!(
      subject.fail(StringError("too late".to_string())),
      Err(SubjectError::Terminated)
    );
    assert!(drain(subject.produce(), |_| {}).await.is_finished());
  }

  #[test]
  fn test_clones_share_value() {
    let subject = CurrentValueSubject::new(5);
    let clone = subject.clone();
    clone.send(6).unwrap();
    assert_eq!(subject.value(), 6);
  }
}
