use super::SubjectError;
use crate::completion::{BoxedStream, Completion, Emission, until_failure};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Subscriber registry shared by every subject flavour.
pub(crate) struct SubjectState<T> {
  subscribers: Vec<mpsc::UnboundedSender<Emission<T>>>,
  terminal: Option<Completion>,
}

impl<T> SubjectState<T>
where
  T: Clone + Send + 'static,
{
  pub(crate) fn new() -> Self {
    Self {
      subscribers: Vec::new(),
      terminal: None,
    }
  }

  /// Registers a subscriber, first replaying `current` if still live.
  pub(crate) fn subscribe(&mut self, current: Option<&T>) -> BoxedStream<T> {
    let (tx, rx) = mpsc::unbounded_channel();
    match &self.terminal {
      None => {
        if let Some(value) = current {
          let _ = tx.send(Ok(value.clone()));
        }
        self.subscribers.push(tx);
      }
      Some(Completion::Failed(error)) => {
        let _ = tx.send(Err(error.clone()));
      }
      Some(_) => {}
    }
    until_failure(UnboundedReceiverStream::new(rx))
  }

  /// Sends `value` to every live subscriber and returns how many got it.
  pub(crate) fn broadcast(&mut self, value: &T) -> Result<usize, SubjectError> {
    if self.terminal.is_some() {
      return Err(SubjectError::Terminated);
    }
    self
      .subscribers
      .retain(|subscriber| subscriber.send(Ok(value.clone())).is_ok());
    Ok(self.subscribers.len())
  }

  /// Delivers the terminal signal and releases every subscriber.
  pub(crate) fn terminate(&mut self, completion: Completion) -> Result<(), SubjectError> {
    if self.terminal.is_some() {
      return Err(SubjectError::Terminated);
    }
    for subscriber in self.subscribers.drain(..) {
      if let Completion::Failed(error) = &completion {
        let _ = subscriber.send(Err(error.clone()));
      }
    }
    self.terminal = Some(completion);
    Ok(())
  }

  pub(crate) fn subscriber_count(&self) -> usize {
    self.subscribers.iter().filter(|s| !s.is_closed()).count()
  }

  pub(crate) fn is_terminated(&self) -> bool {
    self.terminal.is_some()
  }
}
