//! Cancellable subscriptions.
//!
//! [`Subscription::spawn`] attaches a consumer to a stream on a background
//! tokio task. Cancelling (explicitly, or by dropping the handle) tears the
//! relationship down: the consumer's in-flight `consume` future is dropped and
//! it sees neither further values nor a terminal signal.

use crate::completion::Completion;
use crate::consumer::Consumer;
use crate::error::{ComponentInfo, ErrorContext, StreamError};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Handle to a consumer running on its own task.
///
/// Dropping an un-joined `Subscription` cancels it.
#[derive(Debug)]
pub struct Subscription {
  name: String,
  token: CancellationToken,
  handle: Option<JoinHandle<Completion>>,
}

impl Subscription {
  /// Runs `consumer` over `stream` on a new task.
  ///
  /// # Panics
  ///
  /// Panics when called outside a tokio runtime.
  pub fn spawn<C>(mut consumer: C, stream: C::InputStream) -> Self
  where
    C: Consumer + Send + 'static,
  {
    let name = consumer.component_info().name;
    let token = CancellationToken::new();
    let cancelled = token.clone();
    let task_name = name.clone();
    let handle = tokio::spawn(async move {
      trace!(subscription = %task_name, "attached");
      tokio::select! {
        biased;
        _ = cancelled.cancelled() => {
          debug!(subscription = %task_name, "cancelled");
          Completion::Cancelled
        }
        completion = consumer.consume(stream) => completion,
      }
    });
    Self {
      name,
      token,
      handle: Some(handle),
    }
  }

  /// The name of the attached consumer.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Tears the subscription down.
  pub fn cancel(&self) {
    self.token.cancel();
  }

  /// Returns `true` once [`Subscription::cancel`] has been called.
  pub fn is_cancelled(&self) -> bool {
    self.token.is_cancelled()
  }

  /// Returns `true` when the consumer task has ended.
  pub fn is_finished(&self) -> bool {
    self.handle.as_ref().is_none_or(|handle| handle.is_finished())
  }

  /// Keeps this subscription alive inside `set`.
  pub fn store_in(self, set: &mut SubscriptionSet) {
    set.insert(self);
  }

  /// Waits for the consumer to end and returns how it ended.
  pub async fn join(mut self) -> Completion {
    let Some(handle) = self.handle.take() else {
      return Completion::Cancelled;
    };
    match handle.await {
      Ok(completion) => completion,
      Err(error) => {
        let component = ComponentInfo::new(
          self.name.clone(),
          std::any::type_name::<Self>().to_string(),
        );
        Completion::Failed(StreamError::new(error, ErrorContext::default(), component))
      }
    }
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if self.handle.is_some() {
      self.token.cancel();
    }
  }
}

/// A group of subscriptions cancelled together.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
  subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
  /// An empty set.
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `subscription`.
  pub fn insert(&mut self, subscription: Subscription) {
    self.subscriptions.push(subscription);
  }

  /// Number of subscriptions held.
  pub fn len(&self) -> usize {
    self.subscriptions.len()
  }

  /// Returns `true` when the set holds nothing.
  pub fn is_empty(&self) -> bool {
    self.subscriptions.is_empty()
  }

  /// Cancels every subscription in the set.
  pub fn cancel_all(&self) {
    for subscription in &self.subscriptions {
      subscription.cancel();
    }
  }

  /// Waits for every subscription, in insertion order.
  pub async fn join_all(mut self) -> Vec<Completion> {
    let mut completions = Vec::with_capacity(self.subscriptions.len());
    for subscription in self.subscriptions.drain(..) {
      completions.push(subscription.join().await);
    }
    completions
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::completion::BoxedStream;
  use crate::consumers::VecConsumer;
  use crate::producer::Producer;
  use crate::producers::{PassthroughSubject, VecProducer};
  use std::time::Duration;

  #[tokio::test]
  async fn test_join_reports_completion() {
    let stream = VecProducer::new(vec![1, 2, 3]).produce();
    let subscription = Subscription::spawn(VecConsumer::new(), stream);
    assert!(subscription.join().await.is_finished());
  }

  #[tokio::test]
  async fn test_cancel_before_terminal_signal() {
    let mut subject = PassthroughSubject::<i32>::new();
    let stream: BoxedStream<i32> = subject.produce();
    let subscription = Subscription::spawn(VecConsumer::new(), stream);

    subject.send(1).unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    subscription.cancel();
    assert!(subscription.is_cancelled());
    subject.finish().unwrap();

    assert!(subscription.join().await.is_cancelled());
  }

  #[tokio::test]
  async fn test_drop_cancels() {
    let mut subject = PassthroughSubject::<i32>::new();
    let subscription = Subscription::spawn(VecConsumer::new(), subject.produce());
    tokio::time::sleep(Duration::from_millis(5)).await;
    assert_eq!(subject.subscriber_count(), 1);

    drop(subscription);
    tokio::time::sleep(Duration::from_millis(5)).await;
    // the receiver went away with the task
    subject.send(1).unwrap();
    assert_eq!(subject.subscriber_count(), 0);
  }

  #[tokio::test]
  async fn test_set_cancels_all() {
    let mut subject = PassthroughSubject::<i32>::new();
    let mut set = SubscriptionSet::new();
    Subscription::spawn(VecConsumer::new(), subject.produce()).store_in(&mut set);
    Subscription::spawn(VecConsumer::new(), subject.produce()).store_in(&mut set);
    assert_eq!(set.len(), 2);

    set.cancel_all();
    let completions = set.join_all().await;
    assert!(completions.iter().all(Completion::is_cancelled));
  }
}
