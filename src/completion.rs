//! Terminal signals and the stream item type shared by every component.
//!
//! A stream in this crate yields [`Emission`]s. An `Ok` is a value, an `Err`
//! is the terminal failure, and running out of items without an `Err` is the
//! terminal success. [`until_failure`] enforces that nothing follows a failure.

use crate::error::StreamError;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

/// One stream item: a value, or the terminal failure.
pub type Emission<T> = Result<T, StreamError>;

/// The boxed stream type every built-in component consumes and produces.
pub type BoxedStream<T> = Pin<Box<dyn Stream<Item = Emission<T>> + Send>>;

/// How a consumer's relationship with its source ended.
#[derive(Debug, Clone)]
pub enum Completion {
  /// The source finished successfully.
  Finished,
  /// The source terminated with a failure.
  Failed(StreamError),
  /// The relationship was torn down before any terminal signal arrived.
  Cancelled,
}

impl Completion {
  /// Returns `true` for [`Completion::Finished`].
  pub fn is_finished(&self) -> bool {
    matches!(self, Completion::Finished)
  }

  /// Returns `true` for [`Completion::Failed`].
  pub fn is_failure(&self) -> bool {
    matches!(self, Completion::Failed(_))
  }

  /// Returns `true` for [`Completion::Cancelled`].
  pub fn is_cancelled(&self) -> bool {
    matches!(self, Completion::Cancelled)
  }

  /// The failure, if the source failed.
  pub fn error(&self) -> Option<&StreamError> {
    match self {
      Completion::Failed(error) => Some(error),
      _ => None,
    }
  }
}

impl fmt::Display for Completion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Completion::Finished => write!(f, "finished"),
      Completion::Failed(error) => write!(f, "failure({})", error.source),
      Completion::Cancelled => write!(f, "cancelled"),
    }
  }
}

/// Stream adapter that ends right after the first failure.
#[pin_project]
pub struct UntilFailure<S> {
  #[pin]
  inner: S,
  terminated: bool,
}

impl<S> UntilFailure<S> {
  /// Wraps `inner`.
  pub fn new(inner: S) -> Self {
    Self {
      inner,
      terminated: false,
    }
  }
}

impl<S, T> Stream for UntilFailure<S>
where
  S: Stream<Item = Emission<T>>,
{
  type Item = Emission<T>;

  fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
    let this = self.project();
    if *this.terminated {
      return Poll::Ready(None);
    }
    match this.inner.poll_next(cx) {
      Poll::Ready(Some(Err(error))) => {
        *this.terminated = true;
        Poll::Ready(Some(Err(error)))
      }
      Poll::Ready(None) => {
        *this.terminated = true;
        Poll::Ready(None)
      }
      other => other,
    }
  }
}

/// Boxes `stream` so that nothing is delivered after its first failure.
pub fn until_failure<S, T>(stream: S) -> BoxedStream<T>
where
  S: Stream<Item = Emission<T>> + Send + 'static,
  T: Send + 'static,
{
  Box::pin(UntilFailure::new(stream))
}

/// Pulls `stream` to its terminal signal, handing every value to `on_value`.
pub async fn drain<S, T, F>(mut stream: S, mut on_value: F) -> Completion
where
  S: Stream<Item = Emission<T>> + Unpin,
  F: FnMut(T),
{
  while let Some(emission) = stream.next().await {
    match emission {
      Ok(value) => on_value(value),
      Err(error) => return Completion::Failed(error),
    }
  }
  Completion::Finished
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::{ComponentInfo, ErrorContext, StringError};
  use futures::stream;

  fn failure(message: &str) -> StreamError {
    StreamError::new(
      StringError(message.to_string()),
      ErrorContext::default(),
      ComponentInfo::default(),
    )
  }

  #[tokio::test]
  async fn test_until_failure_stops_after_first_error() {
    let input = stream::iter(vec![Ok(1), Err(failure("first")), Ok(3), Err(failure("second"))]);
    let output: Vec<Emission<i32>> = until_failure(input).collect().await;

    assert_eq!(output.len(), 2);
    assert_eq!(*output[0].as_ref().unwrap(), 1);
    assert_eq!(output[1].as_ref().unwrap_err().source.to_string(), "first");
  }

  #[tokio::test]
  async fn test_until_failure_passes_clean_stream() {
    let input = stream::iter(vec![Ok(1), Ok(2), Ok(3)]);
    let output: Vec<i32> = until_failure(input).map(|e| e.unwrap()).collect().await;
    assert_eq!(output, vec![1, 2, 3]);
  }

  #[tokio::test]
  async fn test_drain_reports_finished() {
    let mut seen = Vec::new();
    let completion = drain(stream::iter(vec![Ok(1), Ok(2)]), |v| seen.push(v)).await;
    assert!(completion.is_finished());
    assert_eq!(seen, vec![1, 2]);
  }

  #[tokio::test]
  async fn test_drain_reports_failure() {
    let mut seen = Vec::new();
    let input = stream::iter(vec![Ok(1), Err(failure("busted"))]);
    let completion = drain(input, |v: i32| seen.push(v)).await;
    assert!(completion.is_failure());
    assert_eq!(completion.to_string(), "failure(busted)");
    assert_eq!(seen, vec![1]);
  }

  #[test]
  fn test_completion_display() {
    assert_eq!(Completion::Finished.to_string(), "finished");
    assert_eq!(Completion::Cancelled.to_string(), "cancelled");
    assert!(Completion::Cancelled.error().is_none());
  }
}
