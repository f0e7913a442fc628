use crate::completion::Emission;
use crate::error::{ComponentInfo, ErrorContext, StreamError};
use crate::producer::ProducerConfig;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::convert::Infallible;
use std::error::Error;
use std::future::Future;
use std::time::Duration;
use tracing::trace;

/// A single-shot asynchronous producer.
///
/// The work is spawned onto the tokio runtime the moment the producer is
/// created, not when someone subscribes. Every stream handed out by `produce`
/// yields that one result: the value followed by the success signal, or the
/// failure.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use std::time::Duration;
/// use streamweave_primer::producer::Producer;
/// use streamweave_primer::producers::FutureProducer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut future = FutureProducer::delayed(2, Duration::from_millis(10));
/// let first: Vec<i32> = future.produce().map(|e| e.unwrap()).collect().await;
/// let second: Vec<i32> = future.produce().map(|e| e.unwrap()).collect().await;
/// assert_eq!(first, vec![2]);
/// assert_eq!(second, vec![2]);
/// # }
/// ```
#[derive(Clone)]
pub struct FutureProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  pub(crate) result: Shared<BoxFuture<'static, Emission<T>>>,
  /// Configuration for the producer.
  pub config: ProducerConfig,
}

impl<T> FutureProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Starts `work` on the runtime and wraps its eventual result.
  ///
  /// # Panics
  ///
  /// Panics when called outside a tokio runtime.
  pub fn new<Fut, E>(work: Fut) -> Self
  where
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    E: Error + Send + Sync + 'static,
  {
    let handle = tokio::spawn(work);
    // identity and context are stamped per subscriber in `produce`
    let result = async move {
      let outcome = match handle.await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(StreamError::new(error, ErrorContext::default(), ComponentInfo::default())),
        Err(join_error) => Err(StreamError::new(
          join_error,
          ErrorContext::default(),
          ComponentInfo::default(),
        )),
      };
      trace!(ok = outcome.is_ok(), "future resolved");
      outcome
    }
    .boxed()
    .shared();
    Self {
      result,
      config: ProducerConfig::default(),
    }
  }

  /// Resolves to `value` once `delay` has elapsed.
  pub fn delayed(value: T, delay: Duration) -> Self {
    Self::new(async move {
      tokio::time::sleep(delay).await;
      Ok::<T, Infallible>(value)
    })
  }

  /// Returns `true` once the result is available without waiting.
  pub fn is_resolved(&self) -> bool {
    self.result.peek().is_some()
  }
}

impl<T> std::fmt::Debug for FutureProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FutureProducer")
      .field("resolved", &self.result.peek())
      .field("config", &self.config)
      .finish()
  }
}
