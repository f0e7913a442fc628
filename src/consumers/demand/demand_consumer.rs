use crate::consumer::ConsumerConfig;
use crate::demand::{Demand, DemandState};
use crate::transcript::Transcript;
use std::fmt::Display;
use tokio::sync::mpsc;
use tracing::debug;

/// Errors raised when requesting more demand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemandError {
  /// The consumer already ended.
  #[error("consumer is no longer attached")]
  Detached,
}

/// Raises the demand of a [`DemandConsumer`] from outside.
#[derive(Debug, Clone)]
pub struct DemandHandle {
  requests: mpsc::UnboundedSender<Demand>,
}

impl DemandHandle {
  /// Adds `delta` to the consumer's cumulative request.
  pub fn request(&self, delta: Demand) -> Result<(), DemandError> {
    debug!(%delta, "manual demand");
    self
      .requests
      .send(delta)
      .map_err(|_| DemandError::Detached)
  }
}

fn no_additional_demand<T>(_: &T) -> Demand {
  Demand::none()
}

/// A consumer that receives values only as far as its demand allows.
///
/// # Example
///
/// ```rust
/// use streamweave_primer::consumer::Consumer;
/// use streamweave_primer::consumers::DemandConsumer;
/// use streamweave_primer::demand::Demand;
/// use streamweave_primer::producer::Producer;
/// use streamweave_primer::producers::RangeProducer;
///
/// # async fn example() {
/// // one extra value for every even value
/// let mut consumer = DemandConsumer::new(Demand::max(2), |value: &i32| {
///   if value % 2 == 0 { Demand::max(1) } else { Demand::none() }
/// });
/// let completion = consumer.consume(RangeProducer::new(1, 10).produce()).await;
/// assert!(completion.is_cancelled());
/// assert_eq!(consumer.values(), &[1, 2, 3]);
/// # }
/// ```
pub struct DemandConsumer<T, F = fn(&T) -> Demand>
where
  T: Display + Send + 'static,
  F: FnMut(&T) -> Demand + Send + 'static,
{
  pub(crate) policy: F,
  pub(crate) state: DemandState,
  pub(crate) requests: mpsc::UnboundedReceiver<Demand>,
  pub(crate) handle: Option<DemandHandle>,
  pub(crate) values: Vec<T>,
  pub(crate) transcript: Transcript,
  /// Configuration for the consumer.
  pub config: ConsumerConfig,
}

impl<T> DemandConsumer<T>
where
  T: Display + Send + 'static,
{
  /// A consumer that never asks for more than `initial` on its own.
  pub fn fixed(initial: Demand) -> Self {
    Self::new(initial, no_additional_demand::<T> as fn(&T) -> Demand)
  }
}

impl<T, F> DemandConsumer<T, F>
where
  T: Display + Send + 'static,
  F: FnMut(&T) -> Demand + Send + 'static,
{
  /// A consumer that requests `initial` on attach and consults `policy`
  /// after every value.
  pub fn new(initial: Demand, policy: F) -> Self {
    let (requests_tx, requests) = mpsc::unbounded_channel();
    Self {
      policy,
      state: DemandState::new(initial),
      requests,
      handle: Some(DemandHandle {
        requests: requests_tx,
      }),
      values: Vec::new(),
      transcript: Transcript::new(),
      config: ConsumerConfig::default(),
    }
  }

  /// Prints into `transcript` instead of stdout.
  #[must_use]
  pub fn with_transcript(mut self, transcript: Transcript) -> Self {
    self.transcript = transcript;
    self
  }

  /// A handle for raising the demand by hand.
  ///
  /// Only available before the consumer attaches. Once it has attached and
  /// every handle is gone, exhausting the demand ends the subscription at the
  /// next value. A finish or failure is still delivered.
  pub fn handle(&self) -> Option<DemandHandle> {
    self.handle.clone()
  }

  /// The demand bookkeeping.
  pub fn state(&self) -> DemandState {
    self.state
  }

  /// The values received so far.
  pub fn values(&self) -> &[T] {
    &self.values
  }
}

impl<T, F> std::fmt::Debug for DemandConsumer<T, F>
where
  T: Display + Send + 'static,
  F: FnMut(&T) -> Demand + Send + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("DemandConsumer")
      .field("state", &self.state)
      .field("received", &self.values.len())
      .field("config", &self.config)
      .finish()
  }
}
