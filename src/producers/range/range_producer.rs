use crate::producer::ProducerConfig;
use num_traits::PrimInt;

/// A producer that emits every integer from `start` to `end`, inclusive.
///
/// When `start > end` it finishes without emitting.
#[derive(Debug, Clone)]
pub struct RangeProducer<T>
where
  T: PrimInt + std::fmt::Debug + Send + Sync + 'static,
{
  /// The first value.
  pub start: T,
  /// The last value.
  pub end: T,
  /// Configuration for the producer.
  pub config: ProducerConfig,
}

impl<T> RangeProducer<T>
where
  T: PrimInt + std::fmt::Debug + Send + Sync + 'static,
{
  /// Creates a new `RangeProducer` over `start..=end`.
  pub fn new(start: T, end: T) -> Self {
    Self {
      start,
      end,
      config: ProducerConfig::default(),
    }
  }
}
