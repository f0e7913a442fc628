use crate::producer::ProducerConfig;

/// A producer that emits the items of a vector.
///
/// Every call to `produce` replays the whole vector.
#[derive(Debug, Clone)]
pub struct VecProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// The items to emit.
  pub data: Vec<T>,
  /// Configuration for the producer.
  pub config: ProducerConfig,
}

impl<T> VecProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  /// Creates a new `VecProducer` over `data`.
  pub fn new(data: Vec<T>) -> Self {
    Self {
      data,
      config: ProducerConfig::default(),
    }
  }
}

impl<T> FromIterator<T> for VecProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
