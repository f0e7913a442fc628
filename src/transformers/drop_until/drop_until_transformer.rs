use crate::producer::Producer;
use crate::transformer::TransformerConfig;
use std::marker::PhantomData;

/// A transformer that drops values until `trigger` emits.
///
/// The trigger is subscribed to when `transform` is called. If it finishes
/// without emitting, every upstream value is dropped. If it fails, the failure
/// ends the output stream.
#[derive(Clone)]
pub struct DropUntilTransformer<T, P>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  /// The producer whose first value opens the gate.
  pub trigger: P,
  /// Configuration for the transformer.
  pub config: TransformerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T, P> DropUntilTransformer<T, P>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  /// Creates a new `DropUntilTransformer` gated on `trigger`.
  pub fn new(trigger: P) -> Self {
    Self {
      trigger,
      config: TransformerConfig::default(),
      _phantom: PhantomData,
    }
  }
}
