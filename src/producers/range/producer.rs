use super::range_producer::RangeProducer;
use crate::completion::BoxedStream;
use crate::error::StreamError;
use crate::output::Output;
use crate::producer::{Producer, ProducerConfig};
use num_traits::PrimInt;

impl<T> Output for RangeProducer<T>
where
  T: PrimInt + std::fmt::Debug + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Producer for RangeProducer<T>
where
  T: PrimInt + std::fmt::Debug + Send + Sync + 'static,
{
  fn produce(&mut self) -> Self::OutputStream {
    let end = self.end;
    let first = (self.start <= end).then_some(self.start);
    Box::pin(futures::stream::unfold(first, move |next| async move {
      next.map(|current| {
        let following = if current < end {
          current.checked_add(&T::one())
        } else {
          None
        };
        (Ok::<T, StreamError>(current), following)
      })
    }))
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
