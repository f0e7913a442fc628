use super::future_producer::FutureProducer;
use crate::completion::BoxedStream;
use crate::output::Output;
use crate::producer::{Producer, ProducerConfig};
use futures::FutureExt;

impl<T> Output for FutureProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

impl<T> Producer for FutureProducer<T>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn produce(&mut self) -> Self::OutputStream {
    let component = self.component_info();
    let context = self.create_error_context(None);
    let result = self.result.clone().map(move |outcome| {
      outcome.map_err(|mut failure| {
        failure.component = component;
        failure.context = context;
        failure
      })
    });
    Box::pin(futures::stream::once(result))
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
