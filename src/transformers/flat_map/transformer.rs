use super::flat_map_transformer::FlatMapTransformer;
use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::producer::Producer;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{StreamExt, stream};

impl<F, I, P> Input for FlatMapTransformer<F, I, P>
where
  F: FnMut(I) -> P + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  type Input = I;
  type InputStream = BoxedStream<I>;
}

impl<F, I, P> Output for FlatMapTransformer<F, I, P>
where
  F: FnMut(I) -> P + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  type Output = P::Output;
  type OutputStream = BoxedStream<P::Output>;
}

impl<F, I, P> Transformer for FlatMapTransformer<F, I, P>
where
  F: FnMut(I) -> P + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut function = self.function.clone();
    let inner = input.map(move |emission| -> BoxedStream<P::Output> {
      match emission {
        Ok(value) => Box::pin(function(value).produce()),
        Err(failure) => Box::pin(stream::iter(std::iter::once(Err(failure)))),
      }
    });
    until_failure(inner.flatten_unordered(self.max_concurrent))
  }

  fn set_config_impl(&mut self, config: TransformerConfig) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig {
    &mut self.config
  }
}
