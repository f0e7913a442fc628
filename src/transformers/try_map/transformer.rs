use super::try_map_transformer::TryMapTransformer;
use crate::completion::{BoxedStream, Emission, until_failure};
use crate::error::{ComponentInfo, ErrorAction, ErrorContext, StreamError};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::{StreamExt, future};
use std::error::Error;
use tracing::{debug, warn};

impl<F, I, O, E> Input for TryMapTransformer<F, I, O, E>
where
  F: FnMut(I) -> Result<O, E> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
  E: Error + Send + Sync + 'static,
{
  type Input = I;
  type InputStream = BoxedStream<I>;
}

impl<F, I, O, E> Output for TryMapTransformer<F, I, O, E>
where
  F: FnMut(I) -> Result<O, E> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
  E: Error + Send + Sync + 'static,
{
  type Output = O;
  type OutputStream = BoxedStream<O>;
}

impl<F, I, O, E> TryMapTransformer<F, I, O, E>
where
  F: FnMut(I) -> Result<O, E> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
  E: Error + Send + Sync + 'static,
{
  /// Runs the function on `item`, consulting `handle_error` on every failure.
  ///
  /// Returns `None` when the item is skipped.
  fn attempt(&mut self, item: I, component: &ComponentInfo) -> Option<Emission<O>> {
    let mut retries = 0;
    loop {
      let error = match (self.function)(item.clone()) {
        Ok(value) => return Some(Ok(value)),
        Err(error) => error,
      };
      let mut failure = StreamError::new(error, ErrorContext::for_item(&item, component), component.clone());
      failure.retries = retries;
      match self.handle_error(&failure) {
        ErrorAction::Stop => return Some(Err(failure)),
        ErrorAction::Skip => {
          warn!(component = %component.name, item = ?item, error = %failure.source, "skipping item");
          return None;
        }
        ErrorAction::Retry => {
          retries += 1;
          debug!(component = %component.name, retries, "retrying");
        }
      }
    }
  }
}

impl<F, I, O, E> Transformer for TryMapTransformer<F, I, O, E>
where
  F: FnMut(I) -> Result<O, E> + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
  E: Error + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut worker = self.clone();
    let component = self.component_info();
    until_failure(input.filter_map(move |emission| {
      let outcome = match emission {
        Ok(item) => worker.attempt(item, &component),
        Err(failure) => Some(Err(failure)),
      };
      future::ready(outcome)
    }))
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
