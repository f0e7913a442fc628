use super::drop_until_transformer::DropUntilTransformer;
use crate::completion::{BoxedStream, until_failure};
use crate::error::StreamError;
use crate::input::Input;
use crate::output::Output;
use crate::producer::Producer;
use crate::transformer::{Transformer, TransformerConfig};
use futures::StreamExt;
use tracing::trace;

impl<T, P> Input for DropUntilTransformer<T, P>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<T, P> Output for DropUntilTransformer<T, P>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  type Output = T;
  type OutputStream = BoxedStream<T>;
}

/// What happened while the gate was still closed.
enum Gate {
  Opened,
  TriggerFinished,
  Dropped,
  Failed(StreamError),
  Exhausted,
}

impl<T, P> Transformer for DropUntilTransformer<T, P>
where
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  P: Producer,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut trigger = Box::pin(self.trigger.produce());
    let name = self.component_info().name;
    until_failure(async_stream::stream! {
      let mut input = input;
      let mut trigger_done = false;
      loop {
        let gate = tokio::select! {
          biased;
          signal = trigger.next(), if !trigger_done => match signal {
            Some(Ok(_)) => Gate::Opened,
            Some(Err(failure)) => Gate::Failed(failure),
            None => Gate::TriggerFinished,
          },
          emission = input.next() => match emission {
            Some(Ok(_)) => Gate::Dropped,
            Some(Err(failure)) => Gate::Failed(failure),
            None => Gate::Exhausted,
          },
        };
        match gate {
          Gate::Opened => {
            trace!(transformer = %name, "gate opened");
            break;
          }
          Gate::TriggerFinished => trigger_done = true,
          Gate::Dropped => {}
          Gate::Failed(failure) => {
            yield Err(failure);
            return;
          }
          Gate::Exhausted => return,
        }
      }
      while let Some(emission) = input.next().await {
        yield emission;
      }
    })
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::completion::drain;
  use crate::consumers::VecConsumer;
  use crate::producers::{JustProducer, PassthroughSubject, VecProducer};
  use crate::subscription::Subscription;

  async fn settle() {
    for _ in 0..4 {
      tokio::task::yield_now().await;
    }
  }

  #[tokio::test]
  async fn test_values_before_trigger_are_dropped() {
    let mut taps = PassthroughSubject::new();
    let ready = PassthroughSubject::<()>::new();
    let mut transformer = DropUntilTransformer::new(ready.clone());
    let consumer = VecConsumer::new();
    let record = consumer.clone();
    let subscription = Subscription::spawn(consumer, transformer.transform(taps.produce()));

    for tap in 1..=6 {
      if tap == 4 {
        ready.send(()).unwrap();
        settle().await;
      }
      taps.send(tap).unwrap();
      settle().await;
    }
    taps.finish().unwrap();

    let completion = subscription.join().await;
    assert!(completion.is_finished());
    assert_eq!(record.values(), vec![4, 5, 6]);
  }

  #[tokio::test]
  async fn test_gate_opened_by_immediate_trigger() {
    let mut transformer = DropUntilTransformer::new(JustProducer::new("go"));
    let mut seen = Vec::new();
    // the trigger is polled first, so nothing is lost
    let completion = drain(
      transformer.transform(VecProducer::new(vec![1, 2, 3]).produce()),
      |v| seen.push(v),
    )
    .await;
    assert!(completion.is_finished());
    assert_eq!(seen, vec![1, 2, 3]);
  }

  #[tokio::test]
  async fn test_silent_trigger_drops_everything() {
    let mut transformer = DropUntilTransformer::new(VecProducer::<u8>::new(vec![]));
    let mut seen = Vec::new();
    let completion = drain(
      transformer.transform(VecProducer::new(vec![1, 2, 3]).produce()),
      |v| seen.push(v),
    )
    .await;
    assert!(completion.is_finished());
    assert!(seen.is_empty());
  }
}
