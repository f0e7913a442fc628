use super::console_consumer::ConsoleConsumer;
use crate::completion::{BoxedStream, Completion, drain};
use crate::consumer::{Consumer, ConsumerConfig};
use crate::input::Input;
use async_trait::async_trait;
use std::fmt::Display;
use tracing::info;

impl<T> Input for ConsoleConsumer<T>
where
  T: Display + Send + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

#[async_trait]
impl<T> Consumer for ConsoleConsumer<T>
where
  T: Display + Send + 'static,
{
  async fn consume(&mut self, stream: Self::InputStream) -> Completion {
    let this = &*self;
    let completion = drain(stream, |value| {
      this.transcript.record(this.line("value", &value));
    })
    .await;
    self.transcript.record(self.line("completion", &completion));
    info!(consumer = %self.component_info().name, %completion, "completed");
    completion
  }

  fn set_config_impl(&mut self, config: ConsumerConfig) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ConsumerConfig {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ConsumerConfig {
    &mut self.config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::StringError;
  use crate::producer::Producer;
  use crate::producers::{FailProducer, VecProducer};
  use crate::transcript::Transcript;

  #[tokio::test]
  async fn test_prints_values_and_completion() {
    let transcript = Transcript::quiet();
    let mut console = ConsoleConsumer::with_transcript(transcript.clone());
    console.consume(VecProducer::new(vec![3, 6]).produce()).await;
    assert_eq!(
      transcript.lines(),
      vec![
        "Received value: 3",
        "Received value: 6",
        "Received completion: finished"
      ]
    );
  }

  #[tokio::test]
  async fn test_named_console_prefixes_lines() {
    let transcript = Transcript::quiet();
    let mut console =
      ConsoleConsumer::<u8>::with_transcript(transcript.clone()).with_name("dealer".to_string());
    console
      .consume(FailProducer::new(StringError("busted".to_string())).produce())
      .await;
    assert_eq!(transcript.lines(), vec!["dealer received completion: failure(busted)"]);
  }
}
