//! Demand-driven subscriber demonstrations.

use super::{example_of, settle};
use crate::consumers::DemandConsumer;
use crate::demand::Demand;
use crate::pipeline::PipelineBuilder;
use crate::producers::RangeProducer;
use crate::transcript::Transcript;

/// A subscriber that asks for three values and never more.
pub async fn custom_subscriber(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "custom_subscriber");
  let consumer = DemandConsumer::fixed(Demand::max(3)).with_transcript(transcript.clone());
  let (completion, consumer) = PipelineBuilder::new()
    .producer(RangeProducer::new(1, 6))
    .consumer(consumer)
    .run()
    .await;
  if completion.is_cancelled() {
    transcript.record(format!(
      "Stopped after {} values: demand of {} exhausted",
      consumer.values().len(),
      consumer.state().cumulative_request
    ));
  }
  transcript.lines()
}

/// A subscriber that raises its demand on even values, then gets topped up by
/// hand once it runs dry.
pub async fn adjusting_demand(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "adjusting_demand");
  let consumer = DemandConsumer::new(Demand::max(2), |value: &i32| {
    if value % 2 == 0 {
      Demand::max(1)
    } else {
      Demand::none()
    }
  })
  .with_transcript(transcript.clone());
  let Some(handle) = consumer.handle() else {
    return transcript.lines();
  };

  let subscription = PipelineBuilder::new()
    .producer(RangeProducer::new(1, 6))
    .consumer(consumer)
    .spawn();
  settle().await;

  transcript.record("Demand exhausted, requesting max(3) more");
  if let Err(detached) = handle.request(Demand::max(3)) {
    transcript.record(format!("Request failed: {}", detached));
  }
  drop(handle);
  subscription.join().await;
  transcript.lines()
}
