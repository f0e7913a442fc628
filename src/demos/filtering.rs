//! Filtering demonstrations: stages that decide which values get through.

use super::{console, example_of, note_rejection, settle};
use crate::consumer::Consumer;
use crate::error::ErrorStrategy;
use crate::pipeline::PipelineBuilder;
use crate::producer::Producer;
use crate::producers::{PassthroughSubject, RangeProducer, VecProducer};
use crate::subscription::Subscription;
use crate::transcript::Transcript;
use crate::transformer::Transformer;
use crate::transformers::{
  DropTransformer, DropUntilTransformer, DropWhileTransformer, FilterTransformer,
  FirstTransformer, LastTransformer, PrefixTransformer, PrefixWhileTransformer,
  RemoveDuplicatesTransformer, TryMapTransformer,
};

/// Keeps the multiples of three out of one through ten.
pub async fn filter(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "filter");
  PipelineBuilder::new()
    .producer(RangeProducer::new(1, 10))
    .transformer(FilterTransformer::new(|n: &i32| n % 3 == 0))
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// Collapses runs of the same word.
pub async fn remove_duplicates(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "remove_duplicates");
  let words = "hey hey there! want to listen to mister mister ?";
  PipelineBuilder::new()
    .producer(words.split(' ').collect::<VecProducer<_>>())
    .transformer(RemoveDuplicatesTransformer::new())
    .consumer(console::<&str>(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// Parses numbers and lets the try-map skip what does not parse.
///
/// Same input as the compact-map demonstration; here the failures are raised
/// and then dropped by the `Skip` error strategy, each one logged.
pub async fn ignore_failed_parse(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "ignore_failed_parse");
  let strings = vec!["a", "1.24", "3", "def", "45", "0.23"];
  PipelineBuilder::new()
    .producer(VecProducer::new(strings))
    .transformer(
      TryMapTransformer::new(|s: &'static str| s.parse::<f32>())
        .with_name("parse".to_string())
        .with_error_strategy(ErrorStrategy::Skip),
    )
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// Skips the first eight of one through ten.
pub async fn drop(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "drop");
  PipelineBuilder::new()
    .producer(RangeProducer::new(1, 10))
    .transformer(DropTransformer::new(8))
    .consumer(console::<i32>(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// Skips values until the first multiple of five.
pub async fn drop_while(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "drop_while");
  let checks = transcript.clone();
  PipelineBuilder::new()
    .producer(RangeProducer::new(1, 10))
    .transformer(DropWhileTransformer::new(move |n: &i32| {
      checks.record(format!("Checking {}", n));
      n % 5 != 0
    }))
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// Ignores taps until a second subject signals that the view is ready.
pub async fn drop_until(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "drop_until");
  let is_ready = PassthroughSubject::<()>::new();
  let taps = PassthroughSubject::<u32>::new();
  let subscription = PipelineBuilder::new()
    .producer(taps.clone())
    .transformer(DropUntilTransformer::new(is_ready.clone()))
    .consumer(console(&transcript))
    .spawn();

  for tap in 1..=5 {
    if taps.send(tap).is_err() {
      break;
    }
    settle().await;
    if tap == 3 {
      transcript.record("View is ready");
      note_rejection(&transcript, "Send", is_ready.send(()));
      settle().await;
    }
  }
  note_rejection(&transcript, "Finish", taps.finish());
  subscription.join().await;
  transcript.lines()
}

/// Takes the first two of one through ten.
pub async fn prefix(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "prefix");
  PipelineBuilder::new()
    .producer(RangeProducer::new(1, 10))
    .transformer(PrefixTransformer::new(2))
    .consumer(console::<i32>(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// Takes values while they stay below three.
pub async fn prefix_while(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "prefix_while");
  PipelineBuilder::new()
    .producer(RangeProducer::new(1, 10))
    .transformer(PrefixWhileTransformer::new(|n: &i32| *n < 3))
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// The first even value, then the last value, of one through nine.
pub async fn first_last(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "first_last");
  let mut numbers = RangeProducer::new(1, 9);
  let mut first_even = FirstTransformer::matching(|n: &i32| n % 2 == 0);
  let mut last = LastTransformer::new();

  let first = Subscription::spawn(
    console(&transcript).with_name("first even".to_string()),
    first_even.transform(numbers.produce()),
  );
  first.join().await;
  let last = Subscription::spawn(
    console(&transcript).with_name("last".to_string()),
    last.transform(numbers.produce()),
  );
  last.join().await;
  transcript.lines()
}
