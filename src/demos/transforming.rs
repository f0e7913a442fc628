//! Transforming demonstrations: stages that reshape values.

use super::{console, example_of, note_rejection, settle};
use crate::pipeline::PipelineBuilder;
use crate::producers::{CurrentValueSubject, PassthroughSubject, SubjectError, VecProducer};
use crate::transcript::Transcript;
use crate::transformers::{
  CollectTransformer, CompactMapTransformer, FlatMapTransformer, MapTransformer, ScanTransformer,
  TryMapTransformer,
};
use std::fmt;

/// Parses numbers, silently dropping what does not parse.
pub async fn compact_map(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "compact_map");
  let strings = vec!["a", "1.24", "3", "def", "45", "0.23"];
  PipelineBuilder::new()
    .producer(VecProducer::new(strings))
    .transformer(CompactMapTransformer::new(|s: &'static str| s.parse::<f32>().ok()))
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// Parses integers; the first bad one ends the stream with a failure.
pub async fn try_map(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "try_map");
  PipelineBuilder::new()
    .producer(VecProducer::new(vec!["1", "2", "three", "4"]))
    .transformer(TryMapTransformer::new(|s: &'static str| s.parse::<i32>()))
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// Where a point sits on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
  /// Both coordinates positive.
  First,
  /// Negative x, positive y.
  Second,
  /// Both coordinates negative.
  Third,
  /// Positive x, negative y.
  Fourth,
  /// On the x or y axis.
  Axis,
}

impl Quadrant {
  /// The quadrant holding `(x, y)`.
  pub fn of(x: i32, y: i32) -> Self {
    match (x.signum(), y.signum()) {
      (1, 1) => Quadrant::First,
      (-1, 1) => Quadrant::Second,
      (-1, -1) => Quadrant::Third,
      (1, -1) => Quadrant::Fourth,
      _ => Quadrant::Axis,
    }
  }
}

impl fmt::Display for Quadrant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Quadrant::First => write!(f, "in quadrant I"),
      Quadrant::Second => write!(f, "in quadrant II"),
      Quadrant::Third => write!(f, "in quadrant III"),
      Quadrant::Fourth => write!(f, "in quadrant IV"),
      Quadrant::Axis => write!(f, "on an axis"),
    }
  }
}

/// Describes which quadrant each point falls in.
pub async fn map_quadrants(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "map_quadrants");
  let points = vec![(3, 4), (-2, 5), (-1, -1), (6, -3), (0, 2)];
  PipelineBuilder::new()
    .producer(VecProducer::new(points))
    .transformer(MapTransformer::new(|(x, y): (i32, i32)| {
      format!("({}, {}) is {}", x, y, Quadrant::of(x, y))
    }))
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// A running balance over daily gains and losses.
pub async fn scan(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "scan");
  let changes = vec![10, -3, 7, -12, 5];
  PipelineBuilder::new()
    .producer(VecProducer::new(changes))
    .transformer(ScanTransformer::new(50, |balance: i32, change: i32| {
      balance + change
    }))
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

/// A chat participant whose latest message is observable.
#[derive(Debug, Clone)]
pub struct Chatter {
  /// Display name.
  pub name: &'static str,
  /// The participant's latest message.
  pub message: CurrentValueSubject<String>,
}

impl Chatter {
  /// A participant that opens with a greeting.
  pub fn new(name: &'static str) -> Self {
    Self {
      name,
      message: CurrentValueSubject::new(format!("{}: Hi!", name)),
    }
  }

  /// Sends a new message.
  pub fn says(&self, text: &str) -> Result<(), SubjectError> {
    self.message.send(format!("{}: {}", self.name, text))
  }
}

/// Joins every chatter's messages into one stream, two chatters at a time.
pub async fn flat_map(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "flat_map");
  let chat = PassthroughSubject::<Chatter>::new();
  let subscription = PipelineBuilder::new()
    .producer(chat.clone())
    .transformer(
      FlatMapTransformer::new(|chatter: Chatter| chatter.message).with_max_concurrent(2),
    )
    .consumer(console(&transcript))
    .spawn();

  let charlotte = Chatter::new("Charlotte");
  let james = Chatter::new("James");
  let amy = Chatter::new("Amy");

  for chatter in [&charlotte, &james, &amy] {
    note_rejection(&transcript, "Send", chat.send(chatter.clone()));
    settle().await;
  }
  note_rejection(&transcript, "Send", james.says("Wow, this is really cool!"));
  settle().await;
  note_rejection(&transcript, "Send", charlotte.says("Did you say something, James?"));
  settle().await;
  note_rejection(&transcript, "Send", amy.says("Is anyone there?"));
  settle().await;

  transcript.record("Charlotte leaves the chat");
  note_rejection(&transcript, "Finish", charlotte.message.finish());
  settle().await;

  note_rejection(&transcript, "Finish", chat.finish());
  for chatter in [&james, &amy] {
    note_rejection(&transcript, "Finish", chatter.message.finish());
  }
  subscription.join().await;
  transcript.lines()
}

/// Gathers letters into one array.
pub async fn collect(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "collect");
  PipelineBuilder::new()
    .producer(VecProducer::new(vec!["A", "B", "C", "D", "E"]))
    .transformer(CollectTransformer::new())
    .transformer(MapTransformer::new(|letters: Vec<&'static str>| {
      format!("{:?}", letters)
    }))
    .consumer(console(&transcript))
    .run()
    .await;
  transcript.lines()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn body(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().skip(1).collect()
  }

  #[tokio::test]
  async fn test_compact_map_drops_unparseable() {
    assert_eq!(
      body(compact_map(Transcript::quiet()).await),
      vec![
        "Received value: 1.24",
        "Received value: 3",
        "Received value: 45",
        "Received value: 0.23",
        "Received completion: finished"
      ]
    );
  }

  #[tokio::test]
  async fn test_try_map_fails_on_bad_input() {
    assert_eq!(
      body(try_map(Transcript::quiet()).await),
      vec![
        "Received value: 1",
        "Received value: 2",
        "Received completion: failure(invalid digit found in string)"
      ]
    );
  }

  #[test]
  fn test_quadrants() {
    assert_eq!(Quadrant::of(3, 4), Quadrant::First);
    assert_eq!(Quadrant::of(-3, 4), Quadrant::Second);
    assert_eq!(Quadrant::of(-3, -4), Quadrant::Third);
    assert_eq!(Quadrant::of(3, -4), Quadrant::Fourth);
    assert_eq!(Quadrant::of(0, -4), Quadrant::Axis);
  }

  #[tokio::test]
  async fn test_map_quadrants() {
    let lines = body(map_quadrants(Transcript::quiet()).await);
    assert_eq!(lines[0], "Received value: (3, 4) is in quadrant I");
    assert_eq!(lines[4], "Received value: (0, 2) is on an axis");
  }

  #[tokio::test]
  async fn test_scan_running_balance() {
    assert_eq!(
      body(scan(Transcript::quiet()).await),
      vec![
        "Received value: 60",
        "Received value: 57",
        "Received value: 64",
        "Received value: 52",
        "Received value: 57",
        "Received completion: finished"
      ]
    );
  }

  #[tokio::test]
  async fn test_flat_map_bounds_concurrent_chatters() {
    let lines = body(flat_map(Transcript::quiet()).await);
    let amy = lines
      .iter()
      .position(|line| line == "Received value: Amy: Is anyone there?")
      .unwrap();
    let leaves = lines
      .iter()
      .position(|line| line == "Charlotte leaves the chat")
      .unwrap();
    // Amy only gets a slot once Charlotte is gone
    assert!(amy > leaves);
    assert!(!lines.contains(&"Received value: Amy: Hi!".to_string()));
    assert!(lines.contains(&"Received value: James: Wow, this is really cool!".to_string()));
    assert_eq!(lines.last().unwrap(), "Received completion: finished");
  }

  #[tokio::test]
  async fn test_collect_into_array() {
    assert_eq!(
      body(collect(Transcript::quiet()).await),
      vec![
        r#"Received value: ["A", "B", "C", "D", "E"]"#,
        "Received completion: finished"
      ]
    );
  }
}
