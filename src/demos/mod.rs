//! # Demonstrations
//!
//! Small narrated scenarios, each building a source, applying a stage or two
//! and printing what its consumer observes. Every demonstration writes into the
//! [`Transcript`] it is given and returns the lines it recorded.
//!
//! ```rust
//! use streamweave_primer::demos;
//! use streamweave_primer::transcript::Transcript;
//!
//! # async fn example() {
//! let demo = demos::find("drop").unwrap();
//! let lines = demo.run(Transcript::quiet()).await;
//! assert_eq!(lines.last().map(String::as_str), Some("Received completion: finished"));
//! # }
//! ```

/// The blackjack dealer and its card types.
pub mod cards;
/// Filtering stages.
pub mod filtering;
/// Single-shot futures.
pub mod single_shot;
/// Passthrough and current-value subjects.
pub mod subjects;
/// Demand-driven consumers.
pub mod subscribers;
/// Transforming stages.
pub mod transforming;

use crate::consumers::ConsoleConsumer;
use crate::producers::SubjectError;
use crate::transcript::Transcript;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::fmt::Display;

/// Errors raised when looking up a demonstration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemoError {
  /// No demonstration has this name.
  #[error("unknown demonstration `{0}`")]
  Unknown(String),
}

type Runner = fn(Transcript) -> LocalBoxFuture<'static, Vec<String>>;

/// One registered demonstration.
#[derive(Clone, Copy)]
pub struct Demo {
  /// The name it is run by.
  pub name: &'static str,
  /// One line describing what it shows.
  pub summary: &'static str,
  runner: Runner,
}

impl Demo {
  /// Runs the demonstration, recording into `transcript`.
  pub async fn run(&self, transcript: Transcript) -> Vec<String> {
    (self.runner)(transcript).await
  }
}

impl std::fmt::Debug for Demo {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Demo")
      .field("name", &self.name)
      .field("summary", &self.summary)
      .finish()
  }
}

macro_rules! demo {
  ($module:ident :: $name:ident, $summary:expr) => {
    Demo {
      name: stringify!($name),
      summary: $summary,
      runner: |transcript| $module::$name(transcript).boxed_local(),
    }
  };
}

/// Every demonstration, in presentation order.
pub fn catalog() -> Vec<Demo> {
  vec![
    demo!(filtering::filter, "keep multiples of three"),
    demo!(filtering::remove_duplicates, "collapse repeated words"),
    demo!(transforming::compact_map, "parse numbers, silently dropping the rest"),
    demo!(filtering::ignore_failed_parse, "parse numbers, skipping failures by strategy"),
    demo!(transforming::try_map, "parse numbers, failing on the first bad one"),
    demo!(transforming::map_quadrants, "describe where points lie"),
    demo!(transforming::scan, "running total of daily gains"),
    demo!(transforming::flat_map, "merge the messages of chat participants"),
    demo!(filtering::drop, "skip the first eight values"),
    demo!(filtering::drop_while, "skip values until a multiple of five"),
    demo!(filtering::drop_until, "ignore taps until the view is ready"),
    demo!(filtering::prefix, "take the first two values"),
    demo!(filtering::prefix_while, "take values while they are small"),
    demo!(filtering::first_last, "first even value and the last value"),
    demo!(transforming::collect, "gather letters into one value"),
    demo!(subjects::passthrough_subject, "broadcast to two subscribers, then cancel one"),
    demo!(subjects::current_value_subject, "replay the current value to late subscribers"),
    demo!(single_shot::future, "one eager result shared by two subscribers"),
    demo!(subjects::async_ticks, "await timer ticks from a subject"),
    demo!(subscribers::custom_subscriber, "a subscriber with a fixed demand of three"),
    demo!(subscribers::adjusting_demand, "a subscriber that raises its demand"),
    demo!(cards::blackjack, "deal hands and report busts as failures"),
  ]
}

/// Looks up a demonstration by name.
pub fn find(name: &str) -> Result<Demo, DemoError> {
  catalog()
    .into_iter()
    .find(|demo| demo.name == name)
    .ok_or_else(|| DemoError::Unknown(name.to_string()))
}

/// Records the banner that opens a demonstration.
pub(crate) fn example_of(transcript: &Transcript, name: &str) {
  transcript.record(format!("--- Example of: {} ---", name));
}

/// A console consumer printing into `transcript`.
pub(crate) fn console<T>(transcript: &Transcript) -> ConsoleConsumer<T>
where
  T: Display + Send + 'static,
{
  ConsoleConsumer::with_transcript(transcript.clone())
}

/// Records `action` when a subject rejected it.
pub(crate) fn note_rejection(transcript: &Transcript, action: &str, outcome: Result<(), SubjectError>) {
  if let Err(rejected) = outcome {
    transcript.record(format!("{} rejected: {}", action, rejected));
  }
}

/// Lets spawned subscriptions catch up with what was just sent.
pub(crate) async fn settle() {
  for _ in 0..8 {
    tokio::task::yield_now().await;
  }
}
