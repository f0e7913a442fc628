//! Subject demonstrations: values pushed in by hand.

use super::{console, example_of, note_rejection, settle};
use crate::consumer::Consumer;
use crate::producer::Producer;
use crate::producers::{CurrentValueSubject, PassthroughSubject};
use crate::subscription::Subscription;
use crate::transcript::Transcript;
use futures::StreamExt;
use std::time::Duration;

/// Two subscribers to a passthrough subject, one cancelled halfway.
pub async fn passthrough_subject(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "passthrough_subject");
  let mut subject = PassthroughSubject::<String>::new();
  let first = Subscription::spawn(
    console(&transcript).with_name("first".to_string()),
    subject.produce(),
  );
  let second = Subscription::spawn(
    console(&transcript).with_name("second".to_string()),
    subject.produce(),
  );

  note_rejection(&transcript, "Send", subject.send("Hello".to_string()));
  settle().await;
  second.cancel();
  settle().await;
  note_rejection(&transcript, "Send", subject.send("World".to_string()));
  settle().await;
  note_rejection(&transcript, "Finish", subject.finish());
  settle().await;

  note_rejection(&transcript, "Send", subject.send("Are you there?".to_string()));
  first.join().await;
  second.join().await;
  transcript.lines()
}

/// A current-value subject replaying its latest value to late subscribers.
pub async fn current_value_subject(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "current_value_subject");
  let mut subject = CurrentValueSubject::new(0);
  let first = Subscription::spawn(
    console::<i32>(&transcript).with_name("first".to_string()),
    subject.produce(),
  );
  settle().await;

  note_rejection(&transcript, "Send", subject.send(1));
  note_rejection(&transcript, "Send", subject.send(2));
  settle().await;

  let second = Subscription::spawn(
    console::<i32>(&transcript).with_name("second".to_string()),
    subject.produce(),
  );
  settle().await;
  transcript.record(format!("Current value: {}", subject.value()));

  note_rejection(&transcript, "Send", subject.send(3));
  settle().await;
  note_rejection(&transcript, "Finish", subject.finish());

  first.join().await;
  second.join().await;
  transcript.record(format!("Value after finishing: {}", subject.value()));
  transcript.lines()
}

/// Ticks from a timer task, consumed with a `while let` loop.
pub async fn async_ticks(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "async_ticks");
  let mut ticker = PassthroughSubject::<u32>::new();
  let mut ticks = ticker.produce();

  let source = ticker.clone();
  let timer_transcript = transcript.clone();
  let timer = tokio::spawn(async move {
    let mut interval = tokio::time::interval(Duration::from_millis(5));
    for tick in 1..=3 {
      interval.tick().await;
      if source.send(tick).is_err() {
        break;
      }
    }
    note_rejection(&timer_transcript, "Finish", source.finish());
  });

  while let Some(emission) = ticks.next().await {
    match emission {
      Ok(tick) => transcript.record(format!("Tick {}", tick)),
      Err(failure) => {
        transcript.record(format!("Ticks failed: {}", failure));
        break;
      }
    }
  }
  if let Err(join_error) = timer.await {
    transcript.record(format!("Timer stopped: {}", join_error));
  }
  transcript.record("Ticks finished");
  transcript.lines()
}
