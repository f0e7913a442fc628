//! A single-shot future shared by two subscribers.

use super::{console, example_of};
use crate::consumer::Consumer;
use crate::producer::Producer;
use crate::producers::FutureProducer;
use crate::subscription::Subscription;
use crate::transcript::Transcript;
use std::convert::Infallible;
use std::time::Duration;

/// Work that runs once, delivered to both subscribers.
pub async fn future(transcript: Transcript) -> Vec<String> {
  example_of(&transcript, "future");
  let work = transcript.clone();
  let mut producer = FutureProducer::new(async move {
    tokio::time::sleep(Duration::from_millis(10)).await;
    work.record("Original");
    Ok::<_, Infallible>(2)
  });

  let first = Subscription::spawn(
    console::<i32>(&transcript).with_name("first".to_string()),
    producer.produce(),
  );
  let second = Subscription::spawn(
    console::<i32>(&transcript).with_name("second".to_string()),
    producer.produce(),
  );
  tokio::join!(first.join(), second.join());
  transcript.lines()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_future_runs_once_for_both() {
    let lines = future(Transcript::quiet()).await;
    assert_eq!(lines.iter().filter(|l| *l == "Original").count(), 1);
    assert_eq!(lines[1], "Original");
    for name in ["first", "second"] {
      assert!(lines.contains(&format!("{} received value: 2", name)));
      assert!(lines.contains(&format!("{} received completion: finished", name)));
    }
    assert_eq!(lines.len(), 6);
  }
}
