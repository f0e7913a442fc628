use futures::StreamExt;
use std::time::Duration;
use streamweave_primer::consumers::{DemandConsumer, VecConsumer};
use streamweave_primer::error::StringError;
use streamweave_primer::producers::{CurrentValueSubject, PassthroughSubject, SubjectError};
use streamweave_primer::{Demand, Producer, Subscription, SubscriptionSet, Transcript};

async fn settle() {
  tokio::time::sleep(Duration::from_millis(5)).await;
}

#[tokio::test]
async fn test_subscribers_only_see_later_values() {
  let mut subject = PassthroughSubject::new();
  subject.send(1).unwrap();

  let early = VecConsumer::new();
  let early_record = early.clone();
  let first = Subscription::spawn(early, subject.produce());
  subject.send(2).unwrap();
  settle().await;

  let late = VecConsumer::new();
  let late_record = late.clone();
  let second = Subscription::spawn(late, subject.produce());
  subject.send(3).unwrap();
  subject.finish().unwrap();

  assert!(first.join().await.is_finished());
  assert!(second.join().await.is_finished());
  assert_eq!(early_record.values(), vec![2, 3]);
  assert_eq!(late_record.values(), vec![3]);
}

#[tokio::test]
async fn test_failure_reaches_every_subscriber() {
  let mut subject = PassthroughSubject::<u8>::new();
  let mut set = SubscriptionSet::new();
  let consumers = [VecConsumer::new(), VecConsumer::new()];
  for consumer in &consumers {
    Subscription::spawn(consumer.clone(), subject.produce()).store_in(&mut set);
  }
  subject.fail(StringError("boom".to_string())).unwrap();
  assert_eq!(subject.send(1), Err(SubjectError::Terminated));

  for completion in set.join_all().await {
    assert_eq!(completion.to_string(), "failure(boom)");
  }
  // late subscribers get only the terminal signal
  let late: Vec<_> = subject.produce().collect().await;
  assert_eq!(late.len(), 1);
  assert!(late[0].is_err());
}

#[tokio::test]
async fn test_current_value_subject_replays_to_late_subscribers() {
  let mut subject = CurrentValueSubject::new("idle".to_string());
  subject.send("busy".to_string()).unwrap();

  let consumer = VecConsumer::new();
  let record = consumer.clone();
  let subscription = Subscription::spawn(consumer, subject.produce());
  settle().await;
  subject.send("done".to_string()).unwrap();
  subject.finish().unwrap();

  assert!(subscription.join().await.is_finished());
  assert_eq!(record.values(), vec!["busy", "done"]);
  assert_eq!(subject.value(), "done");
}

#[tokio::test]
async fn test_demand_consumer_waits_for_more_demand() {
  let mut subject = PassthroughSubject::new();
  let consumer = DemandConsumer::fixed(Demand::max(1)).with_transcript(Transcript::quiet());
  let handle = consumer.handle().unwrap();
  let subscription = Subscription::spawn(consumer, subject.produce());

  for n in 1..=3 {
    subject.send(n).unwrap();
  }
  settle().await;
  assert!(!subscription.is_finished());

  // exactly what is left; the finish needs no demand
  handle.request(Demand::max(2)).unwrap();
  subject.finish().unwrap();
  assert!(subscription.join().await.is_finished());
  assert!(handle.request(Demand::max(1)).is_err());
}
