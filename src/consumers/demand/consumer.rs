use super::demand_consumer::DemandConsumer;
use crate::completion::{BoxedStream, Completion, Emission};
use crate::consumer::{Consumer, ConsumerConfig};
use crate::demand::Demand;
use crate::input::Input;
use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::Peekable;
use std::fmt::Display;
use std::pin::Pin;
use tracing::{debug, info};

impl<T, F> Input for DemandConsumer<T, F>
where
  T: Display + Send + 'static,
  F: FnMut(&T) -> Demand + Send + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<T, F> DemandConsumer<T, F>
where
  T: Display + Send + 'static,
  F: FnMut(&T) -> Demand + Send + 'static,
{
  fn apply(&mut self, delta: Demand) {
    if delta.is_none() {
      return;
    }
    self.state = self.state.adjust(delta);
    debug!(
      consumer = %self.component_info().name,
      %delta,
      cumulative = %self.state.cumulative_request,
      "demand raised"
    );
  }

  /// Waits until there is demand for one more value.
  ///
  /// The source is watched meanwhile: a terminal signal is delivered without
  /// demand, a value stays buffered until demand arrives. Returns the
  /// completion when the relationship ended while waiting.
  async fn await_demand(&mut self, stream: &mut Peekable<BoxedStream<T>>) -> Option<Completion> {
    while let Ok(delta) = self.requests.try_recv() {
      self.apply(delta);
    }
    let mut value_waiting = false;
    while !self.state.has_outstanding() {
      debug!(consumer = %self.component_info().name, received = self.state.received, "demand exhausted");
      let wake = if value_waiting {
        Wake::Request(self.requests.recv().await)
      } else {
        tokio::select! {
          biased;
          request = self.requests.recv() => Wake::Request(request),
          next = Pin::new(&mut *stream).peek() => Wake::Upcoming(Upcoming::of(next)),
        }
      };
      match wake {
        Wake::Request(Some(delta)) => self.apply(delta),
        Wake::Request(None) if value_waiting => return Some(Completion::Cancelled),
        Wake::Request(None) => {
          let next = Pin::new(&mut *stream).peek().await;
          return Some(match Upcoming::of(next) {
            Upcoming::Value => Completion::Cancelled,
            Upcoming::Terminal => terminal(stream).await,
          });
        }
        Wake::Upcoming(Upcoming::Value) => value_waiting = true,
        Wake::Upcoming(Upcoming::Terminal) => return Some(terminal(stream).await),
      }
    }
    None
  }
}

/// What the source has ready next.
enum Upcoming {
  Value,
  Terminal,
}

impl Upcoming {
  fn of<T>(next: Option<&Emission<T>>) -> Self {
    match next {
      Some(Ok(_)) => Upcoming::Value,
      Some(Err(_)) | None => Upcoming::Terminal,
    }
  }
}

/// Why an exhausted consumer woke up.
enum Wake {
  Request(Option<Demand>),
  Upcoming(Upcoming),
}

/// Pulls the terminal signal the source has ready.
async fn terminal<T>(stream: &mut Peekable<BoxedStream<T>>) -> Completion {
  match stream.next().await {
    Some(Err(failure)) => Completion::Failed(failure),
    _ => Completion::Finished,
  }
}

#[async_trait]
impl<T, F> Consumer for DemandConsumer<T, F>
where
  T: Display + Send + 'static,
  F: FnMut(&T) -> Demand + Send + 'static,
{
  async fn consume(&mut self, stream: Self::InputStream) -> Completion {
    let mut stream = stream.peekable();
    self.state = self.state.attach();
    self.handle = None;
    let name = self.component_info().name;
    info!(consumer = %name, demand = %self.state.initial_request, "attached");

    let completion = loop {
      if let Some(ended) = self.await_demand(&mut stream).await {
        break ended;
      }
      match stream.next().await {
        Some(Ok(value)) => {
          self.transcript.record(format!("Received value: {}", value));
          self.state = self.state.record();
          let delta = (self.policy)(&value);
          self.apply(delta);
          self.values.push(value);
        }
        Some(Err(failure)) => break Completion::Failed(failure),
        None => break Completion::Finished,
      }
    };

    self.state = self.state.terminate();
    match &completion {
      Completion::Cancelled => info!(consumer = %name, received = self.state.received, "cancelled"),
      signal => {
        self.transcript.record(format!("Received completion: {}", signal));
        info!(consumer = %name, %signal, "completed");
      }
    }
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
