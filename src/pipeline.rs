//! # Pipeline
//!
//! A typed builder that wires a producer, any number of transformers and a
//! consumer together.
//!
//! The builder moves through two states: [`Empty`] until a producer is
//! attached, then [`Flowing`] carrying the stream built so far. Each
//! transformer must accept the element type of the stream before it, so a
//! mismatched pipeline does not compile.
//!
//! ## Example
//!
//! ```rust
//! use streamweave_primer::consumers::VecConsumer;
//! use streamweave_primer::pipeline::PipelineBuilder;
//! use streamweave_primer::producers::RangeProducer;
//! use streamweave_primer::transformers::{DropTransformer, MapTransformer};
//!
//! # async fn example() {
//! let (completion, consumer) = PipelineBuilder::new()
//!   .producer(RangeProducer::new(1, 10))
//!   .transformer(DropTransformer::new(8))
//!   .transformer(MapTransformer::new(|x: i32| x * 10))
//!   .consumer(VecConsumer::new())
//!   .run()
//!   .await;
//! assert!(completion.is_finished());
//! assert_eq!(consumer.values(), vec![90, 100]);
//! # }
//! ```

use crate::completion::{BoxedStream, Completion};
use crate::consumer::Consumer;
use crate::producer::Producer;
use crate::subscription::Subscription;
use crate::transformer::Transformer;
use tracing::{debug, info};

/// Builder state before a producer is attached.
pub struct Empty;

/// Builder state once values are flowing.
pub struct Flowing<T> {
  stream: BoxedStream<T>,
}

/// Builds a [`Pipeline`] one component at a time.
pub struct PipelineBuilder<State> {
  state: State,
  stages: Vec<String>,
}

impl PipelineBuilder<Empty> {
  /// Starts an empty pipeline.
  pub fn new() -> Self {
    Self {
      state: Empty,
      stages: Vec::new(),
    }
  }

  /// Attaches the producer that starts the pipeline.
  pub fn producer<P>(mut self, mut producer: P) -> PipelineBuilder<Flowing<P::Output>>
  where
    P: Producer,
  {
    self.stages.push(producer.component_info().name);
    PipelineBuilder {
      state: Flowing {
        stream: Box::pin(producer.produce()),
      },
      stages: self.stages,
    }
  }
}

impl Default for PipelineBuilder<Empty> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> PipelineBuilder<Flowing<T>>
where
  T: Send + 'static,
{
  /// Appends a transformer.
  pub fn transformer<X>(mut self, mut transformer: X) -> PipelineBuilder<Flowing<X::Output>>
  where
    X: Transformer<Input = T>,
    X::InputStream: From<BoxedStream<T>>,
  {
    self.stages.push(transformer.component_info().name);
    let stream = transformer.transform(self.state.stream.into());
    PipelineBuilder {
      state: Flowing {
        stream: Box::pin(stream),
      },
      stages: self.stages,
    }
  }

  /// Attaches the consumer that ends the pipeline.
  pub fn consumer<C>(mut self, consumer: C) -> Pipeline<T, C>
  where
    C: Consumer<Input = T>,
    C::InputStream: From<BoxedStream<T>>,
  {
    self.stages.push(consumer.component_info().name);
    Pipeline {
      stream: self.state.stream,
      consumer,
      stages: self.stages,
    }
  }
}

/// A fully wired pipeline, ready to run.
pub struct Pipeline<T, C>
where
  C: Consumer<Input = T>,
{
  stream: BoxedStream<T>,
  consumer: C,
  stages: Vec<String>,
}

impl<T, C> Pipeline<T, C>
where
  T: Send + 'static,
  C: Consumer<Input = T>,
  C::InputStream: From<BoxedStream<T>>,
{
  /// Names of the components, producer first.
  pub fn stages(&self) -> &[String] {
    &self.stages
  }

  /// Runs the pipeline to its end on the current task.
  ///
  /// Returns how the consumer's relationship ended, and the consumer.
  pub async fn run(self) -> (Completion, C) {
    let Pipeline {
      stream,
      mut consumer,
      stages,
    } = self;
    info!(stages = ?stages, "pipeline running");
    let completion = consumer.consume(stream.into()).await;
    debug!(stages = ?stages, %completion, "pipeline ended");
    (completion, consumer)
  }

  /// Runs the pipeline on its own task.
  pub fn spawn(self) -> Subscription
  where
    C: Send + 'static,
  {
    info!(stages = ?self.stages, "pipeline spawned");
    Subscription::spawn(self.consumer, self.stream.into())
  }
}
