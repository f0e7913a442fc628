//! # StreamWeave Primer
//!
//! Reactive streams in small, runnable pieces.
//!
//! A [`Producer`](producer::Producer) hands out streams of values ending in one
//! terminal signal. [`Transformer`](transformer::Transformer)s reshape those
//! streams, and a [`Consumer`](consumer::Consumer) observes them and reports how
//! the relationship ended as a [`Completion`](completion::Completion).
//! Subjects let code push values in by hand, and the
//! [`DemandConsumer`](consumers::DemandConsumer) only receives as many values
//! as it has asked for.
//!
//! The [`demos`] module strings these together into narrated scenarios.
//!
//! ## Quick Start
//!
//! ```rust
//! use streamweave_primer::consumers::VecConsumer;
//! use streamweave_primer::pipeline::PipelineBuilder;
//! use streamweave_primer::producers::RangeProducer;
//! use streamweave_primer::transformers::FilterTransformer;
//!
//! # async fn example() {
//! let (completion, consumer) = PipelineBuilder::new()
//!   .producer(RangeProducer::new(1, 10))
//!   .transformer(FilterTransformer::new(|n: &i32| n % 3 == 0))
//!   .consumer(VecConsumer::new())
//!   .run()
//!   .await;
//! assert!(completion.is_finished());
//! assert_eq!(consumer.values(), vec![3, 6, 9]);
//! # }
//! ```

#![deny(missing_docs)]

/// Terminal signals and the boxed stream type.
pub mod completion;
/// The consumer trait.
pub mod consumer;
/// Built-in consumers.
pub mod consumers;
/// Demand bookkeeping for demand-driven consumers.
pub mod demand;
/// Narrated demonstrations.
pub mod demos;
/// Error types and strategies.
pub mod error;
/// The input side of a component.
pub mod input;
/// The output side of a component.
pub mod output;
/// Typed pipeline builder.
pub mod pipeline;
/// The producer trait.
pub mod producer;
/// Built-in producers and subjects.
pub mod producers;
/// Cancellable subscriptions.
pub mod subscription;
/// Shared line recorder used by printing consumers.
pub mod transcript;
/// The transformer trait.
pub mod transformer;
/// Built-in transformers.
pub mod transformers;

pub use completion::{BoxedStream, Completion, Emission};
pub use consumer::{Consumer, ConsumerConfig};
pub use demand::{Demand, DemandPhase, DemandState};
pub use error::{ComponentInfo, ErrorAction, ErrorContext, ErrorStrategy, StreamError};
pub use input::Input;
pub use output::Output;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use producer::{Producer, ProducerConfig};
pub use subscription::{Subscription, SubscriptionSet};
pub use transcript::Transcript;
pub use transformer::{Transformer, TransformerConfig};
