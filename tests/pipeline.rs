use async_trait::async_trait;
use futures::{StreamExt, stream};
use std::fmt;
use streamweave_primer::completion::{BoxedStream, Completion, drain, until_failure};
use streamweave_primer::consumers::VecConsumer;
use streamweave_primer::error::{ComponentInfo, ErrorContext, ErrorStrategy, StreamError};
use streamweave_primer::transformers::{MapTransformer, PrefixTransformer, TryMapTransformer};
use streamweave_primer::{
  Consumer, ConsumerConfig, Input, Output, PipelineBuilder, Producer, ProducerConfig, Transformer,
  TransformerConfig,
};

// Test types and errors
#[derive(Debug, Clone, PartialEq)]
enum TestError {
  Odd(i32),
}

impl fmt::Display for TestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Odd(n) => write!(f, "{} is odd", n),
    }
  }
}

impl std::error::Error for TestError {}

// A producer that counts up from zero
#[derive(Clone)]
struct NumberProducer {
  range: std::ops::Range<i32>,
  config: ProducerConfig,
}

impl Output for NumberProducer {
  type Output = i32;
  type OutputStream = BoxedStream<i32>;
}

impl Producer for NumberProducer {
  fn produce(&mut self) -> Self::OutputStream {
    Box::pin(stream::iter(self.range.clone().map(Ok)))
  }

  fn set_config_impl(&mut self, config: ProducerConfig) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &ProducerConfig {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut ProducerConfig {
    &mut self.config
  }
}

fn numbers(range: std::ops::Range<i32>) -> NumberProducer {
  NumberProducer {
    range,
    config: ProducerConfig::default(),
  }
}

// A transformer that doubles numbers
struct DoubleTransformer {
  config: TransformerConfig,
}

impl Input for DoubleTransformer {
  type Input = i32;
  type InputStream = BoxedStream<i32>;
}

impl Output for DoubleTransformer {
  type Output = i32;
  type OutputStream = BoxedStream<i32>;
}

impl Transformer for DoubleTransformer {
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    until_failure(input.map(|e| e.map(|x| x * 2)))
  }

  fn set_config_impl(&mut self, config: TransformerConfig) {
    self.config = config;
  }

  fn get_config_impl(&self) -> &TransformerConfig {
    &self.config
  }

  fn get_config_mut_impl(&mut self) -> &mut TransformerConfig {
    &mut self.config
  }
}

// A consumer that joins everything into one string
struct CollectorConsumer {
  collected: String,
  config: ConsumerConfig,
}

impl Input for CollectorConsumer {
  type Input = String;
  type InputStream = BoxedStream<String>;
}

#[async_trait]
impl Consumer for CollectorConsumer {
  async fn consume(&mut self, stream: Self::InputStream) -> Completion {
    let collected = &mut self.collected;
    drain(stream, |item| collected.push_str(&item)).await
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

fn even(n: i32) -> Result<i32, TestError> {
  if n % 2 == 0 { Ok(n) } else { Err(TestError::Odd(n)) }
}

#[tokio::test]
async fn test_pipeline() {
  let consumer = CollectorConsumer {
    collected: String::new(),
    config: ConsumerConfig::default(),
  };
  let pipeline = PipelineBuilder::new()
    .producer(numbers(0..3).with_name("numbers".to_string()))
    .transformer(DoubleTransformer {
      config: TransformerConfig::default(),
    })
    .transformer(MapTransformer::new(|x: i32| x.to_string()))
    .consumer(consumer.with_name("collector".to_string()));
  assert_eq!(
    pipeline.stages(),
    &["numbers", "transformer", "transformer", "collector"]
  );

  let (completion, consumer) = pipeline.run().await;
  assert!(completion.is_finished());
  assert_eq!(consumer.collected, "024");
}

#[tokio::test]
async fn test_pipeline_error_propagation() {
  let (completion, consumer) = PipelineBuilder::new()
    .producer(numbers(0..10))
    .transformer(TryMapTransformer::new(|n: i32| even(n / 2)))
    .consumer(VecConsumer::new())
    .run()
    .await;

  assert_eq!(consumer.values(), vec![0, 0]);
  assert_eq!(completion.to_string(), "failure(1 is odd)");
  let failure = completion.error().unwrap();
  assert_eq!(failure.downcast_ref::<TestError>(), Some(&TestError::Odd(1)));
  assert_eq!(failure.context.item.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_pipeline_skips_by_strategy() {
  let (completion, consumer) = PipelineBuilder::new()
    .producer(numbers(0..10))
    .transformer(TryMapTransformer::new(even).with_error_strategy(ErrorStrategy::Skip))
    .transformer(PrefixTransformer::new(3))
    .consumer(VecConsumer::new())
    .run()
    .await;

  assert!(completion.is_finished());
  assert_eq!(consumer.values(), vec![0, 2, 4]);
}

#[tokio::test]
async fn test_upstream_failure_reaches_consumer_once() {
  let failure = StreamError::new(
    TestError::Odd(7),
    ErrorContext::default(),
    ComponentInfo::default(),
  );
  let mut doubler = DoubleTransformer {
    config: TransformerConfig::default(),
  };
  let input: BoxedStream<i32> = Box::pin(stream::iter(vec![Ok(1), Err(failure), Ok(3)]));
  let emissions: Vec<_> = doubler.transform(input).collect().await;

  assert_eq!(emissions.len(), 2);
  assert_eq!(*emissions[0].as_ref().unwrap(), 2);
  assert!(emissions[1].is_err());
}

#[tokio::test]
async fn test_spawned_pipeline_joins() {
  let consumer = VecConsumer::new();
  let record = consumer.clone();
  let completion = PipelineBuilder::new()
    .producer(numbers(0..4))
    .consumer(consumer)
    .spawn()
    .join()
    .await;

  assert!(completion.is_finished());
  assert_eq!(record.values(), vec![0, 1, 2, 3]);
  assert!(record.completion().unwrap().is_finished());
}
