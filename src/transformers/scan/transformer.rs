use super::scan_transformer::ScanTransformer;
use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::StreamExt;

impl<F, T, A> Input for ScanTransformer<F, T, A>
where
  F: FnMut(A, T) -> A + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  A: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = T;
  type InputStream = BoxedStream<T>;
}

impl<F, T, A> Output for ScanTransformer<F, T, A>
where
  F: FnMut(A, T) -> A + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  A: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = A;
  type OutputStream = BoxedStream<A>;
}

impl<F, T, A> Transformer for ScanTransformer<F, T, A>
where
  F: FnMut(A, T) -> A + Send + Clone + 'static,
  T: std::fmt::Debug + Clone + Send + Sync + 'static,
  A: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut function = self.function.clone();
    let mut accumulator = self.initial.clone();
    until_failure(input.map(move |emission| {
      emission.map(|value| {
        accumulator = function(accumulator.clone(), value);
        accumulator.clone()
      })
    }))
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

#[cfg(test)]
mod tests {
  use super::*;
  use crate::completion::drain;
  use crate::producer::Producer;
  use crate::producers::VecProducer;
  use proptest::prelude::*;

  #[tokio::test]
  async fn test_emits_every_intermediate_total() {
    let mut transformer = ScanTransformer::new(50, |total: i32, gain: i32| total + gain);
    let input = VecProducer::new(vec![10, -3, 7, -12, 5]).produce();
    let mut seen = Vec::new();
    drain(transformer.transform(input), |v| seen.push(v)).await;
    assert_eq!(seen, vec![60, 57, 64, 52, 57]);
  }

  #[tokio::test]
  async fn test_restarts_from_initial() {
    let mut transformer = ScanTransformer::new(String::new(), |mut s: String, c: char| {
      s.push(c);
      s
    });
    for _ in 0..2 {
      let mut seen = Vec::new();
      drain(transformer.transform(VecProducer::new(vec!['a', 'b']).produce()), |v| seen.push(v)).await;
      assert_eq!(seen, vec!["a", "ab"]);
    }
  }

  proptest! {
    #[test]
    fn test_last_accumulator_is_the_sum(data in prop::collection::vec(-1000i64..1000, 1..50)) {
      let mut transformer = ScanTransformer::new(0i64, |a: i64, b: i64| a + b);
      let stream = transformer.transform(VecProducer::new(data.clone()).produce());
      let mut totals = Vec::new();
      tokio_test::block_on(drain(stream, |v| totals.push(v)));
      prop_assert_eq!(totals.len(), data.len());
      prop_assert_eq!(totals.last().copied(), Some(data.iter().sum::<i64>()));
    }
  }
}
