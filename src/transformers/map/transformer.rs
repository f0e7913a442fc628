use super::map_transformer::MapTransformer;
use crate::completion::{BoxedStream, until_failure};
use crate::input::Input;
use crate::output::Output;
use crate::transformer::{Transformer, TransformerConfig};
use futures::StreamExt;

impl<F, I, O> Input for MapTransformer<F, I, O>
where
  F: FnMut(I) -> O + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Input = I;
  type InputStream = BoxedStream<I>;
}

impl<F, I, O> Output for MapTransformer<F, I, O>
where
  F: FnMut(I) -> O + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  type Output = O;
  type OutputStream = BoxedStream<O>;
}

impl<F, I, O> Transformer for MapTransformer<F, I, O>
where
  F: FnMut(I) -> O + Send + Clone + 'static,
  I: std::fmt::Debug + Clone + Send + Sync + 'static,
  O: std::fmt::Debug + Clone + Send + Sync + 'static,
{
  fn transform(&mut self, input: Self::InputStream) -> Self::OutputStream {
    let mut function = self.function.clone();
    until_failure(input.map(move |emission| emission.map(&mut function)))
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
  use crate::producers::{FailProducer, VecProducer};
  use crate::error::StringError;

  #[tokio::test]
  async fn test_map_changes_type() {
    let mut transformer = MapTransformer::new(|x: i32| format!("#{}", x));
    let input = VecProducer::new(vec![1, 2, 3]).produce();
    let mut seen = Vec::new();
    let completion = drain(transformer.transform(input), |v| seen.push(v)).await;
    assert!(completion.is_finished());
    assert_eq!(seen, vec!["#1", "#2", "#3"]);
  }

  #[tokio::test]
  async fn test_map_passes_failure_through() {
    let mut transformer = MapTransformer::new(|x: i32| x + 1);
    let input = FailProducer::new(StringError("no input".to_string())).produce();
    let completion = drain(transformer.transform(input), |_| {}).await;
    assert_eq!(completion.to_string(), "failure(no input)");
  }

  #[tokio::test]
  async fn test_stateful_function_is_fresh_per_transform() {
    let mut count = 0;
    let mut transformer = MapTransformer::new(move |x: i32| {
      count += 1;
      (count, x)
    });
    for _ in 0..2 {
      let mut seen = Vec::new();
      drain(transformer.transform(VecProducer::new(vec![7, 8]).produce()), |v| seen.push(v)).await;
      assert_eq!(seen, vec![(1, 7), (2, 8)]);
    }
  }
}
