use crate::consumer::ConsumerConfig;
use crate::transcript::Transcript;
use std::fmt::Display;
use std::marker::PhantomData;

/// A consumer that prints what it receives.
///
/// An unnamed console prints `Received value: 3` and
/// `Received completion: finished`. Naming it with `with_name` prefixes the
/// lines, as in `dealer received value: 3`.
///
/// # Example
///
/// ```rust
/// use streamweave_primer::consumer::Consumer;
/// use streamweave_primer::consumers::ConsoleConsumer;
/// use streamweave_primer::transcript::Transcript;
///
/// # async fn example() {
/// let transcript = Transcript::quiet();
/// let mut console = ConsoleConsumer::with_transcript(transcript.clone());
/// let input = Box::pin(futures::stream::iter(vec![Ok(7)]));
/// console.consume(input).await;
/// assert_eq!(
///   transcript.lines(),
///   vec!["Received value: 7", "Received completion: finished"]
/// );
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleConsumer<T>
where
  T: Display + Send + 'static,
{
  pub(crate) transcript: Transcript,
  /// Configuration for the consumer.
  pub config: ConsumerConfig,
  _phantom: PhantomData<fn(T)>,
}

impl<T> ConsoleConsumer<T>
where
  T: Display + Send + 'static,
{
  /// Creates a new `ConsoleConsumer` printing to stdout.
  pub fn new() -> Self {
    Self::with_transcript(Transcript::new())
  }

  /// Creates a new `ConsoleConsumer` that prints into `transcript`.
  pub fn with_transcript(transcript: Transcript) -> Self {
    Self {
      transcript,
      config: ConsumerConfig::default(),
      _phantom: PhantomData,
    }
  }

  /// Formats one printed line.
  pub(crate) fn line(&self, event: &str, payload: &dyn Display) -> String {
    match self.config.name() {
      "" => format!("Received {}: {}", event, payload),
      label => format!("{} received {}: {}", label, event, payload),
    }
  }
}

impl<T> Default for ConsoleConsumer<T>
where
  T: Display + Send + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
