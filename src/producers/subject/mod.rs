//! Subjects: manually driven broadcast channels.
//!
//! A subject is fed from outside the pipeline with synchronous calls
//! (`send`, `finish`, `fail`) and hands each subscriber its own stream. Values
//! are buffered per subscriber, so a slow subscriber never blocks the sender.
//!
//! - [`PassthroughSubject`] forwards only what is sent after subscribing.
//! - [`CurrentValueSubject`] also replays its current value to new subscribers.
//!
//! Once a subject terminates, later sends are rejected and late subscribers
//! receive just the terminal signal.

/// Subject that replays its current value.
pub mod current_value_subject;
/// Subject without replay.
pub mod passthrough_subject;
mod state;

pub use current_value_subject::CurrentValueSubject;
pub use passthrough_subject::PassthroughSubject;

/// Errors raised when driving a subject.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
  /// The subject already delivered its terminal signal.
  #[error("subject already terminated")]
  Terminated,
}
