//! # Producers
//!
//! Sources that start a pipeline.
//!
//! - **Finite sequences**: [`VecProducer`], [`RangeProducer`], [`JustProducer`]
//! - **Immediate failure**: [`FailProducer`]
//! - **Single-shot async**: [`FutureProducer`]
//! - **Manually driven broadcast channels**: [`PassthroughSubject`], [`CurrentValueSubject`]

/// Producer that fails without emitting.
pub mod fail;
/// Single-shot asynchronous producer.
pub mod future;
/// Producer of exactly one value.
pub mod just;
/// Producer of an inclusive integer range.
pub mod range;
/// Manually driven broadcast channels.
pub mod subject;
/// Producer of a vector's items.
pub mod vec;

pub use fail::FailProducer;
pub use future::FutureProducer;
pub use just::JustProducer;
pub use range::RangeProducer;
pub use subject::{CurrentValueSubject, PassthroughSubject, SubjectError};
pub use vec::VecProducer;
