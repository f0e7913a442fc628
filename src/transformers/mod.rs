//! # Transformers Module
//!
//! The stages a pipeline can put between a producer and a consumer.
//!
//! ## Overview
//!
//! - **Mapping**: [`MapTransformer`], [`TryMapTransformer`], [`CompactMapTransformer`],
//!   [`FlatMapTransformer`]
//! - **Filtering**: [`FilterTransformer`], [`RemoveDuplicatesTransformer`]
//! - **Accumulating**: [`ScanTransformer`], [`CollectTransformer`]
//! - **Dropping leading values**: [`DropTransformer`], [`DropWhileTransformer`],
//!   [`DropUntilTransformer`]
//! - **Keeping leading values**: [`PrefixTransformer`], [`PrefixWhileTransformer`],
//!   [`FirstTransformer`]
//! - **Keeping the final value**: [`LastTransformer`]
//!
//! ## Error Handling
//!
//! A failure arriving from upstream is passed through unchanged and ends the
//! output stream. Only [`TryMapTransformer`] raises failures of its own, and
//! its configured error strategy decides what to do with them:
//!
//! - **Stop**: Deliver the failure downstream (default)
//! - **Skip**: Drop the value that failed to convert
//! - **Retry**: Re-run the conversion up to the configured count
//! - **Custom**: Let a handler decide
//!
//! ## Example Usage
//!
//! ```rust
//! use futures::StreamExt;
//! use streamweave_primer::producer::Producer;
//! use streamweave_primer::producers::RangeProducer;
//! use streamweave_primer::transformer::Transformer;
//! use streamweave_primer::transformers::FilterTransformer;
//!
//! # async fn example() {
//! let mut threes = FilterTransformer::new(|x: &i32| x % 3 == 0);
//! let values: Vec<i32> = threes
//!   .transform(RangeProducer::new(1, 10).produce())
//!   .map(|e| e.unwrap())
//!   .collect()
//!   .await;
//! assert_eq!(values, vec![3, 6, 9]);
//! # }
//! ```

/// Gathers every value into one vector.
pub mod collect;
/// Maps values to optional outputs, dropping `None`.
pub mod compact_map;
/// Drops a fixed number of leading values.
pub mod drop;
/// Drops values until a trigger producer emits.
pub mod drop_until;
/// Drops leading values while a predicate holds.
pub mod drop_while;
/// Passes values that satisfy a predicate.
pub mod filter;
/// Passes the first (matching) value.
pub mod first;
/// Maps values to producers and merges them.
pub mod flat_map;
/// Passes the final value.
pub mod last;
/// Maps values with an infallible function.
pub mod map;
/// Passes a fixed number of leading values.
pub mod prefix;
/// Passes leading values while a predicate holds.
pub mod prefix_while;
/// Suppresses consecutive duplicates.
pub mod remove_duplicates;
/// Emits a running accumulation.
pub mod scan;
/// Maps values with a fallible function.
pub mod try_map;

pub use collect::CollectTransformer;
pub use compact_map::CompactMapTransformer;
pub use drop::DropTransformer;
pub use drop_until::DropUntilTransformer;
pub use drop_while::DropWhileTransformer;
pub use filter::FilterTransformer;
pub use first::FirstTransformer;
pub use flat_map::FlatMapTransformer;
pub use last::LastTransformer;
pub use map::MapTransformer;
pub use prefix::PrefixTransformer;
pub use prefix_while::PrefixWhileTransformer;
pub use remove_duplicates::RemoveDuplicatesTransformer;
pub use scan::ScanTransformer;
pub use try_map::TryMapTransformer;
