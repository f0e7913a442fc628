//! Scan transformer module.
//!
//! Folds every value into an accumulator and emits each intermediate
//! accumulator, starting from a fixed initial value.

/// The scan transformer implementation.
pub mod scan_transformer;
/// Transformer trait implementation for scan.
pub mod transformer;

pub use scan_transformer::ScanTransformer;
