//! Demand consumer module.
//!
//! A consumer that pulls values only while it has outstanding demand. It
//! attaches with an initial request, and a policy may raise the request after
//! every value it receives. When the demand runs out the consumer suspends
//! until a [`DemandHandle`] asks for more.
//!
//! The demand never shrinks: the policy and the handle both return
//! [`Demand`](crate::demand::Demand) deltas, which cannot be negative.

/// Consumer trait implementation for demand.
pub mod consumer;
/// The demand consumer implementation.
pub mod demand_consumer;

pub use demand_consumer::{DemandConsumer, DemandError, DemandHandle};
