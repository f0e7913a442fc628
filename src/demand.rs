//! Demand: how many values a consumer is willing to receive.
//!
//! A demand-driven consumer attaches with an initial request and may raise it
//! after each value. Deltas are [`Demand`] values, which cannot be negative, so
//! the cumulative request only ever grows. [`DemandState`] is the whole
//! bookkeeping as a plain value; every transition returns a new state.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A request for values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demand {
  /// Any number of values.
  Unlimited,
  /// At most this many values.
  Max(usize),
}

impl Demand {
  /// No additional values.
  pub const fn none() -> Self {
    Demand::Max(0)
  }

  /// At most `n` values.
  pub const fn max(n: usize) -> Self {
    Demand::Max(n)
  }

  /// Returns `true` when this asks for nothing.
  pub fn is_none(&self) -> bool {
    *self == Demand::Max(0)
  }

  /// Returns `true` while `received` values still fit within this demand.
  pub fn allows(&self, received: usize) -> bool {
    match self {
      Demand::Unlimited => true,
      Demand::Max(n) => received < *n,
    }
  }
}

impl Default for Demand {
  fn default() -> Self {
    Demand::none()
  }
}

impl Add for Demand {
  type Output = Demand;

  fn add(self, rhs: Demand) -> Demand {
    match (self, rhs) {
      (Demand::Max(a), Demand::Max(b)) => a.checked_add(b).map_or(Demand::Unlimited, Demand::Max),
      _ => Demand::Unlimited,
    }
  }
}

impl AddAssign for Demand {
  fn add_assign(&mut self, rhs: Demand) {
    *self = *self + rhs;
  }
}

impl fmt::Display for Demand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Demand::Unlimited => write!(f, "unlimited"),
      Demand::Max(n) => write!(f, "max({})", n),
    }
  }
}

/// Lifecycle of a demand-driven subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandPhase {
  /// Not attached to a source yet.
  Unattached,
  /// Attached and receiving.
  Active,
  /// A terminal signal arrived or the consumer tore the relationship down.
  Terminated,
}

/// Demand bookkeeping for one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandState {
  /// The request declared on attach.
  pub initial_request: Demand,
  /// The initial request plus every delta applied since.
  pub cumulative_request: Demand,
  /// Values received so far.
  pub received: usize,
  /// Where the subscription is in its lifecycle.
  pub phase: DemandPhase,
}

impl DemandState {
  /// An unattached subscription that will request `initial_request`.
  pub fn new(initial_request: Demand) -> Self {
    Self {
      initial_request,
      cumulative_request: Demand::none(),
      received: 0,
      phase: DemandPhase::Unattached,
    }
  }

  /// Attaches: the outstanding request becomes the initial request.
  #[must_use]
  pub fn attach(self) -> Self {
    match self.phase {
      DemandPhase::Unattached => Self {
        cumulative_request: self.initial_request,
        phase: DemandPhase::Active,
        ..self
      },
      _ => self,
    }
  }

  /// Adds `delta` to the cumulative request. No effect unless active.
  #[must_use]
  pub fn adjust(self, delta: Demand) -> Self {
    match self.phase {
      DemandPhase::Active => Self {
        cumulative_request: self.cumulative_request + delta,
        ..self
      },
      _ => self,
    }
  }

  /// Counts one received value. No effect unless active.
  #[must_use]
  pub fn record(self) -> Self {
    match self.phase {
      DemandPhase::Active => Self {
        received: self.received + 1,
        ..self
      },
      _ => self,
    }
  }

  /// Moves to [`DemandPhase::Terminated`], which is final.
  #[must_use]
  pub fn terminate(self) -> Self {
    Self {
      phase: DemandPhase::Terminated,
      ..self
    }
  }

  /// How many more values may be received.
  pub fn outstanding(&self) -> Demand {
    match self.cumulative_request {
      Demand::Unlimited => Demand::Unlimited,
      Demand::Max(n) => Demand::Max(n.saturating_sub(self.received)),
    }
  }

  /// Returns `true` when active with room for at least one more value.
  pub fn has_outstanding(&self) -> bool {
    self.phase == DemandPhase::Active && self.cumulative_request.allows(self.received)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  #[test]
  fn test_demand_addition() {
    assert_eq!(Demand::max(2) + Demand::max(3), Demand::max(5));
    assert_eq!(Demand::max(2) + Demand::none(), Demand::max(2));
    assert_eq!(Demand::max(2) + Demand::Unlimited, Demand::Unlimited);
    assert_eq!(Demand::Unlimited + Demand::max(2), Demand::Unlimited);
    assert_eq!(Demand::max(usize::MAX) + Demand::max(1), Demand::Unlimited);

    let mut demand = Demand::none();
    demand += Demand::max(4);
    assert_eq!(demand.to_string(), "max(4)");
  }

  #[test]
  fn test_state_machine() {
    let state = DemandState::new(Demand::max(2));
    assert_eq!(state.phase, DemandPhase::Unattached);
    assert!(!state.has_outstanding());
    assert_eq!(state.adjust(Demand::max(5)), state);

    let state = state.attach();
    assert_eq!(state.phase, DemandPhase::Active);
    assert_eq!(state.outstanding(), Demand::max(2));

    let state = state.record().adjust(Demand::none()).record();
    assert_eq!(state.received, 2);
    assert!(!state.has_outstanding());

    let state = state.adjust(Demand::max(1));
    assert_eq!(state.cumulative_request, Demand::max(3));
    assert_eq!(state.outstanding(), Demand::max(1));

    let state = state.terminate();
    assert!(!state.has_outstanding());
    assert_eq!(state.attach().phase, DemandPhase::Terminated);
    assert_eq!(state.record().received, 2);
  }

  #[test]
  fn test_unlimited_never_runs_out() {
    let mut state = DemandState::new(Demand::Unlimited).attach();
    for _ in 0..1000 {
      state = state.record();
    }
    assert!(state.has_outstanding());
    assert_eq!(state.outstanding(), Demand::Unlimited);
  }

  proptest! {
    #[test]
    fn test_cumulative_request_is_running_sum(
      initial in 0usize..20,
      deltas in prop::collection::vec(0usize..5, 0..30)
    ) {
      let mut state = DemandState::new(Demand::max(initial)).attach();
      let mut previous = state.cumulative_request;
      for delta in &deltas {
        state = state.adjust(Demand::max(*delta));
        // never decreases
        match (previous, state.cumulative_request) {
          (Demand::Max(a), Demand::Max(b)) => prop_assert!(b >= a),
          _ => prop_assert!(false, "finite deltas stay finite"),
        }
        previous = state.cumulative_request;
      }
      prop_assert_eq!(
        state.cumulative_request,
        Demand::max(initial + deltas.iter().sum::<usize>())
      );
    }
  }
}
