//! A shared record of what a demonstration printed.
//!
//! Every line recorded is echoed to stdout and kept, so the binary shows a
//! narrated run while tests can assert on the exact output.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, append-only list of printed lines.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
  lines: Arc<Mutex<Vec<String>>>,
  quiet: bool,
}

impl Transcript {
  /// A transcript that echoes to stdout.
  pub fn new() -> Self {
    Self::default()
  }

  /// A transcript that only records.
  pub fn quiet() -> Self {
    Self {
      quiet: true,
      ..Self::default()
    }
  }

  fn lock(&self) -> MutexGuard<'_, Vec<String>> {
    self.lines.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Prints and keeps `line`.
  pub fn record(&self, line: impl Into<String>) {
    let line = line.into();
    if !self.quiet {
      println!("{}", line);
    }
    self.lock().push(line);
  }

  /// Every line recorded so far.
  pub fn lines(&self) -> Vec<String> {
    self.lock().clone()
  }

  /// Number of lines recorded so far.
  pub fn len(&self) -> usize {
    self.lock().len()
  }

  /// Returns `true` when nothing was recorded yet.
  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }
}
