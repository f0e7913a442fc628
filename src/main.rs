//! Runs the narrated demonstrations.
//!
//! ```text
//! streamweave-primer            # list demonstrations
//! streamweave-primer all        # run every demonstration
//! streamweave-primer blackjack  # run one
//! ```

use std::process::ExitCode;
use streamweave_primer::demos::{self, Demo};
use streamweave_primer::transcript::Transcript;
use tracing::{debug, error};

fn list(catalog: &[Demo]) {
  let width = catalog.iter().map(|demo| demo.name.len()).max().unwrap_or(0);
  println!("Available demonstrations:");
  for demo in catalog {
    println!("  {:width$}  {}", demo.name, demo.summary, width = width);
  }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
  let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
    .with_target(false)
    .init();

  let catalog = demos::catalog();
  match std::env::args().nth(1).as_deref() {
    None | Some("list") => list(&catalog),
    Some("all") => {
      for demo in &catalog {
        debug!(demo = demo.name, "running");
        demo.run(Transcript::new()).await;
        println!();
      }
    }
    Some(name) => match demos::find(name) {
      Ok(demo) => {
        demo.run(Transcript::new()).await;
      }
      Err(unknown) => {
        error!(%unknown, "cannot run");
        eprintln!("{}", unknown);
        list(&catalog);
        return ExitCode::FAILURE;
      }
    },
  }
  ExitCode::SUCCESS
}
