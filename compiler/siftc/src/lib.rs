//! Sift CLI library.
//!
//! Hosts everything `siftc` does besides argument dispatch, so tests can
//! drive the demonstrations without spawning the binary:
//!
//! - [`config`]: command-line and environment configuration
//! - [`demos`]: the match-statement tutorial as arm tables
//! - [`output`]: stdout or in-memory line sink
//! - [`init_tracing`]: subscriber setup

pub mod config;
pub mod demos;
pub mod output;
mod tracing_setup;

pub use config::{parse_args, CliConfig, Command, UsageError};
pub use demos::{find_demo, run_demos, Demo, DemoError, RunError, DEMOS};
pub use output::Output;
pub use tracing_setup::init_tracing;
