//! # CLI Layer
//!
//! One possible UI client for shopfront. This is the only place that knows
//! about stdout, stderr, exit codes and the tracing subscriber.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context wiring and per-command handlers
//! - `print`: terminal rendering (colors, column fitting, relative times)
//! - `logging`: tracing-subscriber installation from `-v` / `RUST_LOG`

mod commands;
mod logging;
mod print;
mod setup;

pub use commands::run;
