//! # CLI Behavior
//!
//! The only place that knows about the terminal, exit codes and colors.
//!
//! - `fitrec` with no subcommand prints usage and exits 0.
//! - `record` prompts for exercises on stdin, then submits them.
//! - `history` and `records` query the worker and print its text verbatim.
//! - `quick` submits a fixed sample session dated today.
//!
//! Worker-reported errors are printed in red and the command still exits 0.
//! Transport failures and bad numeric input exit 1 with `Error: ...` on stderr.

mod commands;
mod print;
pub mod setup;

pub use commands::run;
