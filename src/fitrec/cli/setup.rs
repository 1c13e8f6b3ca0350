use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fitrec", bin_name = "fitrec", version)]
#[command(about = "Record and query strength-training sessions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the worker executable
    #[arg(long, global = true, default_value = "./mcp", value_name = "PATH")]
    pub server: PathBuf,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Record a training session interactively
    Record {
        /// Session date (YYYY-MM-DD), defaults to today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        /// Free-text notes for the session
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Show training history for a date range
    History {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long, value_name = "YYYY-MM-DD")]
        start: String,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(long, value_name = "YYYY-MM-DD")]
        end: String,
    },

    /// Show personal records
    Records {
        /// Only show records for this exercise
        #[arg(long, value_name = "NAME")]
        exercise: Option<String>,
    },

    /// Record a sample session dated today
    Quick,
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
