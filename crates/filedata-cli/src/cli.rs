//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// filedata - Keep line files in sync with their declared contents
#[derive(Parser, Debug)]
#[command(name = "filedata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory managed files live in (overrides config and environment)
    #[arg(long, global = true, value_name = "DIR")]
    pub base_path: Option<PathBuf>,

    /// Config file to load (defaults to ./filedata.toml when present)
    #[arg(long, global = true, value_name = "FILE", env = "FILEDATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create or update a file so it holds exactly the given lines
    ///
    /// Examples:
    ///   filedata apply hosts "127.0.0.1 localhost" "::1 localhost"
    Apply {
        /// File name (lowercase letters and digits)
        name: String,

        /// Lines, in order
        #[arg(required = true, num_args = 1..)]
        lines: Vec<String>,
    },

    /// Preview what apply would change
    Plan {
        /// File name (lowercase letters and digits)
        name: String,

        /// Lines, in order
        #[arg(required = true, num_args = 1..)]
        lines: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Refresh a managed file from disk and print its lines
    Show {
        /// File name
        name: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Delete a managed file and forget its state
    Destroy {
        /// File name
        name: String,
    },

    /// List managed files
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
