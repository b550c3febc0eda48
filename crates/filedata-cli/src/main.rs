//! filedata CLI
//!
//! Declare the lines a file should hold; filedata writes only what changed.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} failed to set up logging: {}", "warning:".yellow().bold(), e);
    }
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;
    let ctx = Context::resolve(&cwd, cli.config.as_deref(), cli.base_path)?;

    execute_command(&ctx, cli.command)
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply { name, lines } => commands::run_apply(ctx, &name, lines),
        Commands::Plan { name, lines, json } => commands::run_plan(ctx, &name, lines, json),
        Commands::Show { name, json } => commands::run_show(ctx, &name, json),
        Commands::Destroy { name } => commands::run_destroy(ctx, &name),
        Commands::List { json } => commands::run_list(ctx, json),
    }
}
