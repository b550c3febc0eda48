//! Show command: refresh a managed file from disk

use colored::Colorize;
use filedata_core::{Error, ManagedFile};

use crate::context::Context;
use crate::error::Result;

pub fn run_show(ctx: &Context, name: &str, json: bool) -> Result<()> {
    let mut ledger = ctx.load_ledger()?;
    let state = ledger
        .get(name)
        .cloned()
        .ok_or_else(|| Error::UnknownResource {
            name: name.to_string(),
        })?;

    let Some(refreshed) = ctx.resource.read(&state)? else {
        // The file vanished: forget it so the next apply recreates it.
        ledger.remove(name);
        ctx.save_ledger(&ledger)?;
        eprintln!(
            "{} {} no longer exists on disk; removed from state.",
            "warning:".yellow().bold(),
            name
        );
        return Ok(());
    };

    ledger.upsert(refreshed.clone());
    ctx.save_ledger(&ledger)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&refreshed)?);
    } else {
        print_lines(&refreshed);
    }
    Ok(())
}

fn print_lines(file: &ManagedFile) {
    println!("{} ({} lines)", file.file_name.cyan().bold(), file.lines.len());
    let width = file.lines.len().to_string().len();
    for (i, line) in file.lines.iter().enumerate() {
        println!("  {} {}", format!("{:>width$}", i + 1).dimmed(), line);
    }
}
