//! List command: managed files recorded in the ledger

use colored::Colorize;
use serde::Serialize;

use crate::context::Context;
use crate::error::Result;

#[derive(Serialize)]
struct ListEntry<'a> {
    file_name: &'a str,
    path: String,
    lines: usize,
}

pub fn run_list(ctx: &Context, json: bool) -> Result<()> {
    let ledger = ctx.load_ledger()?;
    let entries: Vec<ListEntry<'_>> = ledger
        .files()
        .iter()
        .map(|f| ListEntry {
            file_name: &f.file_name,
            path: ctx.resource.path_for(&f.file_name).display().to_string(),
            lines: f.lines.len(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!(
            "No managed files. Use {} to create one.",
            "filedata apply <name> <line>...".cyan()
        );
        return Ok(());
    }

    println!("{}", "Managed Files".bold());
    for entry in &entries {
        println!(
            "  {:<16} {:>4} lines  {}",
            entry.file_name.green(),
            entry.lines,
            entry.path.dimmed()
        );
    }
    Ok(())
}
