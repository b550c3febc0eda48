//! Plan command: preview a reconciliation without touching the file

use colored::Colorize;
use filedata_core::{ManagedFile, ReconciliationPlan};

use crate::context::Context;
use crate::error::Result;

pub fn run_plan(ctx: &Context, name: &str, lines: Vec<String>, json: bool) -> Result<()> {
    let desired = ManagedFile::new(name, lines);
    let ledger = ctx.load_ledger()?;
    let current = match ledger.get(name) {
        Some(recorded) => ctx.resource.read(recorded)?,
        None => None,
    };
    let plan = ctx.resource.plan(current.as_ref(), &desired)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    print_plan(name, &plan);
    Ok(())
}

fn print_plan(name: &str, plan: &ReconciliationPlan) {
    if plan.is_empty() {
        println!("{} No changes for {}.", "OK".green().bold(), name.cyan());
        return;
    }

    println!("{} {}:", "Plan for".bold(), name.cyan());
    for write in plan.writes() {
        if write.is_append(plan.previous_len()) {
            println!("  {} line {}: {}", "+".green(), write.index, write.value);
        } else {
            println!("  {} line {}: {}", "~".yellow(), write.index, write.value);
        }
    }
    if let Some(length) = plan.trim() {
        println!(
            "  {} trim to {} lines (drop {})",
            "-".red(),
            length,
            plan.previous_len() - length
        );
    }
    println!();
    println!(
        "{} {} operation(s).",
        "Total:".dimmed(),
        plan.operation_count()
    );
}
