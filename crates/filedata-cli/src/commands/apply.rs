//! Apply command: create or reconcile a managed file

use colored::Colorize;
use filedata_core::ManagedFile;

use crate::context::Context;
use crate::error::Result;

pub fn run_apply(ctx: &Context, name: &str, lines: Vec<String>) -> Result<()> {
    let desired = ManagedFile::new(name, lines);
    let mut ledger = ctx.load_ledger()?;
    let recorded = ledger.get(name).cloned();

    // Reconcile from what is on disk, not from what was last recorded.
    let actual = match &recorded {
        Some(recorded) => ctx.resource.read(recorded)?,
        None => None,
    };

    let (state, verb) = match actual {
        Some(actual) => {
            let plan = ctx.resource.plan(Some(&actual), &desired)?;
            if plan.is_empty() {
                if recorded.as_ref() != Some(&actual) {
                    ledger.upsert(actual);
                    ctx.save_ledger(&ledger)?;
                }
                println!("{} {} is up to date.", "OK".green().bold(), name.cyan());
                return Ok(());
            }
            (ctx.resource.update(&actual, &desired)?, "Updated")
        }
        None => {
            if ledger.remove(name).is_some() {
                eprintln!(
                    "{} {} no longer exists on disk; recreating it.",
                    "warning:".yellow().bold(),
                    name
                );
            }
            (ctx.resource.create(&desired)?, "Created")
        }
    };

    let count = state.lines.len();
    ledger.upsert(state);
    ctx.save_ledger(&ledger)?;

    println!(
        "{} {} {} ({} lines)",
        "OK".green().bold(),
        verb,
        name.cyan(),
        count
    );
    Ok(())
}
