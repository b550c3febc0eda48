//! Destroy command: delete a managed file and its state

use colored::Colorize;
use filedata_core::Error;

use crate::context::Context;
use crate::error::Result;

pub fn run_destroy(ctx: &Context, name: &str) -> Result<()> {
    let mut ledger = ctx.load_ledger()?;
    let state = ledger.remove(name).ok_or_else(|| Error::UnknownResource {
        name: name.to_string(),
    })?;

    ctx.resource.delete(&state)?;
    ctx.save_ledger(&ledger)?;

    println!("{} Destroyed {}", "OK".green().bold(), name.cyan());
    Ok(())
}
