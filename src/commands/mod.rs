//! Command implementations for denops-test.
//!
//! Routes parsed CLI commands to their handlers.

mod run;

use crate::cli::Command;
use denops_test::config::get_config;
use denops_test::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Config => cmd_config(),
        Command::Run(args) => run::cmd_run(args),
    }
}

fn cmd_config() -> Result<()> {
    let config = get_config()?;
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
