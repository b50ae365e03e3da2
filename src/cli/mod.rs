//! CLI argument parsing for denops-test.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use denops_test::runner::RunMode;
use std::path::PathBuf;

/// denops-test: launch clean Vim/Neovim instances for denops integration tests.
///
/// Configuration comes from the environment:
/// DENOPS_TEST_DENOPS_PATH (required), DENOPS_TEST_VIM_EXECUTABLE,
/// DENOPS_TEST_NVIM_EXECUTABLE and DENOPS_TEST_VERBOSE.
#[derive(Parser, Debug)]
#[command(name = "denops-test")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit debug logs to stderr (overridden by RUST_LOG).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for denops-test.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration as JSON.
    Config,

    /// Run commands in a clean editor and wait for it to exit.
    ///
    /// Stdin is closed immediately. End the command list with `-c 'qall!'`
    /// so the editor terminates on its own.
    Run(RunArgs),
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Editor backend: `vim` or `nvim`.
    pub mode: RunMode,

    /// Editor command to execute (repeatable, runs in order).
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    pub commands: Vec<String>,

    /// Show editor output instead of capturing stderr.
    ///
    /// `--verbose=false` forces quiet output even when DENOPS_TEST_VERBOSE is
    /// set; omitting the flag uses the configured default.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub verbose: Option<bool>,

    /// Environment override for the editor (repeatable).
    #[arg(long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub env: Vec<(String, String)>,

    /// Start the editor with an empty environment plus `--env` overrides.
    #[arg(long)]
    pub clear_env: bool,

    /// Working directory for the editor.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Kill the editor after this many seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,
}

fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}
