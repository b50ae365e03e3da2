//! Editor process launcher.
//!
//! Builds a hermetic command line for Vim or Neovim and spawns it:
//!
//! - Vim: `-u NONE -i NONE -n -N -X -e -s -c visual`, i.e. no vimrc, plugins,
//!   viminfo or swap file, Ex mode in silent/batch mode, then back to Normal
//!   mode so later `-c` commands run as ordinary editor commands
//! - Neovim: `--clean --headless -n`
//!
//! Caller commands follow as one `-c <cmd>` pair each, in order.

mod invocation;
mod mode;
mod options;


use crate::config::{Config, get_config};
use crate::error::Result;
use std::process::Child;

pub use invocation::{Invocation, StreamRouting};
pub use mode::{RunMode, is_run_mode};
pub use options::RunOptions;

const VIM_BASE_ARGS: &[&str] = &[
    "-u", "NONE", // Disable vimrc, plugins, defaults.vim
    "-i", "NONE", // Disable viminfo
    "-n", // Disable swap file
    "-N", // Disable compatible mode
    "-X", // Disable xterm
    "-e", // Start Vim in Ex mode
    "-s", // Silent or batch mode ("-e" is required before)
    "-c", "visual", // Go to Normal mode
];

const NVIM_BASE_ARGS: &[&str] = &["--clean", "--headless", "-n"];

/// Redirects `:messages` output to the terminal so Ex-mode output is visible.
#[cfg(windows)]
const VIM_REDIR_STDOUT: &str = "redir > CON";
#[cfg(not(windows))]
const VIM_REDIR_STDOUT: &str = "redir >> /dev/stdout";

/// Run `commands` in a clean editor of the given `mode`.
///
/// Resolves the process-wide configuration (first use reads the environment)
/// and returns the spawned child without waiting for it.
///
/// # Errors
///
/// Configuration errors from [`get_config`] and spawn errors from the OS are
/// returned unchanged.
pub fn run<I, S>(mode: RunMode, commands: I, options: &RunOptions) -> Result<Child>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = get_config()?;
    run_with_config(config, mode, commands, options)
}

/// Like [`run`], against an explicit configuration.
pub fn run_with_config<I, S>(
    config: &Config,
    mode: RunMode,
    commands: I,
    options: &RunOptions,
) -> Result<Child>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    build_invocation(config, mode, commands, options).spawn()
}

/// Build the full invocation for a run without spawning anything.
pub fn build_invocation<I, S>(
    config: &Config,
    mode: RunMode,
    commands: I,
    options: &RunOptions,
) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let verbose = options.verbose.unwrap_or(config.verbose);

    let (program, base_args) = match mode {
        RunMode::Vim => (&config.vim_executable, VIM_BASE_ARGS),
        RunMode::Nvim => (&config.nvim_executable, NVIM_BASE_ARGS),
    };

    let mut args = Vec::new();
    if verbose && mode == RunMode::Vim {
        args.push("--cmd".to_string());
        args.push(VIM_REDIR_STDOUT.to_string());
    }
    args.extend(base_args.iter().map(|arg| arg.to_string()));
    for command in commands {
        args.push("-c".to_string());
        args.push(command.into());
    }

    let (stdout, stderr) = if verbose {
        (StreamRouting::Inherit, StreamRouting::Inherit)
    } else {
        (StreamRouting::Null, StreamRouting::Piped)
    };

    Invocation {
        program: program.clone(),
        args,
        env: options.env.clone(),
        clear_env: options.clear_env,
        cwd: options.cwd.clone(),
        stdout,
        stderr,
    }
}
