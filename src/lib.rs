//! denops-test: launch clean Vim/Neovim instances for denops integration tests.
//!
//! - [`config`]: environment-driven configuration, resolved once per process
//! - [`runner`]: hermetic editor command lines and process spawning
//! - [`error_codec`]: error serialization across string-only boundaries
//!
//! ```no_run
//! use denops_test::runner::{RunMode, RunOptions, run};
//!
//! let mut child = run(RunMode::Nvim, ["echo 'hello'", "qall!"], &RunOptions::new())?;
//! let status = child.wait()?;
//! assert!(status.success());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod error_codec;
pub mod exit_codes;
pub mod logging;
pub mod runner;
