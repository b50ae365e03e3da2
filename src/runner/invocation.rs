//! A fully-built editor command line, ready to spawn.

use crate::error::Result;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use tracing::debug;

/// Where a child output stream goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRouting {
    /// Shared with the parent process.
    Inherit,
    /// Discarded.
    Null,
    /// Captured for the caller to read.
    Piped,
}

impl StreamRouting {
    fn to_stdio(self) -> Stdio {
        match self {
            StreamRouting::Inherit => Stdio::inherit(),
            StreamRouting::Null => Stdio::null(),
            StreamRouting::Piped => Stdio::piped(),
        }
    }
}

/// Specification of an editor process to spawn.
///
/// Arguments are discrete elements and never pass through a shell, so Vim
/// commands containing spaces, quotes or `|` reach the editor untouched.
/// Stdin is always piped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The editor executable.
    pub program: PathBuf,
    /// Arguments in the order the editor receives them.
    pub args: Vec<String>,
    /// Environment overrides applied on top of (or instead of) the parent's.
    pub env: BTreeMap<OsString, OsString>,
    /// Clear the inherited environment before applying `env`.
    pub clear_env: bool,
    /// Working directory for the editor.
    pub cwd: Option<PathBuf>,
    pub stdout: StreamRouting,
    pub stderr: StreamRouting,
}

impl Invocation {
    /// Convert into a `std::process::Command` with streams configured.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);

        if self.clear_env {
            command.env_clear();
        }
        command.envs(&self.env);

        if let Some(ref cwd) = self.cwd {
            command.current_dir(cwd);
        }

        command
            .stdin(Stdio::piped())
            .stdout(self.stdout.to_stdio())
            .stderr(self.stderr.to_stdio());
        command
    }

    /// Render as a shell-quoted command line, for logs and diagnostics only.
    pub fn command_line(&self) -> String {
        let program = self.program.to_string_lossy();
        shell_words::join(std::iter::once(&*program).chain(self.args.iter().map(String::as_str)))
    }

    /// Spawn the editor and return immediately.
    ///
    /// The caller owns the child: waiting, killing and draining piped
    /// streams are its responsibility.
    pub fn spawn(&self) -> Result<Child> {
        debug!(command = %self.command_line(), "spawning editor");
        let child = self.to_command().spawn()?;
        debug!(pid = child.id(), "editor spawned");
        Ok(child)
    }
}
