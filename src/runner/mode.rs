//! Editor backend selection.

use crate::error::DenopsTestError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The editor backend a test runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Vim, driven through Ex mode.
    Vim,
    /// Neovim, run headless.
    Nvim,
}

impl RunMode {
    /// All supported modes, in a stable order.
    pub const ALL: [RunMode; 2] = [RunMode::Vim, RunMode::Nvim];

    /// Convert the mode to its textual form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RunMode::Vim => "vim",
            RunMode::Nvim => "nvim",
        }
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = DenopsTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vim" => Ok(RunMode::Vim),
            "nvim" => Ok(RunMode::Nvim),
            other => Err(DenopsTestError::InvalidRunMode(other.to_string())),
        }
    }
}

/// Check whether `s` names a supported run mode.
pub fn is_run_mode(s: &str) -> bool {
    s.parse::<RunMode>().is_ok()
}
