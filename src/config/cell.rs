//! Write-once storage for the process-wide configuration.

use super::model::Config;
use crate::error::Result;
use std::ffi::OsString;
use std::sync::OnceLock;
use tracing::debug;

static CONFIG: ConfigCell = ConfigCell::new();

/// A single-assignment configuration cache.
///
/// The first successful resolution is committed and returned by every later
/// call; a failed resolution commits nothing, so the next call tries again.
/// Concurrent first calls may each read their source, but only one result is
/// ever stored and every caller observes that one.
#[derive(Debug, Default)]
pub struct ConfigCell {
    cell: OnceLock<Config>,
}

impl ConfigCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached configuration, resolving it through `lookup` on first use.
    pub fn get_or_resolve<F>(&self, lookup: F) -> Result<&Config>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(config) = self.cell.get() {
            return Ok(config);
        }

        let resolved = Config::from_lookup(lookup)?;
        let config = self.cell.get_or_init(|| resolved);
        debug!(
            denops_path = %config.denops_path.display(),
            vim_executable = %config.vim_executable.display(),
            nvim_executable = %config.nvim_executable.display(),
            verbose = config.verbose,
            "resolved denops test configuration"
        );
        Ok(config)
    }

    /// The committed configuration, if resolution has already succeeded.
    pub fn get(&self) -> Option<&Config> {
        self.cell.get()
    }
}

/// Retrieve the configuration for denops testing.
///
/// Reads the environment on the first call and returns the cached
/// configuration afterwards, even if the environment has changed since.
///
/// # Errors
///
/// Returns [`crate::error::DenopsTestError::MissingRequiredConfig`] if
/// `DENOPS_TEST_DENOPS_PATH` is unset or empty.
pub fn get_config() -> Result<&'static Config> {
    CONFIG.get_or_resolve(|key| std::env::var_os(key))
}
