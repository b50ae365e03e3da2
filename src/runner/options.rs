//! Caller-facing options for a single editor run.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Options for [`crate::runner::run`].
///
/// The program and the three standard streams are always chosen by the
/// runner; everything else here is passed through to the spawner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Show editor output. Falls back to the configured default when unset.
    pub verbose: Option<bool>,
    /// Environment overrides for the editor process.
    pub env: BTreeMap<OsString, OsString>,
    /// Start the editor with an empty environment plus `env`.
    pub clear_env: bool,
    /// Working directory for the editor.
    pub cwd: Option<PathBuf>,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn envs<I, K, V>(mut self, envs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        self.env
            .extend(envs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn clear_env(mut self, clear_env: bool) -> Self {
        self.clear_env = clear_env;
        self
    }

    #[must_use]
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}
