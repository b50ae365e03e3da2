//! The resolved configuration record and its construction from a key lookup.

use crate::error::{DenopsTestError, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Required: local path to the denops.vim repository.
pub const ENV_DENOPS_PATH: &str = "DENOPS_TEST_DENOPS_PATH";

/// Optional: Vim executable override.
pub const ENV_VIM_EXECUTABLE: &str = "DENOPS_TEST_VIM_EXECUTABLE";

/// Optional: Neovim executable override.
pub const ENV_NVIM_EXECUTABLE: &str = "DENOPS_TEST_NVIM_EXECUTABLE";

/// Optional: default verbosity for spawned editors.
pub const ENV_VERBOSE: &str = "DENOPS_TEST_VERBOSE";

pub const DEFAULT_VIM_EXECUTABLE: &str = "vim";
pub const DEFAULT_NVIM_EXECUTABLE: &str = "nvim";

/// Configuration settings for denops testing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Absolute, resolved path to the denops.vim repository.
    pub denops_path: PathBuf,

    /// Vim executable, passed to the spawner as-is.
    pub vim_executable: PathBuf,

    /// Neovim executable, passed to the spawner as-is.
    pub nvim_executable: PathBuf,

    /// Default verbosity when a run does not set one explicitly.
    pub verbose: bool,
}

impl Config {
    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Fails with [`DenopsTestError::MissingRequiredConfig`] when
    /// `DENOPS_TEST_DENOPS_PATH` is unset or empty. Empty executable overrides
    /// are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let raw_denops_path =
            non_empty(ENV_DENOPS_PATH).ok_or(DenopsTestError::MissingRequiredConfig {
                var: ENV_DENOPS_PATH,
            })?;

        Ok(Self {
            denops_path: resolve_path(Path::new(&raw_denops_path))?,
            vim_executable: non_empty(ENV_VIM_EXECUTABLE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_VIM_EXECUTABLE)),
            nvim_executable: non_empty(ENV_NVIM_EXECUTABLE)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_NVIM_EXECUTABLE)),
            verbose: non_empty(ENV_VERBOSE).is_some_and(|value| is_truthy(&value)),
        })
    }

    /// Build a configuration from the current process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var_os(key))
    }
}

/// Resolve `path` to an absolute path.
///
/// Existing paths are canonicalized (symlinks resolved). Paths that do not
/// exist yet are joined onto the current directory and normalized lexically.
pub(crate) fn resolve_path(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return Ok(canonical);
    }

    let absolute = std::path::absolute(path).map_err(|source| DenopsTestError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_lexically(&absolute))
}

/// Drop `.` segments and fold `..` into their parent without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn is_truthy(value: &std::ffi::OsStr) -> bool {
    let value = value.to_string_lossy();
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
