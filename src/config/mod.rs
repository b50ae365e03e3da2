//! Environment-driven configuration for denops-test.
//!
//! Configuration is read from the process environment the first time it is
//! requested and cached for the rest of the process lifetime:
//!
//! - `DENOPS_TEST_DENOPS_PATH`: local path to the denops.vim repository (required)
//! - `DENOPS_TEST_VIM_EXECUTABLE`: Vim executable (default: `vim`)
//! - `DENOPS_TEST_NVIM_EXECUTABLE`: Neovim executable (default: `nvim`)
//! - `DENOPS_TEST_VERBOSE`: default verbosity for spawned editors (default: off)

mod cell;
mod model;


// Re-export public API
pub use cell::{ConfigCell, get_config};
pub use model::{
    Config, DEFAULT_NVIM_EXECUTABLE, DEFAULT_VIM_EXECUTABLE, ENV_DENOPS_PATH, ENV_NVIM_EXECUTABLE,
    ENV_VERBOSE, ENV_VIM_EXECUTABLE,
};
