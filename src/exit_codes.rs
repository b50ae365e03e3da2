//! Exit code constants for the denops-test CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing configuration)
//! - 2: The editor could not be spawned
//! - 3: The editor exited with a non-zero status

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or missing required configuration.
pub const USER_ERROR: i32 = 1;

/// Spawn failure: the editor executable could not be started.
pub const SPAWN_FAILURE: i32 = 2;

/// The editor ran but exited unsuccessfully.
pub const EDITOR_FAILURE: i32 = 3;
