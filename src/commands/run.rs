//! `denops-test run`: spawn an editor and see it through to exit.

use crate::cli::RunArgs;
use denops_test::config::get_config;
use denops_test::error::{DenopsTestError, Result};
use denops_test::runner::{RunMode, RunOptions, run_with_config};
use std::io::Read;
use std::process::Child;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long to keep reading stderr once the editor itself has exited or been
/// killed. Processes it left behind may hold the pipe open indefinitely.
const STDERR_GRACE: Duration = Duration::from_secs(2);

pub(super) fn cmd_run(args: RunArgs) -> Result<()> {
    let config = get_config()?;
    let options = run_options(&args);

    let mut child = run_with_config(config, args.mode, args.commands, &options)?;

    let start = Instant::now();
    let (outcome, captured) = await_editor(
        &mut child,
        args.mode,
        Duration::from_secs(args.timeout),
        STDERR_GRACE,
    );
    debug!(mode = %args.mode, elapsed_ms = start.elapsed().as_millis() as u64, "editor finished");

    match outcome? {
        WaitOutcome::Exited(Some(0)) => Ok(()),
        WaitOutcome::Exited(code) => {
            if !captured.is_empty() {
                eprint!("{}", captured);
            }
            Err(DenopsTestError::EditorFailed {
                mode: args.mode.to_string(),
                code,
            })
        }
        WaitOutcome::TimedOut => {
            if !captured.is_empty() {
                eprint!("{}", captured);
            }
            Err(DenopsTestError::EditorTimedOut {
                mode: args.mode.to_string(),
                timeout_seconds: args.timeout,
            })
        }
    }
}

fn run_options(args: &RunArgs) -> RunOptions {
    let mut options = RunOptions::new()
        .envs(args.env.iter().cloned())
        .clear_env(args.clear_env);
    if let Some(verbose) = args.verbose {
        options = options.verbose(verbose);
    }
    if let Some(ref cwd) = args.cwd {
        options = options.cwd(cwd);
    }
    options
}

#[derive(Debug)]
enum WaitOutcome {
    Exited(Option<i32>),
    TimedOut,
}

/// Close stdin, wait for the editor under `timeout`, then collect whatever
/// stderr arrives within `grace`.
fn await_editor(
    child: &mut Child,
    mode: RunMode,
    timeout: Duration,
    grace: Duration,
) -> (Result<WaitOutcome>, String) {
    // EOF on stdin lets Ex mode finish instead of waiting for input
    drop(child.stdin.take());
    let stderr = drain_stderr(child);
    let outcome = wait_with_timeout(child, mode, timeout);
    (outcome, collect_stderr(stderr, grace))
}

/// Read captured stderr on a separate thread so a chatty editor cannot fill
/// the pipe and block while we poll for exit.
fn drain_stderr(child: &mut Child) -> Option<Receiver<String>> {
    let mut pipe = child.stderr.take()?;
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Err(err) = pipe.read_to_end(&mut buf) {
            warn!(error = %err, "failed to read editor stderr, output may be incomplete");
        }
        // The receiver is gone if the grace period already ran out
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    Some(rx)
}

/// Wait at most `grace` for the drain thread. The thread is left behind if a
/// leftover process still holds the pipe.
fn collect_stderr(stderr: Option<Receiver<String>>, grace: Duration) -> String {
    let Some(rx) = stderr else {
        return String::new();
    };
    match rx.recv_timeout(grace) {
        Ok(captured) => captured,
        Err(RecvTimeoutError::Timeout) => {
            warn!(
                grace_ms = grace.as_millis() as u64,
                "editor stderr still open after exit, a leftover process may hold it"
            );
            String::new()
        }
        Err(RecvTimeoutError::Disconnected) => String::new(),
    }
}

/// Poll the child until it exits or `timeout` elapses, killing it on timeout.
fn wait_with_timeout(child: &mut Child, mode: RunMode, timeout: Duration) -> Result<WaitOutcome> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(WaitOutcome::Exited(status.code())),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    warn!(%mode, timeout_seconds = timeout.as_secs(), "editor timed out, killing");
                    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(WaitOutcome::TimedOut);
                }
                std::thread::sleep(poll_interval);
            }
            Err(source) => {
                return Err(DenopsTestError::Wait {
                    mode: mode.to_string(),
                    source,
                });
            }
        }
    }
}
