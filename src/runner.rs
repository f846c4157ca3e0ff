//! External command execution.
//!
//! [`run_command`] is the single place agent probes spawn processes. Every
//! failure mode — timeout, missing executable, permission error — is
//! normalized into a [`CommandResult`] carrying [`SENTINEL_EXIT_CODE`], so
//! call sites never have to handle spawn errors themselves and the check
//! pipeline stays flat.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Reserved exit code for timeouts and invocation failures.
///
/// Real processes on supported platforms exit with 0–255, so a negative
/// value cannot collide with an external command's own exit code.
pub const SENTINEL_EXIT_CODE: i32 = -1;

/// Default timeout for existence and authentication probes.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code, or [`SENTINEL_EXIT_CODE`] on timeout / invocation failure.
    pub exit_code: i32,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error. Carries the failure description when the
    /// exit code is the sentinel.
    pub stderr: String,
}

impl CommandResult {
    /// Whether the command ran and exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    fn invocation_failure(message: impl Into<String>) -> Self {
        Self {
            exit_code: SENTINEL_EXIT_CODE,
            stdout: String::new(),
            stderr: message.into(),
        }
    }
}

/// Execute a command with a timeout, capturing exit code and both streams.
///
/// The command string is split on whitespace into program + arguments. This
/// function never returns an error: spawn failures and timeouts come back
/// as a [`CommandResult`] with the sentinel exit code and the failure
/// description in `stderr`.
pub fn run_command(command: &str, timeout: Duration) -> CommandResult {
    let parts: Vec<&str> = command.split_whitespace().collect();
    let Some((program, args)) = parts.split_first() else {
        return CommandResult::invocation_failure("empty command");
    };

    tracing::debug!(command, timeout_secs = timeout.as_secs(), "running command");

    let mut child = match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => return CommandResult::invocation_failure(e.to_string()),
    };

    // Drain both pipes on their own threads; a chatty child would otherwise
    // fill a pipe buffer and never reach the exit the wait loop is polling for.
    let stdout_handle = spawn_pipe_reader(child.stdout.take());
    let stderr_handle = spawn_pipe_reader(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = stdout_handle.join();
                    let _ = stderr_handle.join();
                    tracing::debug!(command, "command timed out");
                    return CommandResult::invocation_failure(format!(
                        "Command timed out after {}s",
                        timeout.as_secs()
                    ));
                }
                thread::sleep(Duration::from_millis(20));
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                let _ = stdout_handle.join();
                let _ = stderr_handle.join();
                return CommandResult::invocation_failure(format!(
                    "failed to wait for command: {e}"
                ));
            }
        }
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();

    CommandResult {
        // code() is None when the child was killed by a signal
        exit_code: status.code().unwrap_or(SENTINEL_EXIT_CODE),
        stdout,
        stderr,
    }
}

fn spawn_pipe_reader<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
