//! Bounded subprocess execution.
//!
//! Every external invocation in xcsweep (`du`, `df`, the maintenance
//! command, the empty-trash script) goes through `run_with_timeout`, a
//! spawn-poll-kill protocol with a wall-clock bound. Timeouts surface as a
//! marker on the output, not as an error: the caller decides what expiry
//! means for its own contract.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Captured result of a bounded subprocess run.
#[derive(Debug)]
pub struct ProcOutput {
    /// Exit code (None if the process was killed or terminated by signal).
    pub exit_code: Option<i32>,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
    /// Whether the process was killed because the bound expired.
    pub timed_out: bool,
}

impl ProcOutput {
    /// True when the process exited normally with status 0.
    pub fn is_success(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Run `argv` with a wall-clock bound, capturing stdout.
///
/// Returns `Err` only for spawn-level failures (executable missing, not
/// runnable). A process that outlives the bound is killed and reported with
/// `timed_out = true`.
pub fn run_with_timeout(argv: &[&str], timeout: Duration) -> std::io::Result<ProcOutput> {
    let Some((program, args)) = argv.split_first() else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "empty command line",
        ));
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let (exit_code, timed_out) = wait_with_timeout(&mut child, timeout);

    // The commands routed through here print at most a few lines, so the
    // pipe buffer never fills before exit and a post-wait read is safe.
    let mut stdout = String::new();
    if let Some(mut pipe) = child.stdout.take() {
        let mut raw = Vec::new();
        if pipe.read_to_end(&mut raw).is_ok() {
            stdout = String::from_utf8_lossy(&raw).into_owned();
        }
    }

    Ok(ProcOutput {
        exit_code,
        stdout,
        timed_out,
    })
}

/// Wait for a child process with timeout.
///
/// Returns (exit_code, timed_out).
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> (Option<i32>, bool) {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(100);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return (status.code(), false),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    kill_process(child);
                    return (None, true);
                }
                std::thread::sleep(poll_interval);
            }
            Err(_) => {
                kill_process(child);
                return (None, false);
            }
        }
    }
}

/// Kill a process and wait for it to terminate.
fn kill_process(child: &mut Child) {
    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_on_success() {
        let out = run_with_timeout(&["echo", "hello"], Duration::from_secs(10)).unwrap();
        assert!(out.is_success());
        assert_eq!(out.exit_code, Some(0));
        assert!(!out.timed_out);
        assert_eq!(out.stdout.trim(), "hello");
    }

    #[test]
    fn reports_nonzero_exit() {
        let out = run_with_timeout(&["sh", "-c", "exit 3"], Duration::from_secs(10)).unwrap();
        assert!(!out.is_success());
        assert_eq!(out.exit_code, Some(3));
        assert!(!out.timed_out);
    }

    #[test]
    fn kills_process_on_timeout() {
        let out = run_with_timeout(&["sleep", "10"], Duration::from_millis(200)).unwrap();
        assert!(out.timed_out);
        assert_eq!(out.exit_code, None);
        assert!(!out.is_success());
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let result = run_with_timeout(&["xcsweep_no_such_binary_xyz"], Duration::from_secs(1));
        assert!(result.is_err());
    }

    #[test]
    fn empty_argv_is_an_error() {
        assert!(run_with_timeout(&[], Duration::from_secs(1)).is_err());
    }
}
