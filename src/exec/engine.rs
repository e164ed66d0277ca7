// src/exec/engine.rs

//! Single-command process execution with an optional deadline.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, error, warn};

use crate::config::FeederConfig;
use crate::diagnostics::print_err;
use crate::errors::{FeederError, Result};
use crate::exec::{ExecutionResult, TIMEOUT_SENTINEL};

const CHUNK_SIZE: usize = 8 * 1024;

/// Everything needed to run one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    /// Fully substituted command line.
    pub command: String,
    /// Interpreter for the command; `None` executes argv directly.
    pub shell: Option<PathBuf>,
    /// Working directory of the child; `None` inherits ours.
    pub working_dir: Option<PathBuf>,
    /// Time limit; `None` blocks until the child exits.
    pub deadline: Option<Duration>,
}

impl ExecutionRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            shell: None,
            working_dir: None,
            deadline: None,
        }
    }

    /// Request for `command` using the shell, working directory and deadline
    /// from the run configuration.
    pub fn from_config(command: impl Into<String>, cfg: &FeederConfig) -> Self {
        Self {
            command: command.into(),
            shell: cfg.shell.clone(),
            working_dir: cfg.working_dir(),
            deadline: cfg.deadline,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

/// Run `request` to completion (or until its deadline) and capture the
/// combined stdout/stderr.
///
/// - Well-formed command that exits on its own: `Success` with the output,
///   leading/trailing whitespace stripped. The exit code does not matter.
/// - Deadline reached: the child is killed and reaped, `Timeout` carries
///   [`TIMEOUT_SENTINEL`]. A zero deadline expires before anything is spawned.
/// - Blank command or one containing a NUL byte: `InvalidInput`, nothing is
///   spawned.
///
/// Timeouts and invalid input are reported on STDERR and in the log. Failing
/// to spawn or wait for the child is an error.
pub async fn execute(request: &ExecutionRequest) -> Result<ExecutionResult> {
    let Some(mut cmd) = build_command(request) else {
        print_err(&format!(
            "Input command {:?} is not a valid command string",
            request.command
        ));
        error!(command = %request.command, "input command is not a valid command string");
        return Ok(ExecutionResult::InvalidInput);
    };

    if request.deadline.is_some_and(|d| d.is_zero()) {
        report_timeout(&request.command);
        return Ok(ExecutionResult::Timeout(TIMEOUT_SENTINEL.to_vec()));
    }

    debug!(command = %request.command, shell = ?request.shell, "spawning command");

    let mut child = cmd.spawn().map_err(|source| FeederError::SpawnError {
        command: request.command.clone(),
        source,
    })?;

    let finished = match request.deadline {
        Some(deadline) => tokio::time::timeout(deadline, capture_merged(&mut child))
            .await
            .ok(),
        None => Some(capture_merged(&mut child).await),
    };

    match finished {
        Some(captured) => {
            let output = captured.map_err(|source| FeederError::SpawnError {
                command: request.command.clone(),
                source,
            })?;
            Ok(ExecutionResult::Success(trim_output(&output).to_vec()))
        }
        None => {
            kill_process_group(&child);
            if let Err(e) = child.kill().await {
                warn!(command = %request.command, error = %e, "failed to kill timed out process");
            }
            report_timeout(&request.command);
            Ok(ExecutionResult::Timeout(TIMEOUT_SENTINEL.to_vec()))
        }
    }
}

/// Strip leading/trailing whitespace: ASCII whitespace plus vertical tab,
/// which `u8::is_ascii_whitespace` leaves out.
fn trim_output(bytes: &[u8]) -> &[u8] {
    let is_space = |b: &u8| b.is_ascii_whitespace() || *b == 0x0b;
    let start = bytes.iter().position(|b| !is_space(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// The child leads its own process group; take down anything it started too
/// (e.g. the tool under `sh -c`).
#[cfg(unix)]
fn kill_process_group(child: &Child) {
    let Some(pid) = child.id() else {
        return;
    };
    // SAFETY: plain syscall on a pid we spawned; a stale group only yields ESRCH.
    let rc = unsafe { libc::kill(-(pid as libc::pid_t), libc::SIGKILL) };
    if rc != 0 {
        debug!(pid, error = %io::Error::last_os_error(), "process group kill failed");
    }
}

#[cfg(not(unix))]
fn kill_process_group(_child: &Child) {}

fn report_timeout(command: &str) {
    print_err(&format!(
        "Process for {command} timed out before finishing execution"
    ));
    error!(%command, "process timed out before finishing execution");
}

/// Build the process command, or `None` if the command line is unusable.
fn build_command(request: &ExecutionRequest) -> Option<Command> {
    let line = request.command.as_str();
    if line.trim().is_empty() || line.contains('\0') {
        return None;
    }

    let mut cmd = match request.shell.as_deref() {
        Some(shell) => {
            let mut c = Command::new(shell);
            c.arg(shell_flag(shell)).arg(line);
            c
        }
        None => {
            let mut argv = line.split_whitespace();
            let program = argv.next()?;
            let mut c = Command::new(program);
            c.args(argv);
            c
        }
    };

    if let Some(dir) = request.working_dir.as_deref() {
        cmd.current_dir(dir);
    }

    #[cfg(unix)]
    cmd.process_group(0);

    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    Some(cmd)
}

/// `/C` for `cmd.exe`, `-c` for everything else.
fn shell_flag(shell: &Path) -> &'static str {
    let is_cmd = shell
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.eq_ignore_ascii_case("cmd"));
    if is_cmd { "/C" } else { "-c" }
}

/// Drain stdout and stderr into one buffer, in the order the chunks arrive,
/// then wait for the child to exit.
async fn capture_merged(child: &mut Child) -> io::Result<Vec<u8>> {
    let mut stdout = child.stdout.take();
    let mut stderr = child.stderr.take();
    let mut merged = Vec::new();
    let mut out_buf = [0u8; CHUNK_SIZE];
    let mut err_buf = [0u8; CHUNK_SIZE];

    loop {
        tokio::select! {
            read = read_chunk(&mut stdout, &mut out_buf), if stdout.is_some() => {
                match read? {
                    0 => stdout = None,
                    n => merged.extend_from_slice(&out_buf[..n]),
                }
            }
            read = read_chunk(&mut stderr, &mut err_buf), if stderr.is_some() => {
                match read? {
                    0 => stderr = None,
                    n => merged.extend_from_slice(&err_buf[..n]),
                }
            }
            else => break,
        }
    }

    let status = child.wait().await?;
    debug!(exit_code = ?status.code(), bytes = merged.len(), "command exited");
    Ok(merged)
}

async fn read_chunk<R>(pipe: &mut Option<R>, buf: &mut [u8]) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    match pipe {
        Some(p) => p.read(buf).await,
        None => std::future::pending().await,
    }
}
