// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`template`] turns the configured command template into a concrete
//!   command line for one wordlist.
//! - [`engine`] runs one command line as a child process, captures its
//!   combined output and enforces the optional deadline.
//! - [`backend`] provides the `CommandRunner` trait and the concrete
//!   `ProcessRunner` the orchestration loop uses in production, and which
//!   tests can replace with a fake implementation.

pub mod backend;
pub mod engine;
pub mod template;

pub use backend::{CommandRunner, ProcessRunner};
pub use engine::{execute, ExecutionRequest};
pub use template::{CommandTemplate, EXEC_NAME_TOKEN, WORDLIST_TOKEN};

/// Payload written in place of real output when a command hits its deadline.
pub const TIMEOUT_SENTINEL: &[u8] = b"* [TIMEOUT] Command execution timed out *";

/// Outcome of a single command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The command exited on its own; trimmed stdout+stderr.
    Success(Vec<u8>),
    /// The command was killed at its deadline; carries [`TIMEOUT_SENTINEL`].
    Timeout(Vec<u8>),
    /// The command line was unusable and nothing was spawned.
    InvalidInput,
}

impl ExecutionResult {
    /// Bytes to persist for this outcome, if any.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            ExecutionResult::Success(bytes) | ExecutionResult::Timeout(bytes) => Some(bytes),
            ExecutionResult::InvalidInput => None,
        }
    }
}
