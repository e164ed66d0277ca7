// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The orchestration loop talks to a `CommandRunner` instead of calling
//! [`execute`](super::engine::execute) directly. This makes it easy to swap
//! in a fake runner in tests while keeping the production process handling
//! in [`engine`](super::engine).
//!
//! - `ProcessRunner` is the default implementation used by `wordlist-feeder`.
//!   It spawns a real child process for every request.
//! - Tests can provide their own `CommandRunner` that, for example, records
//!   which commands were requested and returns scripted outcomes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::ExecutionResult;
use super::engine::{execute, ExecutionRequest};

/// Trait abstracting how a built command is executed.
///
/// Production code uses [`ProcessRunner`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandRunner: Send {
    /// Run one request to completion and report its outcome.
    ///
    /// The loop awaits every call before issuing the next one, so an
    /// implementation never sees overlapping requests.
    fn run<'a>(
        &'a mut self,
        request: &'a ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + 'a>>;
}

/// Real runner used in production.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    fn run<'a>(
        &'a mut self,
        request: &'a ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + 'a>> {
        Box::pin(execute(request))
    }
}
