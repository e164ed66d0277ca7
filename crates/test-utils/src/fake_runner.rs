use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use wordlist_feeder::errors::Result;
use wordlist_feeder::exec::{CommandRunner, ExecutionRequest, ExecutionResult, TIMEOUT_SENTINEL};

/// Scripted outcome for commands containing a given substring.
#[derive(Debug, Clone)]
enum Script {
    Output(Vec<u8>),
    Timeout,
    Invalid,
}

/// A fake runner that:
/// - records every request it receives
/// - answers with a scripted outcome when the command contains a registered
///   substring, and otherwise echoes `output for <command>`.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    requests: Arc<Mutex<Vec<ExecutionRequest>>>,
    scripts: Vec<(String, Script)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_for(mut self, needle: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.scripts.push((needle.to_string(), Script::Output(bytes.into())));
        self
    }

    pub fn timeout_for(mut self, needle: &str) -> Self {
        self.scripts.push((needle.to_string(), Script::Timeout));
        self
    }

    pub fn invalid_for(mut self, needle: &str) -> Self {
        self.scripts.push((needle.to_string(), Script::Invalid));
        self
    }

    /// Shared handle to the recorded requests.
    pub fn requests(&self) -> Arc<Mutex<Vec<ExecutionRequest>>> {
        Arc::clone(&self.requests)
    }

    /// Commands seen so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.command.clone())
            .collect()
    }

    fn answer(&self, command: &str) -> ExecutionResult {
        let script = self
            .scripts
            .iter()
            .find(|(needle, _)| command.contains(needle.as_str()))
            .map(|(_, s)| s.clone());

        match script {
            Some(Script::Output(bytes)) => ExecutionResult::Success(bytes),
            Some(Script::Timeout) => ExecutionResult::Timeout(TIMEOUT_SENTINEL.to_vec()),
            Some(Script::Invalid) => ExecutionResult::InvalidInput,
            None => ExecutionResult::Success(format!("output for {command}").into_bytes()),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(
        &'a mut self,
        request: &'a ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ExecutionResult>> + Send + 'a>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.answer(&request.command))
        })
    }
}
