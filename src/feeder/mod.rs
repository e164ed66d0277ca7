// src/feeder/mod.rs

//! Orchestration of a whole run over the wordlist directory.
//!
//! - [`discovery`] finds the `*.txt` wordlists.
//! - [`artifact`] names and writes the per-wordlist result files.
//! - [`orchestrator`] drives the sequential build → execute → persist loop.

pub mod artifact;
pub mod discovery;
pub mod orchestrator;

pub use artifact::{persist, result_path, RESULT_SUFFIX};
pub use discovery::discover_wordlists;
pub use orchestrator::{plan_commands, run_feeder, PlannedCommand};

use crate::exec::ExecutionResult;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub succeeded: usize,
    pub timed_out: usize,
    pub invalid: usize,
    pub write_failures: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &ExecutionResult) {
        self.processed += 1;
        match result {
            ExecutionResult::Success(_) => self.succeeded += 1,
            ExecutionResult::Timeout(_) => self.timed_out += 1,
            ExecutionResult::InvalidInput => self.invalid += 1,
        }
    }

    /// Whether any wordlist hit a recoverable failure.
    pub fn had_failures(&self) -> bool {
        self.timed_out + self.invalid + self.write_failures > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_outcome() {
        let mut s = RunSummary::default();
        s.record(&ExecutionResult::Success(b"ok".to_vec()));
        s.record(&ExecutionResult::Timeout(b"t".to_vec()));
        s.record(&ExecutionResult::InvalidInput);

        assert_eq!(s.processed, 3);
        assert_eq!(s.succeeded, 1);
        assert_eq!(s.timed_out, 1);
        assert_eq!(s.invalid, 1);
        assert!(s.had_failures());
    }

    #[test]
    fn clean_run_has_no_failures() {
        let mut s = RunSummary::default();
        s.record(&ExecutionResult::Success(Vec::new()));
        assert!(!s.had_failures());
    }
}
