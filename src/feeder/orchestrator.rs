// src/feeder/orchestrator.rs

//! The per-wordlist loop: build, execute, persist.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::FeederConfig;
use crate::diagnostics::report_io_failure;
use crate::errors::Result;
use crate::exec::{CommandRunner, ExecutionRequest};
use crate::fs::FileSystem;

use super::RunSummary;
use super::artifact::{persist, result_path};
use super::discovery::discover_wordlists;

/// A command that would be run for one wordlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    pub wordlist: PathBuf,
    pub command: String,
    pub result_file: PathBuf,
}

/// Build the command for every discovered wordlist without running anything.
///
/// Command lines are UTF-8, so a wordlist path that is not gets its invalid
/// bytes replaced with U+FFFD; that is logged as a warning.
pub fn plan_commands(cfg: &FeederConfig, fs: &dyn FileSystem) -> Result<Vec<PlannedCommand>> {
    let wordlists = discover_wordlists(fs, &cfg.wordlist_dir)?;
    Ok(wordlists
        .into_iter()
        .map(|wordlist| {
            if wordlist.to_str().is_none() {
                warn!(wordlist = ?wordlist, "path is not valid UTF-8; substituted lossily");
            }
            PlannedCommand {
                command: cfg.template.build(&wordlist, cfg.exec_name()),
                result_file: result_path(&cfg.output_dir, &wordlist),
                wordlist,
            }
        })
        .collect())
}

/// Run the configured command once per wordlist, strictly one at a time.
///
/// Failures that belong to a single wordlist (timeout, invalid command,
/// result-file write error) are reported and counted, and the loop moves on.
/// Anything else (discovery failure, a command that cannot be spawned) aborts
/// the run and is returned to the caller.
pub async fn run_feeder<R>(
    cfg: &FeederConfig,
    runner: &mut R,
    fs: &dyn FileSystem,
) -> Result<RunSummary>
where
    R: CommandRunner + ?Sized,
{
    let plan = plan_commands(cfg, fs)?;
    info!(
        wordlists = plan.len(),
        dir = ?cfg.wordlist_dir,
        mode = %cfg.write_mode,
        "starting wordlist run"
    );

    let mut summary = RunSummary::default();

    for planned in plan {
        let file_name = planned
            .wordlist
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("[+] Running {} on {}", cfg.tool_label(), file_name);
        info!(wordlist = %file_name, command = %planned.command, "running command");

        let request = ExecutionRequest::from_config(planned.command, cfg);
        let result = runner.run(&request).await?;
        summary.record(&result);

        let Some(bytes) = result.payload() else {
            warn!(wordlist = %file_name, "no output produced; skipping result file");
            continue;
        };

        if let Err(err) = persist(fs, &planned.result_file, bytes, cfg.write_mode) {
            let failure = report_io_failure(&planned.result_file, cfg.write_mode, &err);
            warn!(wordlist = %file_name, ?failure, "result file not written");
            summary.write_failures += 1;
        }
    }

    info!(?summary, "wordlist run finished");
    Ok(summary)
}
