// src/lib.rs

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod exec;
pub mod feeder;
pub mod fs;
pub mod logging;
pub mod types;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::FeederConfig;
use crate::errors::{FeederError, Result};
use crate::exec::ProcessRunner;
use crate::feeder::{plan_commands, run_feeder, RunSummary};
use crate::fs::{FileSystem, RealFileSystem};

const BANNER: &str = r#"
 _ _ _           _ _ _     _      ___           _
| | | |___ ___ _| | |_|___| |_   |  _|___ ___ _| |___ ___
| | | | . |  _| . | | |_ -|  _|  |  _| -_| -_| . | -_|  _|
|_____|___|_| |___|_|_|___|_|    |_| |___|___|___|___|_|
"#;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution (file + CLI + `$SHELL`)
/// - durable logging
/// - wordlist / result directory bootstrap
/// - the sequential wordlist loop with the real process runner
pub async fn run(args: CliArgs) -> Result<RunSummary> {
    let cfg = config::resolve(&args, config::env_shell())?;
    logging::init_logging(&cfg.log_file, args.log_level)?;
    debug!(?cfg, "resolved configuration");

    println!("{BANNER}");

    let fs = RealFileSystem;
    bootstrap_dirs(&cfg, &fs)?;

    if args.dry_run {
        print_dry_run(&cfg, &fs)?;
        return Ok(RunSummary::default());
    }

    let mut runner = ProcessRunner::new();
    let summary = run_feeder(&cfg, &mut runner, &fs).await?;

    println!("{}", summary_line(&summary));
    Ok(summary)
}

/// One-line report printed after the loop; the breakdown only appears when
/// something went wrong.
fn summary_line(summary: &RunSummary) -> String {
    if !summary.had_failures() {
        return format!("[*] Finished {} wordlist(s)", summary.processed);
    }
    format!(
        "[*] Finished {} wordlist(s) with failures: {} ok, {} timed out, {} invalid, {} write failure(s)",
        summary.processed,
        summary.succeeded,
        summary.timed_out,
        summary.invalid,
        summary.write_failures
    )
}

/// Make sure the wordlist and output directories exist.
///
/// A missing wordlist directory is created and reported as a configuration
/// error: there is nothing to run until wordlists are added to it.
pub fn bootstrap_dirs(cfg: &FeederConfig, fs: &dyn FileSystem) -> Result<()> {
    if !fs.is_dir(&cfg.wordlist_dir) {
        fs.create_dir_all(&cfg.wordlist_dir)?;
        return Err(FeederError::ConfigError(format!(
            "{} folder missing .. now created so add wordlists in it and try again",
            cfg.wordlist_dir.display()
        )));
    }

    if !fs.is_dir(&cfg.output_dir) {
        fs.create_dir_all(&cfg.output_dir)?;
        info!(dir = ?cfg.output_dir, "created output directory");
    }

    Ok(())
}

/// Simple dry-run output: print config and the command planned per wordlist.
fn print_dry_run(cfg: &FeederConfig, fs: &dyn FileSystem) -> Result<()> {
    println!("wordlist-feeder dry-run");
    println!("  template = {}", cfg.template);
    if let Some(ref exec) = cfg.exec_path {
        println!("  exec = {}", exec.display());
    }
    match cfg.shell {
        Some(ref shell) => println!("  shell = {}", shell.display()),
        None => println!("  shell = (none, direct execution)"),
    }
    match cfg.deadline {
        Some(d) => println!("  timeout = {:.3}s", d.as_secs_f64()),
        None => println!("  timeout = (none)"),
    }
    println!("  write_mode = {}", cfg.write_mode);
    println!();

    let plan = plan_commands(cfg, fs)?;
    println!("wordlists ({}):", plan.len());
    for planned in &plan {
        println!("  - {}", planned.wordlist.display());
        println!("      cmd: {}", planned.command);
        println!("      result: {}", planned.result_file.display());
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::CommandTemplate;
    use crate::fs::mock::MockFileSystem;
    use std::path::PathBuf;

    fn cfg() -> FeederConfig {
        FeederConfig::new_unchecked(
            CommandTemplate::parse("mytool -w <wordlist>").unwrap(),
            PathBuf::from("/dock"),
            PathBuf::from("/out"),
        )
    }

    #[test]
    fn summary_line_breaks_down_only_failed_runs() {
        let clean = RunSummary {
            processed: 2,
            succeeded: 2,
            ..RunSummary::default()
        };
        assert_eq!(summary_line(&clean), "[*] Finished 2 wordlist(s)");

        let failed = RunSummary {
            processed: 3,
            succeeded: 1,
            timed_out: 1,
            write_failures: 1,
            ..RunSummary::default()
        };
        assert_eq!(
            summary_line(&failed),
            "[*] Finished 3 wordlist(s) with failures: 1 ok, 1 timed out, 0 invalid, 1 write failure(s)"
        );
    }

    #[test]
    fn missing_wordlist_dir_is_created_then_rejected() {
        let fs = MockFileSystem::new();
        let err = bootstrap_dirs(&cfg(), &fs).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(fs.is_dir(&PathBuf::from("/dock")));
        assert!(!fs.is_dir(&PathBuf::from("/out")));
    }

    #[test]
    fn missing_output_dir_is_created() {
        let fs = MockFileSystem::new();
        fs.add_dir("/dock");
        bootstrap_dirs(&cfg(), &fs).unwrap();
        assert!(fs.is_dir(&PathBuf::from("/out")));
    }
}
