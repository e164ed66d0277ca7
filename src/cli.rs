// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `wordlist-feeder`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "wordlist-feeder",
    version,
    about = "A tool for automating bruting/fuzzing wordlists with tools of choice.",
    long_about = None
)]
pub struct CliArgs {
    /// Command to execute for every wordlist.
    ///
    /// Must contain the `<wordlist>` token; `<exec_name>` is replaced with the
    /// file name of `--exec` when given. Optional if the config file sets
    /// `feeder.command`.
    #[arg(value_name = "CMD")]
    pub cmd: Option<String>,

    /// Path to the executable tool performing the bruting/fuzzing.
    ///
    /// Commands run from the executable's parent directory.
    #[arg(long, value_name = "PATH")]
    pub exec: Option<PathBuf>,

    /// Optional config file (TOML). CLI flags take precedence over it.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory scanned for `*.txt` wordlists.
    #[arg(long, value_name = "DIR")]
    pub wordlists: Option<PathBuf>,

    /// Directory receiving `<wordlist>_results.txt` files.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Per-wordlist time limit in seconds (fractions allowed).
    ///
    /// Without it every command runs to completion.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Append to existing result files instead of overwriting them.
    #[arg(long)]
    pub append: bool,

    /// Shell used to interpret the command. Defaults to `$SHELL`.
    #[arg(long, value_name = "PATH", conflicts_with = "direct")]
    pub shell: Option<PathBuf>,

    /// Run the command without a shell (split on whitespace).
    #[arg(long)]
    pub direct: bool,

    /// Durable log file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WORDLIST_FEEDER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the command planned for every wordlist, but don't execute any.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
