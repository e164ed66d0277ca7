// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::CliArgs;
use crate::config::model::{FeederConfig, RawConfigFile};
use crate::errors::{FeederError, Result};
use crate::types::WriteMode;

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`resolve`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        FeederError::ConfigError(format!("cannot read config file {}: {e}", path.display()))
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Build the run configuration from CLI arguments.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads the TOML file named by `--config`, if any.
/// - Lets every CLI flag override the matching file value.
/// - Falls back to `env_shell` (normally `$SHELL`) when no shell was chosen
///   and `--direct` is not set.
/// - Validates the result (template tokens, executable path, timeout).
pub fn resolve(args: &CliArgs, env_shell: Option<PathBuf>) -> Result<FeederConfig> {
    let raw = match args.config.as_deref() {
        Some(path) => load_from_path(path)?,
        None => RawConfigFile::default(),
    };
    let merged = merge_cli(raw, args, env_shell);
    FeederConfig::try_from(merged)
}

/// Shell reference from the environment.
pub fn env_shell() -> Option<PathBuf> {
    std::env::var_os("SHELL").map(PathBuf::from)
}

fn merge_cli(mut raw: RawConfigFile, args: &CliArgs, env_shell: Option<PathBuf>) -> RawConfigFile {
    let f = &mut raw.feeder;

    if let Some(cmd) = &args.cmd {
        f.command = Some(cmd.clone());
    }
    if let Some(exec) = &args.exec {
        f.exec = Some(exec.clone());
    }
    if let Some(dir) = &args.wordlists {
        f.wordlists = Some(dir.clone());
    }
    if let Some(dir) = &args.output {
        f.output = Some(dir.clone());
    }
    if let Some(secs) = args.timeout {
        f.timeout = Some(secs);
    }
    if args.append {
        f.write_mode = Some(WriteMode::Append);
    }
    if let Some(shell) = &args.shell {
        f.shell = Some(shell.clone());
        f.direct = false;
    }
    if args.direct {
        f.direct = true;
    }
    if f.shell.is_none() {
        f.shell = env_shell;
    }
    if let Some(log) = &args.log_file {
        f.log_file = Some(log.clone());
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn args(cmd: &str) -> CliArgs {
        CliArgs {
            cmd: Some(cmd.to_string()),
            ..CliArgs::default()
        }
    }

    #[test]
    fn cli_only_uses_env_shell() {
        let cfg = resolve(&args("mytool -w <wordlist>"), Some(PathBuf::from("/bin/zsh"))).unwrap();
        assert_eq!(cfg.shell, Some(PathBuf::from("/bin/zsh")));
        assert_eq!(cfg.template.as_str(), "mytool -w <wordlist>");
    }

    #[test]
    fn direct_flag_ignores_env_shell() {
        let mut a = args("mytool -w <wordlist>");
        a.direct = true;
        let cfg = resolve(&a, Some(PathBuf::from("/bin/zsh"))).unwrap();
        assert_eq!(cfg.shell, None);
    }

    #[test]
    fn cli_overrides_file_values() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[feeder]
command = "from-file -w <wordlist>"
output = "file-results"
timeout = 10
shell = "/bin/bash"
"#
        )
        .unwrap();

        let mut a = args("from-cli -w <wordlist>");
        a.config = Some(file.path().to_path_buf());
        a.timeout = Some(0.5);
        a.append = true;

        let cfg = resolve(&a, Some(PathBuf::from("/bin/zsh"))).unwrap();
        assert_eq!(cfg.template.as_str(), "from-cli -w <wordlist>");
        assert_eq!(cfg.output_dir, PathBuf::from("file-results"));
        assert_eq!(cfg.deadline, Some(Duration::from_millis(500)));
        assert_eq!(cfg.write_mode, WriteMode::Append);
        assert_eq!(cfg.shell, Some(PathBuf::from("/bin/bash")));
    }

    #[test]
    fn file_alone_can_supply_command() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[feeder]\ncommand = \"gobuster dir -w <wordlist>\"\n").unwrap();

        let a = CliArgs {
            config: Some(file.path().to_path_buf()),
            ..CliArgs::default()
        };
        let cfg = resolve(&a, None).unwrap();
        assert_eq!(cfg.template.program_hint(), "gobuster");
    }

    #[test]
    fn malformed_toml_is_reported_as_toml_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[feeder\ncommand = ").unwrap();

        let a = CliArgs {
            config: Some(file.path().to_path_buf()),
            ..CliArgs::default()
        };
        match resolve(&a, None) {
            Err(e @ FeederError::TomlError(_)) => assert_eq!(e.exit_code(), 2),
            other => panic!("expected TomlError, got {other:?}"),
        }
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let a = CliArgs {
            config: Some(dir.path().join("nope.toml")),
            ..CliArgs::default()
        };
        match resolve(&a, None) {
            Err(e @ FeederError::ConfigError(_)) => {
                assert_eq!(e.exit_code(), 2);
                assert!(e.to_string().contains("nope.toml"));
            }
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }
}
