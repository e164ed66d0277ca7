// src/config/validate.rs

use std::path::PathBuf;
use std::time::Duration;

use crate::config::model::{
    FeederConfig, RawConfigFile, DEFAULT_LOG_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_WORDLIST_DIR,
};
use crate::errors::{FeederError, Result};
use crate::exec::{CommandTemplate, EXEC_NAME_TOKEN};

impl TryFrom<RawConfigFile> for FeederConfig {
    type Error = crate::errors::FeederError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        let section = raw.feeder;

        let template = parse_template(section.command)?;
        let exec_path = validate_exec_path(section.exec)?;
        ensure_exec_for_token(&template, exec_path.is_some())?;
        let deadline = parse_deadline(section.timeout)?;

        let wordlist_dir = std::path::absolute(
            section
                .wordlists
                .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDLIST_DIR)),
        )?;

        let shell = if section.direct {
            None
        } else {
            section.shell.filter(|s| !s.as_os_str().is_empty())
        };

        Ok(FeederConfig {
            template,
            exec_path,
            wordlist_dir,
            output_dir: section
                .output
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            deadline,
            write_mode: section.write_mode.unwrap_or_default(),
            shell,
            log_file: section
                .log_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }
}

fn parse_template(command: Option<String>) -> Result<CommandTemplate> {
    let command = command.ok_or_else(|| {
        FeederError::ConfigError(
            "no command template given (pass CMD or set [feeder].command)".to_string(),
        )
    })?;
    CommandTemplate::parse(command)
}

fn validate_exec_path(exec: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = exec else {
        return Ok(None);
    };
    if !path.exists() {
        return Err(FeederError::ConfigError(format!(
            "passed in executable path {} does not exist, try again with path to existing executable",
            path.display()
        )));
    }
    Ok(Some(std::path::absolute(path)?))
}

fn ensure_exec_for_token(template: &CommandTemplate, has_exec: bool) -> Result<()> {
    if template.uses_exec_name() && !has_exec {
        return Err(FeederError::ConfigError(format!(
            "command template uses {EXEC_NAME_TOKEN} but no executable path was given (--exec)"
        )));
    }
    Ok(())
}

fn parse_deadline(timeout: Option<f64>) -> Result<Option<Duration>> {
    timeout
        .map(|secs| {
            Duration::try_from_secs_f64(secs).map_err(|_| {
                FeederError::ConfigError(format!(
                    "timeout must be a non-negative number of seconds (got {secs})"
                ))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::FeederSection;
    use crate::types::WriteMode;

    fn raw(command: &str) -> RawConfigFile {
        RawConfigFile {
            feeder: FeederSection {
                command: Some(command.to_string()),
                ..FeederSection::default()
            },
        }
    }

    fn expect_config_error(raw: RawConfigFile, needle: &str) {
        match FeederConfig::try_from(raw) {
            Err(FeederError::ConfigError(msg)) => {
                assert!(msg.contains(needle), "message {msg:?} lacks {needle:?}")
            }
            Err(e) => panic!("expected ConfigError, got {e:?}"),
            Ok(_) => panic!("expected error, got Ok"),
        }
    }

    #[test]
    fn applies_defaults() {
        let cfg = FeederConfig::try_from(raw("mytool -w <wordlist>")).unwrap();
        assert!(cfg.wordlist_dir.is_absolute());
        assert!(cfg.wordlist_dir.ends_with(DEFAULT_WORDLIST_DIR));
        assert_eq!(cfg.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(cfg.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(cfg.write_mode, WriteMode::Truncate);
        assert_eq!(cfg.deadline, None);
        assert_eq!(cfg.exec_path, None);
    }

    #[test]
    fn missing_command_is_config_error() {
        expect_config_error(RawConfigFile::default(), "no command template");
    }

    #[test]
    fn missing_wordlist_token_is_config_error() {
        expect_config_error(raw("mytool -w words.txt"), "<wordlist>");
    }

    #[test]
    fn exec_token_without_exec_is_config_error() {
        expect_config_error(raw("<exec_name> -w <wordlist>"), "--exec");
    }

    #[test]
    fn nonexistent_exec_is_config_error() {
        let mut r = raw("mytool -w <wordlist>");
        r.feeder.exec = Some(PathBuf::from("/definitely/not/here/tool"));
        expect_config_error(r, "does not exist");
    }

    #[test]
    fn negative_or_nan_timeout_is_config_error() {
        let mut r = raw("mytool -w <wordlist>");
        r.feeder.timeout = Some(-1.0);
        expect_config_error(r, "non-negative");

        let mut r = raw("mytool -w <wordlist>");
        r.feeder.timeout = Some(f64::NAN);
        expect_config_error(r, "non-negative");
    }

    #[test]
    fn fractional_timeout_becomes_deadline() {
        let mut r = raw("mytool -w <wordlist>");
        r.feeder.timeout = Some(0.01);
        let cfg = FeederConfig::try_from(r).unwrap();
        assert_eq!(cfg.deadline, Some(Duration::from_millis(10)));
    }

    #[test]
    fn direct_mode_drops_shell() {
        let mut r = raw("mytool -w <wordlist>");
        r.feeder.shell = Some(PathBuf::from("/bin/bash"));
        r.feeder.direct = true;
        let cfg = FeederConfig::try_from(r).unwrap();
        assert_eq!(cfg.shell, None);
    }
}
