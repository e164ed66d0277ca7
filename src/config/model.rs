// src/config/model.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::exec::CommandTemplate;
use crate::types::WriteMode;

pub const DEFAULT_WORDLIST_DIR: &str = "WordlistDock";
pub const DEFAULT_OUTPUT_DIR: &str = "Results";
pub const DEFAULT_LOG_FILE: &str = "Wordlist-Feeder.log";

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [feeder]
/// command = "<exec_name> -w <wordlist> -u http://target/FUZZ"
/// exec = "/opt/tools/ffuf"
/// wordlists = "WordlistDock"
/// output = "Results"
/// timeout = 30.0
/// write_mode = "append"
/// ```
///
/// Every key is optional here; CLI flags are merged on top before the result
/// is validated into a [`FeederConfig`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub feeder: FeederSection,
}

/// `[feeder]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeederSection {
    /// Command template; must contain `<wordlist>`.
    #[serde(default)]
    pub command: Option<String>,

    /// Path to the external tool. Enables `<exec_name>`.
    #[serde(default)]
    pub exec: Option<PathBuf>,

    /// Directory scanned for `*.txt` wordlists.
    #[serde(default)]
    pub wordlists: Option<PathBuf>,

    /// Directory receiving result files.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Per-wordlist time limit in seconds. Absent means no limit.
    #[serde(default)]
    pub timeout: Option<f64>,

    /// `"truncate"` (default) or `"append"`.
    #[serde(default)]
    pub write_mode: Option<WriteMode>,

    /// Interpreter used for the command. Falls back to `$SHELL`.
    #[serde(default)]
    pub shell: Option<PathBuf>,

    /// Execute commands without any shell.
    #[serde(default)]
    pub direct: bool,

    /// Durable log file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

/// Validated, immutable run configuration.
///
/// Created once at startup and passed by reference to every stage.
#[derive(Debug, Clone)]
pub struct FeederConfig {
    pub template: CommandTemplate,
    pub exec_path: Option<PathBuf>,
    pub wordlist_dir: PathBuf,
    pub output_dir: PathBuf,
    pub deadline: Option<Duration>,
    pub write_mode: WriteMode,
    pub shell: Option<PathBuf>,
    pub log_file: PathBuf,
}

impl FeederConfig {
    /// Assemble a config without running validation.
    ///
    /// Use `FeederConfig::try_from(raw)` unless the values are already known
    /// to be valid.
    pub fn new_unchecked(template: CommandTemplate, wordlist_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            template,
            exec_path: None,
            wordlist_dir,
            output_dir,
            deadline: None,
            write_mode: WriteMode::default(),
            shell: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// File name of the configured executable, substituted for `<exec_name>`.
    pub fn exec_name(&self) -> Option<&str> {
        self.exec_path
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
    }

    /// Commands run from the executable's directory so tools that load
    /// resources relative to themselves keep working.
    pub fn working_dir(&self) -> Option<PathBuf> {
        self.exec_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }

    /// Name shown in progress lines.
    pub fn tool_label(&self) -> &str {
        self.exec_name()
            .unwrap_or_else(|| self.template.program_hint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> FeederConfig {
        FeederConfig::new_unchecked(
            CommandTemplate::parse("<exec_name> -w <wordlist>").unwrap(),
            PathBuf::from("/dock"),
            PathBuf::from("/out"),
        )
    }

    #[test]
    fn exec_derived_values() {
        let mut c = cfg();
        assert_eq!(c.exec_name(), None);
        assert_eq!(c.working_dir(), None);
        assert_eq!(c.tool_label(), "<exec_name>");

        c.exec_path = Some(PathBuf::from("/opt/tools/ffuf"));
        assert_eq!(c.exec_name(), Some("ffuf"));
        assert_eq!(c.working_dir(), Some(PathBuf::from("/opt/tools")));
        assert_eq!(c.tool_label(), "ffuf");
    }

    #[test]
    fn deserializes_feeder_section() {
        let raw: RawConfigFile = toml::from_str(
            r#"
[feeder]
command = "hydra -P <wordlist> ssh://10.0.0.1"
timeout = 1.5
write_mode = "append"
"#,
        )
        .unwrap();

        assert_eq!(
            raw.feeder.command.as_deref(),
            Some("hydra -P <wordlist> ssh://10.0.0.1")
        );
        assert_eq!(raw.feeder.timeout, Some(1.5));
        assert_eq!(raw.feeder.write_mode, Some(WriteMode::Append));
        assert!(!raw.feeder.direct);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<RawConfigFile, _> = toml::from_str("[feeder]\ncmd = \"x\"\n");
        assert!(res.is_err());
    }
}
