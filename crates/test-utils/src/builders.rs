#![allow(dead_code)]

use std::path::PathBuf;

use wordlist_feeder::config::{FeederConfig, FeederSection, RawConfigFile};
use wordlist_feeder::types::WriteMode;

/// Builder for `FeederConfig` to simplify test setup.
///
/// Goes through the same validation as the real CLI path; no `$SHELL`
/// fallback is applied, so commands run directly unless `shell` is set.
pub struct FeederConfigBuilder {
    section: FeederSection,
}

impl FeederConfigBuilder {
    pub fn new(command: &str) -> Self {
        Self {
            section: FeederSection {
                command: Some(command.to_string()),
                ..FeederSection::default()
            },
        }
    }

    pub fn wordlists(mut self, dir: impl Into<PathBuf>) -> Self {
        self.section.wordlists = Some(dir.into());
        self
    }

    pub fn output(mut self, dir: impl Into<PathBuf>) -> Self {
        self.section.output = Some(dir.into());
        self
    }

    pub fn exec(mut self, path: impl Into<PathBuf>) -> Self {
        self.section.exec = Some(path.into());
        self
    }

    pub fn timeout(mut self, secs: f64) -> Self {
        self.section.timeout = Some(secs);
        self
    }

    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.section.write_mode = Some(mode);
        self
    }

    pub fn shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.section.shell = Some(shell.into());
        self
    }

    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.section.log_file = Some(path.into());
        self
    }

    pub fn build(self) -> FeederConfig {
        FeederConfig::try_from(RawConfigFile {
            feeder: self.section,
        })
        .expect("Failed to build valid config from builder")
    }
}
