// src/errors.rs

//! Crate-wide error type and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeederError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to run command `{command}`: {source}")]
    SpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FeederError {
    /// Process exit status for this error.
    ///
    /// Configuration problems are reported before anything runs and use `2`;
    /// every other failure aborts the run with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            FeederError::ConfigError(_) | FeederError::TomlError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeederError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_exit_with_two() {
        let err = FeederError::ConfigError("missing <wordlist>".into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unanticipated_errors_exit_with_one() {
        let err = FeederError::SpawnError {
            command: "nope".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("nope"));
    }
}
