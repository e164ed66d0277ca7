use std::fmt;
use serde::Deserialize;

/// How a result artifact is written when it already exists.
///
/// - `Truncate`: every run replaces the previous results (default).
/// - `Append`: results of repeated runs against the same wordlist set
///   accumulate in the same file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    Truncate,
    Append,
}

impl Default for WriteMode {
    fn default() -> Self {
        WriteMode::Truncate
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Truncate => f.write_str("truncate"),
            WriteMode::Append => f.write_str("append"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_truncate_and_displays_lowercase() {
        assert_eq!(WriteMode::default(), WriteMode::Truncate);
        assert_eq!(WriteMode::Append.to_string(), "append");
    }
}
