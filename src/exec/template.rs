// src/exec/template.rs

//! Command templates and placeholder substitution.

use std::fmt;
use std::path::Path;

use crate::errors::{FeederError, Result};

/// Token replaced with the path of the wordlist being processed.
pub const WORDLIST_TOKEN: &str = "<wordlist>";

/// Token replaced with the file name of the configured executable.
pub const EXEC_NAME_TOKEN: &str = "<exec_name>";

/// A validated command template.
///
/// Always contains [`WORDLIST_TOKEN`]. Substitution is purely textual: no
/// quoting or escaping is applied, the shell's own rules apply to the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    raw: String,
}

impl CommandTemplate {
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if !raw.contains(WORDLIST_TOKEN) {
            return Err(FeederError::ConfigError(format!(
                "wordlist delimiter {WORDLIST_TOKEN} missing from command template {raw:?}"
            )));
        }
        Ok(Self { raw })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the template references the executable by name.
    pub fn uses_exec_name(&self) -> bool {
        self.raw.contains(EXEC_NAME_TOKEN)
    }

    /// First whitespace-separated word of the template, used as a label for
    /// the tool when no executable path is configured.
    pub fn program_hint(&self) -> &str {
        self.raw.split_whitespace().next().unwrap_or_default()
    }

    /// Substitute the executable name (if any) and the wordlist path.
    ///
    /// `<exec_name>` is replaced first so a wordlist path that happens to
    /// contain that literal text is left intact. The reverse case, an
    /// executable name containing `<wordlist>`, is not guarded against.
    pub fn build(&self, wordlist: &Path, exec_name: Option<&str>) -> String {
        let with_exec = match exec_name {
            Some(name) => self.raw.replace(EXEC_NAME_TOKEN, name),
            None => self.raw.clone(),
        };
        with_exec.replace(WORDLIST_TOKEN, &wordlist.to_string_lossy())
    }
}

impl fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn rejects_template_without_wordlist_token() {
        let err = CommandTemplate::parse("ffuf -u http://x/FUZZ").unwrap_err();
        match err {
            FeederError::ConfigError(msg) => assert!(msg.contains("<wordlist>")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn substitutes_wordlist_path() {
        let t = CommandTemplate::parse("mytool -w <wordlist>").unwrap();
        let cmd = t.build(&PathBuf::from("/dock/a.txt"), None);
        assert_eq!(cmd, "mytool -w /dock/a.txt");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let t = CommandTemplate::parse("cat <wordlist> <wordlist>").unwrap();
        assert_eq!(t.build(&PathBuf::from("w.txt"), None), "cat w.txt w.txt");
    }

    #[test]
    fn substitutes_exec_name_and_wordlist() {
        let t = CommandTemplate::parse("./<exec_name> -w <wordlist> -t 40").unwrap();
        assert!(t.uses_exec_name());
        let cmd = t.build(&PathBuf::from("/dock/dirs.txt"), Some("gobuster"));
        assert_eq!(cmd, "./gobuster -w /dock/dirs.txt -t 40");
    }

    #[test]
    fn exec_token_left_alone_without_exec_name() {
        let t = CommandTemplate::parse("<exec_name> <wordlist>").unwrap();
        assert_eq!(t.build(&PathBuf::from("a"), None), "<exec_name> a");
    }

    #[test]
    fn wordlist_path_containing_exec_token_survives() {
        let t = CommandTemplate::parse("<exec_name> -w <wordlist>").unwrap();
        let cmd = t.build(&PathBuf::from("/odd/<exec_name>.txt"), Some("tool"));
        assert_eq!(cmd, "tool -w /odd/<exec_name>.txt");
    }

    #[test]
    fn program_hint_is_first_word() {
        let t = CommandTemplate::parse("  hydra -P <wordlist> ssh://h").unwrap();
        assert_eq!(t.program_hint(), "hydra");
    }
}
