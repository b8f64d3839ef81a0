//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

const ENV_VAR_PATTERN: &str = r"\$\{([^}]+)\}";

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let mut config: Config = toml::from_str(&expanded)?;
        Self::expand_paths(&mut config);
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    ///
    /// Placeholders inside TOML comments are left alone.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(ENV_VAR_PATTERN)
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        let mut result = String::with_capacity(content.len());
        for line in content.split_inclusive('\n') {
            let (code, comment) = line.split_at(comment_start(line).unwrap_or(line.len()));

            let mut last = 0;
            for cap in re.captures_iter(code) {
                let (Some(whole), Some(name)) = (cap.get(0), cap.get(1)) else {
                    continue;
                };
                let value = std::env::var(name.as_str())
                    .map_err(|_| ConfigError::EnvVarNotSet(name.as_str().to_string()))?;
                result.push_str(&code[last..whole.start()]);
                result.push_str(&value);
                last = whole.end();
            }
            result.push_str(&code[last..]);
            result.push_str(comment);
        }

        Ok(result)
    }

    fn expand_paths(config: &mut Config) {
        config.corpus.snapshot_path = Self::expand_pathbuf(&config.corpus.snapshot_path);
        config.index.vector_index_path = Self::expand_pathbuf(&config.index.vector_index_path);
    }

    fn expand_pathbuf(path: &Path) -> PathBuf {
        PathBuf::from(Self::expand_path(&path.to_string_lossy()))
    }

    /// Expand shell-style paths (e.g., `~/.asksg`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }

    /// Default location of the service data directory.
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".asksg")
    }
}

/// Byte offset of the `#` opening a comment on `line`, skipping any inside
/// string literals.
fn comment_start(line: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '#' => return Some(i),
            None if c == '"' || c == '\'' => quote = Some(c),
            None => {}
        }
    }
    None
}
