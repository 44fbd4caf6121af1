use crate::error::ConfigError;
use model::grid::request::DEFAULT_PAGE_LENGTH;
use processor::processor::DEFAULT_PRIMARY_KEY;
use std::{collections::HashMap, fs, path::Path};
use tracing::warn;

pub const PAGE_LENGTH_VAR: &str = "GRIDLINE_DEFAULT_PAGE_LENGTH";
pub const PRIMARY_KEY_VAR: &str = "GRIDLINE_PRIMARY_KEY";

/// Runtime defaults applied to tables that leave them unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_page_length: usize,
    pub primary_key: String,
}

impl Settings {
    /// Settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Process environment with the variables of `env_file` layered on top.
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut vars: HashMap<String, String> = std::env::vars().collect();
        if let Some(path) = env_file {
            vars.extend(read_env_file(path)?);
        }
        Ok(Self::from_vars(&vars))
    }

    /// Invalid values are logged and replaced by the default.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let mut settings = Self::default();

        if let Some(raw) = vars.get(PAGE_LENGTH_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(length) if length > 0 => settings.default_page_length = length,
                _ => warn!(
                    "Ignoring invalid {}={:?}, using {}",
                    PAGE_LENGTH_VAR, raw, settings.default_page_length
                ),
            }
        }

        if let Some(raw) = vars.get(PRIMARY_KEY_VAR) {
            let key = raw.trim();
            if key.is_empty() {
                warn!("Ignoring empty {}, using '{}'", PRIMARY_KEY_VAR, settings.primary_key);
            } else {
                settings.primary_key = key.to_string();
            }
        }

        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_page_length: DEFAULT_PAGE_LENGTH,
            primary_key: DEFAULT_PRIMARY_KEY.to_string(),
        }
    }
}

pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_env_content(&content)
        .map_err(|e| ConfigError::EnvFile(format!("{}: {}", path.display(), e)))
}

/// Parses `KEY=VALUE` lines. Blank lines and `#` comments are skipped;
/// matching single or double quotes around a value are removed.
fn parse_env_content(content: &str) -> Result<HashMap<String, String>, String> {
    let mut vars = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(format!(
                "malformed line {} (expected KEY=VALUE)",
                line_num + 1
            ));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(format!("empty key at line {}", line_num + 1));
        }

        vars.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    Ok(vars)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
