//! Configuration loading.
//!
//! Layers, lowest precedence first:
//! - built-in defaults
//! - `config.json` in the platform config directory (or `AK_CONFIG`)
//! - `AK_*` environment variables
//! - command-line flags

use std::fs;
use std::path::{Path, PathBuf};

use akademie_id::EmailDomain;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Explicit config file path.
const ENV_CONFIG: &str = "AK_CONFIG";

/// Login email domain.
const ENV_EMAIL_DOMAIN: &str = "AK_EMAIL_DOMAIN";

/// Log level (trace, debug, info, warn, error).
const ENV_LOG_LEVEL: &str = "AK_LOG_LEVEL";

/// Log format (pretty or json).
const ENV_LOG_FORMAT: &str = "AK_LOG_FORMAT";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Get the config file path, if one can be determined.
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }

    ProjectDirs::from("za.co", "Excellence Akademie", "ak")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable lines.
    #[default]
    #[serde(alias = "text")]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unknown log format '{other}' (expected pretty or json)"),
        }
    }
}

/// Contents of the config file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Login email domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_domain: Option<String>,

    /// Log level directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Log output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,
}

impl FileConfig {
    /// Read a config file, returning `None` if it does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        Ok(Some(config))
    }
}

/// Effective CLI configuration.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Domain appended to student numbers to form login emails.
    pub email_domain: EmailDomain,

    /// Log level directive, used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Config file consulted, if any.
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email_domain: EmailDomain::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
            path: None,
        }
    }
}

impl Config {
    /// Load config from disk and the environment, then apply flag overrides.
    pub fn load(domain_flag: Option<&str>) -> Result<Self> {
        let path = config_path();
        let file = match &path {
            Some(path) => FileConfig::read(path)?.unwrap_or_default(),
            None => FileConfig::default(),
        };

        let mut config = Self::resolve(file, |key| std::env::var(key).ok(), domain_flag)?;
        config.path = path;
        Ok(config)
    }

    /// Merge the layers. `env` looks up an environment variable by name.
    pub fn resolve<F>(file: FileConfig, env: F, domain_flag: Option<&str>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let email_domain = match domain_flag
            .map(str::to_string)
            .or_else(|| env(ENV_EMAIL_DOMAIN))
            .or(file.email_domain)
        {
            Some(domain) => EmailDomain::parse(&domain).context("Invalid email domain")?,
            None => defaults.email_domain,
        };

        let log_level = env(ENV_LOG_LEVEL)
            .or(file.log_level)
            .unwrap_or(defaults.log_level);

        let log_format = match env(ENV_LOG_FORMAT) {
            Some(value) => value
                .parse::<LogFormat>()
                .with_context(|| format!("{ENV_LOG_FORMAT} is invalid"))?,
            None => file.log_format.unwrap_or(defaults.log_format),
        };

        Ok(Self {
            email_domain,
            log_level,
            log_format,
            path: None,
        })
    }
}
