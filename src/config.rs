use anyhow::{Context, Result, bail};
use colored::*;
use directories::BaseDirs;
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "minterm";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TermConfig {
    pub prompt: PromptConfig,
    /// Merged over the inherited environment of every session.
    pub env: HashMap<String, String>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PromptConfig {
    pub name: String,
    pub color: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            name: APP_DIR.to_string(),
            color: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum LogStrategy {
    Always,
    ErrorOnly,
    None,
}

/// `[log]` section: per-group execution logs.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LogConfig {
    pub strategy: Option<LogStrategy>,
    pub plain: Option<bool>,
    pub dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn strategy(&self) -> LogStrategy {
        self.strategy.unwrap_or(LogStrategy::None)
    }

    pub fn plain(&self) -> bool {
        self.plain.unwrap_or(true)
    }

    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_log_dir)
    }
}

/// `<config_dir>/minterm/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.config_dir().join(APP_DIR).join(CONFIG_FILE))
}

pub fn default_log_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(env::temp_dir)
        .join(APP_DIR)
        .join("logs")
}

/// Prompt history, kept next to the execution logs.
pub fn history_path() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.data_dir().join(APP_DIR).join("history"))
}

pub fn parse_config(content: &str) -> Result<TermConfig> {
    toml::from_str(content).context("Failed to parse config")
}

/// Loads the TOML layer, then merges a dotenv file from `start_dir` over its `[env]`.
///
/// An explicit path must exist. Without one, the default location is used when present
/// and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<TermConfig> {
    // 1. TOML (Base Layer)
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("❌ Config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => default_config_path().filter(|p| p.exists()),
    };

    let mut config = match &config_path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_config(&content).with_context(|| format!("Invalid config in {}", path.display()))?
        }
        None => TermConfig::default(),
    };

    // 2. Dotenv (Override Layer): .env or .env.<MINTERM_ENV>
    let env_filename = env_file_name();
    let env_path = start_dir.join(&env_filename);

    if env_path.exists() {
        info!("{} Loading environment from: {}", "🌿".green(), env_filename.bold());
        for item in dotenvy::from_path_iter(&env_path)
            .with_context(|| format!("Failed to read {}", env_filename))?
        {
            let (key, val) = item.with_context(|| format!("Invalid entry in {}", env_filename))?;
            config.env.insert(key, val);
        }
    }

    Ok(config)
}

fn env_file_name() -> String {
    env::var("MINTERM_ENV")
        .map(|v| format!(".env.{}", v))
        .unwrap_or_else(|_| ".env".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = parse_config("").unwrap();
        assert_eq!(config.prompt.name, "minterm");
        assert!(config.prompt.color);
        assert!(config.env.is_empty());
        assert!(config.log.is_none());
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            [prompt]
            name = "box"
            color = false

            [env]
            GREETING = "hi"

            [log]
            strategy = "error-only"
            plain = false
            dir = "/tmp/minterm-logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.prompt.name, "box");
        assert!(!config.prompt.color);
        assert_eq!(config.env.get("GREETING").unwrap(), "hi");

        let log = config.log.unwrap();
        assert_eq!(log.strategy(), LogStrategy::ErrorOnly);
        assert!(!log.plain());
        assert_eq!(log.dir(), PathBuf::from("/tmp/minterm-logs"));
    }

    #[test]
    fn test_history_lives_in_data_dir() {
        if let Some(path) = history_path() {
            assert!(path.ends_with("minterm/history"));
        }
    }

    #[test]
    fn test_log_defaults() {
        let log = LogConfig::default();
        assert_eq!(log.strategy(), LogStrategy::None);
        assert!(log.plain());
        assert!(log.dir().ends_with("logs"));
    }

    #[test]
    fn test_invalid_strategy_rejected() {
        assert!(parse_config("[log]\nstrategy = \"sometimes\"").is_err());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_dotenv_overrides_toml_env() {
        if env::var("MINTERM_ENV").is_ok() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[env]\nA = \"toml\"\nB = \"toml\"\n").unwrap();
        fs::write(dir.path().join(".env"), "A=dotenv\n").unwrap();

        let config = load_config(Some(&config_path), dir.path()).unwrap();
        assert_eq!(config.env.get("A").unwrap(), "dotenv");
        assert_eq!(config.env.get("B").unwrap(), "toml");
    }
}
