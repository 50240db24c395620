use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use chrono::Local;
use regex::Regex;
use crate::config::{LogConfig, LogStrategy};
use crate::shell::ast::ExitStatus;
use std::time::Duration;
use blake3::Hasher;

fn ansi_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("static regex is valid"))
}

pub fn strip_ansi(content: &str) -> String {
    ansi_pattern().replace_all(content, "").to_string()
}

/// Writes one execution log for a command group, if the strategy asks for it.
///
/// Layout: `<dir>/<YYYY-MM-DD>/<status>/<HHMMSS>_<name>_<hash>.log`.
pub fn write_log(
    cmd_str: &str,
    content: &str,
    config: &LogConfig,
    duration: Duration,
    exit_code: ExitStatus,
) -> Result<Option<PathBuf>> {
    // 1. Determine Strategy
    match config.strategy() {
        LogStrategy::None => return Ok(None),
        LogStrategy::ErrorOnly => {
            if exit_code == 0 {
                return Ok(None);
            }
        },
        LogStrategy::Always => {},
    }

    // 2. Generate Path
    let now = Local::now();
    let date_str = now.format("%Y-%m-%d").to_string();
    let time_str = now.format("%H%M%S").to_string();

    // Short Hash
    let mut hasher = Hasher::new();
    hasher.update(cmd_str.as_bytes());
    hasher.update(now.to_rfc3339().as_bytes());
    let hash_full = hasher.finalize().to_hex().to_string();
    let short_hash = &hash_full[0..6];

    let filename = format!("{}_{}_{}.log", time_str, file_label(cmd_str), short_hash);
    let log_dir = config.dir().join(date_str).join(exit_code.to_string());

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;
    let log_path = log_dir.join(filename);

    // 3. Format Content
    let mut file_content = String::new();

    // Header
    file_content.push_str("=== MINTERM EXECUTION LOG ===\n");
    file_content.push_str(&format!("Command: {}\n", cmd_str));
    file_content.push_str(&format!("Time: {}\n", now.to_rfc3339()));
    file_content.push_str("============================\n\n");

    // Body
    let body = if config.plain() {
        strip_ansi(content)
    } else {
        content.to_string()
    };
    file_content.push_str(&body);
    if !body.ends_with('\n') {
        file_content.push('\n');
    }

    // Footer
    file_content.push_str("\n============================\n");
    file_content.push_str(&format!("Exit Code: {}\n", exit_code));
    file_content.push_str(&format!("Duration: {} ms\n", duration.as_millis()));
    file_content.push_str(&format!("End Time: {}\n", Local::now().to_rfc3339()));
    file_content.push_str("============================\n");

    fs::write(&log_path, file_content).context("Failed to write log file")?;

    Ok(Some(log_path))
}

// First word of the command, reduced to filename-safe characters
fn file_label(cmd_str: &str) -> String {
    let label: String = cmd_str
        .split_whitespace()
        .next()
        .unwrap_or("command")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if label.is_empty() { "command".to_string() } else { label }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path, strategy: LogStrategy) -> LogConfig {
        LogConfig {
            strategy: Some(strategy),
            plain: None,
            dir: Some(dir.to_path_buf()),
        }
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\x1b[31mred\x1b[0m plain"), "red plain");
    }

    #[test]
    fn test_file_label() {
        assert_eq!(file_label("ls -la | wc"), "ls");
        assert_eq!(file_label("/usr/bin/env x"), "_usr_bin_env");
        assert_eq!(file_label(""), "command");
    }

    #[test]
    fn test_strategy_none_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), LogStrategy::None);
        let res = write_log("echo hi", "hi", &config, Duration::from_millis(1), 0).unwrap();
        assert!(res.is_none());
    }

    #[test]
    fn test_error_only_skips_success() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), LogStrategy::ErrorOnly);
        assert!(write_log("true", "", &config, Duration::ZERO, 0).unwrap().is_none());

        let path = write_log("false", "", &config, Duration::ZERO, 1).unwrap().unwrap();
        assert!(path.exists());
        assert_eq!(path.parent().unwrap().file_name().unwrap(), "1");
    }

    #[test]
    fn test_always_writes_plain_body() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path(), LogStrategy::Always);
        let path = write_log("ls", "\x1b[34msrc\x1b[0m\n", &config, Duration::from_millis(5), 0)
            .unwrap()
            .unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("Command: ls"));
        assert!(text.contains("src\n"));
        assert!(!text.contains('\x1b'));
        assert!(text.contains("Exit Code: 0"));
    }
}
