use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use crate::config::LogConfig;
use crate::shell::ast::ExitStatus;
use crate::shell::commands::Registry;
use crate::shell::commands::builtins::register_all_builtins;

/// Session state shared by every command group of an interpreter session.
///
/// `cwd` is the working directory for builtins and spawned processes. The process-wide
/// current directory is never changed; `cd` only updates this field.
#[derive(Clone)]
pub struct ShellContext {
    pub cwd: PathBuf,
    pub env: HashMap<String, String>,
    pub exit_code: ExitStatus,
    pub registry: Arc<Registry>,
    pub exec_log: Option<LogConfig>,
}

impl ShellContext {
    /// Context with the inherited environment and all builtins.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let env: HashMap<String, String> = std::env::vars().collect();
        let mut registry = Registry::new();
        register_all_builtins(&mut registry);
        Self::with_registry(cwd, env, registry)
    }

    pub fn with_registry(cwd: PathBuf, env: HashMap<String, String>, registry: Registry) -> Self {
        Self {
            cwd,
            env,
            exit_code: 0,
            registry: Arc::new(registry),
            exec_log: None,
        }
    }

    pub fn home_dir(&self) -> PathBuf {
        self.env
            .get("HOME")
            .or_else(|| self.env.get("USERPROFILE"))
            .map(PathBuf::from)
            .or_else(|| directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}
