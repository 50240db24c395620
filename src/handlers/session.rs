use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::path::Path;
use crate::config::{TermConfig, load_config};
use crate::shell::context::ShellContext;

/// Builds the session context: current directory, inherited env + config env, builtins.
pub fn open_session(config_path: Option<&Path>) -> Result<(ShellContext, TermConfig)> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(config_path, &cwd)?;

    if !config.prompt.color {
        colored::control::set_override(false);
    }

    let mut ctx = ShellContext::with_cwd(cwd);
    ctx.env.extend(config.env.iter().map(|(k, v)| (k.clone(), v.clone())));
    ctx.exec_log = config.log.clone();

    debug!("Session opened in {} with {} env vars", ctx.cwd.display(), ctx.env.len());
    Ok((ctx, config))
}
