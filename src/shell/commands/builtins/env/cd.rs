// Cd command

use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::resolve_path;
use crate::shell::context::ShellContext;
use anyhow::{Result, bail};
use std::io::Write;

pub struct CdCommand;
impl Executable for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, _out: &mut dyn Write) -> Result<ExitStatus> {
        let new_path = match args.first() {
            Some(path_str) => resolve_path(ctx, path_str),
            None => ctx.home_dir(),
        };

        if !new_path.is_dir() {
            bail!("no such directory: {}", args.first().map(String::as_str).unwrap_or("~"));
        }

        // Canonicalize to remove .. and .
        ctx.cwd = new_path.canonicalize().unwrap_or(new_path);
        ctx.env.insert("PWD".to_string(), ctx.cwd.display().to_string());
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Change directory"
    }
}
