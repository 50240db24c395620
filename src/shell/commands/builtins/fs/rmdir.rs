use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{resolve_path, usage};
use crate::shell::context::ShellContext;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;

pub struct RmdirCommand;
impl Executable for RmdirCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let Some(name) = args.first() else {
            return usage(out, "rmdir <dirname>");
        };

        fs::remove_dir(resolve_path(ctx, name))
            .with_context(|| format!("failed to remove '{}'", name))?;

        writeln!(out, "Removed directory: {}", name)?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Remove empty directory"
    }
}
