use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{resolve_path, usage};
use crate::shell::context::ShellContext;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;

pub struct TouchCommand;
impl Executable for TouchCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let Some(name) = args.first() else {
            return usage(out, "touch <filename>");
        };

        // Append mode: never truncates an existing file
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(resolve_path(ctx, name))
            .with_context(|| format!("cannot touch '{}'", name))?;

        writeln!(out, "Created file: {}", name)?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Create empty file"
    }
}
