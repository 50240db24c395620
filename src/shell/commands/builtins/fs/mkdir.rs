// Mkdir command

use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{resolve_path, usage};
use crate::shell::context::ShellContext;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;

pub struct MkdirCommand;
impl Executable for MkdirCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let Some(name) = args.first() else {
            return usage(out, "mkdir <dirname>");
        };

        // Parents are always created and an existing directory is fine
        fs::create_dir_all(resolve_path(ctx, name))
            .with_context(|| format!("Failed to create directory: {}", name))?;

        writeln!(out, "Created directory: {}", name)?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Create directory"
    }
}
