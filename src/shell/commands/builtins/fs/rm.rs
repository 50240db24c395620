// Rm command

use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{resolve_path, usage};
use crate::shell::context::ShellContext;
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Write;

pub struct RmCommand;
impl Executable for RmCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let mut recursive = false;
        let mut target = None;

        for arg in args {
            if arg == "-r" || arg == "-R" {
                recursive = true;
            } else if target.is_none() {
                target = Some(arg);
            }
        }

        let Some(target) = target else {
            return usage(out, "rm <file> [-r]");
        };

        let p = resolve_path(ctx, target);
        if p.is_dir() {
            if !recursive {
                bail!("cannot remove '{}': Is a directory (use rm -r)", target);
            }
            fs::remove_dir_all(&p).with_context(|| format!("Failed to remove directory: {}", target))?;
            writeln!(out, "Removed directory recursively: {}", target)?;
        } else {
            fs::remove_file(&p).with_context(|| format!("Failed to remove file: {}", target))?;
            writeln!(out, "Removed file: {}", target)?;
        }
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Remove file (or use -r for dir)"
    }
}
