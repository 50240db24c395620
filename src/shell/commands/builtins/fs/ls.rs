// Ls command

use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::resolve_path;
use crate::shell::context::ShellContext;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::io::Write;

pub struct LsCommand;
impl Executable for LsCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let path_str = args.first().map(String::as_str).unwrap_or(".");
        let path = resolve_path(ctx, path_str);

        let mut entries = fs::read_dir(&path)
            .with_context(|| format!("cannot access '{}'", path_str))?
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.path().is_dir() {
                writeln!(out, "{}", name.blue())?;
            } else {
                writeln!(out, "{}", name)?;
            }
        }

        Ok(0)
    }

    fn description(&self) -> &'static str {
        "List files in directory"
    }
}
