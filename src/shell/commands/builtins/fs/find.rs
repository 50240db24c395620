use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::usage;
use crate::shell::context::ShellContext;
use anyhow::Result;
use log::debug;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

pub struct FindCommand;
impl Executable for FindCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let Some(pattern) = args.first() else {
            return usage(out, "find <name>");
        };
        let needle = pattern.to_lowercase();

        for entry in WalkDir::new(&ctx.cwd).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    // Unreadable directories are skipped, not fatal
                    debug!("find: {}", e);
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_lowercase();
            if !name.contains(&needle) {
                continue;
            }

            let relative = entry.path().strip_prefix(&ctx.cwd).unwrap_or(entry.path());
            writeln!(out, "{}", Path::new(".").join(relative).display())?;
        }

        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Find files/directories"
    }
}
