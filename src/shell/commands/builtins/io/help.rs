use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::Result;
use colored::*;
use std::io::Write;

pub struct HelpCommand;
impl Executable for HelpCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        writeln!(out, "{}\n", "Available Commands:".yellow())?;
        for (name, desc) in ctx.registry.summaries() {
            writeln!(out, "{} - {}", format!("{:<10}", name).cyan(), desc)?;
        }
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Show available commands"
    }
}
