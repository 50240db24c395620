use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::Result;
use std::io::Write;

pub struct PwdCommand;
impl Executable for PwdCommand {
    fn execute(&self, _args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        writeln!(out, "{}", ctx.cwd.display())?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Print working directory"
    }
}
