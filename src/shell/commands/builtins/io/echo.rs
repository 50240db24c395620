// Echo command

use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::Result;
use std::io::Write;

pub struct EchoCommand;

impl Executable for EchoCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        writeln!(out, "{}", args.join(" "))?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Print text to terminal"
    }
}
