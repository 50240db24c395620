use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::Result;
use std::io::Write;

// Erase display, then move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct ClearCommand;
impl Executable for ClearCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        write!(out, "{}", CLEAR_SCREEN)?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Clear the terminal screen"
    }
}
