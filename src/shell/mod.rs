pub mod ast;
pub mod commands;
pub mod context;
pub mod error;
pub mod executor;
pub mod parser;

use ast::ExitStatus;
use context::ShellContext;
use executor::execute;
use std::io::Write;


/// Parses and runs one input line, returning the status of the last group that ran.
pub fn run_command_line(
    line: &str,
    ctx: &mut ShellContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ExitStatus {
    let parsed = parser::parse_command_line(line);
    execute(&parsed, ctx, out, err)
}
