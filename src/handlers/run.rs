use anyhow::Result;
use std::io;
use std::path::Path;
use crate::handlers::session::open_session;
use crate::shell::ast::ExitStatus;
use crate::shell::run_command_line;

pub fn handle_run(line: &str, config_path: Option<&Path>) -> Result<ExitStatus> {
    let (mut ctx, _config) = open_session(config_path)?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    Ok(run_command_line(line, &mut ctx, &mut stdout.lock(), &mut stderr.lock()))
}
