use crate::logger::write_log;
use crate::shell::ast::{Command, CommandGroup, ExitStatus, ParsedLine};
use crate::shell::commands::Executable;
use crate::shell::commands::system::run_pipeline;
use crate::shell::context::ShellContext;
use colored::*;
use log::{debug, warn};
use std::io::Write;
use std::time::Instant;

/// Result of running one command group.
#[derive(Debug)]
pub struct GroupOutcome {
    pub status: ExitStatus,
    /// Everything the group printed, in order. Feeds execution logs.
    pub output: String,
}

/// Runs the groups of a line in order and returns the last status.
///
/// A gated group is skipped when the status so far is non-zero; skipping leaves the
/// status untouched, so a whole `a && b && c` chain stops at the first failure while a
/// group after `;` runs regardless.
pub fn execute(
    parsed: &ParsedLine,
    ctx: &mut ShellContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> ExitStatus {
    let mut last_status: ExitStatus = 0;

    for group in &parsed.groups {
        if group.must_succeed && last_status != 0 {
            debug!("Skipping '{}' (previous status {})", group, last_status);
            continue;
        }

        let started = Instant::now();
        let outcome = run_group(group, ctx, out, err);

        if let Some(log_config) = &ctx.exec_log {
            match write_log(&group.to_string(), &outcome.output, log_config, started.elapsed(), outcome.status) {
                Ok(Some(path)) => debug!("Execution log written to {}", path.display()),
                Ok(None) => {}
                Err(e) => warn!("Could not write execution log: {:#}", e),
            }
        }

        last_status = outcome.status;
    }

    ctx.exit_code = last_status;
    last_status
}

/// Runs one group: a lone builtin in-process, anything else as external processes.
///
/// Builtins only compose as the sole stage of a group. Inside a pipe chain their
/// names are looked up as programs like any other stage.
pub fn run_group(
    group: &CommandGroup,
    ctx: &mut ShellContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> GroupOutcome {
    if group.is_single() {
        let cmd = &group.pipeline[0];
        // Hold the registry separately so the builtin can borrow ctx mutably
        let registry = ctx.registry.clone();
        if let Some(builtin) = registry.get(cmd.name()) {
            return run_builtin(builtin, cmd, ctx, out);
        }
    }
    run_external(&group.pipeline, ctx, out, err)
}

fn run_builtin(
    builtin: &dyn Executable,
    cmd: &Command,
    ctx: &mut ShellContext,
    out: &mut dyn Write,
) -> GroupOutcome {
    debug!("Running builtin: {}", cmd);
    let mut buffer: Vec<u8> = Vec::new();
    let result = builtin.execute(cmd.args(), ctx, &mut buffer);
    let mut output = String::from_utf8_lossy(&buffer).into_owned();
    emit_raw(out, &buffer);

    let status = match result {
        Ok(code) => code,
        Err(e) => {
            let message = format!("{}: {:#}", cmd.name(), e);
            emit_line(out, &message.red().to_string());
            output.push_str(&message);
            1
        }
    };

    GroupOutcome { status, output }
}

fn run_external(
    stages: &[Command],
    ctx: &ShellContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> GroupOutcome {
    match run_pipeline(stages, ctx) {
        Ok(result) => {
            let mut output = String::new();
            if !result.stdout.is_empty() {
                emit_line(out, &result.stdout);
                output.push_str(&result.stdout);
                output.push('\n');
            }
            if !result.stderr.is_empty() {
                emit_line(err, &result.stderr);
                output.push_str(&result.stderr);
                output.push('\n');
            }
            GroupOutcome { status: result.status, output }
        }
        Err(e) => {
            let message = e.to_string();
            emit_line(out, &message);
            GroupOutcome { status: 1, output: message }
        }
    }
}

fn emit_line(w: &mut dyn Write, text: &str) {
    if let Err(e) = writeln!(w, "{}", text).and_then(|_| w.flush()) {
        warn!("Failed to write output: {}", e);
    }
}

fn emit_raw(w: &mut dyn Write, bytes: &[u8]) {
    if let Err(e) = w.write_all(bytes).and_then(|_| w.flush()) {
        warn!("Failed to write output: {}", e);
    }
}
