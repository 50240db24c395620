// External pipelines
use crate::shell::ast::{Command, ExitStatus};
use crate::shell::context::ShellContext;
use crate::shell::error::LaunchError;
use log::{debug, warn};
use std::env;
use std::path::PathBuf;
use std::process::{self, Child, ChildStdout, Stdio};

/// What the last stage of a pipeline produced.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `stages` as connected OS processes.
///
/// Stage 0 inherits stdin; every later stage reads the previous stage's stdout.
/// Intermediate stderr is inherited. Only the last stage's stdout and stderr are
/// collected, and only its status is reported.
pub fn run_pipeline(stages: &[Command], ctx: &ShellContext) -> Result<PipelineOutput, LaunchError> {
    let Some(last_idx) = stages.len().checked_sub(1) else {
        return Ok(PipelineOutput::default());
    };

    let mut children: Vec<Child> = Vec::with_capacity(stages.len());
    let mut upstream: Option<ChildStdout> = None;

    for (i, stage) in stages.iter().enumerate() {
        match spawn_stage(stage, ctx, upstream.take(), i == last_idx) {
            Ok(mut child) => {
                if i != last_idx {
                    upstream = child.stdout.take();
                }
                children.push(child);
            }
            Err(e) => {
                abort(children);
                return Err(e);
            }
        }
    }

    let Some(last) = children.pop() else {
        return Ok(PipelineOutput::default());
    };

    // Reads stdout and stderr together, so neither pipe can fill up and stall the child.
    let result = last.wait_with_output();

    // Upstream stages finish once the last one stops reading.
    for mut child in children {
        if let Err(e) = child.wait() {
            warn!("Failed to reap pipeline stage {}: {}", child.id(), e);
        }
    }

    let output = result.map_err(|e| LaunchError::failed(stages[last_idx].name(), e))?;

    Ok(PipelineOutput {
        status: status_code(output.status),
        stdout: String::from_utf8_lossy(&output.stdout).trim_end().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
    })
}

fn spawn_stage(
    stage: &Command,
    ctx: &ShellContext,
    stdin: Option<ChildStdout>,
    is_last: bool,
) -> Result<Child, LaunchError> {
    let program = resolve_program(stage.name(), ctx)?;
    debug!("Spawning {} ({}) in {}", stage, program.display(), ctx.cwd.display());

    let mut cmd = process::Command::new(&program);
    cmd.args(stage.args()).current_dir(&ctx.cwd);

    // The session environment is the source of truth
    cmd.env_clear();
    cmd.envs(&ctx.env);

    match stdin {
        Some(upstream) => cmd.stdin(Stdio::from(upstream)),
        None => cmd.stdin(Stdio::inherit()),
    };
    cmd.stdout(Stdio::piped());
    if is_last {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    cmd.spawn().map_err(|e| LaunchError::failed(stage.name(), e))
}

/// Locates the program for `name`.
///
/// Names containing a path separator resolve against the session cwd and are spawned as is.
/// Bare names are looked up on the session `PATH`. A PATH entry that exists but is not
/// executable is still returned, so the spawn error reports the real cause.
fn resolve_program(name: &str, ctx: &ShellContext) -> Result<PathBuf, LaunchError> {
    if name.chars().any(std::path::is_separator) {
        return Ok(ctx.cwd.join(name));
    }

    let path_var = ctx.env.get("PATH");
    match which::which_in(name, path_var, &ctx.cwd) {
        Ok(program) => Ok(program),
        Err(e) => {
            debug!("Could not resolve {}: {}", name, e);
            path_var
                .into_iter()
                .flat_map(env::split_paths)
                .map(|dir| ctx.cwd.join(dir).join(name))
                .find(|candidate| candidate.is_file())
                .ok_or_else(|| LaunchError::NotFound(name.to_string()))
        }
    }
}

fn abort(children: Vec<Child>) {
    for mut child in children {
        let _ = child.kill();
        let _ = child.wait();
    }
}

fn status_code(status: process::ExitStatus) -> ExitStatus {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
