// Process listing and termination

use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::usage;
use crate::shell::context::ShellContext;
use anyhow::{Context, Result, bail};
use std::io::Write;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, Signal, System};

fn snapshot() -> System {
    let mut system = System::new();
    system.refresh_processes_specifics(ProcessesToUpdate::All, true, ProcessRefreshKind::new());
    system
}

pub struct PsCommand;
impl Executable for PsCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let system = snapshot();

        let mut processes: Vec<_> = system.processes().iter().collect();
        processes.sort_by_key(|(pid, _)| **pid);

        writeln!(out, "{:<10} {:<25} {:<10}", "PID", "Name", "Status")?;
        for (pid, process) in processes {
            writeln!(
                out,
                "{:<10} {:<25} {:<10}",
                pid.as_u32(),
                process.name().to_string_lossy(),
                process.status().to_string()
            )?;
        }
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "List running processes"
    }
}

pub struct KillCommand;
impl Executable for KillCommand {
    fn execute(&self, args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let Some(raw_pid) = args.first() else {
            return usage(out, "kill <pid>");
        };
        let pid: u32 = raw_pid
            .parse()
            .with_context(|| format!("invalid pid '{}'", raw_pid))?;

        let system = snapshot();
        let Some(process) = system.process(Pid::from_u32(pid)) else {
            bail!("no such process: {}", pid);
        };

        // SIGTERM where supported, otherwise the platform's hard kill
        let delivered = process.kill_with(Signal::Term).unwrap_or_else(|| process.kill());
        if !delivered {
            bail!("failed to terminate process {}", pid);
        }

        writeln!(out, "Process {} terminated.", pid)?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Terminate process by PID"
    }
}
