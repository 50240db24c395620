// Cpu and memory usage

use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::context::ShellContext;
use anyhow::Result;
use std::io::Write;
use std::thread;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

const BYTES_PER_MB: u64 = 1024 * 1024;

pub struct CpuCommand;
impl Executable for CpuCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let mut system = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));

        // Usage is a delta, sysinfo needs two samples
        thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        system.refresh_cpu_usage();

        writeln!(out, "CPU Usage: {:.1}%", system.global_cpu_usage())?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Show CPU usage"
    }
}

pub struct MemCommand;
impl Executable for MemCommand {
    fn execute(&self, _args: &[String], _ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let system = System::new_with_specifics(RefreshKind::new().with_memory(MemoryRefreshKind::everything()));

        let total = system.total_memory();
        let used = system.used_memory();
        let percent = if total == 0 {
            0.0
        } else {
            used as f64 * 100.0 / total as f64
        };

        writeln!(
            out,
            "Memory Used: {:.1}% ({} MB / {} MB)",
            percent,
            used / BYTES_PER_MB,
            total / BYTES_PER_MB
        )?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Show memory usage"
    }
}
