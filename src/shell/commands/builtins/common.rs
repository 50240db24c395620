use crate::shell::ast::ExitStatus;
use crate::shell::context::ShellContext;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn resolve_path(ctx: &ShellContext, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        ctx.cwd.join(p)
    }
}

/// Prints a usage line and reports failure.
pub fn usage(out: &mut dyn Write, text: &str) -> Result<ExitStatus> {
    writeln!(out, "Usage: {}", text)?;
    Ok(1)
}
