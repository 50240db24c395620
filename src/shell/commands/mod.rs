pub mod builtins;
pub mod system;

use crate::shell::ast::ExitStatus;
use crate::shell::context::ShellContext;
use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

/// An in-process command looked up by name.
///
/// `args` excludes the command name. Output goes to `out`; errors are returned
/// and reported by the executor.
pub trait Executable: Send + Sync {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus>;

    /// One-line summary shown by `help`.
    fn description(&self) -> &'static str;
}

/// Name to builtin mapping consulted before launching external programs.
#[derive(Default)]
pub struct Registry {
    commands: HashMap<String, Box<dyn Executable>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, command: Box<dyn Executable>) {
        self.commands.insert(name.to_string(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Executable> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    /// Names and descriptions, sorted by name.
    pub fn summaries(&self) -> Vec<(&str, &'static str)> {
        let mut entries: Vec<_> = self
            .commands
            .iter()
            .map(|(name, cmd)| (name.as_str(), cmd.description()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
