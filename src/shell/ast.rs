use std::fmt;

/// Exit status of a command group. 0 means success.
pub type ExitStatus = i32;

/// One stage of a pipe chain: `program arg1 arg2 ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    tokens: Vec<String>,
}

impl Command {
    /// Returns `None` for an empty token list, so every `Command` has a name.
    pub fn new(tokens: Vec<String>) -> Option<Self> {
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn name(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_words::join(&self.tokens))
    }
}

// A single command or a pipeline: "ls | grep target"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup {
    pub pipeline: Vec<Command>,
    // Only run if the previous group exited with 0: "cargo build && cargo run"
    pub must_succeed: bool,
}

impl CommandGroup {
    pub fn is_single(&self) -> bool {
        self.pipeline.len() == 1
    }
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.pipeline.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

/// All groups of one input line, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLine {
    pub groups: Vec<CommandGroup>,
}

impl ParsedLine {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
