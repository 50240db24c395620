use anyhow::{Context, Result};
use colored::*;
use log::{debug, warn};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::fs;
use std::io;
use std::path::Path;
use crate::config::{PromptConfig, history_path};
use crate::handlers::completion::LineHelper;
use crate::handlers::session::open_session;
use crate::shell::context::ShellContext;
use crate::shell::run_command_line;

const FAREWELL: &str = "Exiting minterm... Goodbye!";

/// Interactive loop: prompt, read a line, run it.
/// Stops on `exit`/`quit`, Ctrl-C at the prompt, or end of input.
pub fn handle_repl(config_path: Option<&Path>) -> Result<()> {
    let (mut ctx, config) = open_session(config_path)?;

    // Ctrl-C while a child runs goes to the child through the terminal; the interpreter stays up.
    ctrlc::set_handler(|| debug!("Interrupt received"))
        .context("Failed to install Ctrl-C handler")?;

    let commands = ctx.registry.summaries().into_iter().map(|(name, _)| name.to_string()).collect();
    let mut rl: Editor<LineHelper, DefaultHistory> = Editor::new().context("Failed to create line editor")?;
    rl.set_helper(Some(LineHelper::new(commands, ctx.cwd.clone())));

    let history = history_path();
    if let Some(ref path) = history {
        if let Err(e) = rl.load_history(path) {
            debug!("No history loaded from {}: {}", path.display(), e);
        }
    }

    loop {
        if let Some(helper) = rl.helper_mut() {
            helper.cwd = ctx.cwd.clone();
        }

        let line = match rl.readline(&build_prompt(&ctx, &config.prompt)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\n{}", FAREWELL);
                break;
            }
            Err(e) => {
                save_history(&mut rl, history.as_deref());
                return Err(e).context("Failed to read input");
            }
        };

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if let Err(e) = rl.add_history_entry(command) {
            warn!("Failed to record history: {}", e);
        }
        if is_exit(command) {
            println!("{}", FAREWELL);
            break;
        }

        let stdout = io::stdout();
        let stderr = io::stderr();
        run_command_line(command, &mut ctx, &mut stdout.lock(), &mut stderr.lock());
        debug!("'{}' finished with status {}", command, ctx.exit_code);
    }

    save_history(&mut rl, history.as_deref());
    Ok(())
}

fn save_history(rl: &mut Editor<LineHelper, DefaultHistory>, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create {}: {}", parent.display(), e);
            return;
        }
    }
    if let Err(e) = rl.save_history(path) {
        warn!("Failed to save history to {}: {}", path.display(), e);
    }
}

fn is_exit(command: &str) -> bool {
    command.eq_ignore_ascii_case("exit") || command.eq_ignore_ascii_case("quit")
}

fn build_prompt(ctx: &ShellContext, prompt: &PromptConfig) -> String {
    let user = ctx
        .env
        .get("USERNAME")
        .or_else(|| ctx.env.get("USER"))
        .map(String::as_str)
        .unwrap_or("user");
    format!(
        "{}@{}:{}$ ",
        user.green(),
        prompt.name.cyan(),
        ctx.cwd.display().to_string().yellow()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use crate::shell::commands::Registry;

    #[test]
    fn test_exit_words() {
        assert!(is_exit("exit"));
        assert!(is_exit("QUIT"));
        assert!(!is_exit("exit now"));
        assert!(!is_exit("echo exit"));
    }

    #[test]
    fn test_prompt_contents() {
        colored::control::set_override(false);
        let mut env = HashMap::new();
        env.insert("USER".to_string(), "ada".to_string());
        let ctx = ShellContext::with_registry(PathBuf::from("/work"), env, Registry::new());

        let prompt = build_prompt(&ctx, &PromptConfig::default());
        assert_eq!(prompt, format!("ada@minterm:{}$ ", PathBuf::from("/work").display()));
    }
}
