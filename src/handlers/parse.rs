use anyhow::Result;
use colored::*;
use crate::shell::parser::parse_command_line;

pub fn handle_parse(line: &str) -> Result<()> {
    let parsed = parse_command_line(line);
    if parsed.is_empty() {
        println!("{}", "(no commands)".dimmed());
        return Ok(());
    }

    for (idx, group) in parsed.groups.iter().enumerate() {
        let gate = if group.must_succeed { "&&".yellow() } else { "; ".normal() };
        println!("{} {} {}", format!("[{}]", idx + 1).cyan(), gate, group);
        for cmd in &group.pipeline {
            println!("      {:?}", cmd.tokens());
        }
    }
    Ok(())
}
