mod cli;
mod config;
mod handlers;
mod logger;
mod shell;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use handlers::{parse, repl, run};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Commands::Parse { line }) => parse::handle_parse(&line.join(" ")),
        Some(Commands::Run { line }) => {
            let code = run::handle_run(&line.join(" "), cli.config.as_deref())?;
            std::process::exit(code)
        }
        None => repl::handle_repl(cli.config.as_deref()),
    }
}
