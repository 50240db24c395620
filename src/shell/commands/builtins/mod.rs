pub mod fs;
pub mod env;
pub mod io;
pub mod sys;
pub mod common; // Private helpers

use crate::shell::commands::Registry;

/// Helper to register all built-in commands at once
pub fn register_all_builtins(registry: &mut Registry) {
    // FS commands
    registry.register("ls", Box::new(fs::ls::LsCommand));
    registry.register("touch", Box::new(fs::touch::TouchCommand));
    registry.register("mkdir", Box::new(fs::mkdir::MkdirCommand));
    registry.register("rm", Box::new(fs::rm::RmCommand));
    registry.register("rmdir", Box::new(fs::rmdir::RmdirCommand));
    registry.register("find", Box::new(fs::find::FindCommand));
    registry.register("zip", Box::new(fs::archive::ZipCommand));
    registry.register("unzip", Box::new(fs::archive::UnzipCommand));

    // Env/Navigation
    registry.register("cd", Box::new(env::cd::CdCommand));
    registry.register("pwd", Box::new(env::pwd::PwdCommand));

    // System monitoring
    registry.register("cpu", Box::new(sys::monitor::CpuCommand));
    registry.register("mem", Box::new(sys::monitor::MemCommand));
    registry.register("ps", Box::new(sys::process::PsCommand));
    registry.register("kill", Box::new(sys::process::KillCommand));

    // IO
    registry.register("echo", Box::new(io::echo::EchoCommand));
    registry.register("clear", Box::new(io::clear::ClearCommand));
    registry.register("help", Box::new(io::help::HelpCommand));
}
