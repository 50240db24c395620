// Zip and unzip commands

use crate::shell::ast::ExitStatus;
use crate::shell::commands::Executable;
use crate::shell::commands::builtins::common::{resolve_path, usage};
use crate::shell::context::ShellContext;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub struct ZipCommand;
impl Executable for ZipCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        if args.len() < 2 {
            return usage(out, "zip <archive.zip> <file1> <file2> ...");
        }
        let archive_name = &args[0];
        let archive_path = resolve_path(ctx, archive_name);

        let sources: Vec<PathBuf> = args[1..].iter().map(|m| resolve_path(ctx, m)).collect();
        if let Some(missing) = args[1..].iter().zip(&sources).find(|(_, src)| !src.exists()) {
            bail!("{}: No such file or directory", missing.0);
        }

        let file = File::create(&archive_path)
            .with_context(|| format!("Failed to create {}", archive_name))?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (member, source) in args[1..].iter().zip(&sources) {
            // Entries are named as given on the command line, relative to cwd
            for entry in WalkDir::new(source).sort_by_file_name() {
                let entry = entry?;
                let path = entry.path();
                if path == archive_path.as_path() {
                    continue;
                }
                let relative = path.strip_prefix(source).unwrap_or(Path::new(""));
                let name = entry_name(&Path::new(member).join(relative));
                if name.is_empty() {
                    continue;
                }

                if path.is_dir() {
                    zip.add_directory(format!("{}/", name).as_str(), options)?;
                } else {
                    zip.start_file(name.as_str(), options)?;
                    let mut f = File::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
                    io::copy(&mut f, &mut zip)?;
                }
            }
        }

        zip.finish()?;
        writeln!(out, "Created archive: {}", archive_name)?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Create zip archive"
    }
}

/// Archive entry name for `path`: `/`-separated, with roots, drives and `.` dropped and
/// `..` resolved without climbing above the archive root.
fn entry_name(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                parts.pop();
            }
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
        }
    }
    parts.join("/")
}

pub struct UnzipCommand;
impl Executable for UnzipCommand {
    fn execute(&self, args: &[String], ctx: &mut ShellContext, out: &mut dyn Write) -> Result<ExitStatus> {
        let Some(archive_name) = args.first() else {
            return usage(out, "unzip <archive.zip>");
        };

        let file = File::open(resolve_path(ctx, archive_name))
            .with_context(|| format!("Failed to open {}", archive_name))?;
        let mut archive = ZipArchive::new(file)
            .with_context(|| format!("{} is not a zip archive", archive_name))?;
        archive.extract(&ctx.cwd)?;

        writeln!(out, "Extracted: {}", archive_name)?;
        Ok(0)
    }

    fn description(&self) -> &'static str {
        "Extract zip archive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_stays_inside_archive() {
        assert_eq!(entry_name(Path::new("docs/a.txt")), "docs/a.txt");
        assert_eq!(entry_name(Path::new("./docs/./a.txt")), "docs/a.txt");
        assert_eq!(entry_name(Path::new("../x")), "x");
        assert_eq!(entry_name(Path::new("../../up/x")), "up/x");
        assert_eq!(entry_name(Path::new("/abs/x")), "abs/x");
        assert_eq!(entry_name(Path::new("a/../b")), "b");
        assert_eq!(entry_name(Path::new(".")), "");
    }
}
