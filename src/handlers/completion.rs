use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::fs;
use std::path::PathBuf;

/// Tab completion for the prompt: builtin names plus entries of the session cwd.
pub struct LineHelper {
    commands: Vec<String>,
    pub cwd: PathBuf,
}

impl LineHelper {
    pub fn new(commands: Vec<String>, cwd: PathBuf) -> Self {
        Self { commands, cwd }
    }

    /// Sorted, deduplicated completions for `prefix`.
    fn candidates(&self, prefix: &str) -> Vec<String> {
        let mut options: Vec<String> = self
            .commands
            .iter()
            .filter(|name| name.starts_with(prefix))
            .cloned()
            .collect();

        if let Ok(entries) = fs::read_dir(&self.cwd) {
            options.extend(
                entries
                    .flatten()
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .filter(|name| name.starts_with(prefix)),
            );
        }

        options.sort();
        options.dedup();
        options
    }
}

/// Start of the word under the cursor. Operators and whitespace end a word.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace() || matches!(c, ';' | '&' | '|'))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

impl Completer for LineHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = word_start(line, pos);
        let matches = self
            .candidates(&line[start..pos])
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for LineHelper {
    type Hint = String;
}

impl Highlighter for LineHelper {}

impl Validator for LineHelper {}

impl Helper for LineHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("ec", 2), 0);
        assert_eq!(word_start("ls && ec", 8), 6);
        assert_eq!(word_start("echo hi|so", 10), 8);
        assert_eq!(word_start("cd ", 3), 3);
    }

    #[test]
    fn test_candidates_mix_builtins_and_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mkdir-notes.txt"), "").unwrap();
        fs::write(dir.path().join("other.txt"), "").unwrap();
        let commands = vec!["mkdir".to_string(), "mem".to_string(), "ls".to_string()];
        let helper = LineHelper::new(commands, dir.path().to_path_buf());

        assert_eq!(helper.candidates("mk"), vec!["mkdir", "mkdir-notes.txt"]);
        assert_eq!(helper.candidates("me"), vec!["mem"]);
        assert!(helper.candidates("zz").is_empty());
    }
}
