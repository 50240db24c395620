use crate::shell::ast::{Command, CommandGroup, ParsedLine};
use log::{debug, warn};

const SEQUENCE_SEP: &str = ";";
const AND_SEP: &str = "&&";
const PIPE_SEP: &str = "|";

/// Parses one input line into command groups.
///
/// Splitting is textual: `;` first, then `&&`, then `|`. Only the words of each pipe
/// stage are quote-aware. A group is gated (`must_succeed`) when the operator right
/// before it was `&&`; the first group of every `;` segment runs unconditionally.
///
/// Never fails. Malformed quoting is tokenized best-effort and logged.
pub fn parse_command_line(line: &str) -> ParsedLine {
    let mut groups = Vec::new();

    for segment in line.split(SEQUENCE_SEP) {
        let mut first_in_segment = true;
        for sub in segment.split(AND_SEP) {
            let sub = sub.trim();
            if sub.is_empty() {
                continue;
            }

            let pipeline: Vec<Command> = sub
                .split(PIPE_SEP)
                .filter_map(|stage| Command::new(tokenize(&expand_shorthand(stage))))
                .collect();

            if pipeline.is_empty() {
                continue;
            }

            groups.push(CommandGroup {
                pipeline,
                must_succeed: !first_in_segment,
            });
            first_in_segment = false;
        }
    }

    debug!("Parsed {:?} into {} group(s)", line, groups.len());
    ParsedLine { groups }
}

// "cd.." -> "cd .."
fn expand_shorthand(stage: &str) -> String {
    if stage.trim().eq_ignore_ascii_case("cd..") {
        "cd ..".to_string()
    } else {
        stage.to_string()
    }
}

/// Splits one pipe stage into words.
///
/// Single quotes are literal. Inside double quotes a backslash only escapes
/// `"`, `\`, `$` and `` ` ``. Outside quotes a backslash escapes any character.
pub fn tokenize(stage: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current_token = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut escaped = false;

    // Distinguishes an explicit empty word ("") from plain whitespace
    let mut token_started = false;

    let mut chars = stage.chars().peekable();

    while let Some(c) = chars.next() {
        if escaped {
            current_token.push(c);
            escaped = false;
            continue;
        }

        if c == '\\' {
            if in_single_quote {
                current_token.push(c);
            } else if in_double_quote {
                match chars.peek() {
                    Some(&next) if matches!(next, '"' | '\\' | '$' | '`') => {
                        current_token.push(next);
                        chars.next();
                    }
                    _ => current_token.push(c),
                }
            } else {
                escaped = true;
            }
            token_started = true;
            continue;
        }

        if c == '\'' && !in_double_quote {
            in_single_quote = !in_single_quote;
            token_started = true;
            continue;
        }

        if c == '"' && !in_single_quote {
            in_double_quote = !in_double_quote;
            token_started = true;
            continue;
        }

        if c.is_whitespace() && !in_single_quote && !in_double_quote {
            if token_started {
                args.push(std::mem::take(&mut current_token));
                token_started = false;
            }
            continue;
        }

        current_token.push(c);
        token_started = true;
    }

    if escaped {
        // Nothing left to escape, keep the backslash itself.
        warn!("Trailing backslash in {:?}", stage);
        current_token.push('\\');
    }
    if in_single_quote || in_double_quote {
        warn!("Unterminated quote in {:?}, closing it at end of input", stage);
    }
    if token_started {
        args.push(current_token);
    }

    args
}
