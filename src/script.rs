//! Editor command scripts: `;`-separated commands applied in order.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use quire_editor::{Editor, SearchOptions};

/// A single script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Goto(usize),
    SelectLine,
    DeleteLine,
    DuplicateLine,
    Home,
    End,
    PrevWord,
    NextWord,
    Insert(String),
    Copy,
    Cut,
    Paste,
    Find(String),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim_start();
        let (name, arg) = match s.split_once(' ') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s.trim_end(), None),
        };

        let command = match (name, arg) {
            ("goto", Some(n)) => Command::Goto(
                n.trim()
                    .parse()
                    .with_context(|| format!("Invalid line number: {}", n.trim()))?,
            ),
            ("select-line", None) => Command::SelectLine,
            ("delete-line", None) => Command::DeleteLine,
            ("duplicate-line", None) => Command::DuplicateLine,
            ("home", None) => Command::Home,
            ("end", None) => Command::End,
            ("prev-word", None) => Command::PrevWord,
            ("next-word", None) => Command::NextWord,
            ("insert", Some(text)) => Command::Insert(unescape(text)),
            ("copy", None) => Command::Copy,
            ("cut", None) => Command::Cut,
            ("paste", None) => Command::Paste,
            ("find", Some(text)) if !text.is_empty() => Command::Find(unescape(text)),
            ("goto" | "insert" | "find", None) => bail!("Command '{}' needs an argument", name),
            _ => bail!("Unknown command: {}", s.trim_end()),
        };
        Ok(command)
    }
}

impl Command {
    /// Apply the command to `editor`.
    pub fn apply(&self, editor: &mut Editor, search: &SearchOptions) -> Result<()> {
        match self {
            Command::Goto(line) => editor
                .goto_line(*line)
                .map_err(|e| anyhow!("goto {}: {}", line, e))?,
            Command::SelectLine => editor.select_line(),
            Command::DeleteLine => editor.delete_line(),
            Command::DuplicateLine => editor.duplicate_line(),
            Command::Home => {
                editor.caret_to_start_of_line();
            }
            Command::End => {
                editor.caret_to_end_of_line();
            }
            Command::PrevWord => {
                editor.caret_to_prev_word();
            }
            Command::NextWord => {
                editor.caret_to_next_word();
            }
            Command::Insert(text) => editor.insert(text),
            Command::Copy => editor.copy(),
            Command::Cut => editor.cut(),
            Command::Paste => editor.paste(),
            Command::Find(pattern) => {
                if !editor.find(pattern, search) {
                    quire_logger::info(format!("find: no match for {:?}", pattern));
                }
            }
        }
        Ok(())
    }
}

/// Parse a `;`-separated script; blank commands are skipped.
pub fn parse(script: &str) -> Result<Vec<Command>> {
    script
        .split(';')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Resolve `\n`, `\t` and `\\` escapes.
fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use quire_editor::MemoryClipboard;

    fn run(text: &str, script: &str) -> Editor {
        let mut editor = Editor::with_text(text, MemoryClipboard::new());
        for command in parse(script).unwrap() {
            command.apply(&mut editor, &SearchOptions::default()).unwrap();
        }
        editor
    }

    #[test]
    fn test_parse_commands() {
        let commands = parse("goto 2; select-line;;insert a b ;find x").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Goto(2),
                Command::SelectLine,
                Command::Insert("a b ".to_string()),
                Command::Find("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("jump").is_err());
        assert!(parse("goto x").is_err());
        assert!(parse("insert").is_err());
        assert!(parse("copy now").is_err());
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"a\nb\tc\\d\q"), "a\nb\tc\\d\\q");
    }

    #[test]
    fn test_run_script() {
        let editor = run("one\ntwo\nthree", "goto 2; duplicate-line; end; insert !");
        assert_eq!(editor.text(), "one\ntwo!\ntwo\nthree");
    }

    #[test]
    fn test_cut_and_paste_script() {
        let editor = run("alpha beta", "find beta; cut; home; paste; insert  ");
        assert_eq!(editor.text(), "beta alpha ");
    }

    #[test]
    fn test_goto_error_is_reported() {
        let mut editor = Editor::with_text("a\nb", MemoryClipboard::new());
        let err = Command::Goto(2)
            .apply(&mut editor, &SearchOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("goto 2"));
    }
}
