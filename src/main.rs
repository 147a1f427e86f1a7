mod script;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use quire_config::Config;
use quire_editor::{
    ClipboardPort, Editor, MemoryClipboard, PluginSupplier, SearchOptions, SystemClipboard,
};
use quire_logger::LogLevel;

/// Apply editor commands to a document and print the result
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(version)]
#[command(after_help = concat!(
    "Commands (separated by ';'):\n",
    "  goto N            Move the caret to the start of line N (1-based)\n",
    "  select-line       Select the current line\n",
    "  delete-line       Delete the current line's content\n",
    "  duplicate-line    Insert a copy of the current line below it\n",
    "  home | end        Move to line start / end\n",
    "  prev-word | next-word\n",
    "  insert TEXT       Replace the selection (\\n and \\t are expanded)\n",
    "  copy | cut | paste\n",
    "  find TEXT         Select the next match\n",
    "\n",
    "Example:\n",
    "  quire notes.txt -e 'goto 3; duplicate-line; end; insert !'",
))]
struct Cli {
    /// Document to edit; reads stdin when omitted or "-"
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Command script
    #[arg(short = 'e', long, value_name = "SCRIPT", default_value = "")]
    script: String,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file, overriding the configuration
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Use the system clipboard instead of an in-process one
    #[arg(long)]
    system_clipboard: bool,

    /// Case-sensitive find
    #[arg(long)]
    match_case: bool,

    /// Treat find patterns as regular expressions
    #[arg(long)]
    regex: bool,

    /// Find whole words only
    #[arg(long)]
    whole_word: bool,

    /// Print the final selection instead of the document
    #[arg(long)]
    print_selection: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref());
    init_logger(&config, cli.log_file.clone());

    let text = read_document(cli.file.as_deref())?;
    let commands = script::parse(&cli.script)?;

    let clipboard: Box<dyn ClipboardPort> = if cli.system_clipboard {
        Box::new(SystemClipboard::new())
    } else {
        Box::new(MemoryClipboard::new())
    };
    let mut editor = Editor::with_text(&text, clipboard);
    editor.configure(config.editor, PluginSupplier::new());

    let search = SearchOptions {
        match_case: cli.match_case,
        regex: cli.regex,
        whole_word: cli.whole_word,
    };
    for command in &commands {
        command.apply(&mut editor, &search)?;
    }

    let output = if cli.print_selection {
        editor.selected_text()
    } else {
        editor.text()
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Load configuration, falling back to defaults on any error
fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        Config::default()
    })
}

fn init_logger(config: &Config, log_file: Option<PathBuf>) {
    let min_level = config.logging.min_level.parse().unwrap_or_else(|e| {
        eprintln!("{}; logging at info", e);
        LogLevel::Info
    });
    let file_path = log_file.or_else(|| config.logging.file_path.as_ref().map(PathBuf::from));
    quire_logger::init(file_path, config.logging.max_entries, min_level);
}

fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from(["quire", "doc.txt", "-e", "goto 1; cut", "--regex"]);
        assert_eq!(cli.file.as_deref(), Some(Path::new("doc.txt")));
        assert_eq!(cli.script, "goto 1; cut");
        assert!(cli.regex);
        assert!(!cli.system_clipboard);
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[editor]\nread_only = true\ntab_size = 2\n").unwrap();

        let config = load_config(Some(&path));
        assert!(config.editor.read_only);
        assert_eq!(config.editor.tab_size, 2);
    }

    #[test]
    fn test_read_document_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "hello\n").unwrap();

        assert_eq!(read_document(Some(&path)).unwrap(), "hello\n");
        assert!(read_document(Some(&dir.path().join("missing.txt"))).is_err());
    }
}
