//! Configuration structures for quire settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Reject all document mutations
    #[serde(default)]
    pub read_only: bool,

    /// Keep the current line's indentation on Enter
    #[serde(default = "default_auto_indent")]
    pub auto_indent: bool,

    /// Insert the closing bracket or quote after an opening one
    #[serde(default = "default_auto_close_brackets")]
    pub auto_close_brackets: bool,

    /// Tab size (number of spaces)
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Insert spaces instead of a tab character
    #[serde(default = "default_use_spaces")]
    pub use_spaces: bool,
}

impl EditorSettings {
    /// Text inserted by the Tab key
    pub fn indent_unit(&self) -> String {
        if self.use_spaces {
            " ".repeat(self.tab_size)
        } else {
            "\t".to_string()
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Number of entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_auto_indent() -> bool {
    defaults::AUTO_INDENT
}

fn default_auto_close_brackets() -> bool {
    defaults::AUTO_CLOSE_BRACKETS
}

fn default_tab_size() -> usize {
    defaults::TAB_SIZE
}

fn default_use_spaces() -> bool {
    defaults::USE_SPACES
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

/// Legacy flat config format for migration.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyConfig {
    #[serde(default)]
    pub read_only: bool,
    #[serde(default = "default_auto_indent")]
    pub indent_line: bool,
    #[serde(default = "default_auto_close_brackets")]
    pub insert_bracket: bool,
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
    #[serde(default = "default_use_spaces")]
    pub use_spaces: bool,
    #[serde(default)]
    pub log_file_path: Option<String>,
    #[serde(default = "default_min_level")]
    pub min_log_level: String,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Self {
            editor: EditorSettings {
                read_only: legacy.read_only,
                auto_indent: legacy.indent_line,
                auto_close_brackets: legacy.insert_bracket,
                tab_size: legacy.tab_size,
                use_spaces: legacy.use_spaces,
            },
            logging: LoggingSettings {
                file_path: legacy.log_file_path,
                min_level: legacy.min_log_level,
                max_entries: default_max_entries(),
            },
        }
    }
}

// Default implementations
impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            read_only: false,
            auto_indent: default_auto_indent(),
            auto_close_brackets: default_auto_close_brackets(),
            tab_size: default_tab_size(),
            use_spaces: default_use_spaces(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
