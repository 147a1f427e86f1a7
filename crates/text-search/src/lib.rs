//! Text search for quire.
//!
//! Provides plain and regex search with case and whole-word options.
//! Matches are reported as absolute character offsets into the searched text.

use regex::{Regex, RegexBuilder};

/// Search direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

/// A match location in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Start offset in chars.
    pub start: usize,
    /// End offset in chars (exclusive).
    pub end: usize,
}

impl Match {
    /// Match length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Search options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Case-sensitive search.
    pub match_case: bool,
    /// Use regex pattern.
    pub regex: bool,
    /// Whole word only.
    pub whole_word: bool,
}

/// Compile `pattern` according to `options`.
pub fn build_regex(pattern: &str, options: &SearchOptions) -> Result<Regex, regex::Error> {
    let search_pattern = if options.regex {
        pattern.to_string()
    } else {
        regex::escape(pattern)
    };

    let search_pattern = if options.whole_word {
        format!(r"\b(?:{})\b", search_pattern)
    } else {
        search_pattern
    };

    RegexBuilder::new(&search_pattern)
        .case_insensitive(!options.match_case)
        .multi_line(true)
        .build()
}

/// Search in text and return all non-empty matches in order.
///
/// An invalid regex yields no matches; the error is logged.
pub fn find_all(text: &str, pattern: &str, options: &SearchOptions) -> Vec<Match> {
    if pattern.is_empty() {
        return vec![];
    }

    let regex = match build_regex(pattern, options) {
        Ok(r) => r,
        Err(e) => {
            quire_logger::warn(format!("Invalid search pattern {:?}: {}", pattern, e));
            return vec![];
        }
    };

    // Byte offsets are converted to char offsets incrementally; matches come in order.
    let mut matches = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;
    for mat in regex.find_iter(text) {
        if mat.as_str().is_empty() {
            continue;
        }
        char_pos += text[byte_pos..mat.start()].chars().count();
        let len = mat.as_str().chars().count();
        matches.push(Match {
            start: char_pos,
            end: char_pos + len,
        });
        char_pos += len;
        byte_pos = mat.end();
    }

    matches
}

/// Index of the match closest to `offset` in `direction`, wrapping around.
///
/// Forward: first match starting at or after `offset`.
/// Backward: last match starting before `offset`.
pub fn find_closest(matches: &[Match], offset: usize, direction: SearchDirection) -> Option<usize> {
    if matches.is_empty() {
        return None;
    }

    match direction {
        SearchDirection::Forward => matches
            .iter()
            .position(|m| m.start >= offset)
            .or(Some(0)), // Wrap to first match
        SearchDirection::Backward => matches
            .iter()
            .rposition(|m| m.start < offset)
            .or(Some(matches.len() - 1)), // Wrap to last match
    }
}
