use std::cell::OnceCell;
use std::ops::Range;

use ropey::Rope;

use crate::{BufferError, LineIndex, Result, Selection};

/// Text buffer based on Rope, together with the editor selection.
///
/// The line index is derived from the rope and cached; every mutation drops
/// the cache and [`TextBuffer::line_index`] rebuilds it on the next query, so
/// callers can never observe a stale index.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// Rope structure for storing text
    rope: Rope,
    /// Current selection, always within `0..=len_chars()`
    selection: Selection,
    /// Cached offset/line mapping
    index: OnceCell<LineIndex>,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create buffer holding `text` with the caret at offset 0
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            index: OnceCell::new(),
        }
    }

    /// Replace the whole content, resetting the caret to offset 0
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.selection = Selection::default();
        self.index.take();
    }

    /// Get all text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Underlying rope (read-only)
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Document length in chars
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Character at `offset`, if any
    pub fn char_at(&self, offset: usize) -> Option<char> {
        if offset < self.rope.len_chars() {
            Some(self.rope.char(offset))
        } else {
            None
        }
    }

    /// Text of `range` (char offsets)
    pub fn slice(&self, range: Range<usize>) -> Result<String> {
        self.check_range(&range)?;
        Ok(self.rope.slice(range).to_string())
    }

    /// Fresh line index for the current content
    pub fn line_index(&self) -> &LineIndex {
        self.index.get_or_init(|| LineIndex::build(&self.rope))
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.line_index().line_count()
    }

    /// Text of line `line` without its newline
    pub fn line_text(&self, line: usize) -> Result<String> {
        let range = self.line_index().line_range(line)?;
        Ok(self.rope.slice(range).to_string())
    }

    /// Range of the line containing the selection start, newline excluded
    pub fn selected_line_range(&self) -> Range<usize> {
        self.line_index().range_at(self.selection.start)
    }

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Selected text (empty for a caret)
    pub fn selected_text(&self) -> String {
        self.rope.slice(self.selection.range()).to_string()
    }

    /// Set selection between two offsets in any order
    pub fn set_selection(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_offset(a)?;
        self.check_offset(b)?;
        self.selection = Selection::new(a, b);
        Ok(())
    }

    /// Collapse selection to `offset`
    pub fn set_caret(&mut self, offset: usize) -> Result<()> {
        self.set_selection(offset, offset)
    }

    /// Replace `range` with `text`.
    ///
    /// The selection is mapped through the edit: offsets at or before the
    /// edit start stay, offsets after the removed range shift.
    pub fn replace(&mut self, range: Range<usize>, text: &str) -> Result<()> {
        self.check_range(&range)?;

        if !range.is_empty() {
            self.rope.remove(range.clone());
        }
        if !text.is_empty() {
            self.rope.insert(range.start, text);
        }
        self.index.take();

        let inserted_len = text.chars().count();
        self.selection = self.selection.shifted(range, inserted_len);
        Ok(())
    }

    /// Insert `text` at `offset`
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<()> {
        self.replace(offset..offset, text)
    }

    /// Delete text range
    pub fn delete(&mut self, range: Range<usize>) -> Result<()> {
        self.replace(range, "")
    }

    /// Replace the selection with `text` and put the caret after it
    pub fn replace_selection(&mut self, text: &str) {
        let Selection { start, end } = self.selection;
        // The selection is always within bounds.
        if self.replace(start..end, text).is_ok() {
            self.selection = Selection::caret(start + text.chars().count());
        }
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        let len = self.rope.len_chars();
        if offset > len {
            return Err(BufferError::OffsetOutOfRange { offset, len });
        }
        Ok(())
    }

    fn check_range(&self, range: &Range<usize>) -> Result<()> {
        if range.start > range.end {
            return Err(BufferError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        self.check_offset(range.end)
    }
}
