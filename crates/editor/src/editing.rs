//! Selection-relative text mutation and clipboard operations.

use quire_clipboard::ClipLabel;

use crate::Editor;

impl Editor {
    /// Replace the selection with `delta`; the caret ends after it.
    pub fn insert(&mut self, delta: &str) {
        if self.reject_if_read_only("insert") {
            return;
        }
        self.replace_selection(delta);
    }

    /// Copy the selection to the clipboard, then delete it.
    ///
    /// A caret copies the empty string and deletes nothing.
    pub fn cut(&mut self) {
        let selected = self.buffer.selected_text();
        self.clipboard.write(ClipLabel::Cut, &selected);

        if selected.is_empty() || self.reject_if_read_only("cut") {
            return;
        }
        self.replace_selection("");
    }

    /// Copy the selection to the clipboard.
    pub fn copy(&mut self) {
        let selected = self.buffer.selected_text();
        self.clipboard.write(ClipLabel::Copy, &selected);
    }

    /// Replace the selection with the clipboard text.
    ///
    /// An empty clipboard deletes the selection.
    pub fn paste(&mut self) {
        if self.reject_if_read_only("paste") {
            return;
        }
        let text = self.clipboard.read_primary().unwrap_or_default();
        self.replace_selection(&text);
    }

    /// Select the line containing the selection start, newline excluded.
    pub fn select_line(&mut self) {
        let line = self.buffer.selected_line_range();
        if let Err(e) = self.buffer.set_selection(line.start, line.end) {
            quire_logger::error(format!("select_line: {}", e));
        }
    }

    /// Delete the content of the line containing the selection start.
    ///
    /// The line's terminating newline is kept.
    pub fn delete_line(&mut self) {
        if self.reject_if_read_only("delete_line") {
            return;
        }
        let line = self.buffer.selected_line_range();
        if line.is_empty() {
            return;
        }
        match self.buffer.delete(line) {
            Ok(()) => self.notify_change(),
            Err(e) => quire_logger::error(format!("delete_line: {}", e)),
        }
    }

    /// Insert a copy of the current line below it.
    ///
    /// The selection keeps pointing at the original line.
    pub fn duplicate_line(&mut self) {
        if self.reject_if_read_only("duplicate_line") {
            return;
        }
        let line = self.buffer.selected_line_range();
        let result = self.buffer.slice(line.clone()).and_then(|text| {
            let copy = format!("\n{}", text);
            self.buffer.insert(line.end, &copy)
        });
        match result {
            Ok(()) => self.notify_change(),
            Err(e) => quire_logger::error(format!("duplicate_line: {}", e)),
        }
    }

    /// Delete the selection, or the character before the caret.
    pub fn backspace(&mut self) -> bool {
        let selection = self.buffer.selection();
        if selection.is_caret() && selection.start == 0 {
            return false;
        }
        if self.reject_if_read_only("backspace") {
            return false;
        }
        let range = if selection.is_caret() {
            selection.start - 1..selection.start
        } else {
            selection.range()
        };
        self.delete_range(range)
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete_forward(&mut self) -> bool {
        let selection = self.buffer.selection();
        if selection.is_caret() && selection.end == self.buffer.len_chars() {
            return false;
        }
        if self.reject_if_read_only("delete") {
            return false;
        }
        let range = if selection.is_caret() {
            selection.end..selection.end + 1
        } else {
            selection.range()
        };
        self.delete_range(range)
    }

    /// Replace the selection, notifying only when the document changed.
    fn replace_selection(&mut self, text: &str) {
        if self.buffer.selection().is_caret() && text.is_empty() {
            return;
        }
        self.buffer.replace_selection(text);
        self.notify_change();
    }

    fn delete_range(&mut self, range: std::ops::Range<usize>) -> bool {
        match self.buffer.delete(range) {
            Ok(()) => {
                self.notify_change();
                true
            }
            Err(e) => {
                quire_logger::error(format!("delete: {}", e));
                false
            }
        }
    }
}
