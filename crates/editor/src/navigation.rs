//! Caret movement.

use quire_buffer::{navigation, BufferError};

use crate::Editor;

impl Editor {
    /// Move the caret to the start of the current line.
    pub fn caret_to_start_of_line(&mut self) -> bool {
        let target = navigation::line_start(&self.buffer);
        self.move_caret(target)
    }

    /// Move the caret to the end of the current line.
    pub fn caret_to_end_of_line(&mut self) -> bool {
        let target = navigation::line_end(&self.buffer);
        self.move_caret(target)
    }

    /// Move the caret to the start of the word left of the selection.
    pub fn caret_to_prev_word(&mut self) -> bool {
        let target = navigation::prev_word(&self.buffer);
        self.move_caret(target)
    }

    /// Move the caret to the end of the word right of the selection start.
    pub fn caret_to_next_word(&mut self) -> bool {
        let target = navigation::next_word(&self.buffer);
        self.move_caret(target)
    }

    /// Move the caret to the start of 1-based `line_number`.
    ///
    /// On error the selection is left untouched.
    pub fn goto_line(&mut self, line_number: usize) -> Result<(), BufferError> {
        let target = navigation::goto_line_target(&self.buffer, line_number)?;
        self.buffer.set_caret(target)
    }

    /// Collapse a selection to its start, or step the caret one char left.
    pub fn move_left(&mut self) -> bool {
        let selection = self.buffer.selection();
        let target = if selection.is_caret() {
            selection.start.saturating_sub(1)
        } else {
            selection.start
        };
        self.move_caret(target)
    }

    /// Collapse a selection to its end, or step the caret one char right.
    pub fn move_right(&mut self) -> bool {
        let selection = self.buffer.selection();
        let target = if selection.is_caret() {
            (selection.end + 1).min(self.buffer.len_chars())
        } else {
            selection.end
        };
        self.move_caret(target)
    }

    fn move_caret(&mut self, target: usize) -> bool {
        match self.buffer.set_caret(target) {
            Ok(()) => true,
            Err(e) => {
                quire_logger::error(format!("move caret: {}", e));
                false
            }
        }
    }
}
