//! Caret target computation.
//!
//! Every function here is a pure query over a [`TextBuffer`] and its current
//! selection; applying the result is up to the caller.

use crate::{BufferError, Result, TextBuffer};

/// Word characters are letters, digits and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the line containing the selection start.
pub fn line_start(buffer: &TextBuffer) -> usize {
    let index = buffer.line_index();
    index.range_at(buffer.selection().start).start
}

/// End of the line containing the selection end.
pub fn line_end(buffer: &TextBuffer) -> usize {
    let index = buffer.line_index();
    index.range_at(buffer.selection().end).end
}

/// Target of a word-wise move to the left of the selection start.
///
/// Skips the run of characters of the same class (word / non-word) as the
/// one left of the caret. Stops at 0 when the run reaches the buffer start.
pub fn prev_word(buffer: &TextBuffer) -> usize {
    let caret = buffer.selection().start;
    let Some(first) = caret.checked_sub(1).and_then(|i| buffer.char_at(i)) else {
        return caret;
    };
    let in_word = is_word_char(first);

    let mut pos = caret;
    while pos > 0 {
        match buffer.char_at(pos - 1) {
            Some(ch) if is_word_char(ch) == in_word => pos -= 1,
            _ => return pos,
        }
    }
    0
}

/// Target of a word-wise move to the right of the selection start.
///
/// Mirror image of [`prev_word`]; stops at the document length when the run
/// reaches the buffer end.
pub fn next_word(buffer: &TextBuffer) -> usize {
    let caret = buffer.selection().start;
    let Some(first) = buffer.char_at(caret) else {
        return caret;
    };
    let in_word = is_word_char(first);

    let len = buffer.len_chars();
    let mut pos = caret;
    while pos < len {
        match buffer.char_at(pos) {
            Some(ch) if is_word_char(ch) == in_word => pos += 1,
            _ => return pos,
        }
    }
    len
}

/// Start offset of the 1-based `line_number`.
///
/// The last line is not a valid target: `line_number - 1` must be below
/// `line_count - 1`.
pub fn goto_line_target(buffer: &TextBuffer, line_number: usize) -> Result<usize> {
    let index = buffer.line_index();
    let line = line_number
        .checked_sub(1)
        .filter(|&line| line < index.line_count() - 1)
        .ok_or(BufferError::InvalidLine(line_number))?;
    index.start_of_line(line)
}
