use std::ops::Range;

use ropey::Rope;

use crate::{BufferError, Result};

/// Mapping between absolute character offsets and line numbers.
///
/// Lines are delimited by `'\n'` only. A document with `k` newlines has
/// `k + 1` lines; the end of a line is the offset of its terminating
/// newline, or the document length for the last line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Start offset of every line (always contains at least `0`)
    line_starts: Vec<usize>,
    /// Document length in chars
    len: usize,
}

impl LineIndex {
    /// Build the index by scanning the rope once.
    pub fn build(rope: &Rope) -> Self {
        let mut line_starts = vec![0];
        let mut len = 0;
        for (idx, ch) in rope.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(idx + 1);
            }
            len = idx + 1;
        }
        Self { line_starts, len }
    }

    /// Number of lines (never zero)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Document length the index was built for
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the indexed document is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Line (0-based) containing `offset`.
    ///
    /// `offset == len` belongs to the last line.
    pub fn line_for_offset(&self, offset: usize) -> Result<usize> {
        if offset > self.len {
            return Err(BufferError::OffsetOutOfRange {
                offset,
                len: self.len,
            });
        }
        Ok(self.line_at(offset))
    }

    /// Offset of the first character of line `line`.
    pub fn start_of_line(&self, line: usize) -> Result<usize> {
        self.check_line(line)?;
        Ok(self.line_starts[line])
    }

    /// Offset of the terminating newline of `line`, or the document length
    /// for the last line.
    pub fn end_of_line(&self, line: usize) -> Result<usize> {
        self.check_line(line)?;
        Ok(self.line_end(line))
    }

    /// `[start, end)` range of `line`, newline excluded.
    pub fn line_range(&self, line: usize) -> Result<Range<usize>> {
        self.check_line(line)?;
        Ok(self.line_starts[line]..self.line_end(line))
    }

    fn check_line(&self, line: usize) -> Result<()> {
        if line >= self.line_count() {
            return Err(BufferError::LineOutOfRange {
                line,
                count: self.line_count(),
            });
        }
        Ok(())
    }

    // Callers guarantee `offset <= len`; larger values land on the last line.
    pub(crate) fn line_at(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }

    // Callers guarantee `line < line_count`.
    pub(crate) fn line_end(&self, line: usize) -> usize {
        match self.line_starts.get(line + 1) {
            Some(next_start) => next_start - 1,
            None => self.len,
        }
    }

    pub(crate) fn range_at(&self, offset: usize) -> Range<usize> {
        let line = self.line_at(offset);
        self.line_starts[line]..self.line_end(line)
    }
}
