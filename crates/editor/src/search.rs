//! Find in document.

use quire_text_search::{find_all, find_closest, SearchDirection, SearchOptions};

use crate::Editor;

impl Editor {
    /// Select the first match at or after the selection end, wrapping around.
    ///
    /// Returns `false` when the pattern has no match.
    pub fn find(&mut self, pattern: &str, options: &SearchOptions) -> bool {
        let offset = self.buffer.selection().end;
        self.select_match(pattern, options, offset, SearchDirection::Forward)
    }

    /// Select the last match before the selection start, wrapping around.
    pub fn find_prev(&mut self, pattern: &str, options: &SearchOptions) -> bool {
        let offset = self.buffer.selection().start;
        self.select_match(pattern, options, offset, SearchDirection::Backward)
    }

    fn select_match(
        &mut self,
        pattern: &str,
        options: &SearchOptions,
        offset: usize,
        direction: SearchDirection,
    ) -> bool {
        let matches = find_all(&self.buffer.text(), pattern, options);
        let Some(found) = find_closest(&matches, offset, direction).map(|i| matches[i]) else {
            quire_logger::debug(format!("No match for {:?}", pattern));
            return false;
        };
        self.buffer.set_selection(found.start, found.end).is_ok()
    }
}
