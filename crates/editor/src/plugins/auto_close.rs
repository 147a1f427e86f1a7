use std::any::Any;

use quire_plugin::{EditorPlugin, KeyCode, KeyEvent, KeyModifiers};

use crate::Editor;

const DEFAULT_PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}'), ('"', '"'), ('\'', '\'')];

/// Inserts the closing bracket or quote together with the opening one.
///
/// Typing a closer right before the same closer steps over it instead of
/// inserting a second one. Only acts on a collapsed caret.
#[derive(Debug)]
pub struct AutoClose {
    pairs: &'static [(char, char)],
}

impl AutoClose {
    pub const ID: &'static str = "auto-close";

    pub fn new() -> Self {
        Self {
            pairs: DEFAULT_PAIRS,
        }
    }

    /// Use a custom pair table
    pub fn with_pairs(pairs: &'static [(char, char)]) -> Self {
        Self { pairs }
    }

    fn closer_for(&self, ch: char) -> Option<char> {
        self.pairs
            .iter()
            .find(|(open, _)| *open == ch)
            .map(|(_, close)| *close)
    }

    fn is_closer(&self, ch: char) -> bool {
        self.pairs.iter().any(|(_, close)| *close == ch)
    }
}

impl Default for AutoClose {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorPlugin<Editor> for AutoClose {
    fn plugin_id(&self) -> &str {
        Self::ID
    }

    fn on_key_down(&mut self, code: KeyCode, event: &KeyEvent, editor: &mut Editor) -> bool {
        let KeyCode::Char(ch) = code else {
            return false;
        };
        if !matches!(event.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT)
            || editor.is_read_only()
        {
            return false;
        }

        let selection = editor.selection();
        if !selection.is_caret() {
            return false;
        }

        // Step over an existing closer
        if self.is_closer(ch) && editor.buffer().char_at(selection.start) == Some(ch) {
            return editor.move_right();
        }

        let Some(close) = self.closer_for(ch) else {
            return false;
        };
        editor.insert(&format!("{}{}", ch, close));
        editor.move_left()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InputEvent, MemoryClipboard, Selection};

    fn type_char(editor: &mut Editor, ch: char) -> bool {
        editor.handle_event(InputEvent::KeyDown(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::NONE,
        )))
    }

    fn editor() -> Editor {
        let mut editor = Editor::with_text("", MemoryClipboard::new());
        editor.install_plugin(AutoClose::new());
        editor
    }

    #[test]
    fn test_inserts_pair_with_caret_between() {
        let mut ed = editor();
        assert!(type_char(&mut ed, '('));
        assert_eq!(ed.text(), "()");
        assert_eq!(ed.selection(), Selection::caret(1));

        type_char(&mut ed, 'x');
        assert_eq!(ed.text(), "(x)");
    }

    #[test]
    fn test_steps_over_closer() {
        let mut ed = editor();
        type_char(&mut ed, '[');
        type_char(&mut ed, ']');
        assert_eq!(ed.text(), "[]");
        assert_eq!(ed.selection(), Selection::caret(2));
    }

    #[test]
    fn test_quotes() {
        let mut ed = editor();
        type_char(&mut ed, '"');
        assert_eq!(ed.text(), "\"\"");
        type_char(&mut ed, '"');
        assert_eq!(ed.text(), "\"\"");
        assert_eq!(ed.selection(), Selection::caret(2));
    }

    #[test]
    fn test_selection_falls_through_to_default() {
        let mut ed = editor();
        ed.set_text_content("abc");
        ed.set_selection(0, 3).unwrap();
        type_char(&mut ed, '{');
        assert_eq!(ed.text(), "{");
    }

    #[test]
    fn test_custom_pairs() {
        let mut ed = Editor::with_text("", MemoryClipboard::new());
        ed.install_plugin(AutoClose::with_pairs(&[('<', '>')]));
        type_char(&mut ed, '(');
        type_char(&mut ed, '<');
        assert_eq!(ed.text(), "(<>");
    }
}
