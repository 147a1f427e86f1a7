//! Default key handling for key presses no plugin claimed.

use quire_plugin::{KeyCode, KeyEvent, KeyModifiers};

use crate::Editor;

/// Apply the default action bound to `key`.
///
/// Returns `false` for unbound keys.
pub(crate) fn handle_key_down(editor: &mut Editor, key: &KeyEvent) -> bool {
    match (key.code, key.modifiers) {
        // Navigation
        (KeyCode::Left, KeyModifiers::NONE) => editor.move_left(),
        (KeyCode::Right, KeyModifiers::NONE) => editor.move_right(),
        (KeyCode::Left, KeyModifiers::CONTROL) => editor.caret_to_prev_word(),
        (KeyCode::Right, KeyModifiers::CONTROL) => editor.caret_to_next_word(),
        (KeyCode::Home, KeyModifiers::NONE) => editor.caret_to_start_of_line(),
        (KeyCode::End, KeyModifiers::NONE) => editor.caret_to_end_of_line(),

        // Clipboard
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Insert, KeyModifiers::CONTROL) => {
            editor.copy();
            true
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL)
        | (KeyCode::Delete, KeyModifiers::SHIFT) => {
            editor.cut();
            true
        }
        (KeyCode::Char('v'), KeyModifiers::CONTROL)
        | (KeyCode::Insert, KeyModifiers::SHIFT) => {
            editor.paste();
            true
        }

        // Line operations
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            editor.duplicate_line();
            true
        }
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
            editor.select_line();
            true
        }
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            editor.delete_line();
            true
        }

        // Editing
        (KeyCode::Char(ch), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            let mut buf = [0u8; 4];
            editor.insert(ch.encode_utf8(&mut buf));
            true
        }
        (KeyCode::Enter, KeyModifiers::NONE) => {
            editor.insert("\n");
            true
        }
        (KeyCode::Tab, KeyModifiers::NONE) => {
            let indent = editor.settings().indent_unit();
            editor.insert(&indent);
            true
        }
        (KeyCode::Backspace, KeyModifiers::NONE) => editor.backspace(),
        (KeyCode::Delete, KeyModifiers::NONE) => editor.delete_forward(),

        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Editor, EditorSettings, InputEvent, KeyCode, KeyEvent, KeyModifiers, MemoryClipboard,
        PluginSupplier, Selection,
    };

    fn press(editor: &mut Editor, code: KeyCode, modifiers: KeyModifiers) -> bool {
        editor.handle_event(InputEvent::KeyDown(KeyEvent::new(code, modifiers)))
    }

    fn editor(text: &str, caret: usize) -> Editor {
        let mut editor = Editor::with_text(text, MemoryClipboard::new());
        editor.set_caret(caret).unwrap();
        editor
    }

    #[test]
    fn test_typing() {
        let mut ed = editor("", 0);
        assert!(press(&mut ed, KeyCode::Char('H'), KeyModifiers::SHIFT));
        assert!(press(&mut ed, KeyCode::Char('i'), KeyModifiers::NONE));
        assert!(press(&mut ed, KeyCode::Enter, KeyModifiers::NONE));
        assert!(press(&mut ed, KeyCode::Char('ж'), KeyModifiers::NONE));
        assert_eq!(ed.text(), "Hi\nж");
        assert_eq!(ed.selection(), Selection::caret(4));
    }

    #[test]
    fn test_tab_uses_indent_unit() {
        let mut ed = editor("", 0);
        press(&mut ed, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(ed.text(), "    ");

        let settings = EditorSettings {
            use_spaces: false,
            ..Default::default()
        };
        ed.configure(settings, PluginSupplier::new());
        press(&mut ed, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(ed.text(), "    \t");
    }

    #[test]
    fn test_backspace_and_delete_keys() {
        let mut ed = editor("abc", 1);
        assert!(press(&mut ed, KeyCode::Backspace, KeyModifiers::NONE));
        assert!(!press(&mut ed, KeyCode::Backspace, KeyModifiers::NONE));
        assert!(press(&mut ed, KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(ed.text(), "c");
    }

    #[test]
    fn test_navigation_keys() {
        let mut ed = editor("abc def\nxyz", 5);
        press(&mut ed, KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(ed.selection(), Selection::caret(0));
        press(&mut ed, KeyCode::End, KeyModifiers::NONE);
        assert_eq!(ed.selection(), Selection::caret(7));
        press(&mut ed, KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(ed.selection(), Selection::caret(4));
        press(&mut ed, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(ed.selection(), Selection::caret(3));
        press(&mut ed, KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(ed.selection(), Selection::caret(4));
    }

    #[test]
    fn test_clipboard_keys() {
        let mut ed = editor("one two", 0);
        ed.set_selection(0, 3).unwrap();
        press(&mut ed, KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(ed.text(), " two");

        press(&mut ed, KeyCode::End, KeyModifiers::NONE);
        press(&mut ed, KeyCode::Char('v'), KeyModifiers::CONTROL);
        assert_eq!(ed.text(), " twoone");

        ed.set_selection(1, 4).unwrap();
        press(&mut ed, KeyCode::Insert, KeyModifiers::CONTROL);
        press(&mut ed, KeyCode::Insert, KeyModifiers::SHIFT);
        assert_eq!(ed.text(), " twoone");
    }

    #[test]
    fn test_line_keys() {
        let mut ed = editor("abc\ndef", 5);
        press(&mut ed, KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(ed.text(), "abc\ndef\ndef");
        press(&mut ed, KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(ed.selected_text(), "def");
        press(&mut ed, KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(ed.text(), "abc\n\ndef");
    }

    #[test]
    fn test_unbound_and_non_keydown_events() {
        let mut ed = editor("abc", 0);
        assert!(!press(&mut ed, KeyCode::F(5), KeyModifiers::NONE));
        assert!(!press(&mut ed, KeyCode::Char('q'), KeyModifiers::ALT));

        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(!ed.handle_event(InputEvent::KeyUp(key)));
        assert_eq!(ed.text(), "abc");
    }
}
