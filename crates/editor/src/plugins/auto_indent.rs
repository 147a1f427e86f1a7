use std::any::Any;

use quire_plugin::{EditorPlugin, KeyCode, KeyEvent, KeyModifiers};

use crate::Editor;

/// Carries the current line's leading whitespace onto new lines.
#[derive(Debug, Default)]
pub struct AutoIndent;

impl AutoIndent {
    pub const ID: &'static str = "auto-indent";

    pub fn new() -> Self {
        Self
    }

    /// Leading whitespace of the line containing the selection start.
    fn current_indent(editor: &Editor) -> String {
        let buffer = editor.buffer();
        let line = buffer.selected_line_range();
        (line.start..line.end)
            .map_while(|offset| buffer.char_at(offset).filter(|c| *c == ' ' || *c == '\t'))
            .collect()
    }
}

impl EditorPlugin<Editor> for AutoIndent {
    fn plugin_id(&self) -> &str {
        Self::ID
    }

    fn on_key_down(&mut self, code: KeyCode, event: &KeyEvent, editor: &mut Editor) -> bool {
        if code != KeyCode::Enter || event.modifiers != KeyModifiers::NONE || editor.is_read_only()
        {
            return false;
        }

        let indent = Self::current_indent(editor);
        editor.insert(&format!("\n{}", indent));
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
