//! Built-in editor plugins, toggled by [`EditorSettings`](crate::EditorSettings).

mod auto_close;
mod auto_indent;

pub use auto_close::AutoClose;
pub use auto_indent::AutoIndent;
