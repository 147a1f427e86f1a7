//! Text buffer with rope data structure for quire.
//!
//! Provides character storage using ropey, a cached offset/line index that
//! is rebuilt after every mutation, the editor selection, and the caret
//! navigation algorithms (line start/end, word boundaries, line jumps).

mod buffer;
mod error;
mod line_index;
pub mod navigation;
mod selection;

pub use buffer::TextBuffer;
pub use error::{BufferError, Result};
pub use line_index::LineIndex;
pub use navigation::is_word_char;
pub use selection::Selection;
