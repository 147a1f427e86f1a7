use std::cell::Cell;
use std::rc::Rc;

use quire_editor::{BufferError, Editor, MemoryClipboard, Selection};

fn editor(text: &str, caret: usize) -> Editor {
    let mut editor = Editor::with_text(text, MemoryClipboard::new());
    editor.set_caret(caret).unwrap();
    editor
}

#[test]
fn test_select_then_delete_line() {
    let mut ed = editor("hello\nworld", 5);
    ed.select_line();
    assert_eq!(ed.selection(), Selection::new(0, 5));

    ed.set_caret(5).unwrap();
    ed.delete_line();
    assert_eq!(ed.text(), "\nworld");
}

#[test]
fn test_prev_word_from_end() {
    let mut ed = editor("abc def", 7);
    ed.caret_to_prev_word();
    assert_eq!(ed.selection(), Selection::caret(4));
}

#[test]
fn test_goto_line_bounds() {
    let mut ed = editor("one\ntwo\nthree", 0);
    assert_eq!(ed.goto_line(1), Ok(()));
    assert_eq!(ed.selection(), Selection::caret(0));
    assert_eq!(ed.goto_line(3), Err(BufferError::InvalidLine(3)));
}

#[test]
fn test_cut_then_paste_restores_text() {
    let mut ed = editor("alpha beta gamma", 0);
    ed.set_selection(6, 11).unwrap();
    ed.cut();
    assert_eq!(ed.text(), "alpha gamma");
    assert!(ed.has_primary_clip());

    ed.paste();
    assert_eq!(ed.text(), "alpha beta gamma");
    assert_eq!(ed.selection(), Selection::caret(11));
}

#[test]
fn test_copy_paste_over_selection() {
    let mut ed = editor("left right", 0);
    ed.set_selection(0, 4).unwrap();
    ed.copy();
    ed.set_selection(5, 10).unwrap();
    ed.paste();
    assert_eq!(ed.text(), "left left");
}

#[test]
fn test_duplicate_line_grows_by_line_plus_newline() {
    let mut ed = editor("first\nsecond\nthird", 8);
    let line_len = "second".chars().count();
    let before = ed.text().chars().count();

    ed.duplicate_line();
    assert_eq!(ed.text(), "first\nsecond\nsecond\nthird");
    assert_eq!(ed.text().chars().count(), before + line_len + 1);
    assert_eq!(ed.selection(), Selection::caret(8));
}

#[test]
fn test_change_listener_counts_mutations_only() {
    let changes = Rc::new(Cell::new(0));
    let counter = changes.clone();

    let mut ed = editor("a b c", 0);
    ed.set_on_change(move || counter.set(counter.get() + 1));

    ed.caret_to_next_word();
    ed.select_line();
    ed.copy();
    assert_eq!(changes.get(), 0);

    ed.cut();
    ed.paste();
    ed.duplicate_line();
    assert_eq!(changes.get(), 3);

    ed.clear_on_change();
    ed.insert("x");
    assert_eq!(changes.get(), 3);
}

#[test]
fn test_multibyte_offsets_are_chars() {
    let mut ed = editor("привет мир", 10);
    ed.caret_to_prev_word();
    assert_eq!(ed.selection(), Selection::caret(7));
    ed.select_line();
    assert_eq!(ed.selected_text(), "привет мир");
}
