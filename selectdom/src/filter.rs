//! Single-line filter input for the autocomplete box.
//!
//! A pared-down text field: content and cursor, no selection range. The
//! widget feeds keys here while the dropdown is open and re-derives the
//! registry's hidden overlay whenever the text changes.

use crate::event::{Key, Modifiers};

#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    text: String,
    cursor: usize,
}

/// Result of feeding a key to the filter box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEdit {
    /// Text changed; the filter should be re-applied.
    Changed,
    /// Key was consumed but text is unchanged (cursor movement).
    Handled,
    /// Not a text-editing key; the caller should process it.
    Ignored,
}

impl FilterInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> FilterEdit {
        match key {
            Key::Char(c) if c != '\0' && (modifiers.none() || modifiers.shift) => {
                self.insert_char(c);
                FilterEdit::Changed
            }
            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    FilterEdit::Changed
                } else {
                    FilterEdit::Handled
                }
            }
            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    FilterEdit::Changed
                } else {
                    FilterEdit::Handled
                }
            }
            Key::Left if modifiers.none() => {
                self.cursor = self.cursor.saturating_sub(1);
                FilterEdit::Handled
            }
            Key::Right if modifiers.none() => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                FilterEdit::Handled
            }
            Key::Home if modifiers.none() => {
                self.cursor = 0;
                FilterEdit::Handled
            }
            Key::End if modifiers.none() => {
                self.cursor = self.char_count();
                FilterEdit::Handled
            }
            _ => FilterEdit::Ignored,
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
