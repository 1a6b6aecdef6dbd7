// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The editable query line.
//!
//! The cursor is a `char` offset (not a byte offset) into the query, so inserting or
//! deleting never splits a multi byte character. It always stays in the closed range
//! `0..=char_count()`, and every operation here re-establishes that before returning.

use unicode_width::UnicodeWidthChar;

/// Did an edit change the text of the query? Only a change in the text requires the
/// candidate set to be recomputed; cursor moves do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryChanged {
    Yes,
    No,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryEditor {
    text: String,
    cursor: usize,
}

impl QueryEditor {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.text }

    /// Position of the cursor, in chars.
    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn char_count(&self) -> usize { self.text.chars().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Display width (in terminal columns) of the text before the cursor. Chars with no
    /// defined width (control chars) take up no columns.
    #[must_use]
    pub fn cursor_display_col(&self) -> usize {
        self.text
            .chars()
            .take(self.cursor)
            .map(|it| it.width().unwrap_or(0))
            .sum()
    }

    pub fn insert_char(&mut self, ch: char) -> QueryChanged {
        let byte_index = self.byte_index_of(self.cursor);
        self.text.insert(byte_index, ch);
        self.cursor += 1;
        QueryChanged::Yes
    }

    pub fn delete_backward(&mut self) -> QueryChanged {
        if self.cursor == 0 {
            return QueryChanged::No;
        }
        let byte_index = self.byte_index_of(self.cursor - 1);
        self.text.remove(byte_index);
        self.cursor -= 1;
        QueryChanged::Yes
    }

    pub fn delete_forward(&mut self) -> QueryChanged {
        if self.cursor >= self.char_count() {
            return QueryChanged::No;
        }
        let byte_index = self.byte_index_of(self.cursor);
        self.text.remove(byte_index);
        QueryChanged::Yes
    }

    pub fn move_home(&mut self) { self.cursor = 0; }

    pub fn move_end(&mut self) { self.cursor = self.char_count(); }

    pub fn move_left(&mut self) { self.cursor = self.cursor.saturating_sub(1); }

    pub fn move_right(&mut self) {
        self.cursor = std::cmp::min(self.cursor + 1, self.char_count());
    }

    /// Convert a char offset into a byte offset. Offsets past the end map to the end of
    /// the text.
    fn byte_index_of(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(byte_index, _)| byte_index)
    }
}
