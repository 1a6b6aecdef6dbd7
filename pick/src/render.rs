// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Paint the whole [State] on a [Terminal], from scratch, every time.
//!
//! ```text
//! row 0  > query text█
//! row 1  - first visible candidate
//! row 2  - focused candidate            <- selected_style
//! row 3  - another candidate with a match
//!                         ^^^^^         <- highlight_style
//! ```

use crossterm::style::ContentStyle;
use unicode_width::{UnicodeWidthChar as _, UnicodeWidthStr as _};

use crate::{Candidate, State, StyleSheet, Terminal, ROWS_RESERVED_FOR_QUERY};

/// Painted in front of every candidate.
pub const ROW_MARKER: &str = "- ";

/// Paint the prompt and query on the first row, and the visible window of candidates
/// below it. The hardware cursor ends up at the query editor's cursor. Assumes that
/// [State::compute_viewport] has already been called.
///
/// # Errors
///
/// Returns an error if the terminal can't be written to.
pub fn render(
    state: &State,
    terminal: &mut impl Terminal,
    stylesheet: &StyleSheet,
    prompt: &str,
) -> miette::Result<()> {
    let max_col = state.window_size.map_or(0, |size| size.col_width);

    terminal.clear()?;

    // Query row.
    let mut x = 0;
    x = paint_str(terminal, x, 0, max_col, prompt, stylesheet.prompt_style)?;
    x = paint_str(terminal, x, 0, max_col, " ", stylesheet.normal_style)?;
    paint_str(
        terminal,
        x,
        0,
        max_col,
        state.query.as_str(),
        stylesheet.normal_style,
    )?;

    // Candidate rows.
    let viewport_height = state.items_viewport_height();
    let focused_index = state.selection.current_index();
    for (row_index, candidate_index) in state
        .selection
        .visible_range(state.candidates.len(), viewport_height)
        .enumerate()
    {
        let Some(candidate) = state.candidates.get(candidate_index) else {
            break;
        };
        let y = row_index + ROWS_RESERVED_FOR_QUERY;
        paint_candidate(
            terminal,
            y,
            max_col,
            candidate,
            candidate_index == focused_index,
            stylesheet,
        )?;
    }

    let cursor_x = prompt.width() + 1 + state.query.cursor_display_col();
    terminal.show_cursor(cursor_x, 0)?;
    terminal.show()
}

fn paint_candidate(
    terminal: &mut impl Terminal,
    y: usize,
    max_col: usize,
    candidate: &Candidate,
    is_focused: bool,
    stylesheet: &StyleSheet,
) -> miette::Result<()> {
    let row_style = if is_focused {
        stylesheet.selected_style
    } else {
        stylesheet.normal_style
    };

    let mut x = paint_str(terminal, 0, y, max_col, ROW_MARKER, row_style)?;

    for (char_index, ch) in candidate.text.chars().enumerate() {
        let style = if !is_focused && candidate.is_highlighted(char_index) {
            stylesheet.highlight_style
        } else {
            row_style
        };
        match paint_char(terminal, x, y, max_col, ch, style)? {
            Some(next_x) => x = next_x,
            None => break,
        }
    }

    Ok(())
}

/// Returns the column after the last char that fit.
fn paint_str(
    terminal: &mut impl Terminal,
    mut x: usize,
    y: usize,
    max_col: usize,
    text: &str,
    style: ContentStyle,
) -> miette::Result<usize> {
    for ch in text.chars() {
        match paint_char(terminal, x, y, max_col, ch, style)? {
            Some(next_x) => x = next_x,
            None => break,
        }
    }
    Ok(x)
}

/// Returns `None` if `ch` doesn't fit before `max_col`. Zero width chars are skipped,
/// since they have no cell of their own.
fn paint_char(
    terminal: &mut impl Terminal,
    x: usize,
    y: usize,
    max_col: usize,
    ch: char,
    style: ContentStyle,
) -> miette::Result<Option<usize>> {
    let width = ch.width().unwrap_or(0);
    if width == 0 {
        return Ok(Some(x));
    }
    if x + width > max_col {
        return Ok(None);
    }
    terminal.set_cell(x, y, ch, style)?;
    Ok(Some(x + width))
}
