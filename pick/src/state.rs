// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CandidateSet, QueryEditor, SelectionState};

/// The query line sits above the candidate list and takes up this many rows.
pub const ROWS_RESERVED_FOR_QUERY: usize = 1;

/// Size of the terminal window, in columns and rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_width: usize,
    pub row_height: usize,
}

impl Size {
    #[must_use]
    pub fn new(col_width: usize, row_height: usize) -> Self {
        Self {
            col_width,
            row_height,
        }
    }
}

/// Everything the picker knows, in one place. It is owned by the event loop and handed
/// out by `&mut` to whatever needs to change it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct State {
    /// The input, exactly as read. Never mutated after construction.
    pub lines: Vec<String>,
    pub query: QueryEditor,
    /// Always computed from [State::lines] and the *current* [State::query].
    pub candidates: CandidateSet,
    pub selection: SelectionState,
    /// `None` until the terminal has been queried.
    pub window_size: Option<Size>,
}

impl State {
    /// Start with an empty query, so every line is a candidate.
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        let candidates = CandidateSet::recompute(&lines, "");
        Self {
            lines,
            candidates,
            ..Default::default()
        }
    }

    /// Rebuild the candidate set for the current query and then clamp the selection to
    /// it. These two steps always happen together and in this order, so nothing ever
    /// observes a selection that is out of bounds for the candidate set.
    pub fn recompute_candidates(&mut self) {
        self.candidates = CandidateSet::recompute(&self.lines, self.query.as_str());
        self.selection.fixup_after_recompute(self.candidates.len());
    }

    /// Number of rows available to paint candidates in.
    #[must_use]
    pub fn items_viewport_height(&self) -> usize {
        self.window_size.map_or(0, |size| {
            size.row_height.saturating_sub(ROWS_RESERVED_FOR_QUERY)
        })
    }

    /// Scroll so that the focused candidate is visible.
    pub fn compute_viewport(&mut self) {
        let viewport_height = self.items_viewport_height();
        self.selection
            .compute_viewport(self.candidates.len(), viewport_height);
    }

    /// Text of the focused candidate, or `None` if nothing matches the query.
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        self.candidates
            .get(self.selection.current_index())
            .map(|it| it.text.as_str())
    }

    /// Record the terminal size, at startup or after a resize. The candidate set is left
    /// alone; call [State::compute_viewport] next.
    pub fn set_size(&mut self, new_size: Size) { self.window_size = Some(new_size); }
}
