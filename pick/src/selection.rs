// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ### Vertical scrolling and viewport
//!
//! The candidate list is taller than the terminal more often than not, so only a window
//! of it is painted. `scroll_offset` is the index of the first candidate in that window,
//! and `current_index` is the candidate that has focus.
//!
//! ```text
//!                    +0--------------------+
//!                    0                     |
//!                    |        above        |
//!                    |                     |
//!                    +--- scroll_offset ---+
//!              ->    |         ↑           |      ↑
//!   current    |     |                     |      |
//!   _index     |     |      within vp      |  vp height
//!              |     |                     |      |
//!              ->    |         ↓           |      ↓
//!                    +--- scroll_offset ---+
//!                    |    + vp height      |
//!                    |                     |
//!                    |        below        |
//!                    |                     |
//!                    +---------------------+
//! ```
//!
//! [SelectionState::compute_viewport] moves `scroll_offset` by the smallest amount that
//! brings `current_index` back inside the window, and never scrolls past either end of
//! the list.

use std::ops::Range;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CaretVerticalViewportLocation {
    /// There are no candidates, so there is nothing to focus.
    NoCandidates,
    AtAbsoluteTop,
    AboveTopOfViewport,
    AtTopOfViewport,
    InMiddleOfViewport,
    AtBottomOfViewport,
    BelowBottomOfViewport,
    AtAbsoluteBottom,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    current_index: usize,
    scroll_offset: usize,
}

impl SelectionState {
    #[must_use]
    pub fn current_index(&self) -> usize { self.current_index }

    #[must_use]
    pub fn scroll_offset(&self) -> usize { self.scroll_offset }

    pub fn select_previous(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// No-op (other than pinning the index to 0) when there are no candidates.
    pub fn select_next(&mut self, candidate_count: usize) {
        self.current_index = match candidate_count {
            0 => 0,
            _ => std::cmp::min(candidate_count - 1, self.current_index + 1),
        };
    }

    /// Clamp the focus into `0..max(1, new_candidate_count)` after the candidate set has
    /// been rebuilt.
    pub fn fixup_after_recompute(&mut self, new_candidate_count: usize) {
        self.current_index =
            std::cmp::min(self.current_index, new_candidate_count.saturating_sub(1));
    }

    /// Adjust `scroll_offset` so that `current_index` is visible in a window of
    /// `viewport_height` rows. A height of 0 is treated as 1.
    pub fn compute_viewport(&mut self, candidate_count: usize, viewport_height: usize) {
        let viewport_height = std::cmp::max(1, viewport_height);

        if self.current_index < self.scroll_offset {
            // Scrolling up.
            self.scroll_offset = self.current_index;
        } else if self.current_index >= self.scroll_offset + viewport_height {
            // Scrolling down.
            self.scroll_offset = self.current_index + 1 - viewport_height;
        }

        // Don't leave empty rows at the bottom when the list got shorter.
        let max_offset = candidate_count.saturating_sub(viewport_height);
        self.scroll_offset = std::cmp::min(self.scroll_offset, max_offset);
    }

    /// Range of candidate indices that are painted.
    #[must_use]
    pub fn visible_range(
        &self,
        candidate_count: usize,
        viewport_height: usize,
    ) -> Range<usize> {
        let start = std::cmp::min(self.scroll_offset, candidate_count);
        let end = std::cmp::min(candidate_count, self.scroll_offset + viewport_height);
        start..end
    }

    /// Where the focused candidate sits relative to the viewport. Only used for debug
    /// logging.
    #[must_use]
    pub fn locate_in_viewport(
        &self,
        candidate_count: usize,
        viewport_height: usize,
    ) -> CaretVerticalViewportLocation {
        let viewport_height = std::cmp::max(1, viewport_height);
        let index = self.current_index;
        let bottom_of_viewport = self.scroll_offset + viewport_height - 1;

        // Note the ordering of the statements below matters.
        if candidate_count == 0 {
            CaretVerticalViewportLocation::NoCandidates
        } else if index == candidate_count - 1 {
            // AtAbsoluteBottom takes precedence over AtAbsoluteTop when there is only
            // one item.
            CaretVerticalViewportLocation::AtAbsoluteBottom
        } else if index == 0 {
            CaretVerticalViewportLocation::AtAbsoluteTop
        } else if index < self.scroll_offset {
            CaretVerticalViewportLocation::AboveTopOfViewport
        } else if index == self.scroll_offset {
            CaretVerticalViewportLocation::AtTopOfViewport
        } else if index < bottom_of_viewport {
            CaretVerticalViewportLocation::InMiddleOfViewport
        } else if index == bottom_of_viewport {
            CaretVerticalViewportLocation::AtBottomOfViewport
        } else {
            CaretVerticalViewportLocation::BelowBottomOfViewport
        }
    }
}
