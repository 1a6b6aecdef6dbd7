// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

/// `#DB7093`, the color used to mark matched text and the focused row.
pub const PALE_VIOLET_RED: Color = Color::Rgb {
    r: 219,
    g: 112,
    b: 147,
};

/// Styling for each kind of cell that [crate::render()] paints.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    /// The prompt in front of the query.
    pub prompt_style: ContentStyle,
    /// The query text, the row markers, and unmatched text.
    pub normal_style: ContentStyle,
    /// The matched span in rows that don't have focus.
    pub highlight_style: ContentStyle,
    /// The whole row that has focus.
    pub selected_style: ContentStyle,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let prompt_style = ContentStyle {
            attributes: Attributes::from(Attribute::Bold),
            ..ContentStyle::default()
        };
        let highlight_style = ContentStyle {
            foreground_color: Some(PALE_VIOLET_RED),
            ..ContentStyle::default()
        };
        let selected_style = ContentStyle {
            foreground_color: Some(PALE_VIOLET_RED),
            attributes: Attributes::from(Attribute::Bold),
            ..ContentStyle::default()
        };
        StyleSheet {
            prompt_style,
            normal_style: ContentStyle::default(),
            highlight_style,
            selected_style,
        }
    }
}

impl StyleSheet {
    /// No colors, for terminals (or users) that don't want them. Highlighting falls back
    /// to text attributes.
    #[must_use]
    pub fn monochrome() -> Self {
        let highlight_style = ContentStyle {
            attributes: Attributes::from(Attribute::Underlined),
            ..ContentStyle::default()
        };
        let selected_style = ContentStyle {
            attributes: Attributes::from(Attribute::Reverse),
            ..ContentStyle::default()
        };
        StyleSheet {
            prompt_style: ContentStyle::default(),
            normal_style: ContentStyle::default(),
            highlight_style,
            selected_style,
        }
    }
}
