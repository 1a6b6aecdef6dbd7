// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Literal substring matching of a query against a single line.
//!
//! Indices in a [MatchSpan] count `char`s (Unicode scalar values), not bytes, so that the
//! renderer can walk `text.chars()` and ask [MatchSpan::contains] for each one. For ASCII
//! text the two are the same.

/// Inclusive range of `char` indices covered by the leftmost occurrence of the query.
///
/// Invariant: `first_index <= last_index < text.chars().count()`. An empty query never
/// produces a span (see [find_match]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    pub first_index: usize,
    pub last_index: usize,
}

impl MatchSpan {
    #[must_use]
    pub fn contains(&self, char_index: usize) -> bool {
        self.first_index <= char_index && char_index <= self.last_index
    }

    /// Number of chars covered. Always at least 1.
    #[must_use]
    pub fn char_count(&self) -> usize { self.last_index - self.first_index + 1 }
}

/// How a query relates to one line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// The query is not a substring of the line.
    NoMatch,
    /// The query is empty, so every line matches, but there is nothing to highlight.
    MatchWithoutHighlight,
    /// The leftmost occurrence of the query.
    Match(MatchSpan),
}

/// Decide whether `query` occurs in `text`, and where its leftmost occurrence is.
///
/// Matching is case sensitive and literal; no normalization is applied.
#[must_use]
pub fn find_match(text: &str, query: &str) -> MatchResult {
    if query.is_empty() {
        return MatchResult::MatchWithoutHighlight;
    }

    let Some(byte_index) = text.find(query) else {
        return MatchResult::NoMatch;
    };

    // `byte_index` is on a char boundary, since `query` is valid UTF-8.
    let first_index = text[..byte_index].chars().count();
    let last_index = first_index + query.chars().count() - 1;

    MatchResult::Match(MatchSpan {
        first_index,
        last_index,
    })
}

/// One line that survived filtering, along with what to highlight in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Position of this line in the original input. This is the identity of the line.
    pub line_index: usize,
    pub text: String,
    /// `None` when there is nothing to highlight (empty query).
    pub span: Option<MatchSpan>,
}

impl Candidate {
    /// Returns `None` if `query` does not occur in `text`.
    #[must_use]
    pub fn try_new(line_index: usize, text: &str, query: &str) -> Option<Self> {
        let span = match find_match(text, query) {
            MatchResult::NoMatch => return None,
            MatchResult::MatchWithoutHighlight => None,
            MatchResult::Match(span) => Some(span),
        };

        Some(Candidate {
            line_index,
            text: text.to_string(),
            span,
        })
    }

    #[must_use]
    pub fn is_highlighted(&self, char_index: usize) -> bool {
        self.span.is_some_and(|span| span.contains(char_index))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_unmatched() {
        assert_eq!(find_match("a", "b"), MatchResult::NoMatch);
    }

    #[test]
    fn test_matched() {
        assert_eq!(
            find_match("target", "arg"),
            MatchResult::Match(MatchSpan {
                first_index: 1,
                last_index: 3
            })
        );
    }

    #[test]
    fn test_empty_query_has_no_highlight() {
        assert_eq!(find_match("target", ""), MatchResult::MatchWithoutHighlight);
        assert_eq!(find_match("", ""), MatchResult::MatchWithoutHighlight);

        let candidate = Candidate::try_new(0, "target", "").unwrap();
        assert_eq!(candidate.span, None);
        assert!((0..6).all(|it| !candidate.is_highlighted(it)));
    }

    #[test_case("banana", "an", 1, 2; "leftmost of several occurrences")]
    #[test_case("banana", "banana", 0, 5; "whole line")]
    #[test_case("banana", "a", 1, 1; "single char")]
    #[test_case("xyz", "z", 2, 2; "at the end")]
    #[test_case("héllo wörld", "wö", 6, 7; "multi byte chars before and inside the match")]
    #[test_case("日本語テキスト", "テキ", 3, 4; "wide chars")]
    fn test_leftmost_occurrence(
        text: &str,
        query: &str,
        first_index: usize,
        last_index: usize,
    ) {
        let MatchResult::Match(span) = find_match(text, query) else {
            panic!("expected a match for {query:?} in {text:?}");
        };
        assert_eq!(span.first_index, first_index);
        assert_eq!(span.last_index, last_index);
        assert_eq!(span.char_count(), query.chars().count());
    }

    #[test_case("apple", "APP"; "case sensitive")]
    #[test_case("apple", "apples"; "query longer than line")]
    #[test_case("", "a"; "empty line")]
    #[test_case("cafe\u{301}", "café"; "no unicode normalization")]
    fn test_no_match(text: &str, query: &str) {
        assert_eq!(find_match(text, query), MatchResult::NoMatch);
        assert_eq!(Candidate::try_new(0, text, query), None);
    }

    #[test]
    fn test_candidate_highlight() {
        let candidate = Candidate::try_new(7, "target", "arg").unwrap();
        assert_eq!(candidate.line_index, 7);
        let highlighted = (0..6)
            .map(|it| candidate.is_highlighted(it))
            .collect::<Vec<_>>();
        assert_eq!(highlighted, vec![false, true, true, true, false, false]);
    }
}
