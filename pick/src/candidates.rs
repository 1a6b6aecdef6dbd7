// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Candidate;

/// The lines that currently match the query, in original input order.
///
/// This is derived data. It is rebuilt from scratch with [CandidateSet::recompute] every
/// time the query changes and is never patched in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    items: Vec<Candidate>,
}

impl CandidateSet {
    /// Apply the matcher to every line. Lines that don't match are dropped entirely.
    #[must_use]
    pub fn recompute(lines: &[String], query: &str) -> Self {
        let items = lines
            .iter()
            .enumerate()
            .filter_map(|(line_index, text)| Candidate::try_new(line_index, text, query))
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candidate> { self.items.get(index) }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> { self.items.iter() }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}
