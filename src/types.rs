// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: match results and scoring options.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Best alignment of a query against one candidate.
///
/// `indices` are char positions (not byte offsets) into the candidate,
/// strictly increasing, one per query char.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: i32,
    pub indices: Vec<usize>,
    /// Length of the contiguous run ending at the first index, carried
    /// between recursion levels to cap the contiguity bonus.
    #[serde(skip)]
    pub(crate) tail_run: usize,
}

impl MatchResult {
    pub(crate) fn new(score: i32, indices: Vec<usize>, tail_run: usize) -> Self {
        Self {
            score,
            indices,
            tail_run,
        }
    }

    /// Byte ranges of the matched chars in `candidate`.
    ///
    /// `candidate` must be the string this result was computed for; indices
    /// past its end are skipped.
    pub fn byte_ranges(&self, candidate: &str) -> Vec<Range<usize>> {
        let mut wanted = self.indices.iter().copied().peekable();
        let mut ranges = Vec::with_capacity(self.indices.len());

        for (position, (offset, ch)) in candidate.char_indices().enumerate() {
            match wanted.peek() {
                Some(&next) if next == position => {
                    ranges.push(offset..offset + ch.len_utf8());
                    wanted.next();
                }
                Some(_) => {}
                None => break,
            }
        }

        ranges
    }
}

/// How query chars are compared with candidate chars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    /// Any case matches any case.
    #[default]
    Insensitive,
    /// Lowercase query chars match either case; uppercase ones only match
    /// themselves.
    Smart,
}

/// Knobs for one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreOptions {
    /// Splits the candidate into path-like groups (e.g. `/`).
    pub group_separator: Option<char>,
    pub case_matching: CaseMatching,
    /// Add [`FULL_MATCH_BONUS`](crate::FULL_MATCH_BONUS) when a 2-4 char
    /// query consumes the whole candidate.
    pub full_match_bonus: bool,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            group_separator: None,
            case_matching: CaseMatching::default(),
            full_match_bonus: true,
        }
    }
}

impl ScoreOptions {
    /// Options for file paths: groups split on `/`.
    pub fn path() -> Self {
        Self::default().with_group_separator(Some('/'))
    }

    pub fn with_group_separator(mut self, separator: Option<char>) -> Self {
        self.group_separator = separator;
        self
    }

    pub fn with_case_matching(mut self, case_matching: CaseMatching) -> Self {
        self.case_matching = case_matching;
        self
    }

    pub fn with_full_match_bonus(mut self, enabled: bool) -> Self {
        self.full_match_bonus = enabled;
        self
    }
}
