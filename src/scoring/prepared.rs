// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A candidate with its index and heatmap built once.

use crate::chars::fold;
use crate::contracts::{check_heatmap_len, check_index_sorted, check_match_valid};
use crate::error::{Result, ScoreError};
use crate::heatmap::Heatmap;
use crate::index::CharacterIndex;
use crate::matcher::Matcher;
use crate::types::{CaseMatching, MatchResult, ScoreOptions};

use super::core::{full_match_applies, FULL_MATCH_BONUS};

/// Candidate ready to be scored against any number of queries.
///
/// Only the immutable index and heatmap are kept. Every `score` call fills
/// its own alignment table, so a `Prepared` can be shared across threads.
#[derive(Debug, Clone)]
pub struct Prepared {
    chars: Vec<char>,
    index: CharacterIndex,
    heatmap: Heatmap,
    options: ScoreOptions,
}

impl Prepared {
    pub fn new(candidate: &str) -> Self {
        Self::with_options(candidate, ScoreOptions::default())
    }

    pub fn with_options(candidate: &str, options: ScoreOptions) -> Self {
        let chars: Vec<char> = candidate.chars().collect();

        let index = CharacterIndex::new(&chars);
        check_index_sorted(&index, chars.len());

        let heatmap = Heatmap::generate(&chars, options.group_separator);
        check_heatmap_len(&heatmap, &chars);

        Self {
            chars,
            index,
            heatmap,
            options,
        }
    }

    /// Candidate length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    pub fn index(&self) -> &CharacterIndex {
        &self.index
    }

    pub fn options(&self) -> &ScoreOptions {
        &self.options
    }

    pub fn score(&self, query: &str) -> Option<MatchResult> {
        self.try_score(query).ok()
    }

    pub fn try_score(&self, query: &str) -> Result<MatchResult> {
        if self.chars.is_empty() || query.is_empty() {
            return Err(ScoreError::EmptyInput);
        }

        let query: Vec<char> = match self.options.case_matching {
            CaseMatching::Insensitive => query.chars().map(fold).collect(),
            CaseMatching::Smart => query.chars().collect(),
        };

        let best = Matcher::new(&self.index, &self.heatmap, &query).best();
        tracing::trace!(
            candidate_len = self.chars.len(),
            query_len = query.len(),
            found = best.is_some(),
            "alignment search finished"
        );

        let mut best = best.ok_or(ScoreError::NoAlignment)?;
        check_match_valid(&best, &self.chars, &query);

        if self.options.full_match_bonus
            && full_match_applies(query.len(), best.indices.len(), self.chars.len())
        {
            tracing::debug!(query_len = query.len(), "full match bonus applied");
            best.score += FULL_MATCH_BONUS;
        }

        Ok(best)
    }
}
