// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test oracles shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. The oracles
//! are slow, obviously-correct restatements of the engine's rules; property
//! tests compare the real implementation against them.

#![doc(hidden)]

use crate::chars::fold;
use crate::heatmap::Heatmap;
use crate::index::CharacterIndex;
use crate::matcher::{best_of, combine, Suffix};
use crate::scoring::{full_match_applies, FULL_MATCH_BONUS};
use crate::types::{CaseMatching, MatchResult, ScoreOptions};

/// The alignment search as a plain top-down recursion, without the table.
///
/// Exponential in the query length; keep inputs small.
pub fn score_recursive(
    candidate: &str,
    query: &str,
    options: ScoreOptions,
) -> Option<MatchResult> {
    let chars: Vec<char> = candidate.chars().collect();
    if chars.is_empty() || query.is_empty() {
        return None;
    }
    let query: Vec<char> = match options.case_matching {
        CaseMatching::Insensitive => query.chars().map(fold).collect(),
        CaseMatching::Smart => query.chars().collect(),
    };

    let index = CharacterIndex::new(&chars);
    let heatmap = Heatmap::generate(&chars, options.group_separator);

    let all = search(&index, &heatmap, &query, None, 0);
    let mut best = best_of(&all)?.clone();
    if options.full_match_bonus
        && full_match_applies(query.len(), best.indices.len(), chars.len())
    {
        best.score += FULL_MATCH_BONUS;
    }
    Some(best)
}

fn search(
    index: &CharacterIndex,
    heatmap: &Heatmap,
    query: &[char],
    lower_bound: Option<usize>,
    offset: usize,
) -> Vec<MatchResult> {
    let positions = index.positions_after(query[offset], lower_bound);

    if offset + 1 == query.len() {
        return positions
            .iter()
            .map(|&p| MatchResult::new(heatmap[p], vec![p], 0))
            .collect();
    }

    let mut best: Option<MatchResult> = None;
    for &p in positions {
        for rest in search(index, heatmap, query, Some(p), offset + 1) {
            let joined = combine(heatmap[p], p, leading(&rest));
            if best.as_ref().is_none_or(|b| joined.score > b.score) {
                let mut indices = vec![p];
                indices.extend(rest.indices);
                best = Some(MatchResult::new(joined.score, indices, joined.tail_run));
            }
        }
    }
    best.into_iter().collect()
}

fn leading(result: &MatchResult) -> Suffix {
    Suffix {
        start: result.indices.first().copied().unwrap_or_default(),
        score: result.score,
        tail_run: result.tail_run,
    }
}

/// Recompute the score of a fixed alignment from the heatmap alone.
///
/// Walks the indices right to left, adding heat and the contiguity bonus
/// exactly as the search does. Does not include the full-match bonus.
pub fn alignment_score(heatmap: &[i32], indices: &[usize]) -> i32 {
    let mut rest: Option<MatchResult> = None;
    for &p in indices.iter().rev() {
        rest = Some(match rest {
            None => MatchResult::new(heatmap[p], vec![p], 0),
            Some(r) => {
                let joined = combine(heatmap[p], p, leading(&r));
                let mut ind = vec![p];
                ind.extend(r.indices);
                MatchResult::new(joined.score, ind, joined.tail_run)
            }
        });
    }
    rest.map_or(0, |r| r.score)
}

/// Is `query` a case-insensitive subsequence of `candidate`?
pub fn is_subsequence(candidate: &str, query: &str) -> bool {
    let mut chars = candidate.chars().map(fold);
    query.chars().map(fold).all(|q| chars.any(|c| c == q))
}
