// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot scoring entry points.
//!
//! # INVARIANTS
//!
//! ## FULL_MATCH_DOMINANCE
//! A 2-4 char query that consumes the whole candidate gets
//! [`FULL_MATCH_BONUS`], which is larger than any score a heatmap alignment
//! of that length can reach (checked at compile time in `contracts`). Typing
//! `"ls"` should put the candidate `"ls"` first, whatever else matches.

use std::ops::RangeInclusive;

use crate::error::Result;
use crate::types::{MatchResult, ScoreOptions};

use super::prepared::Prepared;

/// Added when a short query matches the entire candidate.
pub const FULL_MATCH_BONUS: i32 = 10_000;

/// Query lengths eligible for [`FULL_MATCH_BONUS`].
pub const FULL_MATCH_QUERY_LENGTHS: RangeInclusive<usize> = 2..=4;

/// Does the full-match bonus apply?
///
/// Single-char queries are excluded: every one-char candidate would tie.
#[inline]
pub fn full_match_applies(query_len: usize, matched: usize, candidate_len: usize) -> bool {
    FULL_MATCH_QUERY_LENGTHS.contains(&query_len) && matched == candidate_len
}

/// Score `query` against `candidate` with default options.
///
/// Returns `None` when either string is empty or `query` is not a
/// case-insensitive subsequence of `candidate`.
///
/// ```
/// let m = flx::score("buffer-file-name", "bfn").unwrap();
/// assert_eq!(m.indices, vec![0, 7, 12]);
/// ```
pub fn score(candidate: &str, query: &str) -> Option<MatchResult> {
    try_score(candidate, query).ok()
}

/// Like [`score`], but says why there is no match.
pub fn try_score(candidate: &str, query: &str) -> Result<MatchResult> {
    try_score_with(candidate, query, ScoreOptions::default())
}

pub fn score_with(candidate: &str, query: &str, options: ScoreOptions) -> Option<MatchResult> {
    try_score_with(candidate, query, options).ok()
}

pub fn try_score_with(candidate: &str, query: &str, options: ScoreOptions) -> Result<MatchResult> {
    tracing::trace!(candidate, query, ?options, "scoring");
    Prepared::with_options(candidate, options).try_score(query)
}

/// Score a file path: groups are split on `/`, so matches inside the file
/// name beat matches spread over directories.
pub fn score_path(candidate: &str, query: &str) -> Option<MatchResult> {
    score_with(candidate, query, ScoreOptions::path())
}
