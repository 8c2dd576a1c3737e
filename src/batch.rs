// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One query against many candidates.
//!
//! Each candidate is scored independently: its own index, heatmap and alignment
//! table, nothing shared and nothing mutable across calls. That makes the
//! batch embarrassingly parallel, and with the `parallel` feature it runs on
//! rayon's pool. Results come back in input order; ordering them is the
//! caller's business.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::scoring::{score_with, Prepared};
use crate::types::{MatchResult, ScoreOptions};

/// Score `query` against every candidate, preserving input order.
pub fn score_all<S>(
    candidates: &[S],
    query: &str,
    options: ScoreOptions,
) -> Vec<Option<MatchResult>>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(candidates = candidates.len(), query, "batch scoring");

    #[cfg(feature = "parallel")]
    let results = candidates
        .par_iter()
        .map(|c| score_with(c.as_ref(), query, options))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results = candidates
        .iter()
        .map(|c| score_with(c.as_ref(), query, options))
        .collect();

    results
}

/// Score `query` against candidates that were prepared ahead of time.
pub fn score_prepared(candidates: &[Prepared], query: &str) -> Vec<Option<MatchResult>> {
    #[cfg(feature = "parallel")]
    let results = candidates.par_iter().map(|p| p.score(query)).collect();

    #[cfg(not(feature = "parallel"))]
    let results = candidates.iter().map(|p| p.score(query)).collect();

    results
}
