// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scoring arbitrary candidate/query pairs.
//!
//! Any result must be a valid alignment, identical across repeated calls and
//! across one-shot and prepared scoring. Arbitrary UTF-8 shakes out the
//! boundary rules on chars the hand-written tests never use.

#![no_main]

use arbitrary::Arbitrary;
use flx::{full_match_applies, score_with, CaseMatching, Prepared, ScoreOptions};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for one scoring call
#[derive(Debug, Arbitrary)]
struct ScoreInput {
    candidate_bytes: Vec<u8>,
    query_bytes: Vec<u8>,
    separator: Option<char>,
    smart_case: bool,
    full_match_bonus: bool,
}

fuzz_target!(|input: ScoreInput| {
    // Cap lengths in chars to avoid timeouts
    let candidate: String = String::from_utf8_lossy(&input.candidate_bytes)
        .chars()
        .take(200)
        .collect();
    let query: String = String::from_utf8_lossy(&input.query_bytes)
        .chars()
        .take(16)
        .collect();

    let options = ScoreOptions::default()
        .with_group_separator(input.separator)
        .with_case_matching(if input.smart_case {
            CaseMatching::Smart
        } else {
            CaseMatching::Insensitive
        })
        .with_full_match_bonus(input.full_match_bonus);

    let first = score_with(&candidate, &query, options);
    let second = score_with(&candidate, &query, options);

    // INVARIANT 1: Scoring is deterministic
    assert_eq!(first, second, "Same pair scored differently");

    // INVARIANT 2: Prepared scoring agrees with one-shot scoring
    let prepared = Prepared::with_options(&candidate, options);
    assert_eq!(prepared.score(&query), first, "Prepared result diverged");

    let Some(result) = first else {
        return;
    };

    // INVARIANT 3: One strictly increasing, in-bounds index per query char
    let candidate_len = candidate.chars().count();
    let query_len = query.chars().count();
    assert_eq!(result.indices.len(), query_len, "Wrong number of indices");
    assert!(
        result.indices.windows(2).all(|w| w[0] < w[1]),
        "Indices not strictly increasing: {:?}",
        result.indices
    );
    assert!(
        result.indices.iter().all(|&i| i < candidate_len),
        "Index out of bounds: {:?} (len {})",
        result.indices,
        candidate_len
    );

    // INVARIANT 4: Byte ranges line up with the indices
    assert_eq!(result.byte_ranges(&candidate).len(), query_len);

    // INVARIANT 5: Only a full match can carry the bonus
    if result.score >= flx::FULL_MATCH_BONUS / 2 {
        assert!(
            input.full_match_bonus && full_match_applies(query_len, query_len, candidate_len),
            "Score {} without a full match",
            result.score
        );
    }
});
