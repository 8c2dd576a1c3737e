// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the scoring pipeline.
//!
//! Debug-mode assertions over the structures each stage hands to the next:
//!
//! 1. Are **zero-cost in release builds** (`debug_assert!` only)
//! 2. Fail at the stage that broke the invariant, not three calls later
//!
//! | Contract                  | Checked after        |
//! |---------------------------|----------------------|
//! | `check_index_sorted`      | `CharacterIndex::new`|
//! | `check_heatmap_len`       | `Heatmap::generate`  |
//! | `check_match_valid`       | the alignment search |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// The full-match bonus must dwarf anything a heatmap alignment can earn on
/// a short candidate, or "exact" would not reliably rank first.
const _: () = {
    use crate::heatmap::{BASEPATH_BONUS, LAST_CHAR_BONUS, WORD_START_BONUS};
    use crate::matcher::{CONTIGUOUS_BONUS, MAX_TAIL_RUN, TAIL_RUN_BONUS};
    use crate::scoring::FULL_MATCH_BONUS;

    // INVARIANT: full_match_dominates
    // Upper bound per matched char of a 4-char query.
    const PER_CHAR: i32 = WORD_START_BONUS
        + BASEPATH_BONUS
        + LAST_CHAR_BONUS
        + CONTIGUOUS_BONUS
        + TAIL_RUN_BONUS * MAX_TAIL_RUN as i32;
    assert!(FULL_MATCH_BONUS > 4 * PER_CHAR);
};

use crate::chars::fold;
use crate::heatmap::Heatmap;
use crate::index::CharacterIndex;
use crate::types::MatchResult;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Every position list is strictly increasing and in bounds.
#[inline]
pub fn check_index_sorted(index: &CharacterIndex, len: usize) {
    if cfg!(debug_assertions) {
        for (ch, positions) in index.iter() {
            // INVARIANT: index_sorted
            debug_assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "Contract violation: positions for {:?} not strictly increasing: {:?}",
                ch,
                positions
            );
            debug_assert!(
                positions.iter().all(|&p| p < len),
                "Contract violation: positions for {:?} out of bounds (len {}): {:?}",
                ch,
                len,
                positions
            );
        }
    }
}

// ============================================================================
// HEATMAP CONTRACTS
// ============================================================================

/// One heat value per candidate char.
#[inline]
pub fn check_heatmap_len(heatmap: &Heatmap, chars: &[char]) {
    // INVARIANT: heatmap_len
    debug_assert_eq!(
        heatmap.len(),
        chars.len(),
        "Contract violation: heatmap has {} entries for {} chars",
        heatmap.len(),
        chars.len()
    );
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// The result is a valid case-insensitive subsequence alignment.
#[inline]
pub fn check_match_valid(result: &MatchResult, candidate: &[char], query: &[char]) {
    // INVARIANT: one_index_per_query_char
    debug_assert_eq!(
        result.indices.len(),
        query.len(),
        "Contract violation: {} indices for a {}-char query",
        result.indices.len(),
        query.len()
    );

    // INVARIANT: indices_strictly_increasing
    debug_assert!(
        result.indices.windows(2).all(|w| w[0] < w[1]),
        "Contract violation: indices not strictly increasing: {:?}",
        result.indices
    );

    if cfg!(debug_assertions) {
        for (&i, &q) in result.indices.iter().zip(query) {
            // INVARIANT: indices_match_query
            debug_assert!(
                candidate.get(i).is_some_and(|&c| fold(c) == fold(q)),
                "Contract violation: candidate[{}] = {:?} does not match query char {:?}",
                i,
                candidate.get(i),
                q
            );
        }
    }
}
