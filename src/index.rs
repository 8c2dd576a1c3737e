// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character → positions lookup for one candidate.
//!
//! Every char position is recorded under the char itself. Chars whose
//! lowercase fold differs (uppercase and titlecase letters) are recorded a
//! second time under the fold, so a folded query char finds every case while
//! an unfolded one can still be looked up literally.
//!
//! # INVARIANTS
//!
//! - Position lists are strictly increasing.
//! - Lists are exhaustive: every occurrence of a key is present.

use std::collections::HashMap;

use crate::chars::fold;

/// Sorted occurrence lists keyed by character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterIndex {
    positions: HashMap<char, Vec<usize>>,
}

impl CharacterIndex {
    /// Index the chars of a candidate.
    pub fn new(chars: &[char]) -> Self {
        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();

        // Left-to-right scan keeps every list ascending without sorting.
        for (i, &ch) in chars.iter().enumerate() {
            positions.entry(ch).or_default().push(i);

            let folded = fold(ch);
            if folded != ch {
                positions.entry(folded).or_default().push(i);
            }
        }

        Self { positions }
    }

    /// All positions recorded under `ch`, ascending.
    pub fn positions(&self, ch: char) -> &[usize] {
        self.positions.get(&ch).map_or(&[], Vec::as_slice)
    }

    /// Positions under `ch` strictly greater than `lower_bound`.
    ///
    /// `None` means unbounded, which is distinct from a bound at position 0.
    pub fn positions_after(&self, ch: char, lower_bound: Option<usize>) -> &[usize] {
        let all = self.positions(ch);
        match lower_bound {
            Some(bound) => &all[all.partition_point(|&p| p <= bound)..],
            None => all,
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over `(key, positions)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &[usize])> {
        self.positions.iter().map(|(&ch, list)| (ch, list.as_slice()))
    }
}
