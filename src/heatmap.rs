// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional heatmap: how desirable it is for a query char to land on each
//! candidate position.
//!
//! The heatmap is where all the "human" ranking intuition lives. The matcher
//! only adds up heat values and contiguity bonuses, so the relative sizes of
//! the constants below decide which alignment wins.
//!
//! # How a heatmap is built
//!
//! ```text
//!   "src/main.rs" with group separator '/'
//!
//!   groups:  [-1: "src"]  [3: "/main.rs"]     <- split on '/'
//!   words:    s            m     r            <- boundary starts
//!   basepath:              ^^^^^^^^^          <- rightmost group with words
//! ```
//!
//! 1. Every position starts at [`BASELINE`]; the last char gets [`LAST_CHAR_BONUS`].
//! 2. One left-to-right pass finds groups and word starts, and penalizes the
//!    char after a `.` ([`EXTENSION_PENALTY`]).
//! 3. With more than one group, every position pays [`GROUP_COUNT_PENALTY`]
//!    per group.
//! 4. Groups are scored right to left. The basepath group gets a large bonus,
//!    the others are penalized the further left they are.
//! 5. Inside each group, word starts get [`WORD_START_BONUS`], and heat decays
//!    with word order and with distance from the word start.
//!
//! # INVARIANTS
//!
//! - `heatmap.len() == candidate.chars().count()`.
//! - Generation is a pure function of `(candidate, group_separator)`.

use std::ops::Index;

use crate::chars::{is_boundary, is_word};

/// Starting heat of every position.
pub const BASELINE: i32 = -35;
/// Added to the final position.
pub const LAST_CHAR_BONUS: i32 = 1;
/// Added to the position right after a `.`, so extensions rank low.
pub const EXTENSION_PENALTY: i32 = -45;
/// Multiplied by the group count and added everywhere when there is more
/// than one group.
pub const GROUP_COUNT_PENALTY: i32 = -2;
/// Base bonus spread over the whole basepath group.
pub const BASEPATH_BONUS: i32 = 35;
/// Increment for the leftmost group when it is not the basepath.
pub const FIRST_GROUP_PENALTY: i32 = -3;
/// Base increment for other non-basepath groups.
pub const GROUP_PENALTY: i32 = -5;
/// Added at every word start.
pub const WORD_START_BONUS: i32 = 85;
/// Multiplied by the word's index within its group.
pub const WORD_ORDER_PENALTY: i32 = -3;

const EXTENSION_LEAD: char = '.';

/// A path-like segment of the candidate.
///
/// `start` is the position of the separator that opened the group, or `None`
/// for the leading group. The group's own chars begin one past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub start: Option<usize>,
    pub word_count: usize,
    /// Word start positions, ascending.
    pub words: Vec<usize>,
}

impl Group {
    fn new(start: Option<usize>) -> Self {
        Self {
            start,
            word_count: 0,
            words: Vec::new(),
        }
    }

    /// First position whose heat belongs to this group.
    fn span_start(&self) -> usize {
        self.start.map_or(0, |s| s + 1)
    }
}

/// One heat value per candidate char. Higher is a better match location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap(Vec<i32>);

impl Heatmap {
    /// Build the heatmap for `chars`, optionally splitting groups on
    /// `group_separator`.
    pub fn generate(chars: &[char], group_separator: Option<char>) -> Self {
        let len = chars.len();
        let mut scores = vec![BASELINE; len];
        let Some(last_index) = len.checked_sub(1) else {
            return Self(scores);
        };

        scores[last_index] += LAST_CHAR_BONUS;

        let groups = collect_groups(chars, group_separator, &mut scores);
        let separator_count = groups.len() - 1;

        if separator_count != 0 {
            let penalty = GROUP_COUNT_PENALTY * groups.len() as i32;
            scores.iter_mut().for_each(|s| *s += penalty);
        }

        let mut group_limit: Option<usize> = None;
        let mut basepath_found = false;

        // Rightmost group first; `distance` counts down to 0 at the leftmost.
        for (i, group) in groups.iter().rev().enumerate() {
            let distance = separator_count - i;
            let is_basepath = !basepath_found && !group.words.is_empty();
            if is_basepath {
                basepath_found = true;
            }

            let increment = if is_basepath {
                let boosts = separator_count.saturating_sub(1) as i32;
                BASEPATH_BONUS + boosts - group.word_count as i32
            } else if distance == 0 {
                FIRST_GROUP_PENALTY
            } else {
                GROUP_PENALTY + (distance as i32 - 1)
            };

            let end = group_limit.unwrap_or(len);
            for s in &mut scores[group.span_start().min(end)..end] {
                *s += increment;
            }

            // Rightmost word first so each word's decay stops at the next one.
            let mut word_end = end;
            for (word_index, &word) in group.words.iter().enumerate().rev() {
                scores[word] += WORD_START_BONUS;
                for (char_offset, s) in scores[word..word_end].iter_mut().enumerate() {
                    *s += WORD_ORDER_PENALTY * word_index as i32 - char_offset as i32;
                }
                word_end = word;
            }

            group_limit = Some(group.span_start());
        }

        Self(scores)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.0
    }
}

impl Index<usize> for Heatmap {
    type Output = i32;

    fn index(&self, position: usize) -> &i32 {
        &self.0[position]
    }
}

/// Split `chars` into groups (leftmost first) and record word starts.
///
/// Also applies the extension penalty, which needs the same running
/// previous-char state.
fn collect_groups(chars: &[char], group_separator: Option<char>, scores: &mut [i32]) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut current = Group::new(None);
    let mut last: Option<char> = None;

    for (i, &ch) in chars.iter().enumerate() {
        // Until a group has seen a word, every separator counts as a
        // one-char word, so "foo/__ab" ranks below "foo/ab".
        let effective_last = if current.word_count == 0 { None } else { last };
        if is_boundary(effective_last, ch) {
            current.words.push(i);
        }

        if !is_word(last) && is_word(Some(ch)) {
            current.word_count += 1;
        }

        if last == Some(EXTENSION_LEAD) {
            scores[i] += EXTENSION_PENALTY;
        }

        if group_separator == Some(ch) {
            groups.push(std::mem::replace(&mut current, Group::new(Some(i))));
        }

        last = Some(ch);
    }

    groups.push(current);
    groups
}
