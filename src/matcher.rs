// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Best-alignment search over a candidate's index and heatmap.
//!
//! For query char `k` placed at position `p`, the subproblem is "the best way
//! to place `query[k + 1..]` at positions greater than `p`". The answer for
//! `k` combines the heat at `p` with the best answer for `k + 1`, earning a
//! contiguity bonus when that answer starts at `p + 1`.
//!
//! The table is filled bottom-up, one row per query char from the last to
//! the first, one column per occurrence of that char. Each cell keeps its
//! score, its contiguous run and a back-pointer to the column it continues
//! in the next row, so nothing recurses and index lists are only built once
//! for the winner. Time is `O(q · n log n)`, memory `O(q · n)`.
//!
//! The index and heatmap are borrowed for the whole search; no row copies
//! or mutates them.
//!
//! # INVARIANTS
//!
//! - Ties keep the leftmost alignment: a later candidate replaces an earlier
//!   one only with a strictly greater score.
//! - For the second-to-last query char every placement of the last char is
//!   weighed *with* its contiguity bonus; deeper rows pick the best
//!   continuation first and add the bonus afterwards.

use crate::heatmap::Heatmap;
use crate::index::CharacterIndex;
use crate::types::MatchResult;

/// Bonus for extending a contiguous run.
pub const CONTIGUOUS_BONUS: i32 = 60;
/// Extra bonus per char already in the run, up to [`MAX_TAIL_RUN`].
pub const TAIL_RUN_BONUS: i32 = 15;
pub const MAX_TAIL_RUN: usize = 3;

/// Score summary of an aligned query suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix {
    /// Position of the suffix's first char.
    pub start: usize,
    pub score: i32,
    /// Length of the contiguous run that ends at `start`.
    pub tail_run: usize,
}

/// Place `position` in front of `rest`.
#[inline]
pub fn combine(heat: i32, position: usize, rest: Suffix) -> Suffix {
    if rest.start == position + 1 {
        let run = rest.tail_run.min(MAX_TAIL_RUN) as i32;
        Suffix {
            start: position,
            score: rest.score + heat + run * TAIL_RUN_BONUS + CONTIGUOUS_BONUS,
            tail_run: rest.tail_run + 1,
        }
    } else {
        Suffix {
            start: position,
            score: rest.score + heat,
            tail_run: 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    suffix: Suffix,
    /// Column of the continuation in the next row.
    next: Option<usize>,
}

/// One query char: a cell per occurrence, in position order.
struct Row<'a> {
    positions: &'a [usize],
    cells: Vec<Option<Cell>>,
    /// `best_from[j]`: column and score of the leftmost best cell at or
    /// after column `j`.
    best_from: Vec<Option<(usize, i32)>>,
}

impl<'a> Row<'a> {
    fn new(positions: &'a [usize], cells: Vec<Option<Cell>>) -> Self {
        let mut best_from = vec![None; cells.len() + 1];
        for j in (0..cells.len()).rev() {
            let later = best_from[j + 1];
            best_from[j] = match cells[j] {
                Some(cell) if later.is_none_or(|(_, s)| cell.suffix.score >= s) => {
                    Some((j, cell.suffix.score))
                }
                _ => later,
            };
        }

        Self {
            positions,
            cells,
            best_from,
        }
    }

    /// First column whose position is greater than `bound`.
    fn first_after(&self, bound: usize) -> usize {
        self.positions.partition_point(|&p| p <= bound)
    }

    fn best_from(&self, column: usize) -> Option<usize> {
        self.best_from[column].map(|(j, _)| j)
    }

    fn suffix(&self, column: usize) -> Option<Suffix> {
        self.cells[column].map(|cell| cell.suffix)
    }
}

/// Best-alignment search for one query against one candidate.
pub struct Matcher<'a> {
    index: &'a CharacterIndex,
    heatmap: &'a Heatmap,
    query: &'a [char],
}

impl<'a> Matcher<'a> {
    /// `query` must already be in the form used for index lookups (folded
    /// for case-insensitive matching).
    pub fn new(index: &'a CharacterIndex, heatmap: &'a Heatmap, query: &'a [char]) -> Self {
        Self {
            index,
            heatmap,
            query,
        }
    }

    /// Candidates for the whole query.
    ///
    /// For a single-char query this is every occurrence in position order;
    /// for longer queries it is at most one result.
    pub fn search(&self) -> Vec<MatchResult> {
        match self.query {
            [] => Vec::new(),
            [ch] => self
                .index
                .positions(*ch)
                .iter()
                .map(|&p| MatchResult::new(self.heatmap[p], vec![p], 0))
                .collect(),
            _ => {
                let rows = self.fill();
                rows.first()
                    .and_then(|top| top.best_from(0))
                    .and_then(|column| trace_back(&rows, column))
                    .into_iter()
                    .collect()
            }
        }
    }

    /// The single best candidate; first wins on equal scores.
    pub fn best(&self) -> Option<MatchResult> {
        best_of(&self.search()).cloned()
    }

    /// Rows for every query char, first char first.
    fn fill(&self) -> Vec<Row<'a>> {
        let index = self.index;
        let last = self.query.len() - 1;

        let positions = index.positions(self.query[last]);
        let cells = positions
            .iter()
            .map(|&p| {
                Some(Cell {
                    suffix: Suffix {
                        start: p,
                        score: self.heatmap[p],
                        tail_run: 0,
                    },
                    next: None,
                })
            })
            .collect();

        let mut rows = Vec::with_capacity(self.query.len());
        let mut below = Row::new(positions, cells);

        for offset in (0..last).rev() {
            let positions = index.positions(self.query[offset]);
            let below_is_last = offset + 1 == last;
            let cells = positions
                .iter()
                .map(|&p| self.link(p, &below, below_is_last))
                .collect();
            rows.push(std::mem::replace(&mut below, Row::new(positions, cells)));
        }
        rows.push(below);
        rows.reverse();

        tracing::trace!(
            rows = rows.len(),
            cells = rows.iter().map(|r| r.cells.len()).sum::<usize>(),
            "alignment table filled"
        );
        rows
    }

    /// Best cell for a query char placed at `position`, given the next row.
    fn link(&self, position: usize, below: &Row<'_>, below_is_last: bool) -> Option<Cell> {
        let heat = self.heatmap[position];
        let first = below.first_after(position);

        let column = if below_is_last {
            // The adjacent placement comes first in position order, so it
            // wins unless a later one is strictly better after its bonus.
            let adjacent = below
                .positions
                .get(first)
                .filter(|&&p| p == position + 1)
                .map(|_| first);
            let later = below.best_from(first + usize::from(adjacent.is_some()));

            match (adjacent, later) {
                (Some(a), Some(l)) => {
                    let a_score = below.suffix(a).map(|s| combine(heat, position, s).score);
                    let l_score = below.suffix(l).map(|s| combine(heat, position, s).score);
                    if l_score > a_score {
                        Some(l)
                    } else {
                        Some(a)
                    }
                }
                (adjacent, later) => adjacent.or(later),
            }
        } else {
            below.best_from(first)
        };
        let column = column?;

        Some(Cell {
            suffix: combine(heat, position, below.suffix(column)?),
            next: Some(column),
        })
    }
}

/// Follow back-pointers from `column` in the first row.
fn trace_back(rows: &[Row<'_>], column: usize) -> Option<MatchResult> {
    let head = rows.first()?.cells[column]?.suffix;
    let mut indices = Vec::with_capacity(rows.len());
    let mut next = Some(column);

    for row in rows {
        let cell = row.cells[next?]?;
        indices.push(cell.suffix.start);
        next = cell.next;
    }

    Some(MatchResult::new(head.score, indices, head.tail_run))
}

/// Highest-scoring result, first on ties.
pub fn best_of(results: &[MatchResult]) -> Option<&MatchResult> {
    results
        .iter()
        .fold(None, |best: Option<&MatchResult>, r| match best {
            Some(b) if r.score <= b.score => Some(b),
            _ => Some(r),
        })
}
