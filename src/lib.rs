// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy subsequence scoring for interactive completion.
//!
//! Given a short query and a longer candidate, find where the query's chars
//! land in the candidate (in order, not necessarily adjacent) and how good
//! that placement is. Rankings follow human intuition: word starts beat word
//! middles, contiguous runs beat scattered chars, and in paths the file name
//! beats the directories.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │   index.rs   │     │  heatmap.rs  │
//! │ (char → pos) │     │ (pos → heat) │
//! └──────┬───────┘     └──────┬───────┘
//!        │                    │
//!        ▼                    ▼
//! ┌─────────────────────────────────────┐
//! │             matcher.rs              │
//! │ (bottom-up best-alignment table)    │
//! └─────────────────┬───────────────────┘
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │             scoring/                │
//! │ (entry points, full-match bonus)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! Everything built for a call is read-only once built, and nothing outlives
//! the call except the returned [`MatchResult`]. Scoring many candidates in
//! parallel needs no synchronization (see [`batch`]).
//!
//! # Positions
//!
//! Candidates and queries are Unicode strings; all positions are char
//! offsets, not byte offsets. Use [`MatchResult::byte_ranges`] to slice.
//!
//! # Usage
//!
//! ```
//! use flx::{score, score_path};
//!
//! let m = score("buffer-file-name", "bfn").unwrap();
//! assert_eq!(m.indices, vec![0, 7, 12]);
//!
//! // In a path, the file name wins over directory names.
//! let m = score_path("src/matcher/mod.rs", "m").unwrap();
//! assert_eq!(m.indices, vec![12]);
//!
//! assert!(score("abc", "xyz").is_none());
//! ```

// Module declarations
pub mod batch;
pub mod chars;
pub mod contracts;
pub mod error;
pub mod heatmap;
pub mod index;
pub mod matcher;
mod scoring;
pub mod testing;
mod types;

// Re-exports for public API
pub use error::ScoreError;
pub use heatmap::{Group, Heatmap};
pub use index::CharacterIndex;
pub use matcher::{Matcher, Suffix};
pub use scoring::{
    full_match_applies, score, score_path, score_with, try_score, try_score_with, Prepared,
    FULL_MATCH_BONUS, FULL_MATCH_QUERY_LENGTHS,
};
pub use types::{CaseMatching, MatchResult, ScoreOptions};
