// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: one candidate, one query, one number.
//!
//! The heatmap decides where query chars would like to land, the matcher
//! finds the best landing spots, and this module glues the two together and
//! applies the full-match bonus. A candidate that will be scored against many
//! queries can be [`Prepared`] once up front.

mod core;
mod prepared;

pub use self::core::*;
pub use prepared::Prepared;
