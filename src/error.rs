// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Why a scoring call produced no match.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoreError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("candidate or query is empty")]
    EmptyInput,

    #[error("query is not a subsequence of the candidate")]
    NoAlignment,
}
