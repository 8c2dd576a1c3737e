// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the flx command-line interface.
//!
//! Three subcommands: `score` to match one query against one candidate,
//! `heatmap` to see why a candidate scores the way it does, and `batch` to
//! score a query against candidates piped in on stdin.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use flx::{CaseMatching, ScoreOptions};

#[derive(Parser)]
#[command(
    name = "flx",
    about = "Fuzzy subsequence scoring for file pickers and command palettes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a query against one candidate
    Score {
        /// String to match against
        candidate: String,

        /// Fuzzy query
        query: String,

        #[command(flatten)]
        options: ScoreArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the per-char heatmap of a candidate
    Heatmap {
        /// String to analyze
        candidate: String,

        #[command(flatten)]
        grouping: GroupArgs,
    },

    /// Score a query against candidates read from stdin, one per line
    ///
    /// Prints matching candidates in input order. Pipe through `sort -n`
    /// to rank them.
    Batch {
        /// Fuzzy query
        query: String,

        #[command(flatten)]
        options: ScoreArgs,

        /// Print one JSON object per matching line
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    /// Treat candidates as paths (groups split on '/')
    #[arg(long)]
    pub path: bool,

    /// Split groups on a custom separator char
    #[arg(long, conflicts_with = "path")]
    pub separator: Option<char>,
}

impl GroupArgs {
    pub fn group_separator(&self) -> Option<char> {
        if self.path {
            Some('/')
        } else {
            self.separator
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub grouping: GroupArgs,

    /// How query case is compared with candidate case
    #[arg(long, value_enum, default_value_t = CaseArg::Insensitive)]
    pub case: CaseArg,

    /// Do not boost short queries that match the whole candidate
    #[arg(long)]
    pub no_full_match_bonus: bool,
}

impl ScoreArgs {
    pub fn to_options(&self) -> ScoreOptions {
        ScoreOptions::default()
            .with_group_separator(self.grouping.group_separator())
            .with_case_matching(self.case.into())
            .with_full_match_bonus(!self.no_full_match_bonus)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseArg {
    /// Any case matches any case
    Insensitive,
    /// Uppercase query chars only match uppercase
    Smart,
}

impl From<CaseArg> for CaseMatching {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Insensitive => CaseMatching::Insensitive,
            CaseArg::Smart => CaseMatching::Smart,
        }
    }
}
