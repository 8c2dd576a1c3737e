// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use flx::{batch, try_score_with, Heatmap, MatchResult, ScoreOptions};

mod cli;
use cli::display::{heat_value, highlight, score_value, themed, CYAN, GRAY};
use cli::{Cli, Commands};

/// Exit status when the query does not match.
const NO_MATCH: u8 = 1;
/// Exit status for usage and I/O failures.
const FAILURE: u8 = 2;

#[derive(Serialize)]
struct Report<'a> {
    candidate: &'a str,
    query: &'a str,
    #[serde(flatten)]
    result: &'a MatchResult,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Score {
            candidate,
            query,
            options,
            json,
        } => run_score(&candidate, &query, options.to_options(), json),
        Commands::Heatmap {
            candidate,
            grouping,
        } => run_heatmap(&candidate, grouping.group_separator()),
        Commands::Batch {
            query,
            options,
            json,
        } => run_batch(&query, options.to_options(), json),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::from(FAILURE)
        }
    }
}

/// Log filter comes from `FLX_LOG` (e.g. `FLX_LOG=flx=trace`), default `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("FLX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_score(candidate: &str, query: &str, options: ScoreOptions, json: bool) -> Result<ExitCode> {
    let result = match try_score_with(candidate, query, options) {
        Ok(result) => result,
        Err(e) => {
            tracing::info!(candidate, query, "no match: {}", e);
            println!("no match ({})", e);
            return Ok(ExitCode::from(NO_MATCH));
        }
    };

    let mut out = io::stdout().lock();
    if json {
        let report = Report {
            candidate,
            query,
            result: &result,
        };
        serde_json::to_writer_pretty(&mut out, &report).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", highlight(candidate, &result.indices))?;
        writeln!(
            out,
            "{} {}",
            themed(GRAY, &[], "score  "),
            score_value(result.score)
        )?;
        writeln!(
            out,
            "{} {:?}",
            themed(GRAY, &[], "indices"),
            result.indices
        )?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_heatmap(candidate: &str, group_separator: Option<char>) -> Result<ExitCode> {
    let chars: Vec<char> = candidate.chars().collect();
    let heatmap = Heatmap::generate(&chars, group_separator);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", themed(CYAN, &[], "  pos  char   heat"))?;
    for (position, (&ch, &heat)) in chars.iter().zip(heatmap.as_slice()).enumerate() {
        writeln!(out, "{:>5}  {:>4}  {}", position, format!("{:?}", ch), heat_value(heat))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_batch(query: &str, options: ScoreOptions, json: bool) -> Result<ExitCode> {
    let candidates: Vec<String> = io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<_>>()
        .context("failed to read candidates from stdin")?;

    let results = batch::score_all(&candidates, query, options);

    let mut out = io::stdout().lock();
    let mut matched = 0usize;
    for (candidate, result) in candidates.iter().zip(&results) {
        let Some(result) = result else {
            continue;
        };
        matched += 1;

        if json {
            let report = Report {
                candidate,
                query,
                result,
            };
            serde_json::to_writer(&mut out, &report).context("failed to write JSON")?;
            writeln!(out)?;
        } else {
            writeln!(
                out,
                "{}\t{}",
                score_value(result.score),
                highlight(candidate, &result.indices)
            )?;
        }
    }

    tracing::debug!(total = candidates.len(), matched, "batch finished");

    Ok(if matched == 0 {
        ExitCode::from(NO_MATCH)
    } else {
        ExitCode::SUCCESS
    })
}
