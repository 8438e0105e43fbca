//! JSON reports for the `size` and `plan` subcommands.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use rann_sizing::{SampleSize, SearchParams};

/// Solved sample size with the parameters that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    pub n: usize,
    pub k: usize,
    pub tau: f64,
    pub alpha: f64,
    pub rank_window: usize,
    /// Per-draw probability of landing in the rank window.
    pub eps: f64,
    pub solved: usize,
    pub samples: usize,
    pub probability: f64,
}

impl SizeReport {
    pub fn new(params: &SearchParams, size: &SampleSize) -> Self {
        Self {
            n: params.n(),
            k: params.k(),
            tau: params.tau(),
            alpha: params.alpha(),
            rank_window: size.rank_window(),
            eps: params.hit_probability(),
            solved: size.solved(),
            samples: size.samples(),
            probability: size.probability(),
        }
    }
}

/// Sample size plus the distinct indices drawn for it.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    #[serde(flatten)]
    pub size: SizeReport,
    pub seed: Option<u64>,
    pub distinct: usize,
    pub indices: Vec<usize>,
}

/// Serialize a report to a pretty-printed JSON string.
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report")
}

/// Write a report as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_json<T: Serialize>(report: &T, path: &Path) -> Result<()> {
    let json = to_json(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report: {}", path.display()))
}
