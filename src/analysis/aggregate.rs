//! Cross-model aggregation: everything that requires comparing models
//! against each other rather than looking at one record in isolation.

use crate::core::indicators;
use crate::core::{LeaderboardEntry, ModelStatistics};
use crate::errors::ReportError;
use serde::Serialize;
use std::cmp::Ordering;

/// Headline statistics over the active models.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub model_count: usize,
    pub highest_score: f64,
    pub mean_score: f64,
    pub fastest_latency_ms: f64,
}

impl Summary {
    /// Compute the headline statistics. Max/mean/min over an empty active
    /// set are undefined, so an empty set is a terminal error rather than
    /// a report full of NaN.
    pub fn from_active(active: &[ModelStatistics]) -> Result<Self, ReportError> {
        if active.is_empty() {
            return Err(ReportError::NoActiveModels);
        }

        let highest_score = active.iter().map(|s| s.avg_score).fold(f64::MIN, f64::max);
        let mean_score =
            active.iter().map(|s| s.avg_score).sum::<f64>() / active.len() as f64;
        let fastest_latency_ms = active
            .iter()
            .map(|s| s.avg_latency_ms)
            .fold(f64::MAX, f64::min);

        Ok(Self {
            model_count: active.len(),
            highest_score,
            mean_score,
            fastest_latency_ms,
        })
    }
}

/// A leaderboard entry with its dense recomputed rank.
#[derive(Debug, Clone)]
pub struct RankedEntry {
    pub rank: u32,
    pub entry: LeaderboardEntry,
}

/// Rank the active leaderboard entries by score, descending. The sort is
/// stable, so tied scores keep their input order, and ranks are dense
/// `1..=n` regardless of what ranks the input carried (failed models may
/// have held ranks there).
pub fn rank_active(leaderboard: &[LeaderboardEntry]) -> Vec<RankedEntry> {
    let mut active: Vec<&LeaderboardEntry> = leaderboard
        .iter()
        .filter(|entry| entry.avg_score > 0.0)
        .collect();
    active.sort_by(|a, b| {
        b.avg_score
            .partial_cmp(&a.avg_score)
            .unwrap_or(Ordering::Equal)
    });
    active
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: index as u32 + 1,
            entry: entry.clone(),
        })
        .collect()
}

/// Success rate for a leaderboard model, in percent. A model with no
/// statistics record is treated as a clean pass (100), not an error;
/// a zero run count gets the same fallback so the rate is always defined.
pub fn success_rate(model: &str, statistics: &[ModelStatistics]) -> f64 {
    statistics
        .iter()
        .find(|stats| stats.model == model)
        .filter(|stats| stats.run_count > 0)
        .map(|stats| stats.success_count as f64 / stats.run_count as f64 * 100.0)
        .unwrap_or(100.0)
}

/// Project a model's sparse indicator scores onto the fixed catalog.
/// Missing indicators score 0; ids outside the catalog are dropped.
pub fn indicator_vector(stats: &ModelStatistics) -> [f64; indicators::COUNT] {
    let mut vector = [0.0; indicators::COUNT];
    for (slot, indicator) in vector.iter_mut().zip(indicators::CATALOG.iter()) {
        if let Some(&score) = stats.indicator_avgs.get(indicator.id) {
            *slot = score;
        }
    }
    vector
}

/// Mean score per catalog indicator across all active models, missing
/// entries counted as 0. Lower means harder.
pub fn indicator_difficulty(active: &[ModelStatistics]) -> [f64; indicators::COUNT] {
    let mut totals = [0.0; indicators::COUNT];
    if active.is_empty() {
        return totals;
    }

    for stats in active {
        let vector = indicator_vector(stats);
        for (total, score) in totals.iter_mut().zip(vector.iter()) {
            *total += score;
        }
    }
    for total in totals.iter_mut() {
        *total /= active.len() as f64;
    }
    totals
}

/// One heatmap grid cell. Serialized as `{x, y, v}` for the matrix chart:
/// `x` is the indicator column, `y` the model row.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeatmapCell {
    #[serde(rename = "x")]
    pub column: usize,
    #[serde(rename = "y")]
    pub row: usize,
    #[serde(rename = "v")]
    pub value: f64,
}

/// One cell per (model, indicator) pair, rows in active-model order,
/// columns in catalog order. Always `|active| * 10` cells.
pub fn heatmap_cells(active: &[ModelStatistics]) -> Vec<HeatmapCell> {
    let mut cells = Vec::with_capacity(active.len() * indicators::COUNT);
    for (row, stats) in active.iter().enumerate() {
        let vector = indicator_vector(stats);
        for (column, &value) in vector.iter().enumerate() {
            cells.push(HeatmapCell { column, row, value });
        }
    }
    cells
}
