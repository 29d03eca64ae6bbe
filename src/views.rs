//! Chart-ready view assembly.
//!
//! `build_views` is the pipeline entry: it runs the classifier and the
//! aggregator over a loaded document and projects the results into the
//! exact shapes the rendering layer consumes. Everything here is a pure,
//! order-preserving projection; the only computation beyond selection is
//! the success-rate join and color pairing done in the aggregator.

use chrono::Utc;
use serde::Serialize;

use crate::analysis::aggregate::{self, HeatmapCell, Summary};
use crate::analysis::classify::{self, ScoreTier};
use crate::analysis::palette;
use crate::core::indicators;
use crate::core::{BenchReport, ModelStatistics};
use crate::errors::ReportError;

/// The complete language-neutral payload one report embeds.
#[derive(Debug, Clone, Serialize)]
pub struct ReportViews {
    pub meta: ReportMeta,
    pub summary: Summary,
    pub leaderboard: Vec<LeaderboardRow>,
    pub series: SeriesViews,
    pub radar: RadarView,
    pub heatmap: HeatmapView,
    pub difficulty: Vec<IndicatorDifficulty>,
    pub score_ranges: Vec<ScoreRange>,
    pub model_details: Vec<ModelDetail>,
    pub failed: FailedView,
}

/// Header and footer facts about the run itself.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub date: String,
    pub timestamp: String,
    pub runs: u32,
    pub symbols: Vec<String>,
    pub interval: String,
    pub models_tested: usize,
    pub finbench_version: String,
    pub platform: String,
    pub runtime: String,
    pub tool_version: String,
}

/// One leaderboard table row. `medal` is set for ranks 1-3 so the
/// template can style the podium without re-deriving it.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<u8>,
    pub model: String,
    pub provider: String,
    pub score: f64,
    pub score_tier: ScoreTier,
    pub consistency: f64,
    pub latency_ms: f64,
    pub success_rate: f64,
}

/// Parallel arrays for the bar and doughnut charts, all index-aligned to
/// the active-model ordering.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesViews {
    pub models: Vec<String>,
    pub scores: Vec<f64>,
    pub consistencies: Vec<f64>,
    pub latencies: Vec<f64>,
    pub colors: Vec<String>,
    pub border_colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarView {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarSeries>,
}

/// One radar ring: a model's fixed-width indicator vector with its
/// assigned color pair.
#[derive(Debug, Clone, Serialize)]
pub struct RadarSeries {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapView {
    pub cells: Vec<HeatmapCell>,
    pub model_labels: Vec<String>,
    pub indicator_labels: Vec<String>,
}

/// Global mean score for one indicator; lower means harder.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorDifficulty {
    pub id: String,
    pub label: String,
    pub mean_score: f64,
}

/// Score spread for the distribution chart tooltips.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRange {
    pub model: String,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub std_dev: f64,
}

/// Per-model stat card contents.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDetail {
    pub model: String,
    pub avg_score: f64,
    pub std_dev: f64,
    pub max_score: f64,
    pub min_score: f64,
    pub avg_latency_ms: f64,
    pub consistency: f64,
    pub accent_color: String,
}

/// Names of models excluded from every chart, with the one fixed
/// explanation the report shows. An empty list means no failure panel.
#[derive(Debug, Clone, Serialize)]
pub struct FailedView {
    pub models: Vec<String>,
    pub note: String,
}

const FAILED_NOTE: &str =
    "Failed to complete benchmark due to API errors or network issues";

/// Run the full transformation pipeline over a loaded document.
pub fn build_views(report: &BenchReport) -> Result<ReportViews, ReportError> {
    let split = classify::partition(&report.statistics);
    let summary = Summary::from_active(&split.active)?;

    let config = report.config.clone().unwrap_or_default();
    let environment = report.environment.clone().unwrap_or_default();
    let timestamp = report.timestamp.unwrap_or_else(Utc::now);

    let meta = ReportMeta {
        date: timestamp.format("%Y-%m-%d").to_string(),
        timestamp: timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        runs: config.runs,
        symbols: config.symbols.clone(),
        interval: config.interval.clone(),
        models_tested: summary.model_count,
        finbench_version: environment.finbench_version.clone(),
        platform: environment.platform.clone(),
        runtime: environment.go_version.clone(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let leaderboard = build_leaderboard(report);
    let series = build_series(&split.active);
    let radar = build_radar(&split.active);
    let heatmap = build_heatmap(&split.active);
    let difficulty = build_difficulty(&split.active);
    let score_ranges = build_score_ranges(&split.active);
    let model_details = build_model_details(&split.active);
    let failed = FailedView {
        models: split.failed.iter().map(|s| s.model.clone()).collect(),
        note: FAILED_NOTE.to_string(),
    };

    Ok(ReportViews {
        meta,
        summary,
        leaderboard,
        series,
        radar,
        heatmap,
        difficulty,
        score_ranges,
        model_details,
        failed,
    })
}

fn build_leaderboard(report: &BenchReport) -> Vec<LeaderboardRow> {
    aggregate::rank_active(&report.leaderboard)
        .into_iter()
        .map(|ranked| {
            let entry = ranked.entry;
            LeaderboardRow {
                rank: ranked.rank,
                medal: (ranked.rank <= 3).then_some(ranked.rank as u8),
                provider: entry.provider,
                score: entry.avg_score,
                score_tier: ScoreTier::from_score(entry.avg_score),
                consistency: entry.consistency,
                latency_ms: entry.avg_latency_ms,
                success_rate: aggregate::success_rate(&entry.model, &report.statistics),
                model: entry.model,
            }
        })
        .collect()
}

fn build_series(active: &[ModelStatistics]) -> SeriesViews {
    SeriesViews {
        models: active.iter().map(|s| s.model.clone()).collect(),
        scores: active.iter().map(|s| s.avg_score).collect(),
        consistencies: active.iter().map(|s| s.consistency).collect(),
        latencies: active.iter().map(|s| s.avg_latency_ms).collect(),
        colors: (0..active.len())
            .map(|i| palette::color_for(i).fill())
            .collect(),
        border_colors: (0..active.len())
            .map(|i| palette::color_for(i).border())
            .collect(),
    }
}

fn build_radar(active: &[ModelStatistics]) -> RadarView {
    RadarView {
        labels: indicators::labels().iter().map(|l| l.to_string()).collect(),
        datasets: active
            .iter()
            .enumerate()
            .map(|(index, stats)| {
                let color = palette::color_for(index);
                RadarSeries {
                    label: stats.model.clone(),
                    data: aggregate::indicator_vector(stats).to_vec(),
                    background_color: color.background(),
                    border_color: color.border(),
                }
            })
            .collect(),
    }
}

fn build_heatmap(active: &[ModelStatistics]) -> HeatmapView {
    HeatmapView {
        cells: aggregate::heatmap_cells(active),
        model_labels: active.iter().map(|s| s.model.clone()).collect(),
        indicator_labels: indicators::labels().iter().map(|l| l.to_string()).collect(),
    }
}

fn build_difficulty(active: &[ModelStatistics]) -> Vec<IndicatorDifficulty> {
    let means = aggregate::indicator_difficulty(active);
    indicators::CATALOG
        .iter()
        .zip(means.iter())
        .map(|(indicator, &mean_score)| IndicatorDifficulty {
            id: indicator.id.to_string(),
            label: indicator.label.to_string(),
            mean_score,
        })
        .collect()
}

fn build_score_ranges(active: &[ModelStatistics]) -> Vec<ScoreRange> {
    active
        .iter()
        .map(|stats| ScoreRange {
            model: stats.model.clone(),
            min: stats.min_score,
            max: stats.max_score,
            avg: stats.avg_score,
            std_dev: stats.std_dev,
        })
        .collect()
}

fn build_model_details(active: &[ModelStatistics]) -> Vec<ModelDetail> {
    active
        .iter()
        .enumerate()
        .map(|(index, stats)| ModelDetail {
            model: stats.model.clone(),
            avg_score: stats.avg_score,
            std_dev: stats.std_dev,
            max_score: stats.max_score,
            min_score: stats.min_score,
            avg_latency_ms: stats.avg_latency_ms,
            consistency: stats.consistency,
            accent_color: palette::color_for(index).rgb(),
        })
        .collect()
}
