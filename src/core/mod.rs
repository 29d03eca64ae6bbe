pub mod indicators;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Full benchmark result document produced by the FinBench runner.
///
/// Every section is optional on the wire; missing sections fall back to
/// defaults so a sparse document still loads. Semantic validation (such as
/// rejecting a document with no usable models) happens in the aggregator,
/// not here.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct BenchReport {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub config: Option<BenchConfig>,
    #[serde(default)]
    pub environment: Option<EnvironmentInfo>,
    #[serde(default)]
    pub statistics: Vec<ModelStatistics>,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Benchmark run configuration echoed into the report header.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default)]
    pub mode: String,
    #[serde(default = "default_runs")]
    pub runs: u32,
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    #[serde(default = "default_interval")]
    pub interval: String,
    #[serde(default)]
    pub kline_count: u32,
}

fn default_runs() -> u32 {
    10
}

fn default_symbols() -> Vec<String> {
    vec!["BTCUSDT".to_string()]
}

fn default_interval() -> String {
    "1h".to_string()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            mode: String::new(),
            runs: default_runs(),
            symbols: default_symbols(),
            interval: default_interval(),
            kline_count: 0,
        }
    }
}

/// Environment the benchmark ran under. The upstream runner is a Go tool,
/// hence the `go_version` wire name; the views expose it as a neutral
/// runtime label.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    #[serde(default = "default_finbench_version")]
    pub finbench_version: String,
    #[serde(default = "default_unknown")]
    pub go_version: String,
    #[serde(default = "default_unknown")]
    pub platform: String,
    #[serde(default)]
    pub timezone: String,
}

fn default_finbench_version() -> String {
    "1.0.0".to_string()
}

fn default_unknown() -> String {
    "Unknown".to_string()
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        Self {
            finbench_version: default_finbench_version(),
            go_version: default_unknown(),
            platform: default_unknown(),
            timezone: String::new(),
        }
    }
}

/// Metadata about one benchmarked model.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ModelInfo {
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub base_url: String,
}

/// Per-model statistics aggregated over all benchmark runs.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ModelStatistics {
    pub model: String,
    #[serde(default)]
    pub model_info: ModelInfo,
    #[serde(default)]
    pub run_count: u32,
    #[serde(default)]
    pub success_count: u32,
    #[serde(default)]
    pub failure_count: u32,
    #[serde(default)]
    pub avg_score: f64,
    #[serde(default)]
    pub min_score: f64,
    #[serde(default)]
    pub max_score: f64,
    #[serde(default)]
    pub std_dev: f64,
    #[serde(default)]
    pub avg_latency_ms: f64,
    #[serde(default)]
    pub min_latency_ms: f64,
    #[serde(default)]
    pub max_latency_ms: f64,
    #[serde(default)]
    pub consistency: f64,
    #[serde(default)]
    pub indicator_avgs: HashMap<String, f64>,
}

impl ModelStatistics {
    /// A model that never produced a usable score is counted as failed,
    /// including the degenerate negative-score case.
    pub fn is_failed(&self) -> bool {
        self.avg_score <= 0.0
    }
}

/// One row of the ranked leaderboard as emitted by the runner.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub rank: u32,
    pub model: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub model_id: String,
    #[serde(default)]
    pub avg_score: f64,
    #[serde(default)]
    pub std_dev: f64,
    #[serde(default)]
    pub consistency: f64,
    #[serde(default)]
    pub avg_latency_ms: f64,
    #[serde(default)]
    pub run_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_document_loads_with_defaults() {
        let report: BenchReport = serde_json::from_str("{}").unwrap();
        assert!(report.statistics.is_empty());
        assert!(report.leaderboard.is_empty());
        assert!(report.config.is_none());
        assert!(report.timestamp.is_none());
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: BenchConfig = serde_json::from_str(r#"{"mode":"static"}"#).unwrap();
        assert_eq!(config.runs, 10);
        assert_eq!(config.symbols, vec!["BTCUSDT".to_string()]);
        assert_eq!(config.interval, "1h");
    }

    #[test]
    fn test_null_config_section_is_accepted() {
        let report: BenchReport =
            serde_json::from_str(r#"{"config":null,"environment":null}"#).unwrap();
        assert!(report.config.is_none());
        assert!(report.environment.is_none());
    }

    #[test]
    fn test_is_failed_on_zero_and_negative_scores() {
        let mut stats = ModelStatistics {
            model: "m".to_string(),
            ..Default::default()
        };
        assert!(stats.is_failed());
        stats.avg_score = -3.0;
        assert!(stats.is_failed());
        stats.avg_score = 0.1;
        assert!(!stats.is_failed());
    }

    #[test]
    fn test_statistics_record_round_trip() {
        let json = r#"{
            "model": "deepseek-chat",
            "model_info": {"provider": "deepseek", "model": "deepseek-chat",
                           "display_name": "DeepSeek-Chat", "base_url": "https://api.deepseek.com"},
            "run_count": 10,
            "success_count": 9,
            "avg_score": 71.4,
            "min_score": 60.2,
            "max_score": 82.9,
            "std_dev": 6.1,
            "avg_latency_ms": 2150.0,
            "consistency": 91.5,
            "indicator_avgs": {"rsi14": 80.0, "ma20": 92.5}
        }"#;
        let stats: ModelStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.model, "deepseek-chat");
        assert_eq!(stats.model_info.provider, "deepseek");
        assert_eq!(stats.indicator_avgs.get("rsi14"), Some(&80.0));
        assert_eq!(stats.failure_count, 0);
    }
}
