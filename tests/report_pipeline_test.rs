//! End-to-end pipeline tests over full benchmark documents.
//!
//! Each test feeds a complete JSON document through the same path the
//! binary uses (parse, classify, aggregate, build views) and checks the
//! derived views rather than intermediate state.

use finbench_report::{build_views, BenchReport, ReportError, ScoreTier};
use indoc::indoc;
use pretty_assertions::assert_eq;

fn parse(document: &str) -> BenchReport {
    serde_json::from_str(document).expect("fixture document must parse")
}

const TWO_MODEL_DOCUMENT: &str = indoc! {r#"
    {
      "id": "20260805_093000_BTCUSDT_1h",
      "version": "1.0.0",
      "timestamp": "2026-08-05T09:30:00Z",
      "config": {
        "mode": "realtime",
        "runs": 10,
        "symbols": ["BTCUSDT"],
        "interval": "1h",
        "kline_count": 50
      },
      "environment": {
        "finbench_version": "1.0.0",
        "go_version": "go1.22.3",
        "platform": "linux/amd64",
        "timezone": "UTC"
      },
      "statistics": [
        {
          "model": "alpha",
          "model_info": {"provider": "deepseek", "model": "deepseek-chat",
                         "display_name": "Alpha", "base_url": ""},
          "run_count": 10,
          "success_count": 10,
          "avg_score": 72.0,
          "min_score": 65.0,
          "max_score": 80.0,
          "std_dev": 4.2,
          "avg_latency_ms": 2100.0,
          "consistency": 94.2,
          "indicator_avgs": {"ma20": 95.0, "rsi14": 70.0}
        },
        {
          "model": "beta",
          "model_info": {"provider": "qwen", "model": "qwen3-max",
                         "display_name": "Beta", "base_url": ""},
          "run_count": 10,
          "success_count": 8,
          "avg_score": 45.0,
          "min_score": 30.0,
          "max_score": 58.0,
          "std_dev": 9.1,
          "avg_latency_ms": 1400.0,
          "consistency": 79.8,
          "indicator_avgs": {"ma20": 60.0}
        }
      ],
      "leaderboard": [
        {"rank": 1, "model": "alpha", "provider": "deepseek", "model_id": "deepseek-chat",
         "avg_score": 72.0, "std_dev": 4.2, "consistency": 94.2,
         "avg_latency_ms": 2100.0, "run_count": 10},
        {"rank": 2, "model": "beta", "provider": "qwen", "model_id": "qwen3-max",
         "avg_score": 45.0, "std_dev": 9.1, "consistency": 79.8,
         "avg_latency_ms": 1400.0, "run_count": 10}
      ]
    }
"#};

#[test]
fn test_two_models_get_tiered_and_ranked() {
    let views = build_views(&parse(TWO_MODEL_DOCUMENT)).unwrap();

    assert_eq!(views.leaderboard.len(), 2);
    assert_eq!(views.leaderboard[0].model, "alpha");
    assert_eq!(views.leaderboard[0].rank, 1);
    assert_eq!(views.leaderboard[0].score_tier, ScoreTier::Excellent);
    assert_eq!(views.leaderboard[1].model, "beta");
    assert_eq!(views.leaderboard[1].rank, 2);
    assert_eq!(views.leaderboard[1].score_tier, ScoreTier::Poor);

    assert_eq!(views.summary.model_count, 2);
    assert_eq!(views.summary.highest_score, 72.0);
    assert_eq!(views.summary.mean_score, 58.5);
    assert_eq!(views.summary.fastest_latency_ms, 1400.0);
}

#[test]
fn test_success_rates_join_against_statistics() {
    let views = build_views(&parse(TWO_MODEL_DOCUMENT)).unwrap();
    assert_eq!(views.leaderboard[0].success_rate, 100.0);
    assert_eq!(views.leaderboard[1].success_rate, 80.0);
}

#[test]
fn test_meta_reflects_config_and_environment() {
    let views = build_views(&parse(TWO_MODEL_DOCUMENT)).unwrap();
    assert_eq!(views.meta.date, "2026-08-05");
    assert_eq!(views.meta.runs, 10);
    assert_eq!(views.meta.interval, "1h");
    assert_eq!(views.meta.platform, "linux/amd64");
    assert_eq!(views.meta.runtime, "go1.22.3");
    assert_eq!(views.meta.models_tested, 2);
}

#[test]
fn test_zero_score_model_lands_in_failed_and_nowhere_else() {
    let document = indoc! {r#"
        {
          "timestamp": "2026-08-05T09:30:00Z",
          "statistics": [
            {"model": "alive", "avg_score": 66.0, "avg_latency_ms": 900.0,
             "consistency": 88.0, "run_count": 10, "success_count": 10},
            {"model": "dead", "avg_score": 0.0, "run_count": 10, "success_count": 0}
          ],
          "leaderboard": [
            {"rank": 1, "model": "alive", "provider": "openai", "avg_score": 66.0,
             "consistency": 88.0, "avg_latency_ms": 900.0},
            {"rank": 2, "model": "dead", "provider": "grok", "avg_score": 0.0,
             "consistency": 0.0, "avg_latency_ms": 0.0}
          ]
        }
    "#};
    let views = build_views(&parse(document)).unwrap();

    assert_eq!(views.failed.models, vec!["dead".to_string()]);
    assert_eq!(views.summary.model_count, 1);
    assert_eq!(views.summary.mean_score, 66.0);
    assert_eq!(views.summary.highest_score, 66.0);
    assert!(views.series.models.iter().all(|m| m != "dead"));
    assert!(views.radar.datasets.iter().all(|d| d.label != "dead"));
    assert_eq!(views.heatmap.model_labels, vec!["alive".to_string()]);
    assert_eq!(views.heatmap.cells.len(), 10);
    assert_eq!(views.leaderboard.len(), 1);
}

#[test]
fn test_sparse_indicator_map_yields_fixed_width_vector() {
    let document = indoc! {r#"
        {
          "statistics": [
            {"model": "sparse", "avg_score": 70.0,
             "indicator_avgs": {"rsi14": 80.0, "unknown_indicator": 99.0}}
          ],
          "leaderboard": []
        }
    "#};
    let views = build_views(&parse(document)).unwrap();

    let data = &views.radar.datasets[0].data;
    assert_eq!(data.len(), 10);
    // RSI14 sits at catalog position 4; everything else defaults to 0 and
    // the unknown id is dropped.
    assert_eq!(data[4], 80.0);
    assert_eq!(data.iter().sum::<f64>(), 80.0);

    let rsi_cell = views
        .heatmap
        .cells
        .iter()
        .find(|c| c.column == 4)
        .unwrap();
    assert_eq!(rsi_cell.value, 80.0);
}

#[test]
fn test_empty_statistics_is_terminal_error_not_nan_report() {
    let document = r#"{"statistics": [], "leaderboard": []}"#;
    let err = build_views(&parse(document)).unwrap_err();
    assert!(matches!(err, ReportError::NoActiveModels));
}

#[test]
fn test_partition_property_holds_for_mixed_document() {
    let report = parse(TWO_MODEL_DOCUMENT);
    let split = finbench_report::partition(&report.statistics);
    assert_eq!(
        split.active.len() + split.failed.len(),
        report.statistics.len()
    );
    for stats in &split.active {
        assert!(split.failed.iter().all(|f| f.model != stats.model));
    }
}

#[test]
fn test_views_serialize_to_stable_payload_shape() {
    let views = build_views(&parse(TWO_MODEL_DOCUMENT)).unwrap();
    let payload = serde_json::to_value(&views).unwrap();

    assert_eq!(payload["series"]["models"][0], "alpha");
    assert_eq!(payload["heatmap"]["indicator_labels"][0], "MA20");
    assert_eq!(payload["leaderboard"][0]["score_tier"], "excellent");
    assert_eq!(payload["heatmap"]["cells"][0]["x"], 0);
    assert_eq!(payload["heatmap"]["cells"][0]["y"], 0);
    assert_eq!(payload["heatmap"]["cells"][0]["v"], 95.0);
    // Medal only appears on podium rows.
    assert_eq!(payload["leaderboard"][0]["medal"], 1);
}
