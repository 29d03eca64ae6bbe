/// Active/failed partition and score-tier classification.
///
/// This module implements the first pipeline stage after loading: splitting
/// the raw statistics into models that produced a usable score and models
/// that did not, and bucketing each usable score into a qualitative tier.
use crate::core::ModelStatistics;
use serde::{Deserialize, Serialize};

/// Qualitative bucket for an average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    /// 70 and above
    Excellent,
    /// 60 up to 70
    Good,
    /// 50 up to 60
    Fair,
    /// Below 50
    Poor,
}

impl ScoreTier {
    /// Classify a score. Total over all floats; thresholds are inclusive
    /// on the lower bound, checked in descending order.
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            ScoreTier::Excellent
        } else if score >= 60.0 {
            ScoreTier::Good
        } else if score >= 50.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    /// Lowercase tier label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Fair => "fair",
            ScoreTier::Poor => "poor",
        }
    }

    /// CSS class the report template styles score bars with.
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "score-excellent",
            ScoreTier::Good => "score-good",
            ScoreTier::Fair => "score-fair",
            ScoreTier::Poor => "score-poor",
        }
    }
}

/// Exhaustive, disjoint split of the statistics into active and failed
/// models, both preserving input order.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub active: Vec<ModelStatistics>,
    pub failed: Vec<ModelStatistics>,
}

/// Partition statistics records by whether the model produced a usable
/// score. Pure; the two subsets together hold every input record.
pub fn partition(statistics: &[ModelStatistics]) -> Partition {
    let mut split = Partition::default();
    for stats in statistics {
        if stats.is_failed() {
            split.failed.push(stats.clone());
        } else {
            split.active.push(stats.clone());
        }
    }
    split
}
