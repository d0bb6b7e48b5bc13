use serde::Serialize;
use std::fmt;

use crate::api::PerformanceReview;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 4] = [
        ScoreBand::Excellent,
        ScoreBand::Good,
        ScoreBand::NeedsImprovement,
        ScoreBand::Poor,
    ];

    pub fn for_score(score: i32) -> Self {
        match score {
            s if s >= 9 => ScoreBand::Excellent,
            s if s >= 7 => ScoreBand::Good,
            s if s >= 5 => ScoreBand::NeedsImprovement,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::NeedsImprovement => "Needs Improvement",
            ScoreBand::Poor => "Poor",
        }
    }

    pub fn range(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "9-10",
            ScoreBand::Good => "7-8",
            ScoreBand::NeedsImprovement => "5-6",
            ScoreBand::Poor => "1-4",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceStats {
    pub average_score: Option<f64>,
    pub average_working_hours: Option<f64>,
    pub reviews: usize,
    /// Every band, best first, including empty ones.
    pub distribution: Vec<(ScoreBand, usize)>,
}

pub fn performance_stats(reviews: &[PerformanceReview]) -> PerformanceStats {
    let count = reviews.len();
    let mean = |total: f64| (count > 0).then(|| total / count as f64);

    let distribution = ScoreBand::ALL
        .iter()
        .map(|band| {
            let hits = reviews
                .iter()
                .filter(|r| ScoreBand::for_score(r.score) == *band)
                .count();
            (*band, hits)
        })
        .collect();

    PerformanceStats {
        average_score: mean(reviews.iter().map(|r| f64::from(r.score)).sum()),
        average_working_hours: mean(reviews.iter().map(|r| f64::from(r.working_hours)).sum()),
        reviews: count,
        distribution,
    }
}
